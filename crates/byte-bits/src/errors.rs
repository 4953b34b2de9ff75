/// Errors that can occur when validating bit operation arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitsError {
    /// An argument fell outside its documented closed interval. Inverted
    /// ranges are reported as the end position being out of the interval
    /// that starts at the start position.
    #[error("{name} is out of range [{lower}, {upper}]: {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Inclusive lower bound.
        lower: u8,
        /// Inclusive upper bound.
        upper: u8,
        /// The rejected value.
        value: u8,
    },
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let cases = [
            (
                BitsError::InvalidArgument {
                    name: "pos",
                    lower: 0,
                    upper: 7,
                    value: 8,
                },
                "pos is out of range [0, 7]: 8",
            ),
            (
                BitsError::InvalidArgument {
                    name: "pos2",
                    lower: 5,
                    upper: 7,
                    value: 3,
                },
                "pos2 is out of range [5, 7]: 3",
            ),
            (
                BitsError::InvalidArgument {
                    name: "index",
                    lower: 0,
                    upper: 3,
                    value: 4,
                },
                "index is out of range [0, 3]: 4",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
