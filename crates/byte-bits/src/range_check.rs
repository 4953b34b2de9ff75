//! A helper macro to ensure that an argument is within the specified
//! [$lower, $upper] bounds.

/// Enforces that an argument is within the specified \[LOWER, UPPER\] bounds.
///
/// The brackets indicate that this range is inclusive on both sides.
/// Evaluates to `Err(BitsError::InvalidArgument { .. })` when the argument
/// falls outside the bounds, `Ok(())` otherwise.
#[macro_export]
macro_rules! range_check {
    ($n:expr, $lower:expr, $upper:expr) => {{
        let n = $n;
        let lower = $lower;
        let upper = $upper;

        #[allow(unused_comparisons, clippy::manual_range_contains)]
        if n < lower || n > upper {
            ::std::result::Result::Err($crate::BitsError::InvalidArgument {
                name: stringify!($n),
                lower,
                upper,
                value: n,
            })
        } else {
            ::std::result::Result::Ok(())
        }
    }};
}
