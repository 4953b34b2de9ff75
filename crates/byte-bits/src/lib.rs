//! Common bit operations on bytes.
//!
//! Bits are numbered 0 to 7, with the leftmost (most significant) bit 0 and
//! the rightmost (least significant) bit 7. Every operation is a pure
//! function: fallible ones validate their positions and return a
//! [`BitsError`] when a position, range, or byte index falls outside its
//! bounds.
//!
//! ```rust
//! # fn test() -> Result<(), byte_bits::BitsError> {
//! use byte_bits::{clear_bits, int_from_byte, is_bit_set, to_binary_string};
//!
//! let b = 0b1000_0001u8;
//! assert!(is_bit_set(b, 0)?);
//! assert!(!is_bit_set(b, 3)?);
//! assert_eq!(to_binary_string(b), "10000001");
//! assert_eq!(int_from_byte(b, 0, 7)?, 129);
//! assert_eq!(clear_bits(0xFF, 2, 5)?, 0b1100_0111);
//! # Ok(())
//! # }
//! # test().expect("failed to run test");
//! ```
//!
//! ## License
//!
//! This project is licensed under the MIT or Apache-2.0 license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod errors;
mod ops;
mod range_check;

pub use errors::BitsError;
pub use ops::{
    are_all_bits_set, are_bits_set, byte_from_int, clear_bit, clear_bits, flip_bit, flip_bits,
    int_from_byte, is_bit_set, set_bit, set_bits, to_binary_string,
};
