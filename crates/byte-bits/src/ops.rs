use crate::BitsError;
use crate::range_check;

/// The single-bit mask for a position, 0 being the leftmost (most
/// significant) bit. Callers must have validated `pos` already.
const fn mask(pos: u8) -> u8 {
    1 << (7 - pos)
}

/// Returns whether the bit at `pos` is set.
///
/// Positions are numbered 0 to 7, with the leftmost bit 0 and the rightmost
/// bit 7.
pub fn is_bit_set(b: u8, pos: u8) -> Result<bool, BitsError> {
    range_check!(pos, 0, 7)?;

    // A zero byte has no bits set
    if b == 0 {
        return Ok(false);
    }

    Ok(b & mask(pos) != 0)
}

/// Returns whether every bit in the byte is set.
pub fn are_all_bits_set(b: u8) -> bool {
    b == u8::MAX
}

/// Returns whether every bit from `pos1` to `pos2` (inclusive) is set.
///
/// `pos1` must not be greater than `pos2`.
pub fn are_bits_set(b: u8, pos1: u8, pos2: u8) -> Result<bool, BitsError> {
    range_check!(pos1, 0, 7)?;
    range_check!(pos2, pos1, 7)?;

    if b == 0 {
        return Ok(false);
    }

    for pos in pos1..=pos2 {
        if b & mask(pos) == 0 {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Returns the byte with the bit at `pos` forced to 1.
pub fn set_bit(b: u8, pos: u8) -> Result<u8, BitsError> {
    range_check!(pos, 0, 7)?;

    // Nothing to do when the bit is already set
    if are_all_bits_set(b) || b & mask(pos) != 0 {
        return Ok(b);
    }

    Ok(b | mask(pos))
}

/// Returns the byte with every bit from `pos1` to `pos2` (inclusive) forced
/// to 1, applied left to right.
pub fn set_bits(b: u8, pos1: u8, pos2: u8) -> Result<u8, BitsError> {
    range_check!(pos1, 0, 7)?;
    range_check!(pos2, pos1, 7)?;

    if are_all_bits_set(b) {
        return Ok(b);
    }

    let mut value = b;
    for pos in pos1..=pos2 {
        value = set_bit(value, pos)?;
    }

    Ok(value)
}

/// Returns the byte with the bit at `pos` forced to 0.
pub fn clear_bit(b: u8, pos: u8) -> Result<u8, BitsError> {
    range_check!(pos, 0, 7)?;

    if b & mask(pos) == 0 {
        return Ok(b);
    }

    Ok(b & !mask(pos))
}

/// Returns the byte with every bit from `pos1` to `pos2` (inclusive) forced
/// to 0.
pub fn clear_bits(b: u8, pos1: u8, pos2: u8) -> Result<u8, BitsError> {
    range_check!(pos1, 0, 7)?;
    range_check!(pos2, pos1, 7)?;

    // A zero byte has every bit clear already
    if b == 0 {
        return Ok(b);
    }

    let mut value = b;
    for pos in pos1..=pos2 {
        value = clear_bit(value, pos)?;
    }

    Ok(value)
}

/// Returns the byte with the bit at `pos` toggled.
pub fn flip_bit(b: u8, pos: u8) -> Result<u8, BitsError> {
    range_check!(pos, 0, 7)?;

    Ok(b ^ mask(pos))
}

/// Returns the byte with every bit from `pos1` to `pos2` (inclusive)
/// toggled, applied left to right.
pub fn flip_bits(b: u8, pos1: u8, pos2: u8) -> Result<u8, BitsError> {
    range_check!(pos1, 0, 7)?;
    range_check!(pos2, pos1, 7)?;

    let mut value = b;
    for pos in pos1..=pos2 {
        value = flip_bit(value, pos)?;
    }

    Ok(value)
}

/// Extracts the bits from `pos1` to `pos2` (inclusive) and returns them as
/// an unsigned integer.
///
/// The rightmost bit of the selected range (`pos2`) is the least significant
/// bit of the result, and each bit toward `pos1` doubles in weight.
/// `int_from_byte(b, 0, 7)` therefore reconstructs the byte's unsigned
/// value.
pub fn int_from_byte(b: u8, pos1: u8, pos2: u8) -> Result<u32, BitsError> {
    range_check!(pos1, 0, 7)?;
    range_check!(pos2, pos1, 7)?;

    let mut value = 0u32;
    for pos in pos1..=pos2 {
        value <<= 1;
        value |= (b & mask(pos) != 0) as u32;
    }

    Ok(value)
}

/// Returns byte number `index` of the 32-bit integer `value`.
///
/// Byte 0 is the least significant (rightmost) byte.
pub fn byte_from_int(value: i32, index: u8) -> Result<u8, BitsError> {
    range_check!(index, 0, 3)?;

    // Unsigned shift so the sign bit does not smear into lower bytes
    Ok((value as u32 >> (index * 8)) as u8)
}

/// Renders the byte as an 8-character binary string.
///
/// The leftmost character is bit position 0 (the most significant bit);
/// negative byte values appear in two's complement.
pub fn to_binary_string(b: u8) -> String {
    format!("{b:08b}")
}
