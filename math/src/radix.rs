//! Positional-notation codec for digit strings in bases 2 through 36.
//!
//! Digits are drawn from [`ALPHABET`]; letters are accepted in either case and
//! `encode` always emits lowercase. Values are arbitrary precision so long
//! share values never lose their low-order digits.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::RadixError;

/// Ordered digit alphabet: a character's position is its digit value.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Reject bases outside `MIN_BASE..=MAX_BASE`.
#[inline]
pub fn ensure_base(base: u32) -> Result<(), RadixError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(RadixError::InvalidBase(base))
    }
}

/// Position of `ch` in [`ALPHABET`], ignoring case.
pub fn digit_value(ch: char) -> Option<u32> {
    let lower = ch.to_ascii_lowercase();
    ALPHABET
        .iter()
        .position(|&d| char::from(d) == lower)
        .map(|pos| pos as u32)
}

/// Decode `value` written in `base` into an exact integer.
///
/// Digits are consumed from least to most significant, accumulating
/// `digit * base^power`. The first character (scanning right to left) that is
/// outside the alphabet or not smaller than `base` is reported; no partial
/// value is ever returned.
pub fn decode(value: &str, base: u32) -> Result<BigUint, RadixError> {
    ensure_base(base)?;
    if value.is_empty() {
        return Err(RadixError::EmptyValue);
    }

    let radix = BigUint::from(base);
    let mut result = BigUint::zero();
    let mut place = BigUint::one();

    for ch in value.chars().rev() {
        let digit = digit_value(ch)
            .filter(|&d| d < base)
            .ok_or(RadixError::InvalidDigit { digit: ch, base })?;
        result += &place * BigUint::from(digit);
        place *= &radix;
    }

    Ok(result)
}

/// Render `value` in `base` using lowercase digits.
pub fn encode(value: &BigUint, base: u32) -> Result<String, RadixError> {
    ensure_base(base)?;
    Ok(value.to_str_radix(base))
}
