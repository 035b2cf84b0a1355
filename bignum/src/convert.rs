//! Decimal string conversion for unsigned limb magnitudes.
//!
//! Parsing works in base `10^9` (the largest power of ten that fits in a
//! `u32`), chunking the input from the left and folding each 9-digit group
//! in with [`limb::mul_add_scalar`]. Printing walks the other direction:
//! repeated division by `10^4`, peeling off one base-10000 digit group at a
//! time from the bottom.

use crate::error::BignumError;
use crate::halflimb;
use crate::limb;

const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;
const PRINT_CHUNK: u16 = 10_000;

/// Parses an ASCII digit string (no sign, no leading/trailing whitespace)
/// into a little-endian `u32` magnitude. Leading zeros are accepted and
/// the result is stripped of any leading zero limbs. An empty string or a
/// non-digit byte is [`BignumError::InvalidNumeral`].
pub fn from_decimal_digits(digits: &str) -> Result<Vec<u32>, BignumError> {
    if digits.is_empty() {
        return Err(BignumError::InvalidNumeral("empty numeral".to_string()));
    }
    if let Some(bad) = digits.bytes().find(|b| !b.is_ascii_digit()) {
        return Err(BignumError::InvalidNumeral(format!(
            "non-digit byte {:#04x}",
            bad
        )));
    }

    let bytes = digits.as_bytes();
    let mut magnitude: Vec<u32> = vec![0];
    let mut i = 0;
    let first_chunk_len = bytes.len() % DECIMAL_CHUNK_DIGITS;
    let first_chunk_len = if first_chunk_len == 0 {
        DECIMAL_CHUNK_DIGITS
    } else {
        first_chunk_len
    };

    while i < bytes.len() {
        let chunk_len = if i == 0 { first_chunk_len } else { DECIMAL_CHUNK_DIGITS };
        let chunk = std::str::from_utf8(&bytes[i..i + chunk_len]).unwrap();
        let value: u32 = chunk.parse().expect("validated ASCII digit chunk");
        let scale = 10u32.pow(chunk_len as u32);
        magnitude = limb::mul_add_scalar(&magnitude, scale, value);
        i += chunk_len;
    }

    strip_leading_zeros(&mut magnitude);
    Ok(magnitude)
}

/// Renders a little-endian `u32` magnitude as a decimal string, with no
/// sign and no leading zeros. An empty or all-zero magnitude prints `"0"`.
pub fn to_decimal_string(magnitude: &[u32]) -> String {
    if magnitude.iter().all(|&l| l == 0) {
        return "0".to_string();
    }

    let mut work = halflimb::u32_to_u16(magnitude);
    let mut groups: Vec<u16> = Vec::new();

    loop {
        let (q, r) = limb::short_div(&work, PRINT_CHUNK);
        groups.push(r);
        work = q;
        while matches!(work.last(), Some(0)) {
            work.pop();
        }
        if work.is_empty() {
            break;
        }
    }

    // `groups` holds base-10000 digits least-significant first; the most
    // significant group prints without zero-padding, every other group
    // pads to exactly four digits.
    let mut out = String::with_capacity(groups.len() * 4);
    for (idx, group) in groups.iter().rev().enumerate() {
        if idx == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push_str(&format!("{:04}", group));
        }
    }
    out
}

/// Upper bound on the decimal string length for a magnitude of the given
/// limb count: each 32-bit limb contributes at most `log10(2^32) < 10`
/// decimal digits, plus one for carry across limb boundaries.
pub fn max_decimal_length(magnitude_len: usize) -> usize {
    10 * magnitude_len + 1
}

fn strip_leading_zeros(magnitude: &mut Vec<u32>) {
    while magnitude.len() > 1 && *magnitude.last().unwrap() == 0 {
        magnitude.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_small_numerals() {
        assert_eq!(from_decimal_digits("0").unwrap(), vec![0]);
        assert_eq!(from_decimal_digits("7").unwrap(), vec![7]);
        assert_eq!(from_decimal_digits("000123").unwrap(), vec![123]);
    }

    #[test]
    fn rejects_non_digits_and_empty() {
        assert!(from_decimal_digits("").is_err());
        assert!(from_decimal_digits("12a").is_err());
        assert!(from_decimal_digits("-5").is_err());
    }

    #[test]
    fn parses_multi_chunk_numeral() {
        // 10 digits, crosses the 9-digit chunk boundary.
        let magnitude = from_decimal_digits("1234567890").unwrap();
        assert_eq!(to_decimal_string(&magnitude), "1234567890");
    }

    #[test]
    fn round_trips_large_values() {
        let s = "99999999999999999999999999999999999999";
        let magnitude = from_decimal_digits(s).unwrap();
        assert_eq!(to_decimal_string(&magnitude), s);
    }

    #[test]
    fn prints_zero_as_single_digit() {
        assert_eq!(to_decimal_string(&[0, 0, 0]), "0");
    }

    #[test]
    fn print_chunk_boundary_keeps_leading_zeros_within_group() {
        // Forces an internal group of exactly "0001" so the zero-padding
        // in the non-final branch is actually exercised.
        let magnitude = from_decimal_digits("100001234").unwrap();
        assert_eq!(to_decimal_string(&magnitude), "100001234");
    }
}
