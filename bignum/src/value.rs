//! Sign-magnitude arbitrary-precision integer.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::convert;
use crate::error::BignumError;
use crate::halflimb;
use crate::limb;

/// An arbitrary-precision signed integer.
///
/// Stored sign-magnitude: `magnitude` is a little-endian `u32` limb array
/// with no leading zero limb (I2) except the single limb `[0]` representing
/// zero (I1), and `negative` is always `false` when `magnitude` is zero
/// (I3) — there is no negative zero.
#[derive(Debug, Clone)]
pub struct BigInt {
    magnitude: Vec<u32>,
    negative: bool,
}

impl BigInt {
    /// Builds a `BigInt` directly from a little-endian limb magnitude and a
    /// sign flag, normalizing to the canonical invariants: strips leading
    /// zero limbs, and clears the sign if the result is zero.
    pub fn create_from_limbs(mut magnitude: Vec<u32>, negative: bool) -> Self {
        if magnitude.is_empty() {
            magnitude.push(0);
        }
        while magnitude.len() > 1 && *magnitude.last().unwrap() == 0 {
            magnitude.pop();
        }
        let negative = negative && !(magnitude.len() == 1 && magnitude[0] == 0);
        BigInt { magnitude, negative }
    }

    /// Parses a decimal numeral of the form `[-]?[0-9]+`. A leading `+` is
    /// rejected, along with a bare sign, empty input, or any non-digit
    /// byte.
    pub fn create_from_decimal(s: &str) -> Result<Self, BignumError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(BignumError::InvalidNumeral(
                "missing digits after sign".to_string(),
            ));
        }
        let magnitude = convert::from_decimal_digits(digits)?;
        Ok(BigInt::create_from_limbs(magnitude, negative))
    }

    /// `true` if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.len() == 1 && self.magnitude[0] == 0
    }

    /// `true` if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Upper bound on the length of this value's decimal rendering,
    /// including a sign byte.
    pub fn max_decimal_length(&self) -> usize {
        convert::max_decimal_length(self.magnitude.len())
    }

    /// Renders this value as a decimal string, with a leading `-` for
    /// negative non-zero values and no sign otherwise.
    pub fn to_decimal(&self) -> String {
        let digits = convert::to_decimal_string(&self.magnitude);
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// `self + other`.
    pub fn add(&self, other: &BigInt) -> BigInt {
        match (self.negative, other.negative) {
            (false, false) | (true, true) => {
                let magnitude = unsigned_add(&self.magnitude, &other.magnitude);
                BigInt::create_from_limbs(magnitude, self.negative)
            }
            (false, true) => self.subtract_unsigned(other),
            (true, false) => other.subtract_unsigned(self),
        }
    }

    /// `self - other`.
    pub fn sub(&self, other: &BigInt) -> BigInt {
        self.add(&other.neg())
    }

    /// `self * other`.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        let magnitude = limb::mul(&self.magnitude, &other.magnitude);
        let negative = self.negative != other.negative;
        BigInt::create_from_limbs(magnitude, negative)
    }

    /// Truncating division: `self / other`, rounding toward zero.
    pub fn div(&self, other: &BigInt) -> Result<BigInt, BignumError> {
        Ok(self.divmod(other)?.0)
    }

    /// Remainder of truncating division: `self % other`. Carries the sign
    /// of `self` (or is zero), per `self == (self / other) * other + r`.
    pub fn rem(&self, other: &BigInt) -> Result<BigInt, BignumError> {
        Ok(self.divmod(other)?.1)
    }

    /// `-self`.
    pub fn neg(&self) -> BigInt {
        BigInt::create_from_limbs(self.magnitude.clone(), !self.negative)
    }

    fn divmod(&self, other: &BigInt) -> Result<(BigInt, BigInt), BignumError> {
        if other.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        if limb::cmp(&self.magnitude, &other.magnitude) == Ordering::Less {
            let r = BigInt::create_from_limbs(self.magnitude.clone(), self.negative);
            return Ok((BigInt::create_from_limbs(vec![0], false), r));
        }
        let (q, r) = halflimb::div_mod_u32(&self.magnitude, &other.magnitude);
        let q = BigInt::create_from_limbs(q, self.negative != other.negative);
        let r = BigInt::create_from_limbs(r, self.negative);
        Ok((q, r))
    }

    fn subtract_unsigned(&self, other: &BigInt) -> BigInt {
        match limb::cmp(&self.magnitude, &other.magnitude) {
            Ordering::Equal => BigInt::create_from_limbs(vec![0], false),
            Ordering::Greater => {
                let magnitude = limb::sub(&self.magnitude, &other.magnitude);
                BigInt::create_from_limbs(magnitude, self.negative)
            }
            Ordering::Less => {
                let magnitude = limb::sub(&other.magnitude, &self.magnitude);
                BigInt::create_from_limbs(magnitude, other.negative)
            }
        }
    }
}

fn unsigned_add(u: &[u32], v: &[u32]) -> Vec<u32> {
    let (longer, shorter) = if u.len() >= v.len() { (u, v) } else { (v, u) };
    let mut padded = shorter.to_vec();
    padded.resize(longer.len(), 0);
    limb::add(longer, &padded)
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Sign first, then magnitude — and magnitude comparison itself must
    /// flip for negative values, so this cannot be derived from field
    /// order: `Vec<u32>` compares little-endian limb by limb, which is not
    /// the same order as numeric magnitude.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => limb::cmp(&self.magnitude, &other.magnitude),
            (true, true) => limb::cmp(&other.magnitude, &self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl FromStr for BigInt {
    type Err = BignumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::create_from_decimal(s)
    }
}

impl Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl Div for &BigInt {
    type Output = BigInt;
    /// Panics on division by zero, matching the named [`BigInt::div`]'s
    /// `Result` collapsed to the conventional operator-trait contract.
    fn div(self, rhs: &BigInt) -> BigInt {
        BigInt::div(self, rhs).expect("division by zero")
    }
}

impl Rem for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        BigInt::rem(self, rhs).expect("division by zero")
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        BigInt::create_from_decimal(s).unwrap()
    }

    #[test]
    fn parses_and_prints_round_trip() {
        assert_eq!(big("0").to_decimal(), "0");
        assert_eq!(big("-0").to_decimal(), "0");
        assert_eq!(big("123").to_decimal(), "123");
        assert_eq!(big("-123").to_decimal(), "-123");
    }

    #[test]
    fn rejects_leading_plus_and_bare_sign() {
        assert!(BigInt::create_from_decimal("+1").is_err());
        assert!(BigInt::create_from_decimal("-").is_err());
        assert!(BigInt::create_from_decimal("").is_err());
    }

    #[test]
    fn addition_examples() {
        assert_eq!(big("2").add(&big("3")), big("5"));
        assert_eq!(big("-2").add(&big("-3")), big("-5"));
        assert_eq!(big("5").add(&big("-3")), big("2"));
        assert_eq!(big("-5").add(&big("3")), big("-2"));
        assert_eq!(big("3").add(&big("-3")), big("0"));
        assert!(!big("3").add(&big("-3")).is_negative());
    }

    #[test]
    fn subtraction_examples() {
        assert_eq!(big("5").sub(&big("3")), big("2"));
        assert_eq!(big("3").sub(&big("5")), big("-2"));
        assert_eq!(big("0").sub(&big("0")), big("0"));
    }

    #[test]
    fn multiplication_examples() {
        assert_eq!(big("123").mul(&big("456")), big("56088"));
        assert_eq!(big("-123").mul(&big("456")), big("-56088"));
        assert_eq!(big("-123").mul(&big("-456")), big("56088"));
        assert_eq!(big("0").mul(&big("999")), big("0"));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(big("-17").div(&big("5")).unwrap(), big("-3"));
        assert_eq!(big("-17").rem(&big("5")).unwrap(), big("-2"));
        assert_eq!(big("17").div(&big("-5")).unwrap(), big("-3"));
        assert_eq!(big("17").rem(&big("-5")).unwrap(), big("2"));
        assert_eq!(big("-17").div(&big("-5")).unwrap(), big("3"));
        assert_eq!(big("-17").rem(&big("-5")).unwrap(), big("-2"));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(big("1").div(&big("0")), Err(BignumError::DivisionByZero));
    }

    #[test]
    fn comparison_orders_by_sign_then_magnitude() {
        assert!(big("-5") < big("-3"));
        assert!(big("-3") < big("0"));
        assert!(big("0") < big("3"));
        assert!(big("3") < big("5"));
        assert_eq!(big("5"), big("5"));
    }

    #[test]
    fn large_multiplication_example() {
        let a = big("99999999999999999999");
        let b = big("99999999999999999999");
        assert_eq!(
            a.mul(&b).to_decimal(),
            "9999999999999999999800000000000000000001"
        );
    }

    #[test]
    fn large_division_example() {
        let a = big("1000000000000000000000");
        let b = big("7");
        assert_eq!(a.div(&b).unwrap().to_decimal(), "142857142857142857142");
        assert_eq!(a.rem(&b).unwrap().to_decimal(), "6");
    }
}
