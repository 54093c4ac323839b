//! # BigInt
//! Arbitrary-precision signed integers stored as decimal digits.
//!
//! The magnitude is kept least-significant digit first, so carries and
//! borrows propagate by walking the vector forward. The most-significant
//! end never holds a zero digit, except that zero itself is the single
//! digit `0` with a positive sign.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::error::ParseBigIntError;

/// Drops zero digits from the most-significant end of a least-significant
/// first digit vector, keeping at least one digit.
macro_rules! strip_leading_zeros {
    ($vec: expr) => {
        while $vec.len() > 1 && $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// # Example
/// ```
/// use big_int::BigInt;
///
/// let mut a: BigInt = "9999".parse().unwrap();
/// a.add_str("1").unwrap();
/// assert_eq!(a.to_string(), "10000");
///
/// a.sub_str("-44").unwrap();
/// assert_eq!(a.to_string(), "10044");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<u8>,
}

// 构造
impl BigInt {
    /// Builds a `BigInt` from already-canonical parts. The cache module
    /// relies on this; `digits` must hold no most-significant zero and
    /// zero must come in as `(Positive, [0])`.
    pub(crate) fn from_raw(digits: Vec<u8>, sign: Sign) -> Self {
        BigInt { sign, digits }
    }

    /// Normalizing constructor: strips most-significant zero digits and
    /// collapses zero onto the positive sign.
    fn new(mut digits: Vec<u8>, sign: Sign) -> Self {
        strip_leading_zeros!(digits);
        if digits.is_empty() {
            digits.push(0);
        }
        let sign = if digits == [0] { Sign::Positive } else { sign };
        BigInt { sign, digits }
    }

    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

// 解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses a decimal literal matching `-?[0-9]+`: an optional single
    /// leading `-` followed by one or more ASCII digits. Anything else,
    /// including whitespace, embedded signs, and non-ASCII digits, is a
    /// [`ParseBigIntError`].
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let (sign, body) = match val.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, val),
        };

        if body.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let mut digits = Vec::with_capacity(body.len());
        for c in body.chars().rev() {
            match c.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(ParseBigIntError::InvalidDigit(c)),
            }
        }

        Ok(BigInt::new(digits, sign))
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                BigInt::value_of(val.unsigned_abs() as u64, Sign::Negative)
            } else {
                BigInt::value_of(val as u64, Sign::Positive)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl BigInt {
    fn value_of(val: u64, sign: Sign) -> BigInt {
        if val == 0 {
            return BigInt::zero();
        }
        if val <= MAX_CONSTANT as u64 {
            return match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let mut digits = Vec::new();
        let mut rest = val;
        while rest != 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        BigInt::from_raw(digits, sign)
    }
}

// 打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.sign == Sign::Negative {
            s.push('-');
        }
        for &d in self.digits.iter().rev() {
            s.push((b'0' + d) as char);
        }
        f.write_str(&s)
    }
}

// 大小比较
impl BigInt {
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

// 字符串操作数
impl BigInt {
    /// Parses `addend` and adds it to `self` in place.
    ///
    /// `self` is left untouched when `addend` fails to parse.
    pub fn add_str(&mut self, addend: &str) -> Result<(), ParseBigIntError> {
        let val: BigInt = addend.parse()?;
        *self += val;
        Ok(())
    }

    /// Parses `subtrahend` and subtracts it from `self` in place.
    ///
    /// `self` is left untouched when `subtrahend` fails to parse.
    pub fn sub_str(&mut self, subtrahend: &str) -> Result<(), ParseBigIntError> {
        let val: BigInt = subtrahend.parse()?;
        *self -= val;
        Ok(())
    }
}

// 加法
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return val;
        }

        if val.sign == self.sign {
            let sign = self.sign;
            return BigInt::new(BigInt::add_mag(&self.digits, &val.digits), sign);
        }

        match self.compare_mag(&val) {
            Ordering::Less => {
                let sign = val.sign;
                BigInt::new(BigInt::sub_mag(&val.digits, &self.digits), sign)
            }
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let sign = self.sign;
                BigInt::new(BigInt::sub_mag(&self.digits, &val.digits), sign)
            }
        }
    }
}

impl BigInt {
    /// Adds two magnitudes digit-by-digit from the least-significant end.
    /// The carry keeps propagating through the longer operand after the
    /// shorter one runs out, and a surviving carry appends a new
    /// most-significant digit.
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u8;
        for (i, &d) in long.iter().enumerate() {
            let mut sum = d + carry;
            if i < short.len() {
                sum += short[i];
            }
            carry = sum / 10;
            result.push(sum % 10);
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    /// Subtracts the smaller magnitude from the larger. A borrow chains
    /// into the next column whenever a column's minuend digit comes up
    /// short. The caller strips any leading zeros this leaves behind.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0i8;
        for (i, &d) in big.iter().enumerate() {
            let mut diff = d as i8 - borrow;
            if i < little.len() {
                diff -= little[i] as i8;
            }
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        result
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// 取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        let BigInt { sign, digits } = self;
        BigInt { sign: -sign, digits }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 减法
impl Sub for BigInt {
    type Output = BigInt;

    /// Subtraction is addition of the negated operand, so all four sign
    /// combinations go through the one sign-aware magnitude algorithm.
    fn sub(self, val: Self) -> Self::Output {
        self + val.neg()
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() - rhs.clone();
    }
}

#[test]
fn test_parse_round_trip() {
    let samples = [
        "0",
        "7",
        "123456",
        "-123456",
        "10000000000000000000000000000000000000000",
        "46376937677490009712648124896970078050417018260538",
        "-46376937677490009712648124896970078050417018260538",
    ];
    for s in samples {
        let big: BigInt = s.parse().unwrap();
        assert_eq!(big.to_string(), s);
    }
}

#[test]
fn test_parse_canonicalizes() {
    let big: BigInt = "000123".parse().unwrap();
    assert_eq!(big.to_string(), "123");

    let big: BigInt = "-0007".parse().unwrap();
    assert_eq!(big.to_string(), "-7");

    // no negative zero
    let big: BigInt = "-0".parse().unwrap();
    assert_eq!(big.to_string(), "0");
    assert_eq!(big.sign, Sign::Positive);

    let big: BigInt = "00000".parse().unwrap();
    assert_eq!(big.digits, vec![0]);
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!(
        "12a3".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('a'))
    );
    assert_eq!(
        " 12".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit(' '))
    );
    assert!("--12".parse::<BigInt>().is_err());
    assert!("12-3".parse::<BigInt>().is_err());
    assert!("+12".parse::<BigInt>().is_err());
    // non-ASCII digits are rejected too
    assert!("١٢٣".parse::<BigInt>().is_err());
}

#[cfg(test)]
fn addition_test(initial: &str, add: &str, expected: &str) {
    let mut big: BigInt = initial.parse().unwrap();
    big.add_str(add).unwrap();
    assert_eq!(big.to_string(), expected);
}

#[cfg(test)]
fn subtraction_test(initial: &str, subtract: &str, expected: &str) {
    let mut big: BigInt = initial.parse().unwrap();
    big.sub_str(subtract).unwrap();
    assert_eq!(big.to_string(), expected);
}

#[test]
fn test_add_carry() {
    addition_test("5", "9", "14");
    // the carry must keep walking the longer operand, whichever side it is on
    addition_test("9999", "1", "10000");
    addition_test("1", "9999", "10000");
    // carry into an already-populated tens digit combines with it
    addition_test("7", "14", "21");
}

#[test]
fn test_add_deep_carry() {
    addition_test(
        "9999999999999999999999999999999999999999",
        "1",
        "10000000000000000000000000000000000000000",
    );
}

#[test]
fn test_add_signs() {
    addition_test("-1", "1", "0");
    addition_test("1", "-1", "0");
    addition_test("-1", "-1", "-2");
    addition_test("-5", "3", "-2");
    addition_test("5", "-3", "2");
    addition_test("0", "-17", "-17");
    addition_test("-17", "0", "-17");
}

#[test]
fn test_add_huge() {
    addition_test(
        "37107287533902102798797998220837590246510135740250",
        "46376937677490009712648124896970078050417018260538",
        "83484225211392112511446123117807668296927154000788",
    );
}

#[test]
fn test_sub_borrow() {
    subtraction_test("53", "52", "1");
    subtraction_test("2000", "1999", "1");
    subtraction_test("2000", "1", "1999");
    subtraction_test("100000", "1", "99999");
}

#[test]
fn test_sub_signs() {
    subtraction_test("3", "5", "-2");
    subtraction_test("4", "44", "-40");
    subtraction_test("44", "436", "-392");
    // subtracting from a negative adds into the negative world
    subtraction_test("-44", "436", "-480");
    subtraction_test("-436", "-44", "-392");
    // subtracting a negative is addition
    subtraction_test("44", "-436", "480");
    subtraction_test("17", "17", "0");
    subtraction_test("-17", "-17", "0");
}

#[test]
fn test_sub_huge() {
    subtraction_test(
        "46376937677490009712648124896970078050417018260538",
        "37107287533902102798797998220837590246510135740250",
        "9269650143587906913850126676132487803906882520288",
    );
    // subtracting one Euler addend from the sum recovers the other exactly
    subtraction_test(
        "83484225211392112511446123117807668296927154000788",
        "46376937677490009712648124896970078050417018260538",
        "37107287533902102798797998220837590246510135740250",
    );
}

#[test]
fn test_no_leading_zero_digits() {
    let mut big: BigInt = "2000".parse().unwrap();
    big.sub_str("1999").unwrap();
    assert_eq!(big.digits, vec![1]);

    big.add_str("-1").unwrap();
    assert_eq!(big.digits, vec![0]);
    assert_eq!(big.sign, Sign::Positive);

    let mut big: BigInt = "10000".parse().unwrap();
    big.sub_str("9999").unwrap();
    big.add_str("99").unwrap();
    big.sub_str("100").unwrap();
    assert_eq!(big.digits, vec![0]);
}

#[test]
fn test_failed_parse_leaves_value_alone() {
    let mut big: BigInt = "123".parse().unwrap();
    assert!(big.add_str("12a3").is_err());
    assert!(big.sub_str("").is_err());
    assert!(big.sub_str(" 12").is_err());
    assert_eq!(big.to_string(), "123");
}

#[test]
fn test_operators() {
    let a: BigInt = "9999".parse().unwrap();
    let b: BigInt = "1".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "10000");
    assert_eq!((&b - &a).to_string(), "-9998");
    assert_eq!((-&a).to_string(), "-9999");

    let mut c = a.clone();
    c += b.clone();
    c -= a;
    assert_eq!(c, b);

    // negating zero stays positive zero
    let zero = BigInt::zero();
    assert_eq!(-zero.clone(), zero);
}

#[test]
fn test_from() {
    let big: BigInt = 0u8.into();
    assert!(big.is_zero());

    let big: BigInt = 12u8.into();
    assert_eq!(big.to_string(), "12");

    let big: BigInt = (-100i16).into();
    assert_eq!(big.to_string(), "-100");

    let big: BigInt = 1_000_000_007u64.into();
    assert_eq!(big.to_string(), "1000000007");

    let big: BigInt = i64::MIN.into();
    assert_eq!(big.to_string(), "-9223372036854775808");
}

#[test]
fn test_value_of_cache() {
    let small: BigInt = 16u32.into();
    assert_eq!(small.digits, vec![6, 1]);
    assert_eq!(small, POS_CACHE[16].clone());

    let neg: BigInt = (-16i32).into();
    assert_eq!(neg, NEG_CACHE[16].clone());
    assert_eq!(neg.sign, Sign::Negative);
}

#[test]
fn test_compare_mag() {
    let a: BigInt = "436".parse().unwrap();
    let b: BigInt = "44".parse().unwrap();
    assert_eq!(a.compare_mag(&b), Ordering::Greater);
    assert_eq!(b.compare_mag(&a), Ordering::Less);

    let c: BigInt = "-436".parse().unwrap();
    assert_eq!(a.compare_mag(&c), Ordering::Equal);
}
