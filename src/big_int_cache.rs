use lazy_static::*;

use crate::big_int::Sign;
use crate::BigInt;

/// Largest magnitude kept in the constant caches.
pub const MAX_CONSTANT: usize = 16;

// Digit vectors are least-significant first, so e.g. 12 is vec![2, 1].
lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0],    Sign::Positive),
        BigInt::from_raw(vec![1],    Sign::Positive),
        BigInt::from_raw(vec![2],    Sign::Positive),
        BigInt::from_raw(vec![3],    Sign::Positive),
        BigInt::from_raw(vec![4],    Sign::Positive),
        BigInt::from_raw(vec![5],    Sign::Positive),
        BigInt::from_raw(vec![6],    Sign::Positive),
        BigInt::from_raw(vec![7],    Sign::Positive),
        BigInt::from_raw(vec![8],    Sign::Positive),
        BigInt::from_raw(vec![9],    Sign::Positive),
        BigInt::from_raw(vec![0, 1], Sign::Positive),
        BigInt::from_raw(vec![1, 1], Sign::Positive),
        BigInt::from_raw(vec![2, 1], Sign::Positive),
        BigInt::from_raw(vec![3, 1], Sign::Positive),
        BigInt::from_raw(vec![4, 1], Sign::Positive),
        BigInt::from_raw(vec![5, 1], Sign::Positive),
        BigInt::from_raw(vec![6, 1], Sign::Positive),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        // index 0 is never handed out: zero carries a positive sign
        BigInt::from_raw(vec![0],    Sign::Positive),
        BigInt::from_raw(vec![1],    Sign::Negative),
        BigInt::from_raw(vec![2],    Sign::Negative),
        BigInt::from_raw(vec![3],    Sign::Negative),
        BigInt::from_raw(vec![4],    Sign::Negative),
        BigInt::from_raw(vec![5],    Sign::Negative),
        BigInt::from_raw(vec![6],    Sign::Negative),
        BigInt::from_raw(vec![7],    Sign::Negative),
        BigInt::from_raw(vec![8],    Sign::Negative),
        BigInt::from_raw(vec![9],    Sign::Negative),
        BigInt::from_raw(vec![0, 1], Sign::Negative),
        BigInt::from_raw(vec![1, 1], Sign::Negative),
        BigInt::from_raw(vec![2, 1], Sign::Negative),
        BigInt::from_raw(vec![3, 1], Sign::Negative),
        BigInt::from_raw(vec![4, 1], Sign::Negative),
        BigInt::from_raw(vec![5, 1], Sign::Negative),
        BigInt::from_raw(vec![6, 1], Sign::Negative),
    ];
}
