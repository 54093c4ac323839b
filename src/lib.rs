//! Big Int \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers stored as decimal digits,
//!   built from a decimal string and mutated in place by addition and subtraction.
//! - [`ParseBigIntError`]: The error reported when an operand string does not
//!   match the `-?[0-9]+` grammar.
//!
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let mut a: BigInt = "37107287533902102798797998220837590246510135740250".parse().unwrap();
//! a.add_str("46376937677490009712648124896970078050417018260538").unwrap();
//! assert_eq!(a.to_string(), "83484225211392112511446123117807668296927154000788");
//!
//! let b: BigInt = "44".parse().unwrap();
//! let c: BigInt = "436".parse().unwrap();
//! assert_eq!((&b - &c).to_string(), "-392");
//! ```

mod big_int;
mod big_int_cache;
mod error;

pub use big_int::BigInt;
pub use error::ParseBigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "-900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("-a = {}", -&a);

        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
    }
}
