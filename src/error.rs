use thiserror::Error;

/// Error produced when a string does not match the `-?[0-9]+` grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The string was empty, or held nothing after the leading sign.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A character other than an ASCII decimal digit appeared after the
    /// optional leading sign.
    #[error("invalid character {0:?} in decimal string")]
    InvalidDigit(char),
}
