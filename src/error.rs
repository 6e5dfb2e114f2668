use std::io;

/// The single error type returned from every operation in this crate.
///
/// Each variant corresponds to one of the failure kinds the command-line
/// layer surfaces to the user, prefixed with the program name (see
/// [`crate::progname`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid base64 input")]
    InvalidBase64,

    #[error("invalid padding")]
    BadPadding,

    #[error("invalid key length")]
    BadKeyLength,

    #[error("invalid iv length")]
    BadIvLength,

    #[error("missing or malformed PEM framing")]
    InvalidPemFraming,

    #[error("invalid DER encoding")]
    InvalidDer,

    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("numbers greater than 64 bits are not supported")]
    NumberTooLarge,

    #[error("failed to init rng")]
    RngUnavailable,

    #[error("passwords don't match")]
    PasswordMismatch,

    #[error("{0}")]
    InvalidArgument(String),
}
