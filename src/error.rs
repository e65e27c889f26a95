use thiserror::Error;

#[derive(Error, Debug)]
pub enum CypherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid multiplier: {0}. Must be between 2 and 255")]
    InvalidMultiplier(i64),

    #[error("Multiplier {0} fails gcd test: gcd({0}, 255) must be 1")]
    MultiplierNotCoprime(i64),

    #[error("Invalid addend: {0}. Must be between 0 and 255")]
    InvalidAddend(i64),

    #[error("Invalid shift: {0}. Must be between 1 and 25")]
    InvalidShift(i64),

    #[error("Invalid width: {0}. Must be between 1 and {max}", max = crate::lines::MAX_LINE_DATA)]
    InvalidWidth(i64),

    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),

    #[error("Could not calculate inverse of {0} modulo 255")]
    NoInverse(u32),

    #[error("Badly formed substitution table: no entry for '{}'", as_char(.0))]
    CorruptTable(u8),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

impl CypherError {
    /// True for failures of the engines' own invariants rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::NoInverse(_) | Self::CorruptTable(_))
    }
}

pub type Result<T> = std::result::Result<T, CypherError>;
