use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The string did not contain three two-digit hex groups.
    #[error("expected three two-digit hex groups, found: {0:?}")]
    InvalidHex(String),

    /// The blend mode name is not one of the supported modes.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    /// The byte sequence could not be split evenly into rgb triplets.
    #[error("cannot split {0} bytes into rgb triplets")]
    IncompleteTriplet(usize),
}
