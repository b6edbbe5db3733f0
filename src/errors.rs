use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested curve is not one of the ten supported SEC names.
    #[error("invalid curve name: {0}")]
    InvalidCurve(String),

    /// Signing produced a degenerate component (r = 0 or s = 0); retry
    /// with a different ephemeral scalar.
    #[error("signature generation failed")]
    SignatureFailed,
}
