//! Error types for spectrank-core.

use thiserror::Error;

/// Error type for network sampling and centrality computations.
#[derive(Error, Debug)]
pub enum Error {
    /// Preferential-attachment parameters out of range.
    #[error("preferential attachment requires 1 <= m < n (got m = {m}, n = {n})")]
    InvalidAttachment { m: usize, n: usize },

    /// The resolvent system (I - αA) has no inverse.
    #[error("resolvent system is singular at alpha = {alpha}")]
    SingularSystem { alpha: f64 },

    /// The dominant eigenvalue vanished, so no attenuation factor can
    /// be derived from it.
    #[error("dominant eigenvalue is zero; cannot derive attenuation factors")]
    DegenerateSpectrum,
}

/// Result type for spectrank operations.
pub type Result<T> = std::result::Result<T, Error>;
