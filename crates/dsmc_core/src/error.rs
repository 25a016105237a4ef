use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the simulation crates.
///
/// Construction-time validation is the only fatal path: a simulation that
/// was built successfully runs to completion. Degenerate collision pairs and
/// empty or singleton grid cells are normal outcomes, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected configuration (non-positive counts, non-finite parameters).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Driver used outside its state machine (e.g. re-running a finished run).
    #[error("invalid driver state: {0}")]
    InvalidState(&'static str),

    /// Propagated I/O errors from persistence paths.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
