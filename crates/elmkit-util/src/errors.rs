use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all elmkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ElmkitError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project manifest (elm.json).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your elm.json for missing or invalid fields"))]
    Manifest { message: String },

    /// Source directories exist but yielded no program entrypoints.
    #[error("No entrypoints found: {message}")]
    NoEntrypoints { message: String },

    /// A version constraint could not be matched against the known tools.
    #[error("Version constraint error: {message}")]
    VersionConstraint { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ElmkitResult<T> = miette::Result<T>;
