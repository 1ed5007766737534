//! Result and Error types for the card module

/// Type alias for `Result<T, card::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `matcard-card`
///
/// Only problems that leave nothing to convert are errors. Anything wrong
/// with individual tokens or elements is reported as a
/// [Diagnostic](crate::Diagnostic) instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input text is empty or whitespace
    #[error("no input provided")]
    NoInput,

    /// Input contains no `M<n>` cards at all
    #[error("no valid material cards found")]
    NoMaterialCards,

    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise conversion options
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),
}
