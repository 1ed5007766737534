//! Result and Error types for the compendium module

/// Type alias for `Result<T, compendium::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `matcard-compendium`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to deserialise the compendium JSON
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// No material with the requested id
    #[error("failed to find material \"{id}\"")]
    MaterialNotFound { id: String },

    /// Material has nothing to write to a card
    #[error("material \"{id}\" has no composition")]
    EmptyComposition { id: String },

    /// Category name not recognised
    #[error("failed to infer category from \"{hint}\"")]
    CouldNotInferCategory { hint: String },
}
