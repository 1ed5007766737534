//! Result and Error types for the command line tool

/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for the `matcard` binary
pub enum Error {
    /// Underlying file or stream I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Logger was already set
    #[error("failed to initialise logging")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Card(#[from] matcard_card::Error),

    #[error(transparent)]
    Compendium(#[from] matcard_compendium::Error),
}
