//! Errors raised by the command line front end.

use thiserror::Error;

/// Errors that can occur before or during a conversion run.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The positional arguments describe neither a file nor a directory pair.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Writing the rendered Markdown failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
