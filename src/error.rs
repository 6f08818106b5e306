//! Error handling for app-init.
//! Defines the error type and result alias used throughout the initializer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort project initialization.
///
/// Every variant is fatal: the routine stops at the failing step and leaves
/// whatever it already wrote in place. A failed package install is not an
/// error, see [`crate::report::Completion`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project manifest is missing, is not valid JSON, or has an unusable shape
    #[error("Failed to read manifest '{}': {message}.", path.display())]
    ManifestRead { path: PathBuf, message: String },

    /// The updated manifest could not be serialized or written back
    #[error("Failed to write manifest '{}': {message}.", path.display())]
    ManifestWrite { path: PathBuf, message: String },

    /// Copying the template tree into the project failed
    #[error("Failed to copy template into '{}': {source}.", path.display())]
    TemplateCopy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Renaming or merging the staged ignore file failed
    #[error("Failed to set up ignore file '{}': {source}.", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing README could not be moved out of the way
    #[error("Failed to rename existing README: {source}.")]
    ReadmeRename {
        #[source]
        source: io::Error,
    },

    /// The package manager process could not be started
    #[error("Failed to start `{command}`: {source}.")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The dependency defaults file could not be loaded
    #[error("Defaults error: {0}.")]
    DefaultsError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
