//! app-init sets up a freshly created app project from its template.
//! It rewrites the project manifest, copies the template files, reconciles
//! the ignore file and runs the package manager install.

/// Command-line interface module for the app-init binary
pub mod cli;

/// Manifest defaults: entry point, scripts, jest preset and dependency tables
pub mod config;

pub mod constants;

/// Error types and handling for app-init
pub mod error;

/// Staged ignore file rename and merge
pub mod ignore;

/// Orchestration of a single initialization run
pub mod init;

pub mod logger;

/// Project manifest reading, transformation and writing
pub mod manifest;

/// Package manager selection and install process spawning
pub mod package_manager;

/// Success and failure reporting after install
pub mod report;

/// Template tree copying
pub mod template;
