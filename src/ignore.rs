//! Ignore file reconciliation.
//!
//! Templates stage their ignore file as `gitignore` because npm renames a
//! published `.gitignore` to `.npmignore`. After the template is copied the
//! staged file is moved to `.gitignore`, or appended to it when the project
//! already had one.

use log::debug;
use std::io;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::constants::{IGNORE_FILE, STAGED_IGNORE_FILE};
use crate::error::{Error, Result};

/// Whether the project had a `.gitignore` before the template was copied.
///
/// Captured before any mutation so that a `.gitignore` shipped by the
/// template itself cannot change the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreFileState {
    pub pre_existing: bool,
}

impl IgnoreFileState {
    pub async fn detect<P: AsRef<Path>>(app_path: P) -> Self {
        let pre_existing =
            tokio::fs::try_exists(app_path.as_ref().join(IGNORE_FILE)).await.unwrap_or(false);
        debug!("Existing {}: {}", IGNORE_FILE, pre_existing);
        Self { pre_existing }
    }
}

/// Result of a rename that refuses to replace its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The source now lives at the destination path.
    Renamed,
    /// The destination already exists; nothing was moved.
    AlreadyExists,
}

/// Moves `from` to `to` unless `to` already exists.
///
/// `AlreadyExists` is returned when `state` recorded a pre-existing file,
/// when `to` exists now, or when the OS refuses the rename for that reason.
/// Any other I/O error is returned unchanged.
pub async fn rename_no_clobber(
    from: &Path,
    to: &Path,
    state: IgnoreFileState,
) -> io::Result<RenameOutcome> {
    if state.pre_existing || tokio::fs::try_exists(to).await? {
        return Ok(RenameOutcome::AlreadyExists);
    }

    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(RenameOutcome::Renamed),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(RenameOutcome::AlreadyExists),
        Err(e) => Err(e),
    }
}

async fn append_and_remove(staged: &Path, canonical: &Path) -> io::Result<()> {
    let data = tokio::fs::read(staged).await?;
    let mut file = tokio::fs::OpenOptions::new().create(true).append(true).open(canonical).await?;
    file.write_all(&data).await?;
    file.flush().await?;
    tokio::fs::remove_file(staged).await
}

/// Puts the staged ignore file in place as `.gitignore`.
///
/// # Errors
/// * `Error::IgnoreFile` for any I/O failure other than the destination
///   already existing
pub async fn reconcile<P: AsRef<Path>>(app_path: P, state: IgnoreFileState) -> Result<()> {
    let app_path = app_path.as_ref();
    let staged = app_path.join(STAGED_IGNORE_FILE);
    let canonical = app_path.join(IGNORE_FILE);
    let ignore_error = |source: io::Error| Error::IgnoreFile { path: canonical.clone(), source };

    if !tokio::fs::try_exists(&staged).await.map_err(ignore_error)? {
        debug!("Template has no {}, skipping", STAGED_IGNORE_FILE);
        return Ok(());
    }

    match rename_no_clobber(&staged, &canonical, state).await.map_err(ignore_error)? {
        RenameOutcome::Renamed => {
            debug!("Renamed {} to {}", STAGED_IGNORE_FILE, IGNORE_FILE);
        }
        RenameOutcome::AlreadyExists => {
            debug!("Appending {} to existing {}", STAGED_IGNORE_FILE, IGNORE_FILE);
            append_and_remove(&staged, &canonical).await.map_err(ignore_error)?;
        }
    }

    Ok(())
}
