//! Template materialization.
//! Copies the template tree that ships with the scripts package into the
//! project directory.

use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{SCRIPTS_PACKAGE, TEMPLATE_DIR};
use crate::error::{Error, Result};

/// Returns the template directory to copy from.
///
/// Without an explicit directory this is the template inside the scripts
/// package installed in the project, `<app_path>/node_modules/react-native-scripts/template`.
pub fn resolve_template_dir<P: AsRef<Path>>(app_path: P, template_dir: Option<PathBuf>) -> PathBuf {
    template_dir.unwrap_or_else(|| {
        app_path.as_ref().join("node_modules").join(SCRIPTS_PACKAGE).join(TEMPLATE_DIR)
    })
}

/// Recursively copies every file and directory under `template_dir` into
/// `app_path`, keeping relative paths. Files already present at the same
/// relative path are overwritten.
///
/// # Errors
/// * `Error::TemplateCopy` if the template is missing or any copy fails
pub async fn copy_template<S: AsRef<Path>, D: AsRef<Path>>(
    template_dir: S,
    app_path: D,
) -> Result<()> {
    let template_dir = template_dir.as_ref();
    let app_path = app_path.as_ref();
    let copy_error = |source: io::Error| Error::TemplateCopy { path: app_path.to_path_buf(), source };

    if !template_dir.is_dir() {
        return Err(copy_error(io::Error::new(
            io::ErrorKind::NotFound,
            format!("template directory '{}' does not exist", template_dir.display()),
        )));
    }

    debug!("Copying template from {}", template_dir.display());

    for entry in WalkDir::new(template_dir).min_depth(1) {
        let entry = entry.map_err(|e| copy_error(e.into()))?;
        let relative_path = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| copy_error(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
        let target_path = app_path.join(relative_path);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&target_path).await.map_err(copy_error)?;
        } else {
            debug!("Copying file: {}", target_path.display());
            if let Some(parent) = target_path.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(copy_error)?;
            }
            tokio::fs::copy(entry.path(), &target_path).await.map_err(copy_error)?;
        }
    }

    Ok(())
}
