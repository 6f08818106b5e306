//! Project initialization orchestration.
//! Runs every step against a freshly created project directory, in order:
//! README backup, manifest rewrite, template copy, ignore file, install.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::Defaults;
use crate::constants::{README_BACKUP_FILE, README_FILE};
use crate::error::{Error, Result};
use crate::ignore::{self, IgnoreFileState};
use crate::manifest::Manifest;
use crate::package_manager::{InstallRunner, PackageManager};
use crate::report::{self, Completion, Summary};
use crate::template::copy_template;

/// Caller-supplied input for one initialization run.
#[derive(Debug, Clone)]
pub struct InitContext {
    /// Existing project directory to initialize
    pub app_path: PathBuf,
    /// Human-readable project name
    pub app_name: String,
    /// Passes `--verbose` to npm
    pub verbose: bool,
}

impl InitContext {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(app_path: P, app_name: S, verbose: bool) -> Self {
        Self { app_path: app_path.into(), app_name: app_name.into(), verbose }
    }
}

/// Moves an existing `README.md` to `README.old.md`.
///
/// # Returns
/// * `Result<bool>` - Whether a README was found and renamed
///
/// # Errors
/// * `Error::ReadmeRename` if the rename fails
pub async fn preserve_readme<P: AsRef<Path>>(app_path: P) -> Result<bool> {
    let app_path = app_path.as_ref();
    let readme = app_path.join(README_FILE);
    if !tokio::fs::try_exists(&readme).await.unwrap_or(false) {
        return Ok(false);
    }

    debug!("Renaming {} to {}", README_FILE, README_BACKUP_FILE);
    tokio::fs::rename(&readme, app_path.join(README_BACKUP_FILE))
        .await
        .map_err(|source| Error::ReadmeRename { source })?;
    Ok(true)
}

/// Initializes projects from a template using a fixed set of manifest defaults.
pub struct Initializer<'a> {
    defaults: &'a Defaults,
    template_dir: &'a Path,
    runner: &'a dyn InstallRunner,
}

impl<'a> Initializer<'a> {
    pub fn new(defaults: &'a Defaults, template_dir: &'a Path, runner: &'a dyn InstallRunner) -> Self {
        Self { defaults, template_dir, runner }
    }

    /// Initializes the project described by `ctx`, reporting the outcome
    /// relative to the process's current directory.
    pub async fn run(&self, ctx: &InitContext) -> Result<Completion> {
        let cwd = std::env::current_dir().unwrap_or_default();
        self.run_from(ctx, &cwd).await
    }

    /// Initializes the project described by `ctx`.
    ///
    /// # Flow
    /// 1. Selects the package manager and records whether `.gitignore` exists
    /// 2. Renames an existing README
    /// 3. Rewrites the manifest with the defaults
    /// 4. Copies the template
    /// 5. Moves or merges the staged ignore file
    /// 6. Spawns the install and reports its outcome
    ///
    /// A failed install is reported and returned as
    /// [`Completion::InstallFailed`], not as an error. Errors from earlier
    /// steps abort the run without undoing what was already written.
    pub async fn run_from(&self, ctx: &InitContext, cwd: &Path) -> Result<Completion> {
        let app_path = ctx.app_path.as_path();

        let package_manager = PackageManager::detect(app_path).await;
        let ignore_state = IgnoreFileState::detect(app_path).await;

        let readme_renamed = preserve_readme(app_path).await?;

        let mut manifest = Manifest::read(app_path).await?;
        manifest.apply_defaults(self.defaults)?;
        manifest.write().await?;

        copy_template(self.template_dir, app_path).await?;

        ignore::reconcile(app_path, ignore_state).await?;

        let invocation = package_manager.invocation(ctx.verbose);
        println!("Installing dependencies using {}...", invocation.program);
        println!();

        let pending = self.runner.spawn(&invocation)?;
        let code = pending.exit_code().await;
        debug!("`{}` exited with {:?}", invocation, code);

        let summary = Summary {
            app_name: &ctx.app_name,
            app_path,
            invocation: &invocation,
            readme_renamed,
        };
        Ok(report::report(code, &summary, cwd))
    }
}
