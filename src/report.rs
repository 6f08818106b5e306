//! Post-install reporting.
//! Turns the install's exit code into the failure line or the success banner
//! shown to the user.

use console::style;
use std::path::{Path, PathBuf};

use crate::constants::{README_BACKUP_FILE, README_FILE};
use crate::package_manager::InstallInvocation;

/// How the initializer finished once the project files were in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Installed,
    /// The install exited unsuccessfully. The scaffolded files are left as they are.
    InstallFailed { code: Option<i32> },
}

/// Everything the reporter needs to describe the finished project.
#[derive(Debug)]
pub struct Summary<'a> {
    pub app_name: &'a str,
    pub app_path: &'a Path,
    pub invocation: &'a InstallInvocation,
    pub readme_renamed: bool,
}

/// Returns the shortest path the user can `cd` into: the bare project name
/// when `app_path` is exactly `cwd/app_name`, the full path otherwise.
pub fn cd_path(cwd: &Path, app_name: &str, app_path: &Path) -> PathBuf {
    if cwd.join(app_name) == app_path {
        PathBuf::from(app_name)
    } else {
        app_path.to_path_buf()
    }
}

pub fn failure_message(invocation: &InstallInvocation) -> String {
    format!("`{}` failed", invocation)
}

pub fn success_message(summary: &Summary<'_>, cd_path: &Path) -> String {
    let command = &summary.invocation.program;
    let cmd = |suffix: &str| style(format!("{} {}", command, suffix)).cyan();

    let mut message = format!(
        r#"

Success! Created {name} at {path}
Inside that directory, you can run several commands:

  {start}
    Starts the development server so you can open your app in the Exponent
    app on your phone.

  {ios}
    (Mac only) Starts the development server and loads your app in an iOS
    simulator. Requires that Xcode and the Xcode Command Line Tools are
    installed.

  {test}
    Starts the test runner.

  {eject}
    Removes this tool and copies build dependencies, configuration files
    and scripts into the app directory. If you do this, you can't go back!

We suggest that you begin by typing:

  {cd}
  {start}"#,
        name = summary.app_name,
        path = summary.app_path.display(),
        start = cmd("start"),
        ios = cmd("run ios"),
        test = cmd("test"),
        eject = cmd("run eject"),
        cd = style(format!("cd {}", cd_path.display())).cyan(),
    );

    if summary.readme_renamed {
        message.push_str(&format!(
            "\n\n{}",
            style(format!(
                "You had a `{}` file, we renamed it to `{}`",
                README_FILE, README_BACKUP_FILE
            ))
            .yellow()
        ));
    }

    message.push_str("\n\nHappy hacking!");
    message
}

/// Prints the outcome of the install for the given exit code.
pub fn report(code: Option<i32>, summary: &Summary<'_>, cwd: &Path) -> Completion {
    if code != Some(0) {
        eprintln!("{}", failure_message(summary.invocation));
        return Completion::InstallFailed { code };
    }

    let cd = cd_path(cwd, summary.app_name, summary.app_path);
    println!("{}", success_message(summary, &cd));
    Completion::Installed
}
