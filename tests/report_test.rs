use app_init::package_manager::PackageManager;
use app_init::report::{cd_path, failure_message, report, success_message, Completion, Summary};
use std::path::{Path, PathBuf};

#[test]
fn test_failure_message_names_command() {
    let invocation = PackageManager::Npm.invocation(true);
    assert_eq!(failure_message(&invocation), "`npm install --save --verbose` failed");
}

#[test]
fn test_success_message_lists_commands() {
    let invocation = PackageManager::Yarn.invocation(false);
    let summary = Summary {
        app_name: "myapp",
        app_path: Path::new("/work/myapp"),
        invocation: &invocation,
        readme_renamed: false,
    };

    let message = success_message(&summary, Path::new("myapp"));

    assert!(message.contains("Success! Created myapp at /work/myapp"));
    for command in ["yarn start", "yarn run ios", "yarn test", "yarn run eject", "cd myapp"] {
        assert!(message.contains(command), "missing {}", command);
    }
    assert!(!message.contains("README.old.md"));
    assert!(message.ends_with("Happy hacking!"));
}

#[test]
fn test_success_message_mentions_renamed_readme() {
    let invocation = PackageManager::Npm.invocation(false);
    let summary = Summary {
        app_name: "myapp",
        app_path: Path::new("/work/myapp"),
        invocation: &invocation,
        readme_renamed: true,
    };

    let message = success_message(&summary, Path::new("/work/myapp"));

    assert!(message.contains("we renamed it to `README.old.md`"));
    assert!(message.contains("cd /work/myapp"));
}

#[test]
fn test_report_outcomes() {
    let invocation = PackageManager::Npm.invocation(false);
    let summary = Summary {
        app_name: "myapp",
        app_path: Path::new("/work/myapp"),
        invocation: &invocation,
        readme_renamed: false,
    };
    let cwd = Path::new("/work");

    assert_eq!(report(Some(0), &summary, cwd), Completion::Installed);
    assert_eq!(
        report(Some(1), &summary, cwd),
        Completion::InstallFailed { code: Some(1) }
    );
    assert_eq!(report(None, &summary, cwd), Completion::InstallFailed { code: None });
}

#[test]
fn test_cd_path_with_trailing_component() {
    assert_eq!(
        cd_path(Path::new("/work/"), "myapp", Path::new("/work/myapp")),
        PathBuf::from("myapp")
    );
    assert_eq!(
        cd_path(Path::new("/work"), "myapp", Path::new("/work/other")),
        PathBuf::from("/work/other")
    );
}
