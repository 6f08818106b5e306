//! Common constants used throughout app-init.

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Lock file whose presence selects yarn over npm
pub const YARN_LOCK_FILE: &str = "yarn.lock";

/// Canonical ignore file name in the generated project
pub const IGNORE_FILE: &str = ".gitignore";

/// Name the template ships its ignore file under, so npm does not rename it to `.npmignore`
pub const STAGED_IGNORE_FILE: &str = "gitignore";

pub const README_FILE: &str = "README.md";
pub const README_BACKUP_FILE: &str = "README.old.md";

/// Package that ships the template, installed under the project's `node_modules`
pub const SCRIPTS_PACKAGE: &str = "react-native-scripts";

/// Template directory inside [`SCRIPTS_PACKAGE`]
pub const TEMPLATE_DIR: &str = "template";

/// Supported defaults override file extensions, tried as JSON first, then YAML
pub const DEFAULTS_FILES: [&str; 3] = ["app-init.json", "app-init.yml", "app-init.yaml"];
