//! Manifest defaults for generated projects.
//! Holds the entry point, scripts, jest preset and the dependency tables merged
//! into every new project's manifest. The built-in table can be replaced by a
//! JSON or YAML file.

use crate::constants::DEFAULTS_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Everything the initializer writes into a project's manifest.
///
/// Loaded once and never mutated afterwards; the initializer only borrows it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    /// Value for the manifest's `main` field
    pub main: String,
    /// Replaces the manifest's `scripts` object wholesale
    pub scripts: IndexMap<String, String>,
    /// Replaces the manifest's `jest` object wholesale
    pub jest: serde_json::Value,
    /// Runtime dependencies added when missing
    pub dependencies: IndexMap<String, String>,
    /// Dev dependencies added when missing
    pub dev_dependencies: IndexMap<String, String>,
}

fn table(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            main: "main.js".to_string(),
            scripts: table(&[
                ("start", "react-native-scripts start"),
                ("build", "react-native-scripts build"),
                ("eject", "react-native-scripts eject"),
                ("ios", "react-native-scripts ios"),
                ("test", "jest"),
            ]),
            jest: serde_json::json!({ "preset": "jest-exponent" }),
            dependencies: table(&[
                ("@exponent/vector-icons", "~2.0.3"),
                ("exponent", "~12.0.3"),
                ("react", "~15.3.2"),
                (
                    "react-native",
                    "git+https://github.com/exponentjs/react-native#sdk-12.0.0",
                ),
            ]),
            dev_dependencies: table(&[("jest-exponent", "~0.1.3")]),
        }
    }
}

/// Parses defaults from JSON, falling back to YAML.
///
/// # Errors
/// * `Error::DefaultsError` if the content is neither valid JSON nor YAML
///   for the [`Defaults`] schema
pub fn parse_defaults(content: &str) -> Result<Defaults> {
    match serde_json::from_str(content) {
        Ok(defaults) => Ok(defaults),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::DefaultsError(format!("Invalid defaults format: {}", e))),
    }
}

/// Loads defaults from a file, or from the first of [`DEFAULTS_FILES`] found
/// when `path` is a directory.
///
/// # Errors
/// * `Error::DefaultsError` if no file is found or its content is invalid
pub fn load_defaults<P: AsRef<Path>>(path: P) -> Result<Defaults> {
    let path = path.as_ref();
    let file = if path.is_dir() {
        DEFAULTS_FILES
            .iter()
            .map(|name| path.join(name))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| {
                Error::DefaultsError(format!(
                    "No defaults file found in '{}' (tried: {})",
                    path.display(),
                    DEFAULTS_FILES.join(", ")
                ))
            })?
    } else {
        path.to_path_buf()
    };

    debug!("Loading defaults from {}", file.display());
    let content = std::fs::read_to_string(&file).map_err(|e| {
        Error::DefaultsError(format!("Cannot read '{}': {}", file.display(), e))
    })?;
    parse_defaults(&content)
}
