//! Project manifest (`package.json`) loading, transformation and persistence.
//!
//! The manifest is read once, mutated in memory and written back once. Key
//! order is preserved, so fields the project already had keep their position
//! and new fields are appended.

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::config::Defaults;
use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};

/// In-memory project manifest, owned by the initializer for the whole run.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Reads `<app_path>/package.json`.
    ///
    /// # Errors
    /// * `Error::ManifestRead` if the file is missing, is not JSON, or is not
    ///   a JSON object
    pub async fn read<P: AsRef<Path>>(app_path: P) -> Result<Self> {
        let path = app_path.as_ref().join(MANIFEST_FILE);
        debug!("Reading manifest {}", path.display());

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            Error::ManifestRead { path: path.clone(), message: e.to_string() }
        })?;
        Self::parse(path, &content)
    }

    /// Parses manifest content that was loaded from `path`.
    pub fn parse(path: PathBuf, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::ManifestRead { path: path.clone(), message: e.to_string() })?;

        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(Error::ManifestRead {
                path,
                message: "top level value is not an object".to_string(),
            }),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Sets the entry point, replaces `scripts` and `jest`, and merges the
    /// default dependency tables.
    ///
    /// `scripts` is overwritten, not merged: same-named scripts the project
    /// already declared are discarded. Dependencies are merged: versions the
    /// project already declared are kept.
    ///
    /// # Errors
    /// * `Error::ManifestRead` if `dependencies` or `devDependencies` exists
    ///   but is not an object
    pub fn apply_defaults(&mut self, defaults: &Defaults) -> Result<()> {
        self.fields.insert("main".to_string(), Value::String(defaults.main.clone()));
        self.fields.insert("scripts".to_string(), string_table(&defaults.scripts));
        self.fields.insert("jest".to_string(), defaults.jest.clone());

        let dependencies = self.table_mut("dependencies")?;
        merge_dependencies(dependencies, &defaults.dependencies);

        let dev_dependencies = self.table_mut("devDependencies")?;
        merge_dependencies(dev_dependencies, &defaults.dev_dependencies);

        Ok(())
    }

    /// Returns the object stored under `key`, creating an empty one when the
    /// key is absent or `null`.
    fn table_mut(&mut self, key: &str) -> Result<&mut Map<String, Value>> {
        let entry = self.fields.entry(key.to_string()).or_insert(Value::Null);
        if entry.is_null() {
            *entry = Value::Object(Map::new());
        }

        match entry {
            Value::Object(map) => Ok(map),
            _ => Err(Error::ManifestRead {
                path: self.path.clone(),
                message: format!("`{}` is not an object", key),
            }),
        }
    }

    /// Serializes the manifest and replaces the file on disk.
    ///
    /// # Errors
    /// * `Error::ManifestWrite` if serialization or the write fails
    pub async fn write(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.fields).map_err(|e| {
            Error::ManifestWrite { path: self.path.clone(), message: e.to_string() }
        })?;
        content.push('\n');

        debug!("Writing manifest {}", self.path.display());
        tokio::fs::write(&self.path, content).await.map_err(|e| Error::ManifestWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

fn string_table(entries: &IndexMap<String, String>) -> Value {
    Value::Object(
        entries.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect(),
    )
}

/// Adds every default entry whose key is missing from `target`.
///
/// Existing entries always win, so a version the project already pins is
/// never replaced by the default.
pub fn merge_dependencies(target: &mut Map<String, Value>, defaults: &IndexMap<String, String>) {
    for (name, version) in defaults {
        if target.contains_key(name) {
            debug!("Keeping declared version of {}", name);
            continue;
        }
        target.insert(name.clone(), Value::String(version.clone()));
    }
}
