//! Project descriptor files shared across the ginger tooling.
//!
//! Every descriptor is TOML on disk by default. JSON and YAML are accepted
//! when the file extension says so, and files with an unrecognized
//! extension are tried as TOML, then JSON, then YAML.

mod consumer;
mod database;
mod package;
mod releaser;
mod service;

pub use consumer::{ConsumerDbConfig, ConsumerDbSchema, ConsumerDbTables};
pub use database::{DatabaseConfig, DbType, GingerDbConfig};
pub use package::PackageMetadata;
pub use releaser::{ReleaserConfig, ReleaserSettings};
pub use service::{Service, ServiceConfig, ServiceMap};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::error::{Result, SharedError};

/// Load and save behaviour shared by every descriptor model.
pub trait Descriptor: Serialize + DeserializeOwned + Sized {
    /// Short name used in log lines and error messages.
    const KIND: &'static str;

    /// Fills in fields that are derived rather than stored.
    fn after_load(&mut self) {}

    /// Parses a descriptor from TOML text.
    fn from_toml_str(contents: &str) -> Result<Self> {
        let mut descriptor: Self = toml::from_str(contents)?;
        descriptor.after_load();
        Ok(descriptor)
    }

    /// Loads a descriptor, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse in the
    /// selected format.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let mut descriptor: Self = match extension(path) {
            "toml" => toml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            _ => toml::from_str(&contents)
                .ok()
                .or_else(|| serde_json::from_str(&contents).ok())
                .or_else(|| serde_yaml::from_str(&contents).ok())
                .ok_or_else(|| {
                    SharedError::Config(format!(
                        "Failed to parse {} descriptor: {}",
                        Self::KIND,
                        path.display()
                    ))
                })?,
        };
        descriptor.after_load();

        debug!("Loaded {} descriptor from {}", Self::KIND, path.display());
        Ok(descriptor)
    }

    /// Writes the descriptor, choosing the format from the file extension.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = match extension(path) {
            "json" => serde_json::to_string_pretty(self)?,
            "yaml" | "yml" => serde_yaml::to_string(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, contents)?;
        debug!("Wrote {} descriptor to {}", Self::KIND, path.display());
        Ok(())
    }
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}
