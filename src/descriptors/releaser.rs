use serde::{Deserialize, Serialize};

use super::Descriptor;
use crate::version::{Reference, Version};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaserSettings {
    pub git_url_prefix: Option<String>,
    #[serde(default)]
    pub take_snapshots: bool,
}

/// Contents of `releaser.toml`: the current version and the files that
/// carry it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaserConfig {
    pub settings: ReleaserSettings,
    pub version: Version,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl ReleaserConfig {
    /// Pairs each reference with the value it should hold for the current
    /// version.
    pub fn rendered_references(&self) -> Vec<(&Reference, String)> {
        self.references
            .iter()
            .map(|reference| (reference, reference.render(&self.version)))
            .collect()
    }
}

impl Descriptor for ReleaserConfig {
    const KIND: &'static str = "releaser";

    fn after_load(&mut self) {
        for reference in &mut self.references {
            reference.resolve_file_type();
        }
    }
}
