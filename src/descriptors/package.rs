use serde::{Deserialize, Serialize};

use super::Descriptor;
use crate::lang::Lang;
use crate::link::Link;

/// Contents of a package's `metadata.toml`.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct PackageMetadata {
    pub lang: Lang,
    pub package_type: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Descriptor for PackageMetadata {
    const KIND: &'static str = "package metadata";
}
