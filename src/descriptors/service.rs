use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Descriptor;
use crate::error::Result;
use crate::lang::Lang;

/// `name -> (key -> value)` tables, kept in file order.
pub type ServiceMap = IndexMap<String, IndexMap<String, String>>;

const SCHEMA_URL_KEY: &str = "schema_url";

/// A service dependency resolved from a [`ServiceConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub schema_url: String,
    pub name: String,
}

/// Contents of a project's `ginger.toml`.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct ServiceConfig {
    pub lang: Lang,
    pub organization_id: String,
    /// Absent when the project needs no service integration.
    pub dir: Option<String>,
    pub portal_refs_file: Option<String>,
    pub spec_url: Option<String>,
    pub override_name: Option<String>,
    pub service_type: Option<String>,
    pub urls: Option<IndexMap<String, String>>,
    pub services: Option<ServiceMap>,
    pub portals_refs: Option<ServiceMap>,
}

impl ServiceConfig {
    pub fn service_names(&self) -> Vec<&str> {
        self.services
            .iter()
            .flat_map(|services| services.keys())
            .map(String::as_str)
            .collect()
    }

    /// Services that declare a schema URL. Entries without one are skipped.
    pub fn services(&self) -> Vec<Service> {
        let Some(services) = &self.services else {
            return Vec::new();
        };

        services
            .iter()
            .filter_map(|(name, entry)| match entry.get(SCHEMA_URL_KEY) {
                Some(schema_url) => Some(Service {
                    schema_url: schema_url.clone(),
                    name: name.clone(),
                }),
                None => {
                    warn!("Service {name} has no {SCHEMA_URL_KEY}, skipping");
                    None
                }
            })
            .collect()
    }

    /// Checks that `spec_url` and every entry of `urls` is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns the first URL parse failure.
    pub fn validate(&self) -> Result<()> {
        if let Some(spec_url) = &self.spec_url {
            Url::parse(spec_url)?;
        }
        for url in self.urls.iter().flat_map(|urls| urls.values()) {
            Url::parse(url)?;
        }
        Ok(())
    }
}

impl Descriptor for ServiceConfig {
    const KIND: &'static str = "service";
}
