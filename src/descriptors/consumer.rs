use serde::{Deserialize, Serialize};

use super::Descriptor;
use crate::lang::{Lang, Orm};

/// Where a consumer pulls its database schema from, and how it is generated.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct ConsumerDbSchema {
    pub url: String,
    pub lang: Lang,
    pub orm: Orm,
    pub root: String,
    pub schema_id: Option<String>,
    pub cache_schema_id: Option<String>,
    pub message_queue_schema_id: Option<String>,
    pub branch: Option<String>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Default)]
pub struct ConsumerDbTables {
    pub names: Vec<String>,
}

/// Contents of a consumer's `db-compose.toml`.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct ConsumerDbConfig {
    pub schema: ConsumerDbSchema,
    pub tables: ConsumerDbTables,
}

impl ConsumerDbConfig {
    pub fn includes_table(&self, name: &str) -> bool {
        self.tables.names.iter().any(|table| table == name)
    }
}

impl Descriptor for ConsumerDbConfig {
    const KIND: &'static str = "consumer database";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consumer_config() {
        let config = ConsumerDbConfig::from_toml_str(
            r#"
[schema]
url = "https://db-designer.example.com"
lang = "Rust"
orm = "Diesel"
root = "src/models"
schema_id = "a1b2"
branch = "stage"

[tables]
names = ["users", "groups"]
"#,
        )
        .unwrap();

        assert_eq!(config.schema.orm, Orm::Diesel);
        assert_eq!(config.schema.orm.to_string(), "Diesel");
        assert_eq!(config.schema.schema_id.as_deref(), Some("a1b2"));
        assert!(config.schema.cache_schema_id.is_none());
        assert!(config.includes_table("groups"));
        assert!(!config.includes_table("audit"));
    }

    #[test]
    fn test_save_consumer_config_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db-compose.yaml");

        let config = ConsumerDbConfig {
            schema: ConsumerDbSchema {
                url: "https://db-designer.example.com".to_string(),
                lang: Lang::Python,
                orm: Orm::SQLAlchemy,
                root: "app/models".to_string(),
                schema_id: None,
                cache_schema_id: None,
                message_queue_schema_id: Some("mq1".to_string()),
                branch: None,
            },
            tables: ConsumerDbTables {
                names: vec!["orders".to_string()],
            },
        };
        config.save(&path).unwrap();

        assert_eq!(ConsumerDbConfig::load(&path).unwrap(), config);
    }
}
