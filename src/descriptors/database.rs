use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Descriptor;
use crate::error::SharedError;
use crate::link::Link;

/// Contents of `database.toml`: every database a project owns, of any type.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct GingerDbConfig {
    pub branch: String,
    pub organization_id: String,
    pub database: Vec<DatabaseConfig>,
}

impl GingerDbConfig {
    pub fn enabled(&self) -> impl Iterator<Item = &DatabaseConfig> {
        self.database.iter().filter(|db| db.enable)
    }

    pub fn by_type(&self, db_type: DbType) -> impl Iterator<Item = &DatabaseConfig> {
        self.database.iter().filter(move |db| db.db_type == db_type)
    }

    pub fn find(&self, name: &str) -> Option<&DatabaseConfig> {
        self.database.iter().find(|db| db.name == name)
    }
}

impl Descriptor for GingerDbConfig {
    const KIND: &'static str = "database";
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DatabaseConfig {
    pub db_type: DbType,
    pub description: String,
    pub enable: bool,
    pub id: Option<String>,
    pub name: String,
    pub port: String,
    pub studio_port: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl fmt::Display for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Rdbms,
    DocumentDb,
    Cache,
    MessageQueue,
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let db_type = match self {
            DbType::Rdbms => "rdbms",
            DbType::DocumentDb => "documentdb",
            DbType::Cache => "cache",
            DbType::MessageQueue => "messagequeue",
        };
        write!(f, "{db_type}")
    }
}

impl FromStr for DbType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rdbms" => Ok(DbType::Rdbms),
            "documentdb" => Ok(DbType::DocumentDb),
            "cache" => Ok(DbType::Cache),
            "messagequeue" => Ok(DbType::MessageQueue),
            _ => Err(SharedError::InvalidDbType(s.to_string())),
        }
    }
}
