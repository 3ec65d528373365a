use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Implementation language of a service or package.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    Rust,
    TS,
    Python,
    Shell,
}

impl Lang {
    pub fn all() -> Vec<Lang> {
        vec![Lang::Rust, Lang::TS, Lang::Python, Lang::Shell]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lang::Rust => write!(f, "Rust"),
            Lang::TS => write!(f, "TS"),
            Lang::Python => write!(f, "Python"),
            Lang::Shell => write!(f, "Shell"),
        }
    }
}

/// ORM a consumer database schema is generated for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Orm {
    TypeORM,
    SQLAlchemy,
    DjangoORM,
    Diesel,
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orm::TypeORM => write!(f, "TypeORM"),
            Orm::SQLAlchemy => write!(f, "SQLAlchemy"),
            Orm::DjangoORM => write!(f, "DjangoORM"),
            Orm::Diesel => write!(f, "Diesel"),
        }
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Dev,
    Stage,
    Prod,
    #[value(name = "prod_k8")]
    ProdK8,
    #[value(name = "stage_k8")]
    StageK8,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Stage => write!(f, "stage"),
            Environment::Prod => write!(f, "prod"),
            Environment::ProdK8 => write!(f, "prod_k8"),
            Environment::StageK8 => write!(f, "stage_k8"),
        }
    }
}

/// Kind of file a release reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    Py,
    Toml,
    Json,
    #[default]
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: Option<&str>) -> FileType {
        match ext {
            Some("py") => FileType::Py,
            Some("toml") => FileType::Toml,
            Some("json") => FileType::Json,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> FileType {
        Self::from_extension(path.as_ref().extension().and_then(|ext| ext.to_str()))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Py => write!(f, "Py"),
            FileType::Toml => write!(f, "Toml"),
            FileType::Json => write!(f, "Json"),
            FileType::Unknown => write!(f, "Unknown"),
        }
    }
}
