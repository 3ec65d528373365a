//! Models shared by the ginger tooling: project descriptor files, release
//! versions, and the bearer claims services exchange.

pub mod auth;
pub mod descriptors;
pub mod error;
pub mod lang;
pub mod link;
pub mod realtime;
pub mod slug;
pub mod version;

pub use descriptors::{
    ConsumerDbConfig, ConsumerDbSchema, ConsumerDbTables, DatabaseConfig, DbType, Descriptor,
    GingerDbConfig, PackageMetadata, ReleaserConfig, ReleaserSettings, Service, ServiceConfig,
};
pub use error::{Result, SharedError};
pub use lang::{Environment, FileType, Lang, Orm};
pub use link::Link;
pub use slug::split_slug;
pub use version::{Channel, OutputType, Reference, Version};
