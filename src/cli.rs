use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use ginger_shared::auth::{ApiClaims, BearerClaims, IscClaims, UserClaims};
use ginger_shared::{
    split_slug, DatabaseConfig, Descriptor, GingerDbConfig, ReleaserConfig, ServiceConfig, Version,
};

use crate::output::{
    bright_green, bright_red, cyan, databases_table, dim, references_table, services_table,
};

#[derive(Parser)]
#[command(name = "ginger-shared")]
#[command(author, version, about = "Inspect ginger project descriptors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the version recorded in a releaser descriptor
    Version {
        #[arg(short, long, default_value = "releaser.toml")]
        config: PathBuf,

        /// Print as a Python tuple literal
        #[arg(short, long, default_value_t = false)]
        tuple: bool,
    },
    /// List the files that carry the release version
    References {
        #[arg(short, long, default_value = "releaser.toml")]
        config: PathBuf,
    },
    /// Compare two version strings
    Compare { left: String, right: String },
    /// List the databases of a project
    Databases {
        #[arg(short, long, default_value = "database.toml")]
        config: PathBuf,

        /// Include disabled databases
        #[arg(short, long, default_value_t = false)]
        all: bool,
    },
    /// Validate a service descriptor and list its service dependencies
    Services {
        #[arg(short, long, default_value = "ginger.toml")]
        config: PathBuf,
    },
    /// Split an `org/name` slug
    Slug { slug: String },
    /// Verify a bearer token and print its claims
    Claims {
        #[arg(short, long, value_enum)]
        kind: ClaimsKind,

        #[arg(short, long)]
        token: String,

        #[arg(short, long, env = "JWT_SECRET", hide_env_values = true)]
        secret: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ClaimsKind {
    Isc,
    Api,
    User,
}

fn comparison_symbol(left: &Version, right: &Version) -> &'static str {
    match left.cmp(right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn parse_slug(slug: &str) -> Result<(String, String)> {
    match split_slug(slug) {
        Some(parts) => Ok(parts),
        None => bail!("Slug must look like org/name: {slug}"),
    }
}

fn select_databases(config: &GingerDbConfig, all: bool) -> Vec<&DatabaseConfig> {
    if all {
        config.database.iter().collect()
    } else {
        config.enabled().collect()
    }
}

fn load<D: Descriptor>(path: &Path) -> Result<D> {
    D::load(path).with_context(|| format!("Failed to load {} descriptor: {}", D::KIND, path.display()))
}

impl Cli {
    fn execute_version(&self, config: &Path, tuple: bool) -> Result<()> {
        let releaser: ReleaserConfig = load(config)?;
        if tuple {
            println!("{}", releaser.version.tuple());
        } else {
            println!("{}", releaser.version.formatted());
        }
        Ok(())
    }

    fn execute_references(&self, config: &Path) -> Result<()> {
        let releaser: ReleaserConfig = load(config)?;
        info!(
            "{} references for version {}",
            releaser.references.len(),
            releaser.version
        );

        if releaser.references.is_empty() {
            println!("{}", dim("No references configured"));
        } else {
            println!("{}", references_table(&releaser));
        }
        Ok(())
    }

    fn execute_compare(&self, left: &str, right: &str) -> Result<()> {
        let left: Version = left.parse().with_context(|| format!("Invalid version: {left}"))?;
        let right: Version = right
            .parse()
            .with_context(|| format!("Invalid version: {right}"))?;

        let symbol = comparison_symbol(&left, &right);
        println!("{} {} {}", cyan(left), symbol, cyan(right));
        Ok(())
    }

    fn execute_databases(&self, config: &Path, all: bool) -> Result<()> {
        let db_config: GingerDbConfig = load(config)?;
        info!(
            "Project {} on branch {}",
            db_config.organization_id, db_config.branch
        );

        println!("{}", databases_table(select_databases(&db_config, all)));
        Ok(())
    }

    fn execute_services(&self, config: &Path) -> Result<()> {
        let service_config: ServiceConfig = load(config)?;

        if let Err(e) = service_config.validate() {
            println!("{} {e}", bright_red("✗"));
            bail!("Service descriptor {} has an invalid URL", config.display());
        }
        println!(
            "{} {} ({})",
            bright_green("✓"),
            service_config.organization_id,
            service_config.lang
        );

        let services = service_config.services();
        if services.is_empty() {
            println!("{}", dim("No service dependencies"));
        } else {
            println!("{}", services_table(&services));
        }
        Ok(())
    }

    fn execute_slug(&self, slug: &str) -> Result<()> {
        let (org_id, name) = parse_slug(slug)?;
        println!("{org_id}\n{name}");
        Ok(())
    }

    fn execute_claims(&self, kind: ClaimsKind, token: &str, secret: &str) -> Result<()> {
        let secret = secret.as_bytes();
        match kind {
            ClaimsKind::Isc => self.print_claims(IscClaims::from_header_values([token], secret)?),
            ClaimsKind::Api => self.print_claims(ApiClaims::from_header_values([token], secret)?),
            ClaimsKind::User => self.print_claims(UserClaims::from_header_values([token], secret)?),
        }
    }

    fn print_claims<C: BearerClaims + Serialize>(&self, claims: C) -> Result<()> {
        if let Some(expires_at) = claims.expires_at() {
            info!("Token expires at {expires_at}");
        }

        let json_output = if self.pretty {
            serde_json::to_string_pretty(&claims)?
        } else {
            serde_json::to_string(&claims)?
        };
        println!("{json_output}");
        Ok(())
    }

    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Version { config, tuple } => self.execute_version(config, *tuple),
            Commands::References { config } => self.execute_references(config),
            Commands::Compare { left, right } => self.execute_compare(left, right),
            Commands::Databases { config, all } => self.execute_databases(config, *all),
            Commands::Services { config } => self.execute_services(config),
            Commands::Slug { slug } => self.execute_slug(slug),
            Commands::Claims {
                kind,
                token,
                secret,
            } => self.execute_claims(*kind, token, secret),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DB_TOML: &str = r#"
branch = "main"
organization_id = "ginger-society"

[[database]]
db_type = "rdbms"
description = "Primary store"
enable = true
name = "main-db"
port = "5432"

[[database]]
db_type = "cache"
description = "Session cache"
enable = false
name = "sessions"
port = "6379"
"#;

    fn toml_fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn run(args: &[&str]) -> Result<()> {
        let args = std::iter::once("ginger-shared").chain(args.iter().copied());
        Cli::try_parse_from(args)?.execute()
    }

    #[test]
    fn test_comparison_symbol() {
        let v = |s: &str| s.parse::<Version>().unwrap();
        assert_eq!(comparison_symbol(&v("1.2.3"), &v("1.3.0")), "<");
        assert_eq!(comparison_symbol(&v("1.2.3"), &v("1.2.3-final")), "=");
        assert_eq!(comparison_symbol(&v("1.2.3-beta.1"), &v("1.2.3-alpha.4")), ">");
    }

    #[test]
    fn test_compare_rejects_invalid_version() {
        assert!(run(&["compare", "1.2.3", "1.2.3-rc.1"]).is_err());
        assert!(run(&["compare", "1.0.0", "2.0.0"]).is_ok());
    }

    #[test]
    fn test_parse_slug() {
        assert_eq!(
            parse_slug("ginger-society/dev-portal").unwrap(),
            ("ginger-society".to_string(), "dev-portal".to_string())
        );

        let err = parse_slug("dev-portal").unwrap_err();
        assert!(err.to_string().contains("org/name"));
        assert!(run(&["slug", "dev-portal"]).is_err());
    }

    #[test]
    fn test_select_databases() {
        let config = GingerDbConfig::from_toml_str(DB_TOML).unwrap();

        let enabled: Vec<&str> = select_databases(&config, false)
            .iter()
            .map(|db| db.name.as_str())
            .collect();
        assert_eq!(enabled, vec!["main-db"]);

        let all: Vec<&str> = select_databases(&config, true)
            .iter()
            .map(|db| db.name.as_str())
            .collect();
        assert_eq!(all, vec!["main-db", "sessions"]);
    }

    #[test]
    fn test_databases_command() {
        let file = toml_fixture(DB_TOML);
        let path = file.path().to_str().unwrap();
        assert!(run(&["databases", "--config", path]).is_ok());
        assert!(run(&["databases", "--config", path, "--all"]).is_ok());
    }

    #[test]
    fn test_services_command_fails_on_invalid_url() {
        let file = toml_fixture(
            r#"
lang = "Rust"
organization_id = "ginger-society"
spec_url = "not a url"
"#,
        );
        let err = run(&["services", "--config", file.path().to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("invalid URL"));
    }

    #[test]
    fn test_services_command_accepts_valid_descriptor() {
        let file = toml_fixture(
            r#"
lang = "Rust"
organization_id = "ginger-society"
spec_url = "https://api.example.com/openapi.json"

[services.IAMService]
schema_url = "https://iam.example.com/openapi.json"
"#,
        );
        assert!(run(&["services", "--config", file.path().to_str().unwrap()]).is_ok());
    }

    #[test]
    fn test_version_command_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releaser.toml");
        let err = run(&["version", "--config", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("releaser"));
    }
}
