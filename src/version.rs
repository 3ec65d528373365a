//! Release versions as tracked in `releaser.toml`.
//!
//! A version is `major.minor.patch` on the final channel, or
//! `major.minor.patch-channel.revision` on a pre-release channel.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SharedError};
use crate::lang::FileType;

/// Release channel. Declaration order is the sort order.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Channel {
    Final,
    /// Also known as the dev branch
    Nightly,
    Alpha,
    Beta,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Final => write!(f, "final"),
            Channel::Nightly => write!(f, "nightly"),
            Channel::Alpha => write!(f, "alpha"),
            Channel::Beta => write!(f, "beta"),
        }
    }
}

impl FromStr for Channel {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "final" => Ok(Channel::Final),
            "nightly" => Ok(Channel::Nightly),
            "alpha" => Ok(Channel::Alpha),
            "beta" => Ok(Channel::Beta),
            other => Err(SharedError::InvalidChannel(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub channel: Channel,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub revision: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            channel: Channel::Final,
            major,
            minor,
            patch,
            revision: 0,
        }
    }

    pub fn with_channel(self, channel: Channel, revision: u32) -> Self {
        Self {
            channel,
            revision,
            ..self
        }
    }

    /// Human-facing form, e.g. `1.4.2` or `1.4.2-beta.3`.
    pub fn formatted(&self) -> String {
        match self.channel {
            Channel::Final => format!("{}.{}.{}", self.major, self.minor, self.patch),
            _ => format!(
                "{}.{}.{}-{}.{}",
                self.major, self.minor, self.patch, self.channel, self.revision
            ),
        }
    }

    /// Python tuple literal, e.g. `(1, 4, 2, "beta", 3)`.
    pub fn tuple(&self) -> String {
        format!(
            "({}, {}, {}, \"{}\", {})",
            self.major, self.minor, self.patch, self.channel, self.revision
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Version {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(['.', '-']).collect();
        if parts.len() < 3 {
            return Err(SharedError::InvalidVersion(s.to_string()));
        }

        let number = |part: &str| -> Result<u32> {
            part.parse()
                .map_err(|_| SharedError::InvalidVersion(s.to_string()))
        };

        let major = number(parts[0])?;
        let minor = number(parts[1])?;
        let patch = number(parts[2])?;

        let (channel, revision) = match parts.get(3) {
            Some(channel) => {
                let channel = channel.parse::<Channel>()?;
                let revision = match parts.get(4) {
                    // A final release has no revision.
                    Some(_) if channel == Channel::Final => {
                        return Err(SharedError::InvalidVersion(s.to_string()))
                    }
                    Some(revision) => number(*revision)?,
                    None => 0,
                };
                (channel, revision)
            }
            None => (Channel::Final, 0),
        };

        if parts.len() > 5 {
            return Err(SharedError::InvalidVersion(s.to_string()));
        }

        Ok(Version {
            channel,
            major,
            minor,
            patch,
            revision,
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then(self.channel.cmp(&other.channel))
            .then(self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    String,
    Tuple,
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::String => write!(f, "String"),
            OutputType::Tuple => write!(f, "Tuple"),
        }
    }
}

/// A file variable that receives the release version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Reference {
    pub file_name: String,
    #[serde(default)]
    pub output_type: OutputType,
    pub variable: String,
    /// Not stored in the file; derived from `file_name` on load.
    #[serde(skip)]
    pub file_type: FileType,
}

impl Reference {
    pub fn resolve_file_type(&mut self) {
        self.file_type = FileType::from_path(Path::new(&self.file_name));
    }

    pub fn render(&self, version: &Version) -> String {
        match self.output_type {
            OutputType::String => version.formatted(),
            OutputType::Tuple => version.tuple(),
        }
    }
}
