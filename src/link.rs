use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigation link attached to a package or database in the portal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Link {
    pub internal: bool,
    pub label: String,
    pub icon: String,
    pub link: String,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[internal: {}, label: {}, icon: {}]",
            self.internal, self.label, self.icon
        )
    }
}
