//! Project listing data types shared across host contracts and implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Numeric identifier of a remotely hosted project.
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One project entry as returned by a listing request.
///
/// Entries are ephemeral: they are received per request and discarded on the next clear.
pub struct Project {
    /// Project identifier; also keys the thumbnail image.
    pub id: ProjectId,
    /// Display title.
    pub title: String,
    /// Author username.
    pub user: String,
}

impl Project {
    /// Builds a project entry from its parts.
    pub fn new(id: u64, title: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: ProjectId(id),
            title: title.into(),
            user: user.into(),
        }
    }
}
