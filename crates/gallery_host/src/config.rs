//! Endpoint configuration shared by the browser API client and the gallery runtime.

use serde::{Deserialize, Serialize};

use crate::projects::types::ProjectId;

/// Default listing API origin.
pub const DEFAULT_API_BASE: &str = "https://api.scratch.mit.edu";
/// Default thumbnail CDN prefix; thumbnails live at `{base}/{id}_480x360.png`.
pub const DEFAULT_THUMBNAIL_BASE: &str = "https://cdn2.scratch.mit.edu/get_image/project";
/// Default project page prefix; projects live at `{base}/{id}`.
pub const DEFAULT_PROJECT_BASE: &str = "https://scratch.mit.edu/projects";
/// Default messages page opened by the `Messages` category.
pub const DEFAULT_MESSAGES_URL: &str = "https://scratch.mit.edu/messages";
/// Default number of entries requested per listing.
pub const DEFAULT_PAGE_LIMIT: u32 = 16;

/// Thumbnail size suffix appended to every thumbnail URL.
const THUMBNAIL_SUFFIX: &str = "_480x360.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Remote endpoints and listing limits used by the gallery.
pub struct GalleryConfig {
    /// Origin of the project-listing API.
    pub api_base: String,
    /// Prefix for project thumbnail images.
    pub thumbnail_base: String,
    /// Prefix for project pages opened on card click.
    pub project_base: String,
    /// Page opened by the `Messages` category.
    pub messages_url: String,
    /// Maximum number of entries requested per listing.
    pub page_limit: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            thumbnail_base: DEFAULT_THUMBNAIL_BASE.to_string(),
            project_base: DEFAULT_PROJECT_BASE.to_string(),
            messages_url: DEFAULT_MESSAGES_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl GalleryConfig {
    /// Returns the thumbnail image URL for a project id.
    pub fn thumbnail_url(&self, id: ProjectId) -> String {
        format!(
            "{}/{}{THUMBNAIL_SUFFIX}",
            self.thumbnail_base.trim_end_matches('/'),
            id
        )
    }

    /// Returns the project page URL for a project id.
    pub fn project_url(&self, id: ProjectId) -> String {
        format!("{}/{}", self.project_base.trim_end_matches('/'), id)
    }

    /// Returns the front-page listing endpoint used by featured and top-loved feeds.
    pub fn front_page_url(&self) -> String {
        format!("{}/proxy/featured", self.api_base.trim_end_matches('/'))
    }

    /// Returns an explore listing endpoint for `mode` and an already-encoded query term.
    pub fn explore_url(&self, mode: &str, encoded_query: &str, offset: u32) -> String {
        format!(
            "{}/explore/projects?mode={mode}&q={encoded_query}&offset={offset}&limit={}",
            self.api_base.trim_end_matches('/'),
            self.page_limit
        )
    }
}
