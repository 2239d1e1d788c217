//! Wire shapes returned by the listing API and their conversion into [`Project`] values.
//!
//! Two shapes exist: the front-page document (`/proxy/featured`) groups several listings and names
//! the author `creator`, while explore listings (`/explore/projects`) are bare arrays with a nested
//! `author.username`.

use serde::{Deserialize, Serialize};

use super::types::{Project, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Entry inside one of the front-page listings.
pub struct FrontPageProject {
    /// Project identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Author username.
    pub creator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Front-page document; listings the gallery does not use are ignored.
pub struct FrontPage {
    /// Curator-featured projects.
    pub community_featured_projects: Vec<FrontPageProject>,
    /// Most-loved projects.
    pub community_most_loved_projects: Vec<FrontPageProject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Author record nested in explore entries.
pub struct ProjectAuthor {
    /// Author username.
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Entry of an explore listing.
pub struct ExploreProject {
    /// Project identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Project author.
    pub author: ProjectAuthor,
}

impl From<FrontPageProject> for Project {
    fn from(entry: FrontPageProject) -> Self {
        Self {
            id: ProjectId(entry.id),
            title: entry.title,
            user: entry.creator,
        }
    }
}

impl From<ExploreProject> for Project {
    fn from(entry: ExploreProject) -> Self {
        Self {
            id: ProjectId(entry.id),
            title: entry.title,
            user: entry.author.username,
        }
    }
}

/// Shapes one front-page listing into projects, applying `offset` and `limit` client-side.
pub fn decode_front_page_listing(
    entries: Vec<FrontPageProject>,
    offset: u32,
    limit: u32,
) -> Vec<Project> {
    entries
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(Project::from)
        .collect()
}

/// Shapes an explore listing into projects.
pub fn decode_explore_listing(entries: Vec<ExploreProject>) -> Vec<Project> {
    entries.into_iter().map(Project::from).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn front_page_document_decodes_and_ignores_unknown_listings() {
        let raw = json!({
            "community_featured_projects": [
                {"id": 10, "title": "Cat Run", "creator": "mia", "thumbnail_url": "//x", "type": "project"},
                {"id": 11, "title": "Dog Jump", "creator": "leo", "type": "project"}
            ],
            "community_most_loved_projects": [
                {"id": 12, "title": "Space", "creator": "ana", "love_count": 99}
            ],
            "community_newest_projects": []
        });

        let page: FrontPage = serde_json::from_value(raw).expect("decode front page");
        let featured = decode_front_page_listing(page.community_featured_projects, 0, 16);
        let loved = decode_front_page_listing(page.community_most_loved_projects, 0, 16);

        assert_eq!(
            featured,
            vec![Project::new(10, "Cat Run", "mia"), Project::new(11, "Dog Jump", "leo")]
        );
        assert_eq!(loved, vec![Project::new(12, "Space", "ana")]);
    }

    #[test]
    fn front_page_listing_applies_offset_and_limit() {
        let entries = (1..=5)
            .map(|id| FrontPageProject {
                id,
                title: format!("p{id}"),
                creator: "u".to_string(),
            })
            .collect::<Vec<_>>();

        let ids = decode_front_page_listing(entries, 1, 2)
            .into_iter()
            .map(|project| project.id.0)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn explore_listing_reads_nested_author_username() {
        let raw = json!([
            {"id": 7, "title": "Tower", "author": {"id": 1, "username": "zoe"}, "stats": {"loves": 3}}
        ]);
        let entries: Vec<ExploreProject> = serde_json::from_value(raw).expect("decode explore");
        assert_eq!(
            decode_explore_listing(entries),
            vec![Project::new(7, "Tower", "zoe")]
        );
    }

    #[test]
    fn front_page_missing_listing_defaults_to_empty() {
        let page: FrontPage = serde_json::from_value(json!({})).expect("decode empty page");
        assert!(page.community_featured_projects.is_empty());
        assert!(page.community_most_loved_projects.is_empty());
    }
}
