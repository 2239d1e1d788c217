//! Browser project-listing API client backed by `window.fetch`.

use gallery_host::{
    decode_explore_listing, decode_front_page_listing, ExploreProject, FrontPage, GalleryConfig,
    Project, ProjectsApi, ProjectsFuture,
};

use crate::bridge;

const TRENDING_MODE: &str = "trending";
const RECENT_MODE: &str = "recent";
const ANY_TERM: &str = "*";

#[derive(Debug, Clone, Default)]
/// Listing client for the public project API.
pub struct WebProjectsApi {
    config: GalleryConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrontPageListing {
    Featured,
    MostLoved,
}

impl WebProjectsApi {
    /// Creates a client for the endpoints in `config`.
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    /// Returns the explore endpoint for `mode` and the unencoded search `term`.
    pub fn explore_listing_url(&self, mode: &str, term: &str, offset: u32) -> String {
        let encoded = url::form_urlencoded::byte_serialize(term.as_bytes()).collect::<String>();
        self.config.explore_url(mode, &encoded, offset)
    }

    async fn front_page(
        &self,
        listing: FrontPageListing,
        offset: u32,
    ) -> Result<Vec<Project>, String> {
        let page: FrontPage = bridge::fetch_json(&self.config.front_page_url()).await?;
        let entries = match listing {
            FrontPageListing::Featured => page.community_featured_projects,
            FrontPageListing::MostLoved => page.community_most_loved_projects,
        };
        Ok(decode_front_page_listing(
            entries,
            offset,
            self.config.page_limit,
        ))
    }

    async fn explore(&self, mode: &str, term: &str, offset: u32) -> Result<Vec<Project>, String> {
        let url = self.explore_listing_url(mode, term, offset);
        let entries: Vec<ExploreProject> = bridge::fetch_json(&url).await?;
        Ok(decode_explore_listing(entries))
    }
}

impl ProjectsApi for WebProjectsApi {
    fn featured<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(self.front_page(FrontPageListing::Featured, offset))
    }

    fn top_loved<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(self.front_page(FrontPageListing::MostLoved, offset))
    }

    fn trending<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(self.explore(TRENDING_MODE, ANY_TERM, offset))
    }

    fn recent<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(self.explore(RECENT_MODE, ANY_TERM, offset))
    }

    fn tagged<'a>(
        &'a self,
        tag: &'a str,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        Box::pin(self.explore(TRENDING_MODE, tag, offset))
    }
}
