use std::rc::Rc;

use gallery_host::{
    ExternalUrlFuture, ExternalUrlService, GalleryConfig, HostServices, HostStrategy,
    NoopExternalUrlService, NoopOrientationService, NoopProjectsApi, OrientationService, Project,
    ProjectsApi, ProjectsFuture,
};

use crate::{WebExternalUrlService, WebOrientationService, WebProjectsApi};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete listing backend behind [`ProjectsApi`].
#[derive(Debug, Clone)]
pub enum ProjectsApiAdapter {
    /// `window.fetch`-backed listing client.
    Browser(WebProjectsApi),
    /// Empty listings for headless builds.
    Headless(NoopProjectsApi),
}

impl ProjectsApi for ProjectsApiAdapter {
    fn featured<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Browser(api) => api.featured(offset),
            Self::Headless(api) => api.featured(offset),
        }
    }

    fn top_loved<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Browser(api) => api.top_loved(offset),
            Self::Headless(api) => api.top_loved(offset),
        }
    }

    fn trending<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Browser(api) => api.trending(offset),
            Self::Headless(api) => api.trending(offset),
        }
    }

    fn recent<'a>(&'a self, offset: u32) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Browser(api) => api.recent(offset),
            Self::Headless(api) => api.recent(offset),
        }
    }

    fn tagged<'a>(
        &'a self,
        tag: &'a str,
        offset: u32,
    ) -> ProjectsFuture<'a, Result<Vec<Project>, String>> {
        match self {
            Self::Browser(api) => api.tagged(tag, offset),
            Self::Headless(api) => api.tagged(tag, offset),
        }
    }
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// `window.open`-backed adapter.
    Browser(WebExternalUrlService),
    /// No-op adapter for headless builds.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Headless(service) => service.open_url(url),
        }
    }
}

/// Adapter enum that erases the concrete orientation backend behind [`OrientationService`].
#[derive(Debug, Clone, Copy)]
pub enum OrientationServiceAdapter {
    /// Screen Orientation API adapter.
    Browser(WebOrientationService),
    /// Adapter reporting no orientation.
    Headless(NoopOrientationService),
}

impl OrientationService for OrientationServiceAdapter {
    fn orientation_type(&self) -> Option<String> {
        match self {
            Self::Browser(service) => service.orientation_type(),
            Self::Headless(service) => service.orientation_type(),
        }
    }
}

/// Builds the listing client for the selected host strategy.
pub fn projects_api(config: &GalleryConfig) -> ProjectsApiAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ProjectsApiAdapter::Browser(WebProjectsApi::new(config.clone())),
        HostStrategy::Headless => ProjectsApiAdapter::Headless(NoopProjectsApi),
    }
}

/// Builds the external URL service for the selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Headless => ExternalUrlServiceAdapter::Headless(NoopExternalUrlService),
    }
}

/// Builds the orientation service for the selected host strategy.
pub fn orientation_service() -> OrientationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => OrientationServiceAdapter::Browser(WebOrientationService),
        HostStrategy::Headless => OrientationServiceAdapter::Headless(NoopOrientationService),
    }
}

/// Assembles the host service bundle injected into the gallery runtime.
pub fn build_host_services(config: GalleryConfig) -> HostServices {
    HostServices {
        projects: Rc::new(projects_api(&config)),
        external_urls: Rc::new(external_url_service()),
        orientation: Rc::new(orientation_service()),
        config,
        host_strategy: selected_host_strategy(),
    }
}
