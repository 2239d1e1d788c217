//! Shared host-bundle model for browser and native gallery composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, GalleryConfig, NoopExternalUrlService, NoopOrientationService,
    NoopProjectsApi, OrientationService, ProjectsApi,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native build with no-op adapters (tests and tooling).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the gallery runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `gallery_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Project-listing API client.
    pub projects: Rc<dyn ProjectsApi>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Screen orientation query service.
    pub orientation: Rc<dyn OrientationService>,
    /// Remote endpoints and listing limits.
    pub config: GalleryConfig,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of no-op services using the default configuration.
    pub fn headless() -> Self {
        Self {
            projects: Rc::new(NoopProjectsApi),
            external_urls: Rc::new(NoopExternalUrlService),
            orientation: Rc::new(NoopOrientationService),
            config: GalleryConfig::default(),
            host_strategy: HostStrategy::Headless,
        }
    }
}
