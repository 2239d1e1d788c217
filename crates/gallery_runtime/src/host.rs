//! Host-side runtime helpers for executing reducer effects against injected host services.

use std::rc::Rc;

use gallery_host::{
    ExternalUrlService, HostServices, OrientationService, ProjectQuery, ProjectsApi,
};
use leptos::{logging, spawn_local, Callable, Callback};

use crate::reducer::{GalleryAction, RuntimeEffect};

#[derive(Clone)]
/// Host service bundle for gallery runtime side effects.
pub struct GalleryHostContext {
    projects: Rc<dyn ProjectsApi>,
    external_urls: Rc<dyn ExternalUrlService>,
    orientation: Rc<dyn OrientationService>,
    host_strategy_name: &'static str,
}

impl GalleryHostContext {
    /// Wraps the services selected by the entry layer.
    pub fn new(services: HostServices) -> Self {
        Self {
            projects: services.projects,
            external_urls: services.external_urls,
            orientation: services.orientation,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured project-listing client.
    pub fn projects_api(&self) -> Rc<dyn ProjectsApi> {
        self.projects.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Runs one listing request and converts its outcome into the follow-up action.
    pub async fn load_projects(&self, query: ProjectQuery, offset: u32) -> GalleryAction {
        let listing = query.run(self.projects.as_ref(), offset).await;
        match listing {
            Ok(projects) => GalleryAction::RenderProjects { projects },
            Err(error) => {
                logging::warn!("project listing {query:?} failed: {error}");
                GalleryAction::FetchFailed { query, error }
            }
        }
    }

    /// Returns the action reporting the current orientation, if the host exposes one.
    pub fn orientation_action(&self) -> Option<GalleryAction> {
        self.orientation
            .orientation_type()
            .map(|orientation_type| GalleryAction::OrientationChanged { orientation_type })
    }

    /// Opens `url` in a new browsing context, logging failures.
    pub async fn open_external_url(&self, url: &str) {
        if let Err(err) = self.external_urls.open_url(url).await {
            logging::warn!("open external url failed for `{url}`: {err}");
        }
    }

    /// Performs one [`RuntimeEffect`] and returns the follow-up action it produces, if any.
    pub async fn execute_runtime_effect(&self, effect: RuntimeEffect) -> Option<GalleryAction> {
        match effect {
            RuntimeEffect::FetchProjects { query, offset } => {
                Some(self.load_projects(query, offset).await)
            }
            RuntimeEffect::OpenExternalUrl(url) => {
                self.open_external_url(&url).await;
                None
            }
            RuntimeEffect::ReadOrientation => self.orientation_action(),
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, dispatch: Callback<GalleryAction>, effect: RuntimeEffect) {
        if let RuntimeEffect::ReadOrientation = effect {
            if let Some(action) = self.orientation_action() {
                dispatch.call(action);
            }
            return;
        }

        let host = self.clone();
        spawn_local(async move {
            if let Some(action) = host.execute_runtime_effect(effect).await {
                dispatch.call(action);
            }
        });
    }
}
