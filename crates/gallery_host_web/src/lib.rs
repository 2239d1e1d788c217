//! Browser (`wasm32`) implementations of [`gallery_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the project-listing API client,
//! external URL opening, and screen orientation queries. Browser calls go through `bridge`, which
//! routes to the wasm interop layer or to a native fallback shim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod external_url;
pub mod orientation;
pub mod projects;

pub use adapters::{
    build_host_services, external_url_service, host_strategy_name, orientation_service,
    projects_api, selected_host_strategy, ExternalUrlServiceAdapter, OrientationServiceAdapter,
    ProjectsApiAdapter,
};
pub use external_url::WebExternalUrlService;
pub use orientation::WebOrientationService;
pub use projects::WebProjectsApi;
