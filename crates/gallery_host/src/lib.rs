//! Typed host-domain contracts and shared models used across the gallery runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for gallery platform services. It exposes the project
//! listing model, the project-listing API contract, external URL and device orientation services,
//! and the endpoint configuration. Concrete browser adapters live in `gallery_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod external_url;
pub mod host;
pub mod orientation;
pub mod projects;

pub use config::GalleryConfig;
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use orientation::{
    DeviceOrientation, FixedOrientationService, NoopOrientationService, OrientationService,
};
pub use projects::response::{
    decode_explore_listing, decode_front_page_listing, ExploreProject, FrontPage, FrontPageProject,
    ProjectAuthor,
};
pub use projects::service::{
    MemoryProjectsApi, NoopProjectsApi, ProjectQuery, ProjectsApi, ProjectsFuture,
};
pub use projects::types::{Project, ProjectId};
