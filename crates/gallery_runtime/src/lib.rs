//! Gallery runtime: reactive state, category dispatch, host effects, and the Leptos views that
//! render the project gallery.

pub mod categories;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;

pub use categories::{category_action, default_category_labels, CategoryAction};
pub use components::{CategoryScroller, GalleryShell, ProjectGrid, Spinner};
pub use host::GalleryHostContext;
pub use model::*;
pub use reducer::{reduce_gallery, GalleryAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};
