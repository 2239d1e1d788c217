//! Gallery UI composition: scroller, spinner, project grid, and the orientation listener.

mod category_scroller;
mod orientation;
mod project_grid;
mod spinner;

use leptos::*;

pub use self::{category_scroller::CategoryScroller, project_grid::ProjectGrid, spinner::Spinner};

#[component]
/// Full gallery surface; must be rendered inside [`crate::GalleryProvider`].
pub fn GalleryShell() -> impl IntoView {
    orientation::install_orientation_listener(crate::use_gallery_runtime());

    view! {
        <section class="gallery">
            <CategoryScroller />
            <Spinner />
            <ProjectGrid />
        </section>
    }
}
