use gallery_host::GalleryConfig;
use gallery_host_web::build_host_services;
use gallery_runtime::{GalleryProvider, GalleryShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Project Gallery" />
        <Meta name="viewport" content="width=device-width, initial-scale=1, viewport-fit=cover" />
        <Meta name="description" content="Browse featured, trending, and tagged community projects." />

        <main class="site-root">
            <GalleryEntry />
        </main>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! {
        <GalleryProvider host_services=build_host_services(GalleryConfig::default())>
            <GalleryShell />
        </GalleryProvider>
    }
}
