use leptos::*;

use crate::runtime_context::use_gallery_runtime;

#[component]
/// Material-style loading indicator bound to the runtime spinner flag.
pub fn Spinner() -> impl IntoView {
    let state = use_gallery_runtime().state;
    let display = move || {
        if state.with(|gallery| gallery.spinner_visible) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class="spinner" role="progressbar" aria-label="Loading projects" style:display=display>
            <svg class="spinner__circle" viewBox="0 0 50 50">
                <circle class="spinner__path" cx="25" cy="25" r="20" fill="none" stroke-width="5" />
            </svg>
        </div>
    }
}
