use leptos::*;

use crate::{reducer::GalleryAction, runtime_context::use_gallery_runtime};

const SELECTED_CLASS: &str = "scroller__link scroller__link--selected";
const UNSELECTED_CLASS: &str = "scroller__link scroller__link--unselected";

#[component]
/// Horizontal category filter; every option but the trailing element dispatches a selection.
pub fn CategoryScroller() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;

    view! {
        <nav class="scroller" aria-label="Project categories">
            <For
                each=move || {
                    state.with(|gallery| {
                        gallery
                            .categories
                            .iter()
                            .enumerate()
                            .map(|(index, option)| (index, option.label.clone(), option.interactive))
                            .collect::<Vec<_>>()
                    })
                }
                key=|(index, label, _)| (*index, label.clone())
                children=move |(index, label, interactive)| {
                    if !interactive {
                        return view! { <span class="scroller__end" aria-hidden="true"></span> }
                            .into_view();
                    }

                    let selected = move || {
                        state.with(|gallery| {
                            gallery
                                .categories
                                .get(index)
                                .is_some_and(|option| option.selected)
                        })
                    };
                    let on_click = move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        runtime.dispatch_action(GalleryAction::SelectCategory { index });
                    };

                    view! {
                        <a
                            href="#"
                            class=move || if selected() { SELECTED_CLASS } else { UNSELECTED_CLASS }
                            aria-pressed=move || selected().to_string()
                            on:click=on_click
                        >
                            {label}
                        </a>
                    }
                    .into_view()
                }
            />
        </nav>
    }
}
