use gallery_host::ProjectId;
use leptos::*;

use crate::{model::ProjectCard, reducer::GalleryAction, runtime_context::use_gallery_runtime};

#[component]
/// The `projects` container: one card per rendered entry, laid out by the orientation grid.
pub fn ProjectGrid() -> impl IntoView {
    let state = use_gallery_runtime().state;
    let layout = create_memo(move |_| state.with(|gallery| gallery.layout));
    let template_columns = move || layout.get().map(|layout| layout.template_columns);
    let column_gap = move || layout.get().map(|layout| layout.column_gap);

    view! {
        <div
            id="projects"
            class="projects"
            style:grid-template-columns=template_columns
            style:grid-column-gap=column_gap
        >
            <For
                each=move || {
                    state.with(|gallery| {
                        gallery.projects.iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                }
                key=|(position, card)| (*position, card.id)
                children=move |(_, card)| view! { <ProjectCardView card=card /> }
            />
        </div>
    }
}

#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let id: ProjectId = card.id;
    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(GalleryAction::OpenProject { id });
    };

    view! {
        <div class="project" on:click=on_click>
            <img class="project__img" src=card.thumbnail_url alt=card.title.clone() />
            <div class="project__title">
                {card.title}
                " by "
                <a href="#">{card.user}</a>
            </div>
            <mat-ripple></mat-ripple>
        </div>
    }
}
