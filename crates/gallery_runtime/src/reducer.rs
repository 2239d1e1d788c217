//! Reducer actions, side-effect intents, and transition logic for the gallery runtime.

use gallery_host::{DeviceOrientation, Project, ProjectId, ProjectQuery};
use thiserror::Error;

use crate::{
    categories::{category_action, CategoryAction},
    model::{GalleryState, GridLayout, ProjectCard},
};

/// Listings are always requested from the first entry.
pub const LISTING_OFFSET: u32 = 0;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_gallery`] to mutate [`GalleryState`].
pub enum GalleryAction {
    /// Select the first category and apply the current orientation.
    Boot,
    /// A scroller option was clicked.
    SelectCategory {
        /// Position of the option in the scroller.
        index: usize,
    },
    /// Show the loading spinner.
    ShowSpinner,
    /// Hide the loading spinner.
    HideSpinner,
    /// Remove every rendered project card.
    ClearProjects,
    /// Append cards for `projects` and hide the spinner.
    RenderProjects {
        /// Listing entries in display order.
        projects: Vec<Project>,
    },
    /// A listing request was rejected.
    FetchFailed {
        /// Query that failed.
        query: ProjectQuery,
        /// Host error message.
        error: String,
    },
    /// A project card was clicked.
    OpenProject {
        /// Clicked project.
        id: ProjectId,
    },
    /// The host reported a new orientation type string.
    OrientationChanged {
        /// Raw orientation type, for example `landscape-primary`.
        orientation_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_gallery`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Issue a listing request and dispatch its outcome.
    FetchProjects {
        /// Listing to request.
        query: ProjectQuery,
        /// First entry to request.
        offset: u32,
    },
    /// Open a URL in a new browsing context.
    OpenExternalUrl(String),
    /// Query the host orientation and dispatch [`GalleryAction::OrientationChanged`].
    ReadOrientation,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference a missing or inert scroller option.
pub enum ReducerError {
    /// No scroller option exists at the index.
    #[error("category {0} not found")]
    CategoryNotFound(usize),
    /// The option at the index is the trailing scroller element.
    #[error("category {0} is not selectable")]
    CategoryNotInteractive(usize),
}

/// Applies a [`GalleryAction`] to the gallery state and collects resulting side effects.
///
/// # Errors
///
/// Returns a [`ReducerError`] when a selection references a missing or non-interactive option.
pub fn reduce_gallery(
    state: &mut GalleryState,
    action: GalleryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        GalleryAction::Boot => {
            effects.push(RuntimeEffect::ReadOrientation);
            if state.selected_category().is_none() {
                if let Some(index) = state.first_interactive_category() {
                    effects.extend(select_category(state, index)?);
                }
            }
        }
        GalleryAction::SelectCategory { index } => {
            effects.extend(select_category(state, index)?);
        }
        GalleryAction::ShowSpinner => state.spinner_visible = true,
        GalleryAction::HideSpinner => state.spinner_visible = false,
        GalleryAction::ClearProjects => state.projects.clear(),
        GalleryAction::RenderProjects { projects } => {
            let config = &state.config;
            let cards = projects
                .into_iter()
                .map(|project| ProjectCard::from_project(project, config))
                .collect::<Vec<_>>();
            state.projects.extend(cards);
            state.spinner_visible = false;
        }
        GalleryAction::FetchFailed { .. } => state.spinner_visible = false,
        GalleryAction::OpenProject { id } => {
            effects.push(RuntimeEffect::OpenExternalUrl(state.config.project_url(id)));
        }
        GalleryAction::OrientationChanged { orientation_type } => {
            if let Some(orientation) = DeviceOrientation::from_type(&orientation_type) {
                state.orientation = Some(orientation);
                state.layout = Some(GridLayout::for_orientation(orientation));
            }
        }
    }
    Ok(effects)
}

fn select_category(
    state: &mut GalleryState,
    index: usize,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let option = state
        .categories
        .get(index)
        .ok_or(ReducerError::CategoryNotFound(index))?;
    if !option.interactive {
        return Err(ReducerError::CategoryNotInteractive(index));
    }
    if option.selected {
        return Ok(Vec::new());
    }
    let action = category_action(&option.label);

    for (position, option) in state.categories.iter_mut().enumerate() {
        option.selected = position == index;
    }
    state.projects.clear();
    state.spinner_visible = true;

    match action {
        CategoryAction::Fetch(query) => Ok(vec![RuntimeEffect::FetchProjects {
            query,
            offset: LISTING_OFFSET,
        }]),
        CategoryAction::OpenMessages => {
            state.spinner_visible = false;
            Ok(vec![RuntimeEffect::OpenExternalUrl(
                state.config.messages_url.clone(),
            )])
        }
    }
}

#[cfg(test)]
mod tests {
    use gallery_host::GalleryConfig;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::categories::default_category_labels;

    fn index_of(state: &GalleryState, label: &str) -> usize {
        state
            .categories
            .iter()
            .position(|option| option.label == label)
            .expect("category label")
    }

    fn select(state: &mut GalleryState, label: &str) -> Vec<RuntimeEffect> {
        let index = index_of(state, label);
        reduce_gallery(state, GalleryAction::SelectCategory { index }).expect("select category")
    }

    fn selected_labels(state: &GalleryState) -> Vec<String> {
        state
            .categories
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.label.clone())
            .collect()
    }

    #[test]
    fn rendering_zero_projects_leaves_grid_empty_and_hides_spinner() {
        let mut state = GalleryState::default();
        reduce_gallery(&mut state, GalleryAction::ShowSpinner).expect("show");

        let effects = reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: Vec::new(),
            },
        )
        .expect("render");

        assert!(effects.is_empty());
        assert!(state.projects.is_empty());
        assert!(!state.spinner_visible);
    }

    #[test]
    fn rendering_projects_appends_one_card_per_entry() {
        let mut state = GalleryState::default();
        let projects = vec![
            Project::new(1, "Alpha", "ann"),
            Project::new(2, "Beta", "ben"),
            Project::new(3, "Gamma", "cy"),
        ];

        reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: projects[..2].to_vec(),
            },
        )
        .expect("render first batch");
        reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: projects[2..].to_vec(),
            },
        )
        .expect("render second batch");

        let thumbnails = state
            .projects
            .iter()
            .map(|card| card.thumbnail_url.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            thumbnails,
            vec![
                "https://cdn2.scratch.mit.edu/get_image/project/1_480x360.png",
                "https://cdn2.scratch.mit.edu/get_image/project/2_480x360.png",
                "https://cdn2.scratch.mit.edu/get_image/project/3_480x360.png",
            ]
        );
    }

    #[test]
    fn selecting_category_deselects_all_others() {
        let mut state = GalleryState::default();

        select(&mut state, "Featured");
        select(&mut state, "Games");
        assert_eq!(selected_labels(&state), vec!["Games".to_string()]);

        select(&mut state, "Recent");
        assert_eq!(selected_labels(&state), vec!["Recent".to_string()]);
    }

    #[test]
    fn selecting_fixed_category_clears_grid_shows_spinner_and_fetches() {
        let mut state = GalleryState::default();
        reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: vec![Project::new(9, "Old", "x")],
            },
        )
        .expect("render");

        let effects = select(&mut state, "Top Loved");

        assert!(state.projects.is_empty());
        assert!(state.spinner_visible);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchProjects {
                query: ProjectQuery::TopLoved,
                offset: 0,
            }]
        );
    }

    #[test]
    fn selecting_tag_category_fetches_lowercased_label() {
        let mut state = GalleryState::default();
        let effects = select(&mut state, "Music");
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchProjects {
                query: ProjectQuery::Tagged("music".to_string()),
                offset: 0,
            }]
        );
    }

    #[test]
    fn messages_opens_messages_page_without_fetching() {
        let mut state = GalleryState::default();
        let effects = select(&mut state, "Messages");

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://scratch.mit.edu/messages".to_string()
            )]
        );
        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, RuntimeEffect::FetchProjects { .. })));
        assert!(!state.spinner_visible);
        assert_eq!(selected_labels(&state), vec!["Messages".to_string()]);
    }

    #[test]
    fn reselecting_selected_category_is_a_noop() {
        let mut state = GalleryState::default();
        select(&mut state, "Trending");
        reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: vec![Project::new(5, "Kept", "k")],
            },
        )
        .expect("render");
        let before = state.clone();

        let effects = select(&mut state, "Trending");

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn trailing_scroller_element_is_not_selectable() {
        let mut state = GalleryState::default();
        let last = state.categories.len() - 1;

        let err = reduce_gallery(&mut state, GalleryAction::SelectCategory { index: last })
            .expect_err("trailing element");
        assert_eq!(err, ReducerError::CategoryNotInteractive(last));

        let err = reduce_gallery(&mut state, GalleryAction::SelectCategory { index: last + 1 })
            .expect_err("out of range");
        assert_eq!(err, ReducerError::CategoryNotFound(last + 1));
        assert!(state.selected_category().is_none());
    }

    #[test]
    fn boot_selects_first_category_and_reads_orientation() {
        let mut state = GalleryState::default();

        let effects = reduce_gallery(&mut state, GalleryAction::Boot).expect("boot");

        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ReadOrientation,
                RuntimeEffect::FetchProjects {
                    query: ProjectQuery::Featured,
                    offset: 0,
                },
            ]
        );
        assert_eq!(selected_labels(&state), vec!["Featured".to_string()]);
        assert!(state.spinner_visible);
    }

    #[test]
    fn boot_keeps_existing_selection() {
        let mut state = GalleryState::default();
        select(&mut state, "Art");

        let effects = reduce_gallery(&mut state, GalleryAction::Boot).expect("boot");

        assert_eq!(effects, vec![RuntimeEffect::ReadOrientation]);
        assert_eq!(selected_labels(&state), vec!["Art".to_string()]);
    }

    #[test]
    fn orientation_changes_switch_grid_columns() {
        let mut state = GalleryState::default();

        reduce_gallery(
            &mut state,
            GalleryAction::OrientationChanged {
                orientation_type: "landscape-primary".to_string(),
            },
        )
        .expect("landscape");
        assert_eq!(state.layout, Some(GridLayout::TWO_COLUMN));
        assert_eq!(state.layout.map(GridLayout::column_count), Some(2));

        reduce_gallery(
            &mut state,
            GalleryAction::OrientationChanged {
                orientation_type: "portrait-primary".to_string(),
            },
        )
        .expect("portrait");
        assert_eq!(state.layout, Some(GridLayout::ONE_COLUMN));
        assert_eq!(state.orientation, Some(DeviceOrientation::Portrait));
    }

    #[test]
    fn unknown_orientation_leaves_layout_unchanged() {
        let mut state = GalleryState::default();
        reduce_gallery(
            &mut state,
            GalleryAction::OrientationChanged {
                orientation_type: "landscape-secondary".to_string(),
            },
        )
        .expect("landscape");

        reduce_gallery(
            &mut state,
            GalleryAction::OrientationChanged {
                orientation_type: "sideways".to_string(),
            },
        )
        .expect("unknown");

        assert_eq!(state.layout, Some(GridLayout::TWO_COLUMN));
        assert_eq!(state.orientation, Some(DeviceOrientation::Landscape));
    }

    #[test]
    fn fetch_failure_hides_spinner_and_keeps_cards() {
        let mut state = GalleryState::default();
        select(&mut state, "Stories");

        reduce_gallery(
            &mut state,
            GalleryAction::FetchFailed {
                query: ProjectQuery::Tagged("stories".to_string()),
                error: "offline".to_string(),
            },
        )
        .expect("fetch failed");

        assert!(!state.spinner_visible);
        assert!(state.projects.is_empty());
    }

    #[test]
    fn clicking_card_opens_project_page() {
        let config = GalleryConfig {
            project_base: "https://projects.test".to_string(),
            ..GalleryConfig::default()
        };
        let mut state = GalleryState::new(config, default_category_labels());

        let effects =
            reduce_gallery(&mut state, GalleryAction::OpenProject { id: ProjectId(77) })
                .expect("open project");

        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://projects.test/77".to_string()
            )]
        );
    }

    #[test]
    fn spinner_toggles_are_idempotent() {
        let mut state = GalleryState::default();
        reduce_gallery(&mut state, GalleryAction::ShowSpinner).expect("show");
        reduce_gallery(&mut state, GalleryAction::ShowSpinner).expect("show again");
        assert!(state.spinner_visible);
        reduce_gallery(&mut state, GalleryAction::HideSpinner).expect("hide");
        reduce_gallery(&mut state, GalleryAction::HideSpinner).expect("hide again");
        assert!(!state.spinner_visible);
    }

    #[test]
    fn clear_projects_empties_grid() {
        let mut state = GalleryState::default();
        reduce_gallery(
            &mut state,
            GalleryAction::RenderProjects {
                projects: vec![Project::new(1, "A", "a")],
            },
        )
        .expect("render");
        reduce_gallery(&mut state, GalleryAction::ClearProjects).expect("clear");
        assert!(state.projects.is_empty());
    }
}
