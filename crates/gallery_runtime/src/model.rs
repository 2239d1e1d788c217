use gallery_host::{DeviceOrientation, GalleryConfig, Project, ProjectId};

use crate::categories::default_category_labels;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub template_columns: &'static str,
    pub column_gap: &'static str,
}

impl GridLayout {
    pub const TWO_COLUMN: Self = Self {
        template_columns: "auto auto",
        column_gap: "3%",
    };

    pub const ONE_COLUMN: Self = Self {
        template_columns: "auto",
        column_gap: "0",
    };

    pub fn for_orientation(orientation: DeviceOrientation) -> Self {
        match orientation {
            DeviceOrientation::Landscape => Self::TWO_COLUMN,
            DeviceOrientation::Portrait => Self::ONE_COLUMN,
        }
    }

    pub fn column_count(self) -> usize {
        self.template_columns.split_whitespace().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub label: String,
    pub selected: bool,
    /// Cleared for the trailing scroller element, which never receives a click handler.
    pub interactive: bool,
}

/// Render model for one project thumbnail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub user: String,
    pub thumbnail_url: String,
    pub project_url: String,
}

impl ProjectCard {
    pub fn from_project(project: Project, config: &GalleryConfig) -> Self {
        Self {
            thumbnail_url: config.thumbnail_url(project.id),
            project_url: config.project_url(project.id),
            id: project.id,
            title: project.title,
            user: project.user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub config: GalleryConfig,
    pub spinner_visible: bool,
    pub categories: Vec<CategoryOption>,
    pub projects: Vec<ProjectCard>,
    /// `None` until an orientation has been recognized; the stylesheet layout applies meanwhile.
    pub layout: Option<GridLayout>,
    pub orientation: Option<DeviceOrientation>,
}

impl GalleryState {
    /// Builds the initial state with a scroller made of `labels`.
    ///
    /// Every label except the last becomes interactive; nothing is selected yet.
    pub fn new<I, S>(config: GalleryConfig, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(Into::into).collect::<Vec<String>>();
        let interactive_count = labels.len().saturating_sub(1);
        let categories = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| CategoryOption {
                label,
                selected: false,
                interactive: index < interactive_count,
            })
            .collect();

        Self {
            config,
            spinner_visible: false,
            categories,
            projects: Vec::new(),
            layout: None,
            orientation: None,
        }
    }

    pub fn selected_category(&self) -> Option<(usize, &CategoryOption)> {
        self.categories
            .iter()
            .enumerate()
            .find(|(_, option)| option.selected)
    }

    pub fn first_interactive_category(&self) -> Option<usize> {
        self.categories.iter().position(|option| option.interactive)
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(GalleryConfig::default(), default_category_labels())
    }
}
