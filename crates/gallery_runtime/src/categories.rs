//! Category scroller options and the label lookup table that maps a label to its action.

use gallery_host::ProjectQuery;

/// Labels of the scroller options shown by default, in display order.
pub const DEFAULT_CATEGORY_LABELS: [&str; 11] = [
    "Featured",
    "Top Loved",
    "Trending",
    "Recent",
    "Messages",
    "Animations",
    "Art",
    "Games",
    "Music",
    "Stories",
    "Tutorials",
];

/// Label of the trailing, non-interactive scroller element.
pub const SCROLLER_END_LABEL: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
/// What selecting a category does.
pub enum CategoryAction {
    /// Clear the gallery and fetch a listing.
    Fetch(ProjectQuery),
    /// Open the messages page instead of fetching.
    OpenMessages,
}

const CATEGORY_TABLE: [(&str, CategoryAction); 5] = [
    ("Featured", CategoryAction::Fetch(ProjectQuery::Featured)),
    ("Top Loved", CategoryAction::Fetch(ProjectQuery::TopLoved)),
    ("Trending", CategoryAction::Fetch(ProjectQuery::Trending)),
    ("Recent", CategoryAction::Fetch(ProjectQuery::Recent)),
    ("Messages", CategoryAction::OpenMessages),
];

/// Returns the action bound to a scroller label.
///
/// Labels outside the fixed table are treated as tags and looked up in lowercase.
pub fn category_action(label: &str) -> CategoryAction {
    let label = label.trim();
    CATEGORY_TABLE
        .iter()
        .find(|(fixed, _)| *fixed == label)
        .map(|(_, action)| action.clone())
        .unwrap_or_else(|| CategoryAction::Fetch(ProjectQuery::Tagged(label.to_lowercase())))
}

/// Returns the default scroller labels followed by the trailing end element.
pub fn default_category_labels() -> Vec<&'static str> {
    DEFAULT_CATEGORY_LABELS
        .into_iter()
        .chain(std::iter::once(SCROLLER_END_LABEL))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_labels_map_to_their_feeds() {
        assert_eq!(
            category_action("Featured"),
            CategoryAction::Fetch(ProjectQuery::Featured)
        );
        assert_eq!(
            category_action("Top Loved"),
            CategoryAction::Fetch(ProjectQuery::TopLoved)
        );
        assert_eq!(
            category_action("Trending"),
            CategoryAction::Fetch(ProjectQuery::Trending)
        );
        assert_eq!(
            category_action("Recent"),
            CategoryAction::Fetch(ProjectQuery::Recent)
        );
        assert_eq!(category_action("Messages"), CategoryAction::OpenMessages);
    }

    #[test]
    fn other_labels_become_lowercase_tag_lookups() {
        assert_eq!(
            category_action(" Animations "),
            CategoryAction::Fetch(ProjectQuery::Tagged("animations".to_string()))
        );
        assert_eq!(
            category_action("featured"),
            CategoryAction::Fetch(ProjectQuery::Tagged("featured".to_string()))
        );
    }

    #[test]
    fn default_labels_end_with_scroller_end_element() {
        let labels = default_category_labels();
        assert_eq!(labels.len(), DEFAULT_CATEGORY_LABELS.len() + 1);
        assert_eq!(labels.last().copied(), Some(SCROLLER_END_LABEL));
    }
}
