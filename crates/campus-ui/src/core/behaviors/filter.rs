//! Search-as-you-type filtering of facility checkboxes.

use crate::core::effect::Effect;

/// Display value for a facility that matches the query.
pub const VISIBLE_DISPLAY: &str = "inline-block";
/// Display value for a facility hidden by the query.
pub const HIDDEN_DISPLAY: &str = "none";

/// Case-insensitive substring test. An empty query matches everything.
#[must_use]
pub fn matches_query(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility of each item, in order, for `query`.
#[must_use]
pub fn visibility<I, S>(items: I, query: &str) -> Vec<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|text| matches_query(text.as_ref(), query))
        .collect()
}

/// Effects showing or hiding one facility item.
#[must_use]
pub fn display_effects(visible: bool) -> Vec<Effect> {
    let display = if visible {
        VISIBLE_DISPLAY
    } else {
        HIDDEN_DISPLAY
    };
    vec![Effect::style("display", display)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACILITIES: [&str; 4] = ["Air Conditioning", "Canteen", "Library", "Smart Classes"];

    #[test]
    fn only_matching_items_stay_visible() {
        assert_eq!(
            visibility(FACILITIES, "CaN"),
            vec![false, true, false, false]
        );
        assert_eq!(visibility(FACILITIES, "a"), vec![true, true, true, true]);
        assert_eq!(visibility(FACILITIES, "pool"), vec![false; 4]);
    }

    #[test]
    fn empty_query_shows_everything() {
        assert_eq!(visibility(FACILITIES, ""), vec![true; 4]);
        assert_eq!(
            display_effects(true),
            vec![Effect::style("display", "inline-block")]
        );
    }

    #[test]
    fn non_matching_item_is_hidden() {
        assert!(!matches_query("Library", "lab"));
        assert_eq!(
            visibility(vec!["Library".to_string()], "lab"),
            vec![false]
        );
        assert_eq!(display_effects(false), vec![Effect::style("display", "none")]);
    }
}
