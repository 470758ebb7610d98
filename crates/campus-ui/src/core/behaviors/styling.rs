//! Inline style fixes for form inputs and selects.

use crate::core::effect::Effect;

/// Transition enabled when a hand-drawn input gains focus.
pub const FOCUS_TRANSITION: &str = "all 0.2s ease";

/// Effects for focus on a hand-drawn input.
#[must_use]
pub fn on_input_focus() -> Vec<Effect> {
    vec![Effect::style("transition", FOCUS_TRANSITION)]
}

/// Effects applied to every select when the page loads.
#[must_use]
pub fn on_select_init() -> Vec<Effect> {
    vec![Effect::style("color-scheme", "dark")]
}

/// Effects for focus on a select.
#[must_use]
pub fn on_select_focus() -> Vec<Effect> {
    vec![
        Effect::style("outline", "none"),
        Effect::style("border-color", "var(--accent-green)"),
    ]
}

/// Effects for a change on a select; nothing happens without a selected option.
#[must_use]
pub fn on_select_change(has_selected_option: bool) -> Vec<Effect> {
    if !has_selected_option {
        return Vec::new();
    }
    vec![
        Effect::style("color", "var(--text-primary)"),
        Effect::style("background-color", "transparent"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_fix_forces_dark_scheme_and_accent() {
        assert_eq!(on_select_init(), vec![Effect::style("color-scheme", "dark")]);
        assert!(on_select_focus().contains(&Effect::style("border-color", "var(--accent-green)")));
    }

    #[test]
    fn change_without_selection_is_ignored() {
        assert!(on_select_change(false).is_empty());
        assert_eq!(on_select_change(true).len(), 2);
    }

    #[test]
    fn focus_enables_transition() {
        assert_eq!(on_input_focus(), vec![Effect::style("transition", "all 0.2s ease")]);
    }
}
