//! One-shot fade and slide applied when a card first scrolls into view.

use crate::core::effect::Effect;

/// Transition applied once the hidden state has been committed.
pub const REVEAL_TRANSITION: &str = "all 0.5s ease-out";
/// Offset the card slides up from.
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";
/// Resting transform after the reveal.
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Effects for an intersection observer entry.
///
/// Entries that are not intersecting produce nothing, so the card stays
/// observed until it actually enters the viewport.
#[must_use]
pub fn on_intersection(is_intersecting: bool, delay_ms: u32) -> Vec<Effect> {
    if !is_intersecting {
        return Vec::new();
    }
    vec![
        Effect::style("opacity", "0"),
        Effect::style("transform", HIDDEN_TRANSFORM),
        Effect::Defer {
            delay_ms,
            effects: vec![
                Effect::style("transition", REVEAL_TRANSITION),
                Effect::style("opacity", "1"),
                Effect::style("transform", SHOWN_TRANSFORM),
            ],
        },
        Effect::StopObserving,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offscreen_entries_are_ignored() {
        assert!(on_intersection(false, 100).is_empty());
    }

    #[test]
    fn visible_entry_hides_then_reveals_once() {
        let effects = on_intersection(true, 100);
        assert_eq!(effects.len(), 4);
        assert_eq!(effects[0], Effect::style("opacity", "0"));
        assert_eq!(effects[1], Effect::style("transform", "translateY(20px)"));
        let Effect::Defer { delay_ms, effects: later } = &effects[2] else {
            panic!("expected deferred reveal, got {:?}", effects[2]);
        };
        assert_eq!(*delay_ms, 100);
        assert_eq!(later.last(), Some(&Effect::style("transform", "translateY(0)")));
        assert_eq!(effects[3], Effect::StopObserving);
    }
}
