//! Smooth scrolling for in-page anchor links.

use crate::core::effect::Effect;

/// Selector for the scroll target of `href`, when it names one.
///
/// A bare `#` and non-fragment hrefs have no target.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Effects for a click on an anchor link.
#[must_use]
pub fn on_click(href: &str) -> Vec<Effect> {
    anchor_target(href).map_or_else(Vec::new, |selector| {
        vec![
            Effect::PreventDefault,
            Effect::ScrollIntoView(selector.to_string()),
        ]
    })
}
