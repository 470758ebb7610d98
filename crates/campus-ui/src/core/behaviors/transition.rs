//! Slide animations for entering and leaving a page.

use crate::core::effect::Effect;

/// Facts about a clicked link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkFacts<'a> {
    /// Raw `href` attribute.
    pub href: &'a str,
    /// Raw `target` attribute.
    pub target: Option<&'a str>,
}

/// Whether following the link stays on this site in the same tab.
#[must_use]
pub fn is_internal_navigation(link: LinkFacts<'_>) -> bool {
    const SKIPPED_PREFIXES: [&str; 5] = ["#", "javascript:", "http", "mailto:", "tel:"];
    !link.href.is_empty()
        && link.target != Some("_blank")
        && !SKIPPED_PREFIXES
            .iter()
            .any(|prefix| link.href.starts_with(prefix))
}

/// Effects for the content area when the page loads.
#[must_use]
pub fn on_enter(enter_animation: &str) -> Vec<Effect> {
    vec![Effect::style("animation", enter_animation)]
}

/// Effects for the content area when a link is clicked.
#[must_use]
pub fn on_link_click(link: LinkFacts<'_>, exit_animation: &str) -> Vec<Effect> {
    if is_internal_navigation(link) {
        vec![Effect::style("animation", exit_animation)]
    } else {
        Vec::new()
    }
}
