//! Pure rules for the page-level cosmetic behaviors.
//!
//! # Design
//! - Each rule maps the facts of one DOM event to a list of [`Effect`]s.
//! - Rules share no state; the only session state is [`touch::TapZoomGuard`].
//!
//! [`Effect`]: crate::core::effect::Effect

pub mod anchor;
pub mod filter;
pub mod reveal;
pub mod search;
pub mod styling;
pub mod touch;
pub mod transition;

/// Behaviors wired by the page controller, in wiring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorKind {
    /// Focus transition on hand-drawn inputs.
    InputFocus,
    /// One-shot reveal of cards entering the viewport.
    ScrollReveal,
    /// Facility checkbox filtering.
    FacilityFilter,
    /// Enter-to-search on the quick search box.
    QuickSearch,
    /// Smooth scrolling for in-page anchors.
    SmoothScroll,
    /// Opacity feedback on touch targets.
    TouchFeedback,
    /// Double-tap zoom suppression.
    TapZoom,
    /// Enter and exit slide animations.
    SlideTransition,
    /// Dark color-scheme fix for selects.
    SelectFix,
}

impl BehaviorKind {
    /// Every behavior, in wiring order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::InputFocus,
            Self::ScrollReveal,
            Self::FacilityFilter,
            Self::QuickSearch,
            Self::SmoothScroll,
            Self::TouchFeedback,
            Self::TapZoom,
            Self::SlideTransition,
            Self::SelectFix,
        ]
    }

    /// Stable name used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputFocus => "input_focus",
            Self::ScrollReveal => "scroll_reveal",
            Self::FacilityFilter => "facility_filter",
            Self::QuickSearch => "quick_search",
            Self::SmoothScroll => "smooth_scroll",
            Self::TouchFeedback => "touch_feedback",
            Self::TapZoom => "tap_zoom",
            Self::SlideTransition => "slide_transition",
            Self::SelectFix => "select_fix",
        }
    }
}
