//! Page enhancement configuration.
//!
//! # Design
//! - Defaults reproduce the markup contract of the site templates.
//! - Pages may override any field through an embedded JSON document; missing
//!   fields keep their defaults.
//! - Validation runs after parsing so a bad override never reaches the DOM layer.

use crate::core::error::EnhanceError;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "campus-ui-config";

/// Top-level configuration for widget synthesis and page behaviors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceConfig {
    /// Native controls to synthesize.
    pub widgets: WidgetConfig,
    /// Scroll reveal animation.
    pub reveal: RevealConfig,
    /// Facility filter and quick search.
    pub search: SearchConfig,
    /// Touch feedback and double-tap suppression.
    pub touch: TouchConfig,
    /// Page slide transitions.
    pub transitions: TransitionConfig,
    /// Inputs receiving a focus transition.
    pub focus_selector: String,
    /// In-page anchors receiving smooth scrolling.
    pub anchor_selector: String,
    /// Selects receiving the dark color-scheme fix.
    pub select_fix_selector: String,
}

/// Selectors for native controls replaced by synthetic widgets.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Selects wrapped in a custom dropdown.
    pub dropdown_selector: String,
    /// Radios wrapped in a custom indicator.
    pub radio_selector: String,
}

/// Scroll reveal tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Cards animated on first viewport entry.
    pub selector: String,
    /// Intersection ratio that counts as visible.
    pub threshold: f64,
    /// Observer root margin in CSS shorthand.
    pub root_margin: String,
    /// Delay between hiding and starting the transition.
    pub delay_ms: u32,
}

/// Facility filter and quick search wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Id of the facility filter text box.
    pub facility_input_id: String,
    /// Items shown or hidden by the facility filter.
    pub facility_item_selector: String,
    /// Id of the quick search box.
    pub quick_search_id: String,
    /// Path of the search results page.
    pub results_path: String,
    /// Query parameter carrying the search term.
    pub query_param: String,
}

/// Touch feedback tuning.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TouchConfig {
    /// Elements dimmed while pressed.
    pub selector: String,
    /// Opacity applied on touchstart.
    pub pressed_opacity: String,
    /// Delay before restoring opacity after touchend.
    pub release_delay_ms: u32,
    /// Two touchends closer than this are treated as a double tap.
    pub double_tap_window_ms: u32,
}

/// Page slide transition wiring.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Element animated on enter and exit.
    pub content_selector: String,
    /// Links that may trigger the exit animation.
    pub link_selector: String,
    /// Animation shorthand applied on load.
    pub enter_animation: String,
    /// Animation shorthand applied before navigating away.
    pub exit_animation: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            widgets: WidgetConfig::default(),
            reveal: RevealConfig::default(),
            search: SearchConfig::default(),
            touch: TouchConfig::default(),
            transitions: TransitionConfig::default(),
            focus_selector: ".hand-drawn-input, .hand-drawn-select".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            select_fix_selector: ".form-field-select, .form-select".to_string(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            dropdown_selector: "select.form-select".to_string(),
            radio_selector: "input[type=\"radio\"]".to_string(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".school-card, .curriculum-card".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            delay_ms: 100,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            facility_input_id: "facility-search".to_string(),
            facility_item_selector: ".facility-checkbox".to_string(),
            quick_search_id: "quick-search".to_string(),
            results_path: "/search/".to_string(),
            query_param: "name".to_string(),
        }
    }
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            selector: ".school-card, .hand-drawn-button, .nav-item".to_string(),
            pressed_opacity: "0.7".to_string(),
            release_delay_ms: 150,
            double_tap_window_ms: 300,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            content_selector: ".content-area".to_string(),
            link_selector: "a[href]:not([href^=\"#\"]):not([href^=\"javascript:\"]):not([target=\"_blank\"])"
                .to_string(),
            enter_animation: "slideInRight 300ms ease-out".to_string(),
            exit_animation: "slideOutLeft 200ms ease-in".to_string(),
        }
    }
}

impl EnhanceConfig {
    /// Parse a JSON override document and validate the merged result.
    ///
    /// # Errors
    /// Returns [`EnhanceError::ConfigParse`] for malformed JSON or unknown
    /// fields, and [`EnhanceError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| EnhanceError::ConfigParse {
            detail: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and required selectors.
    ///
    /// # Errors
    /// Returns [`EnhanceError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(invalid("reveal.threshold", "out_of_range"));
        }
        if !self.search.results_path.starts_with('/') {
            return Err(invalid("search.results_path", "must_be_absolute"));
        }
        if self.search.query_param.trim().is_empty() {
            return Err(invalid("search.query_param", "empty"));
        }
        let selectors = [
            ("widgets.dropdown_selector", &self.widgets.dropdown_selector),
            ("widgets.radio_selector", &self.widgets.radio_selector),
            ("reveal.selector", &self.reveal.selector),
            ("search.facility_item_selector", &self.search.facility_item_selector),
            ("touch.selector", &self.touch.selector),
            ("transitions.content_selector", &self.transitions.content_selector),
            ("transitions.link_selector", &self.transitions.link_selector),
            ("focus_selector", &self.focus_selector),
            ("anchor_selector", &self.anchor_selector),
            ("select_fix_selector", &self.select_fix_selector),
        ];
        if let Some((field, _)) = selectors
            .iter()
            .find(|(_, selector)| selector.trim().is_empty())
        {
            return Err(invalid(*field, "empty"));
        }
        Ok(())
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> EnhanceError {
    EnhanceError::InvalidConfig { field, reason }
}
