#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Campus UI progressive enhancement.
//! Replaces native selects and radios with styleable widgets and wires the
//! page behaviors (scroll reveal, search, touch feedback, transitions).

pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{rescan, rescan_widgets, run_app};

#[cfg(test)]
mod tests {
    use crate::core::config::EnhanceConfig;
    use crate::core::widgets::{ENHANCED_ATTR, WidgetKind};

    #[test]
    fn default_config_targets_form_selects() {
        let config = EnhanceConfig::default();
        assert_eq!(config.widgets.dropdown_selector, "select.form-select");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn markers_are_stable_attribute_values() {
        assert_eq!(ENHANCED_ATTR, "data-enhanced");
        assert_eq!(WidgetKind::Dropdown.marker(), "dropdown");
        assert_eq!(WidgetKind::Radio.marker(), "radio");
    }
}
