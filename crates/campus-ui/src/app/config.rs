//! Loads page overrides for [`EnhanceConfig`].

use crate::core::config::{CONFIG_ELEMENT_ID, EnhanceConfig};
use gloo::console;
use web_sys::Document;

/// Read the embedded override document, falling back to defaults on any problem.
pub(crate) fn load_config(document: &Document) -> EnhanceConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return EnhanceConfig::default();
    };
    if raw.trim().is_empty() {
        return EnhanceConfig::default();
    }
    match EnhanceConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!("config override ignored", err.to_string());
            EnhanceConfig::default()
        }
    }
}
