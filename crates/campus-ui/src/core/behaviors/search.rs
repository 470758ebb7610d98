//! Quick search box navigating to the results page on Enter.

use crate::core::config::SearchConfig;
use crate::core::effect::Effect;

/// Build the results URL, or `None` when the term is blank after trimming.
///
/// The untrimmed term is encoded so the results page sees exactly what was typed.
#[must_use]
pub fn results_url(config: &SearchConfig, term: &str) -> Option<String> {
    if term.trim().is_empty() {
        return None;
    }
    Some(format!(
        "{}?{}={}",
        config.results_path,
        config.query_param,
        urlencoding::encode(term)
    ))
}

/// Effects for a keypress in the quick search box.
#[must_use]
pub fn on_keypress(config: &SearchConfig, key: &str, term: &str) -> Vec<Effect> {
    if key != "Enter" {
        return Vec::new();
    }
    results_url(config, term)
        .map(Effect::Navigate)
        .into_iter()
        .collect()
}
