//! Page bootstrap: waits for the DOM, then synthesizes widgets and wires behaviors.

use crate::core::behaviors::touch::TapZoomGuard;
use crate::core::error::EnhanceError;
use config::load_config;
use dom::log_failure;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

mod behaviors;
mod config;
mod dom;
mod widgets;

/// Enhance the current page once its DOM is parsed.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log_failure("page enhancement skipped", &err);
            return;
        }
    };
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| enhance(&target))
            .forget();
    } else {
        enhance(&document);
    }
}

fn enhance(document: &Document) {
    let config = load_config(document);

    match widgets::scan_page(document, &config.widgets) {
        Ok(report) => console::debug!(
            "widgets synthesized",
            format!(
                "dropdowns={} radios={} skipped={} failed={}",
                report.dropdowns, report.radios, report.skipped, report.failed
            )
        ),
        Err(err) => log_failure("widget synthesis failed", &err),
    }

    let session = TapZoomGuard::new(config.touch.double_tap_window_ms);
    let wired = behaviors::wire_all(document, &config, session);
    let summary = wired
        .iter()
        .map(|(kind, count)| format!("{}={count}", kind.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    console::debug!("behaviors wired", summary);
}

/// Run the widget scan again, e.g. after a page fragment was swapped in.
///
/// Controls enhanced by an earlier scan are skipped.
///
/// # Errors
/// Returns [`EnhanceError`] when the document is unavailable or a selector is invalid.
pub fn rescan() -> Result<(), EnhanceError> {
    let document = dom::document()?;
    let config = load_config(&document);
    let report = widgets::scan_page(&document, &config.widgets)?;
    console::debug!(
        "widgets rescanned",
        format!(
            "dropdowns={} radios={} skipped={} failed={}",
            report.dropdowns, report.radios, report.skipped, report.failed
        )
    );
    Ok(())
}

/// Script-facing wrapper around [`rescan`] that logs instead of returning errors.
#[wasm_bindgen(js_name = rescanWidgets)]
pub fn rescan_widgets() {
    if let Err(err) = rescan() {
        log_failure("widget rescan failed", &err);
    }
}
