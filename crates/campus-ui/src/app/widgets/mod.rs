//! Page scan replacing native selects and radios with synthetic widgets.

pub(crate) mod dropdown;
pub(crate) mod radio;

use crate::app::dom::{listen, log_failure, query_all};
use crate::core::config::WidgetConfig;
use crate::core::error::EnhanceError;
use crate::core::widgets::{ScanOutcome, SynthesisReport, WidgetKind};
use dropdown::SharedBoard;
use gloo_timers::callback::Timeout;
use radio::SharedRadios;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

/// Dropdown and radio state, cloned into page-level listeners.
#[derive(Clone, Default)]
struct Boards {
    dropdowns: SharedBoard,
    radios: SharedRadios,
}

impl Boards {
    /// Re-read every native control the widgets mirror.
    fn resync(&self) -> Result<(), EnhanceError> {
        self.dropdowns.borrow_mut().resync()?;
        self.radios.borrow_mut().resync()
    }
}

/// Widget state shared by every scan of the page.
#[derive(Default)]
pub(crate) struct PageWidgets {
    boards: Boards,
    page_listeners: Cell<bool>,
}

thread_local! {
    static PAGE: PageWidgets = PageWidgets::default();
}

impl PageWidgets {
    /// Install the document-level listeners once per page.
    fn install_page_listeners(&self, document: &Document) {
        if self.page_listeners.replace(true) {
            return;
        }
        dropdown::install_page_listeners(document, &self.boards.dropdowns);
        let boards = self.boards.clone();
        listen(document, "reset", move |_event| {
            // Controls take their default values only after `reset` has been dispatched.
            let boards = boards.clone();
            Timeout::new(0, move || {
                if let Err(err) = boards.resync() {
                    log_failure("widget reset sync failed", &err);
                }
            })
            .forget();
        });
    }
}

/// Scan `document` against the page-wide widget state.
///
/// Widgets from earlier scans are first re-synchronized with their native controls.
pub(crate) fn scan_page(
    document: &Document,
    config: &WidgetConfig,
) -> Result<SynthesisReport, EnhanceError> {
    PAGE.with(|page| {
        if let Err(err) = page.boards.resync() {
            log_failure("widget sync failed", &err);
        }
        synthesize_all(document, config, page)
    })
}

/// Synthesize every matching select and radio of `document`.
///
/// Failures on one control are logged and leave that control native.
pub(crate) fn synthesize_all(
    document: &Document,
    config: &WidgetConfig,
    page: &PageWidgets,
) -> Result<SynthesisReport, EnhanceError> {
    let mut report = SynthesisReport::default();

    let dropdowns = &page.boards.dropdowns;
    for element in query_all(document, &config.dropdown_selector)? {
        let Ok(select) = element.dyn_into::<HtmlSelectElement>() else {
            continue;
        };
        let outcome = dropdown::synthesize(document, &select, dropdowns)
            .unwrap_or_else(|err| failed("dropdown synthesis failed", &err));
        report.record(WidgetKind::Dropdown, outcome);
    }
    page.install_page_listeners(document);

    let radios = &page.boards.radios;
    for element in query_all(document, &config.radio_selector)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if input.type_() != "radio" {
            continue;
        }
        let outcome = radio::synthesize(document, &input, radios)
            .unwrap_or_else(|err| failed("radio synthesis failed", &err));
        report.record(WidgetKind::Radio, outcome);
    }

    Ok(report)
}

fn failed(context: &str, err: &EnhanceError) -> ScanOutcome {
    log_failure(context, err);
    ScanOutcome::Failed
}
