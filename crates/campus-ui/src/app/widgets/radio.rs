//! Custom indicator replacing a native radio input.

use crate::app::dom::{
    create, dispatch_change, listen, listen_active, log_failure, set_attr, set_style,
    toggle_class,
};
use crate::core::error::EnhanceError;
use crate::core::widgets::radio::{
    CheckChange, GroupScope, LabelSources, RadioGroups, RadioId, classes, label_for_selector,
    resolve_label,
};
use crate::core::widgets::{ENHANCED_ATTR, ScanOutcome, WidgetKind, should_synthesize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement};

/// Every synthesized radio of the page with its wrapper.
#[derive(Default)]
pub(crate) struct RadioBoard {
    groups: RadioGroups,
    wrappers: Vec<Element>,
    clones: Vec<HtmlInputElement>,
    forms: Vec<HtmlFormElement>,
}

pub(crate) type SharedRadios = Rc<RefCell<RadioBoard>>;

impl RadioBoard {
    fn render(&self, changes: &[CheckChange]) -> Result<(), EnhanceError> {
        for change in changes {
            if let Some(wrapper) = self.wrappers.get(change.id.index()) {
                toggle_class(wrapper, classes::CHECKED, change.checked)?;
            }
        }
        Ok(())
    }

    /// Group scope of `radio`, numbering forms in the order they are first seen.
    fn scope_of(&mut self, radio: &HtmlInputElement) -> GroupScope {
        let Some(form) = radio.form() else {
            return GroupScope::Document;
        };
        match self.forms.iter().position(|known| *known == form) {
            Some(index) => GroupScope::Form(index),
            None => {
                self.forms.push(form);
                GroupScope::Form(self.forms.len() - 1)
            }
        }
    }

    fn check(&mut self, id: RadioId) -> Result<(), EnhanceError> {
        let changes = self.groups.check(id);
        self.render(&changes)
    }

    /// Re-read the checked state of every clone, e.g. after a form reset.
    pub(crate) fn resync(&mut self) -> Result<(), EnhanceError> {
        let changes = self
            .groups
            .sync_all(self.clones.iter().map(HtmlInputElement::checked));
        self.render(&changes)
    }
}

fn label_text(document: &Document, radio: &HtmlInputElement) -> Result<String, EnhanceError> {
    let value = radio.value();
    let enclosing = radio
        .closest("label")
        .map_err(|err| EnhanceError::dom("closest", err))?
        .and_then(|label| label.text_content());
    let referencing = match label_for_selector(&radio.id()) {
        Some(selector) => document
            .query_selector(&selector)
            .map_err(|err| EnhanceError::dom("querySelector", err))?
            .and_then(|label| label.text_content()),
        None => None,
    };
    Ok(resolve_label(LabelSources {
        enclosing_label: enclosing.as_deref(),
        referencing_label: referencing.as_deref(),
        value: &value,
    }))
}

/// Replace `radio` with a clickable wrapper holding a hidden clone.
pub(crate) fn synthesize(
    document: &Document,
    radio: &HtmlInputElement,
    board: &SharedRadios,
) -> Result<ScanOutcome, EnhanceError> {
    if !should_synthesize(radio.get_attribute(ENHANCED_ATTR).as_deref()) {
        return Ok(ScanOutcome::AlreadyEnhanced);
    }
    let Some(parent) = radio.parent_node() else {
        return Ok(ScanOutcome::Failed);
    };

    let text = label_text(document, radio)?;
    let clone = radio
        .clone_node_with_deep(true)
        .map_err(|err| EnhanceError::dom("cloneNode", err))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|node| EnhanceError::dom("cloneNode", node))?;
    set_style(&clone, "display", "none")?;
    set_attr(&clone, ENHANCED_ATTR, WidgetKind::Radio.marker())?;

    let wrapper = create(document, "label", classes::WRAPPER)?;
    let indicator = create(document, "span", classes::INDICATOR)?;
    let label = create(document, "span", classes::LABEL)?;
    label.set_text_content(Some(&text));
    for child in [clone.unchecked_ref::<Element>(), &indicator, &label] {
        wrapper
            .append_child(child)
            .map_err(|err| EnhanceError::dom("appendChild", err))?;
    }
    parent
        .replace_child(&wrapper, radio)
        .map_err(|err| EnhanceError::dom("replaceChild", err))?;

    let id = {
        let mut board = board.borrow_mut();
        let scope = board.scope_of(&clone);
        let id = board.groups.register(scope, &clone.name(), false);
        board.wrappers.push(wrapper.clone());
        board.clones.push(clone.clone());
        if clone.checked() {
            board.check(id)?;
        }
        id
    };

    {
        let board = Rc::clone(board);
        let clone = clone.clone();
        listen_active(&wrapper, "click", move |event: &Event| {
            // Clicks forwarded to the clone by another label check it natively.
            let clone_target: &EventTarget = clone.as_ref();
            if event.target().as_ref() == Some(clone_target) {
                return;
            }
            // The wrapper would otherwise forward a second activation click to the clone.
            event.prevent_default();
            if let Err(err) = select(&board, &clone, id) {
                log_failure("radio selection failed", &err);
            }
        });
    }

    // A `label[for]` click checks the clone without going through the wrapper.
    let board = Rc::clone(board);
    let target = clone.clone();
    listen(&clone, "change", move |_event| {
        if !target.checked() {
            return;
        }
        if let Err(err) = board.borrow_mut().check(id) {
            log_failure("radio sync failed", &err);
        }
    });

    Ok(ScanOutcome::Synthesized)
}

fn select(board: &SharedRadios, clone: &HtmlInputElement, id: RadioId) -> Result<(), EnhanceError> {
    clone.set_checked(true);
    board.borrow_mut().check(id)?;
    dispatch_change(clone)
}
