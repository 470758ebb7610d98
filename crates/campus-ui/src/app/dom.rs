//! Thin `web-sys` helpers and the element-backed [`Host`].
//!
//! # Design
//! - Every DOM call that can throw is mapped into [`EnhanceError::Dom`].
//! - Listeners live for the whole page, so handles are forgotten after wiring.

use crate::core::effect::{Effect, Host, apply_effects};
use crate::core::error::EnhanceError;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, EventTarget, HtmlElement, IntersectionObserver,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub(crate) fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::MissingWindow)
}

pub(crate) fn document() -> Result<Document, EnhanceError> {
    window()?.document().ok_or(EnhanceError::MissingDocument)
}

/// Collect every element matching `selector`, in document order.
pub(crate) fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|err| EnhanceError::dom("querySelectorAll", err))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn query_one(root: &Document, selector: &str) -> Result<Option<Element>, EnhanceError> {
    root.query_selector(selector)
        .map_err(|err| EnhanceError::dom("querySelector", err))
}

pub(crate) fn create(document: &Document, tag: &str, class: &str) -> Result<Element, EnhanceError> {
    let element = document
        .create_element(tag)
        .map_err(|err| EnhanceError::dom("createElement", err))?;
    element.set_class_name(class);
    Ok(element)
}

pub(crate) fn set_attr(element: &Element, name: &str, value: &str) -> Result<(), EnhanceError> {
    element
        .set_attribute(name, value)
        .map_err(|err| EnhanceError::dom("setAttribute", err))
}

pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), EnhanceError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|err| EnhanceError::dom("classList.toggle", err))
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<(), EnhanceError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| EnhanceError::dom("style", "element is not an HTMLElement"))?;
    html.style()
        .set_property(property, value)
        .map_err(|err| EnhanceError::dom("style.setProperty", err))
}

/// Dispatch a bubbling `change` event, exactly as a user interaction would.
pub(crate) fn dispatch_change(target: &EventTarget) -> Result<(), EnhanceError> {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("change", &init)
        .map_err(|err| EnhanceError::dom("new Event", err))?;
    target
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(|err| EnhanceError::dom("dispatchEvent", err))
}

/// Attach a page-lifetime listener.
pub(crate) fn listen<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event_type, callback).forget();
}

/// Attach a page-lifetime listener allowed to call `preventDefault`.
pub(crate) fn listen_active<F>(target: &EventTarget, event_type: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
    .forget();
}

pub(crate) fn log_failure(context: &str, err: &EnhanceError) {
    console::error!(context, err.to_string());
}

/// [`Host`] backed by the element and event that triggered a behavior.
pub(crate) struct ElementHost {
    element: Option<Element>,
    event: Option<Event>,
    observer: Option<IntersectionObserver>,
}

impl ElementHost {
    pub(crate) const fn new(element: Element) -> Self {
        Self {
            element: Some(element),
            event: None,
            observer: None,
        }
    }

    pub(crate) const fn for_event(element: Option<Element>, event: Event) -> Self {
        Self {
            element,
            event: Some(event),
            observer: None,
        }
    }

    pub(crate) const fn observed(element: Element, observer: IntersectionObserver) -> Self {
        Self {
            element: Some(element),
            event: None,
            observer: Some(observer),
        }
    }

    /// Apply `effects`, logging instead of propagating failures.
    pub(crate) fn run(mut self, context: &str, effects: Vec<Effect>) {
        if effects.is_empty() {
            return;
        }
        if let Err(err) = apply_effects(&mut self, effects) {
            log_failure(context, &err);
        }
    }
}

impl Host for ElementHost {
    fn set_style(&mut self, property: &str, value: &str) -> Result<(), EnhanceError> {
        let element = self
            .element
            .as_ref()
            .ok_or_else(|| EnhanceError::dom("style", "no target element"))?;
        set_style(element, property, value)
    }

    fn prevent_default(&mut self) {
        if let Some(event) = &self.event {
            event.prevent_default();
        }
    }

    fn navigate(&mut self, url: &str) -> Result<(), EnhanceError> {
        window()?
            .location()
            .set_href(url)
            .map_err(|err| EnhanceError::dom("location.href", err))
    }

    fn scroll_into_view(&mut self, selector: &str) -> Result<(), EnhanceError> {
        let Some(target) = query_one(&document()?, selector)? else {
            return Ok(());
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn defer(&mut self, delay_ms: u32, effects: Vec<Effect>) {
        let Some(element) = self.element.clone() else {
            return;
        };
        Timeout::new(delay_ms, move || {
            ElementHost::new(element).run("deferred effect failed", effects);
        })
        .forget();
    }

    fn stop_observing(&mut self) {
        if let (Some(observer), Some(element)) = (&self.observer, &self.element) {
            observer.unobserve(element);
        }
    }
}
