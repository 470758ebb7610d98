//! Binds the pure behavior rules to page elements.
//!
//! # Design
//! - Each `wire_*` function discovers its targets once and attaches page-lifetime listeners.
//! - Handlers gather event facts, ask the rule for effects, and hand them to an [`ElementHost`].
//! - A missing target makes a behavior a no-op; wiring never stops at the first failure.

use crate::app::dom::{ElementHost, listen, listen_active, log_failure, query_all, query_one};
use crate::core::behaviors::touch::TapZoomGuard;
use crate::core::behaviors::transition::LinkFacts;
use crate::core::behaviors::{
    BehaviorKind, anchor, filter, reveal, search, styling, touch, transition,
};
use crate::core::config::{EnhanceConfig, RevealConfig, SearchConfig, TouchConfig, TransitionConfig};
use crate::core::error::EnhanceError;
use gloo::console;
use js_sys::{Array, Date};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Event, HtmlInputElement, HtmlSelectElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
};

/// Wire every behavior; returns how many targets each one attached to.
pub(crate) fn wire_all(
    document: &Document,
    config: &EnhanceConfig,
    tap_guard: TapZoomGuard,
) -> Vec<(BehaviorKind, usize)> {
    BehaviorKind::all()
        .into_iter()
        .map(|kind| {
            let wired = match kind {
                BehaviorKind::InputFocus => wire_input_focus(document, &config.focus_selector),
                BehaviorKind::ScrollReveal => wire_scroll_reveal(document, &config.reveal),
                BehaviorKind::FacilityFilter => wire_facility_filter(document, &config.search),
                BehaviorKind::QuickSearch => wire_quick_search(document, &config.search),
                BehaviorKind::SmoothScroll => wire_smooth_scroll(document, &config.anchor_selector),
                BehaviorKind::TouchFeedback => wire_touch_feedback(document, &config.touch),
                BehaviorKind::TapZoom => Ok(wire_tap_zoom(document, tap_guard)),
                BehaviorKind::SlideTransition => {
                    wire_slide_transition(document, &config.transitions)
                }
                BehaviorKind::SelectFix => wire_select_fix(document, &config.select_fix_selector),
            };
            let count = wired.unwrap_or_else(|err| {
                console::warn!("behavior wiring failed", kind.as_str(), err.to_string());
                0
            });
            (kind, count)
        })
        .collect()
}

fn wire_input_focus(document: &Document, selector: &str) -> Result<usize, EnhanceError> {
    let inputs = query_all(document, selector)?;
    for input in &inputs {
        let target = input.clone();
        listen(input, "focus", move |_event| {
            ElementHost::new(target.clone()).run("focus transition failed", styling::on_input_focus());
        });
    }
    Ok(inputs.len())
}

fn wire_scroll_reveal(document: &Document, config: &RevealConfig) -> Result<usize, EnhanceError> {
    let cards = query_all(document, &config.selector)?;
    if cards.is_empty() {
        return Ok(0);
    }
    let delay_ms = config.delay_ms;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let effects = reveal::on_intersection(entry.is_intersecting(), delay_ms);
                ElementHost::observed(entry.target(), observer.clone())
                    .run("scroll reveal failed", effects);
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| EnhanceError::dom("new IntersectionObserver", err))?;
    callback.forget();
    for card in &cards {
        observer.observe(card);
    }
    Ok(cards.len())
}

fn wire_facility_filter(document: &Document, config: &SearchConfig) -> Result<usize, EnhanceError> {
    let Some(input) = document.get_element_by_id(&config.facility_input_id) else {
        return Ok(0);
    };
    let item_selector = config.facility_item_selector.clone();
    let document = document.clone();
    listen(&input, "input", move |event: &Event| {
        let Some(query) = input_value(event) else {
            return;
        };
        let items = match query_all(&document, &item_selector) {
            Ok(items) => items,
            Err(err) => {
                log_failure("facility filter failed", &err);
                return;
            }
        };
        let texts = items
            .iter()
            .map(|item| item.text_content().unwrap_or_default());
        let visible = filter::visibility(texts, &query);
        for (item, visible) in items.into_iter().zip(visible) {
            ElementHost::new(item).run("facility filter failed", filter::display_effects(visible));
        }
    });
    Ok(1)
}

fn wire_quick_search(document: &Document, config: &SearchConfig) -> Result<usize, EnhanceError> {
    let Some(input) = document.get_element_by_id(&config.quick_search_id) else {
        return Ok(0);
    };
    let config = config.clone();
    listen(&input, "keypress", move |event: &Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let Some(term) = input_value(event) else {
            return;
        };
        ElementHost::for_event(None, event.clone())
            .run("quick search failed", search::on_keypress(&config, &key, &term));
    });
    Ok(1)
}

fn wire_smooth_scroll(document: &Document, selector: &str) -> Result<usize, EnhanceError> {
    let anchors = query_all(document, selector)?;
    for link in &anchors {
        let target = link.clone();
        listen_active(link, "click", move |event: &Event| {
            let href = target.get_attribute("href").unwrap_or_default();
            ElementHost::for_event(None, event.clone())
                .run("smooth scroll failed", anchor::on_click(&href));
        });
    }
    Ok(anchors.len())
}

fn wire_touch_feedback(document: &Document, config: &TouchConfig) -> Result<usize, EnhanceError> {
    let targets = query_all(document, &config.selector)?;
    let config = Rc::new(config.clone());
    for element in &targets {
        {
            let target = element.clone();
            let config = Rc::clone(&config);
            listen(element, "touchstart", move |_event| {
                ElementHost::new(target.clone())
                    .run("touch feedback failed", touch::on_press(&config.pressed_opacity));
            });
        }
        let target = element.clone();
        let release_delay_ms = config.release_delay_ms;
        listen(element, "touchend", move |_event| {
            ElementHost::new(target.clone())
                .run("touch feedback failed", touch::on_release(release_delay_ms));
        });
    }
    Ok(targets.len())
}

fn wire_tap_zoom(document: &Document, mut guard: TapZoomGuard) -> usize {
    listen_active(document, "touchend", move |event: &Event| {
        let effects = guard.on_touch_end(Date::now());
        ElementHost::for_event(None, event.clone()).run("tap zoom guard failed", effects);
    });
    1
}

fn wire_slide_transition(
    document: &Document,
    config: &TransitionConfig,
) -> Result<usize, EnhanceError> {
    let Some(content) = query_one(document, &config.content_selector)? else {
        return Ok(0);
    };
    ElementHost::new(content.clone())
        .run("slide transition failed", transition::on_enter(&config.enter_animation));

    let links = query_all(document, &config.link_selector)?;
    let exit_animation = Rc::<str>::from(config.exit_animation.as_str());
    for link in &links {
        let anchor = link.clone();
        let content = content.clone();
        let exit_animation = Rc::clone(&exit_animation);
        listen(link, "click", move |_event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let target = anchor.get_attribute("target");
            let facts = LinkFacts {
                href: &href,
                target: target.as_deref(),
            };
            ElementHost::new(content.clone())
                .run("slide transition failed", transition::on_link_click(facts, &exit_animation));
        });
    }
    Ok(links.len())
}

fn wire_select_fix(document: &Document, selector: &str) -> Result<usize, EnhanceError> {
    let selects = query_all(document, selector)?;
    for select in &selects {
        ElementHost::new(select.clone()).run("select fix failed", styling::on_select_init());
        {
            let target = select.clone();
            listen(select, "focus", move |_event| {
                ElementHost::new(target.clone()).run("select fix failed", styling::on_select_focus());
            });
        }
        let target = select.clone();
        listen(select, "change", move |_event| {
            let has_selection = target
                .dyn_ref::<HtmlSelectElement>()
                .is_some_and(|select| select.selected_index() >= 0);
            ElementHost::new(target.clone())
                .run("select fix failed", styling::on_select_change(has_selection));
        });
    }
    Ok(selects.len())
}

fn input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}
