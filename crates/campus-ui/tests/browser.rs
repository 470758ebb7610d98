#![cfg(target_arch = "wasm32")]
//! In-browser checks for widget synthesis against a live document.

use campus_ui::core::widgets::ENHANCED_ATTR;
use campus_ui::rescan;
use gloo::events::EventListener;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Element, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    KeyboardEvent, KeyboardEventInit, Node,
};

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

fn count_changes(target: &Element) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    EventListener::new(target, "change", move |_event| seen.set(seen.get() + 1)).forget();
    count
}

fn press(target: &EventTarget, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn nth<T: JsCast>(root: &Element, selector: &str, index: u32) -> T {
    root.query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap_or_else(|| panic!("missing {selector} #{index}"))
        .dyn_into::<T>()
        .unwrap()
}

const BOARDS: &str = r#"
    <select class="form-select" name="board">
        <option value="">Any board</option>
        <option value="CBSE">CBSE</option>
        <option value="IB">IB</option>
        <option value="old" disabled>Old</option>
    </select>"#;

#[wasm_bindgen_test]
fn dropdown_mirrors_choice_into_native_select() {
    let root = fixture(BOARDS);
    rescan().unwrap();

    let select: HtmlSelectElement = find(&root, "select");
    assert_eq!(select.get_attribute(ENHANCED_ATTR).as_deref(), Some("dropdown"));
    let wrapper: Element = find(&root, ".choices");
    let native: &Node = &select;
    assert!(wrapper.contains(Some(native)));
    let trigger: HtmlElement = find(&root, ".choices__list--single");
    assert_eq!(trigger.text_content().as_deref(), Some("Any board"));

    let changes = count_changes(&select);
    trigger.click();
    assert!(wrapper.class_list().contains("is-open"));

    let items = root.query_selector_all(".choices__item--choice").unwrap();
    assert_eq!(items.length(), 4);
    items.item(2).unwrap().dyn_into::<HtmlElement>().unwrap().click();

    assert_eq!(select.value(), "IB");
    assert_eq!(trigger.text_content().as_deref(), Some("IB"));
    assert_eq!(changes.get(), 1);
    assert!(!wrapper.class_list().contains("is-open"));

    items.item(3).unwrap().dyn_into::<HtmlElement>().unwrap().click();
    assert_eq!(select.value(), "IB");
    assert_eq!(changes.get(), 1);
}

#[wasm_bindgen_test]
fn only_one_menu_stays_open() {
    let root = fixture(&format!("{BOARDS}{BOARDS}"));
    rescan().unwrap();

    let triggers = root.query_selector_all(".choices__list--single").unwrap();
    let wrappers = root.query_selector_all(".choices").unwrap();
    let trigger = |index| {
        triggers
            .item(index)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    };
    let is_open = |index| {
        wrappers
            .item(index)
            .unwrap()
            .dyn_into::<Element>()
            .unwrap()
            .class_list()
            .contains("is-open")
    };

    trigger(0).click();
    assert!(is_open(0));
    trigger(1).click();
    assert!(!is_open(0));
    assert!(is_open(1));

    root.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!is_open(1));
}

#[wasm_bindgen_test]
fn radio_group_keeps_a_single_checked_member() {
    let root = fixture(
        r#"
        <input type="radio" name="co_ed_test" value="B" id="co-ed-b"><label for="co-ed-b">Boys</label>
        <input type="radio" name="co_ed_test" value="G" id="co-ed-g" checked><label for="co-ed-g">Girls</label>
        <input type="radio" name="co_ed_test" value="C" id="co-ed-c"><label for="co-ed-c">Co-ed</label>"#,
    );
    rescan().unwrap();

    let wrappers = root.query_selector_all(".custom-radio").unwrap();
    assert_eq!(wrappers.length(), 3);
    let wrapper = |index| {
        wrappers
            .item(index)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    };
    assert!(wrapper(1).class_list().contains("is-checked"));
    let label: Element = find(&root, ".custom-radio-label");
    assert_eq!(label.text_content().as_deref(), Some("Boys"));

    let boys: HtmlInputElement = find(&wrapper(0), "input");
    let changes = count_changes(&boys);
    wrapper(0).click();

    assert!(boys.checked());
    assert_eq!(changes.get(), 1);
    let checked = root.query_selector_all(".custom-radio.is-checked").unwrap();
    assert_eq!(checked.length(), 1);
    assert!(wrapper(0).class_list().contains("is-checked"));
}

#[wasm_bindgen_test]
fn rescanning_leaves_enhanced_controls_alone() {
    let root = fixture(&format!(
        r#"{BOARDS}<input type="radio" name="rescan_test" value="x">"#
    ));
    rescan().unwrap();
    rescan().unwrap();

    assert_eq!(root.query_selector_all(".choices").unwrap().length(), 1);
    assert_eq!(root.query_selector_all(".custom-radio").unwrap().length(), 1);
    assert_eq!(root.query_selector_all("select").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn keyboard_opens_highlights_and_chooses() {
    let root = fixture(&format!("<form>{BOARDS}</form>"));
    rescan().unwrap();

    let form: Element = find(&root, "form");
    let changes = count_changes(&form);
    let wrapper: Element = find(&root, ".choices");
    let trigger: HtmlElement = find(&root, ".choices__list--single");
    let item = |index| nth::<Element>(&root, ".choices__item--choice", index);

    press(&trigger, "ArrowDown");
    assert!(wrapper.class_list().contains("is-open"));
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(item(0).class_list().contains("is-highlighted"));

    press(&trigger, "ArrowDown");
    assert!(item(1).class_list().contains("is-highlighted"));
    assert!(!item(0).class_list().contains("is-highlighted"));

    press(&trigger, "Enter");
    let select: HtmlSelectElement = find(&root, "select");
    assert_eq!(select.value(), "CBSE");
    assert_eq!(trigger.text_content().as_deref(), Some("CBSE"));
    assert!(!wrapper.class_list().contains("is-open"));
    assert_eq!(changes.get(), 1);

    press(&trigger, " ");
    assert!(wrapper.class_list().contains("is-open"));
    press(&trigger, "Escape");
    assert!(!wrapper.class_list().contains("is-open"));
    assert_eq!(changes.get(), 1);
}

#[wasm_bindgen_test]
fn escape_closes_every_menu() {
    let root = fixture(&format!("{BOARDS}{BOARDS}"));
    rescan().unwrap();

    let wrapper = |index| nth::<Element>(&root, ".choices", index);
    nth::<HtmlElement>(&root, ".choices__list--single", 1).click();
    assert!(wrapper(1).class_list().contains("is-open"));

    let document = web_sys::window().unwrap().document().unwrap();
    press(&document, "Escape");
    assert!(!wrapper(0).class_list().contains("is-open"));
    assert!(!wrapper(1).class_list().contains("is-open"));
}

#[wasm_bindgen_test]
fn dropdown_follows_native_changes() {
    let root = fixture(BOARDS);
    rescan().unwrap();

    let select: HtmlSelectElement = find(&root, "select");
    let trigger: HtmlElement = find(&root, ".choices__list--single");
    select.set_selected_index(2);
    select.dispatch_event(&web_sys::Event::new("change").unwrap()).unwrap();

    assert_eq!(trigger.text_content().as_deref(), Some("IB"));
    assert!(nth::<Element>(&root, ".choices__item--choice", 2).class_list().contains("is-selected"));
}

#[wasm_bindgen_test]
fn enclosing_label_radio_reports_one_change_to_its_form() {
    let root = fixture(
        r#"<form>
        <label><input type="radio" name="enclosed_test" value="co_ed"> Co-ed</label>
        <label><input type="radio" name="enclosed_test" value="girls_only"> Girls</label>
        </form>"#,
    );
    rescan().unwrap();

    let form: Element = find(&root, "form");
    let changes = count_changes(&form);
    let wrapper = |index| nth::<HtmlElement>(&root, ".custom-radio", index);
    let label: Element = find(&wrapper(0), ".custom-radio-label");
    assert_eq!(label.text_content().as_deref(), Some("Co-ed"));

    wrapper(0).click();
    let clone: HtmlInputElement = find(&wrapper(0), "input");
    assert!(clone.checked());
    assert_eq!(changes.get(), 1);

    wrapper(1).click();
    assert_eq!(changes.get(), 2);
    assert!(!wrapper(0).class_list().contains("is-checked"));
    assert!(wrapper(1).class_list().contains("is-checked"));
}

#[wasm_bindgen_test]
fn same_radio_name_in_two_forms_stays_independent() {
    let root = fixture(
        r#"
        <form id="sidebar-form"><input type="radio" name="grade_test" value="g1" checked></form>
        <form id="sheet-form">
            <input type="radio" name="grade_test" value="g1">
            <input type="radio" name="grade_test" value="g2" checked>
        </form>"#,
    );
    rescan().unwrap();

    let sidebar = |index| nth::<HtmlElement>(&root, "#sidebar-form .custom-radio", index);
    let sheet = |index| nth::<HtmlElement>(&root, "#sheet-form .custom-radio", index);
    assert!(sidebar(0).class_list().contains("is-checked"));
    assert!(sheet(1).class_list().contains("is-checked"));

    sheet(0).click();
    assert!(sidebar(0).class_list().contains("is-checked"));
    assert!(sheet(0).class_list().contains("is-checked"));
    assert!(!sheet(1).class_list().contains("is-checked"));
}

#[wasm_bindgen_test]
fn referencing_label_click_moves_the_checked_wrapper() {
    let root = fixture(
        r#"
        <input type="radio" name="for_test" value="day" id="for-day" checked>
        <input type="radio" name="for_test" value="boarding" id="for-boarding">
        <label for="for-boarding" id="boarding-label">Boarding</label>"#,
    );
    rescan().unwrap();

    let wrapper = |index| nth::<HtmlElement>(&root, ".custom-radio", index);
    assert!(wrapper(0).class_list().contains("is-checked"));

    find::<HtmlElement>(&root, "#boarding-label").click();
    let clone: HtmlInputElement = find(&wrapper(1), "input");
    assert!(clone.checked());
    assert!(wrapper(1).class_list().contains("is-checked"));
    assert!(!wrapper(0).class_list().contains("is-checked"));
}

#[wasm_bindgen_test]
async fn form_reset_restores_widgets() {
    let root = fixture(&format!(
        r#"<form>{BOARDS}
        <input type="radio" name="reset_test" value="day" checked>
        <input type="radio" name="reset_test" value="boarding">
        </form>"#
    ));
    rescan().unwrap();

    let trigger: HtmlElement = find(&root, ".choices__list--single");
    trigger.click();
    nth::<HtmlElement>(&root, ".choices__item--choice", 2).click();
    assert_eq!(trigger.text_content().as_deref(), Some("IB"));
    let wrapper = |index| nth::<HtmlElement>(&root, ".custom-radio", index);
    wrapper(1).click();
    assert!(wrapper(1).class_list().contains("is-checked"));

    find::<HtmlFormElement>(&root, "form").reset();
    TimeoutFuture::new(20).await;

    assert_eq!(trigger.text_content().as_deref(), Some("Any board"));
    assert!(wrapper(0).class_list().contains("is-checked"));
    assert!(!wrapper(1).class_list().contains("is-checked"));
}
