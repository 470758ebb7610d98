//! Custom dropdown replacing a native `<select>`.
//!
//! # Design
//! - The native select moves inside the wrapper and is hidden; it keeps its
//!   form membership and remains the value read on submit.
//! - Open/close decisions come from [`DropdownRegistry`]; this module only
//!   mirrors them into classes and forwards `change` to the native element.
//! - Native `change` events are read back, so selections made by scripts or
//!   the browser keep the trigger in sync.

use crate::app::dom::{
    create, dispatch_change, listen, listen_active, log_failure, set_attr, set_style,
    toggle_class,
};
use crate::core::error::EnhanceError;
use crate::core::widgets::dropdown::{
    DropdownId, DropdownModel, DropdownRegistry, MenuChange, MenuKey, MenuOutcome, SelectOption,
    classes,
};
use crate::core::widgets::{ENHANCED_ATTR, ScanOutcome, WidgetKind, should_synthesize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlOptionElement, HtmlSelectElement, KeyboardEvent, Node};

struct DropdownDom {
    select: HtmlSelectElement,
    wrapper: Element,
    trigger: Element,
    menu: Element,
    items: Vec<Element>,
}

/// Every synthesized dropdown of the page with its DOM handles.
#[derive(Default)]
pub(crate) struct DropdownBoard {
    registry: DropdownRegistry,
    widgets: Vec<DropdownDom>,
}

pub(crate) type SharedBoard = Rc<RefCell<DropdownBoard>>;

const fn flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

fn native_index(select: &HtmlSelectElement) -> Option<usize> {
    usize::try_from(select.selected_index()).ok()
}

impl DropdownBoard {
    /// Mirror menu visibility, then refresh each touched widget's highlight.
    fn render_menus(&self, changes: &[MenuChange]) -> Result<(), EnhanceError> {
        for change in changes {
            let Some(widget) = self.widgets.get(change.id.index()) else {
                continue;
            };
            toggle_class(&widget.wrapper, classes::OPEN, change.open)?;
            toggle_class(&widget.menu, classes::OPEN, change.open)?;
            set_attr(&widget.trigger, "aria-expanded", flag(change.open))?;
            self.render_widget(change.id)?;
        }
        Ok(())
    }

    /// Mirror the model of `id` into the trigger text and entry classes.
    fn render_widget(&self, id: DropdownId) -> Result<(), EnhanceError> {
        let (Some(model), Some(widget)) = (self.registry.get(id), self.widgets.get(id.index()))
        else {
            return Ok(());
        };
        widget.trigger.set_text_content(Some(model.trigger_text()));
        for (index, item) in widget.items.iter().enumerate() {
            let selected = model.selected_index() == Some(index);
            toggle_class(item, classes::SELECTED, selected)?;
            set_attr(item, "aria-selected", flag(selected))?;
            toggle_class(item, classes::HIGHLIGHTED, model.active_index() == Some(index))?;
        }
        Ok(())
    }

    /// Re-read the native selected index of `id`.
    fn sync_widget(&mut self, id: DropdownId) -> Result<(), EnhanceError> {
        let Some(native) = self.widgets.get(id.index()).map(|widget| native_index(&widget.select))
        else {
            return Ok(());
        };
        if self.registry.sync(id, native) {
            self.render_widget(id)?;
        }
        Ok(())
    }

    /// Re-read every native select, e.g. after a form reset.
    pub(crate) fn resync(&mut self) -> Result<(), EnhanceError> {
        for index in 0..self.widgets.len() {
            if let Some(id) = self.registry.id_at(index) {
                self.sync_widget(id)?;
            }
        }
        Ok(())
    }

    /// Id of the widget whose wrapper contains `node`.
    fn owner_of(&self, node: &Node) -> Option<DropdownId> {
        self.widgets
            .iter()
            .position(|widget| widget.wrapper.contains(Some(node)))
            .and_then(|index| self.registry.id_at(index))
    }
}

fn read_options(select: &HtmlSelectElement) -> Vec<SelectOption> {
    (0..select.length())
        .filter_map(|index| select.item(index))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| SelectOption {
            value: option.value(),
            text: option.text(),
            disabled: option.disabled(),
        })
        .collect()
}

/// Wrap `select` in a custom dropdown unless it is already enhanced.
pub(crate) fn synthesize(
    document: &Document,
    select: &HtmlSelectElement,
    board: &SharedBoard,
) -> Result<ScanOutcome, EnhanceError> {
    if !should_synthesize(select.get_attribute(ENHANCED_ATTR).as_deref()) {
        return Ok(ScanOutcome::AlreadyEnhanced);
    }
    let Some(parent) = select.parent_node() else {
        return Ok(ScanOutcome::Failed);
    };

    let model = DropdownModel::new(read_options(select), native_index(select));

    let wrapper = create(document, "div", classes::CONTAINER)?;
    set_attr(&wrapper, "data-type", "select-one")?;
    let inner = create(document, "div", classes::INNER)?;
    let trigger = create(document, "div", classes::TRIGGER)?;
    set_attr(&trigger, "role", "button")?;
    set_attr(&trigger, "tabindex", "0")?;
    set_attr(&trigger, "aria-haspopup", "listbox")?;
    set_attr(&trigger, "aria-expanded", "false")?;
    let menu = create(document, "div", classes::MENU)?;
    set_attr(&menu, "role", "listbox")?;

    let mut items = Vec::with_capacity(model.options().len());
    for option in model.options() {
        let state = if option.disabled {
            classes::DISABLED
        } else {
            classes::SELECTABLE
        };
        let item = create(document, "div", &format!("{} {state}", classes::ITEM))?;
        set_attr(&item, "role", "option")?;
        set_attr(&item, "data-value", &option.value)?;
        item.set_text_content(Some(&option.text));
        menu.append_child(&item)
            .map_err(|err| EnhanceError::dom("appendChild", err))?;
        items.push(item);
    }

    inner
        .append_child(&trigger)
        .map_err(|err| EnhanceError::dom("appendChild", err))?;
    wrapper
        .append_child(&inner)
        .map_err(|err| EnhanceError::dom("appendChild", err))?;
    wrapper
        .append_child(&menu)
        .map_err(|err| EnhanceError::dom("appendChild", err))?;
    let anchor: &Node = select;
    parent
        .insert_before(&wrapper, Some(anchor))
        .map_err(|err| EnhanceError::dom("insertBefore", err))?;
    wrapper
        .append_child(select)
        .map_err(|err| EnhanceError::dom("appendChild", err))?;

    select.set_hidden(true);
    set_style(select, "display", "none")?;
    set_attr(select, "tabindex", "-1")?;
    set_attr(select, "aria-hidden", "true")?;
    set_attr(select, ENHANCED_ATTR, WidgetKind::Dropdown.marker())?;

    let id = {
        let mut board = board.borrow_mut();
        let id = board.registry.register(model);
        board.widgets.push(DropdownDom {
            select: select.clone(),
            wrapper,
            trigger: trigger.clone(),
            menu,
            items: items.clone(),
        });
        board.render_widget(id)?;
        id
    };

    {
        let board = Rc::clone(board);
        listen(&trigger, "click", move |_event| {
            let result = {
                let mut board = board.borrow_mut();
                let changes = board.registry.toggle(id);
                board.render_menus(&changes)
            };
            if let Err(err) = result {
                log_failure("dropdown toggle failed", &err);
            }
        });
    }

    {
        let board = Rc::clone(board);
        let select = select.clone();
        listen_active(&trigger, "keydown", move |event: &Event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|key| MenuKey::from_key(&key.key()))
            else {
                return;
            };
            event.prevent_default();
            let outcome = board.borrow_mut().registry.press(id, key);
            if let Err(err) = commit(&board, &select, id, &outcome) {
                log_failure("dropdown keyboard failed", &err);
            }
        });
    }

    for (index, item) in items.iter().enumerate() {
        let board = Rc::clone(board);
        let select = select.clone();
        listen(item, "click", move |_event| {
            let chosen = board.borrow_mut().registry.choose(id, index);
            let Some(selection) = chosen else {
                return;
            };
            let outcome = MenuOutcome {
                menus: vec![MenuChange { id, open: false }],
                selection: Some(selection),
            };
            if let Err(err) = commit(&board, &select, id, &outcome) {
                log_failure("dropdown selection failed", &err);
            }
        });
    }

    {
        let board = Rc::clone(board);
        listen(select, "change", move |_event| {
            if let Err(err) = board.borrow_mut().sync_widget(id) {
                log_failure("dropdown sync failed", &err);
            }
        });
    }

    Ok(ScanOutcome::Synthesized)
}

/// Mirror `outcome` into the DOM; a selection is written to the native select
/// and announced with one `change` event.
fn commit(
    board: &SharedBoard,
    select: &HtmlSelectElement,
    id: DropdownId,
    outcome: &MenuOutcome,
) -> Result<(), EnhanceError> {
    {
        let board = board.borrow();
        board.render_menus(&outcome.menus)?;
        if let Some(selection) = &outcome.selection {
            let index = i32::try_from(selection.index)
                .map_err(|err| EnhanceError::dom("selectedIndex", err))?;
            select.set_selected_index(index);
        }
        board.render_widget(id)?;
    }
    if outcome.selection.is_some() {
        // The borrow is released so change listeners may inspect the board.
        dispatch_change(select)?;
    }
    Ok(())
}

/// Install the document-level listeners shared by every dropdown.
///
/// Clicks outside a widget close its menu; Escape closes every menu.
pub(crate) fn install_page_listeners(document: &Document, board: &SharedBoard) {
    {
        let board = Rc::clone(board);
        listen(document, "click", move |event: &Event| {
            let owner = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .and_then(|node| board.borrow().owner_of(&node));
            let result = {
                let mut board = board.borrow_mut();
                let changes = board.registry.close_except(owner);
                board.render_menus(&changes)
            };
            if let Err(err) = result {
                log_failure("dropdown close failed", &err);
            }
        });
    }
    {
        let board = Rc::clone(board);
        listen(document, "keydown", move |event: &Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| MenuKey::from_key(&key.key()) == Some(MenuKey::Close));
            if !is_escape {
                return;
            }
            let result = {
                let mut board = board.borrow_mut();
                let changes = board.registry.close_all();
                board.render_menus(&changes)
            };
            if let Err(err) = result {
                log_failure("dropdown close failed", &err);
            }
        });
    }
}
