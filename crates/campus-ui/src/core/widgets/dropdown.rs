//! Dropdown selection state and page-wide menu exclusivity.
//!
//! # Design
//! - The native select stays the source of truth; a [`DropdownModel`] mirrors its
//!   options and selected index so the trigger text can be derived, never stored.
//! - [`DropdownRegistry`] owns every model on the page and resolves open/close
//!   transitions, so exclusivity does not depend on listener ordering.

/// Class vocabulary shared with the site stylesheet.
pub mod classes {
    /// Outer wrapper.
    pub const CONTAINER: &str = "choices choices-select";
    /// Inner box holding the trigger.
    pub const INNER: &str = "choices__inner";
    /// Trigger showing the selected option.
    pub const TRIGGER: &str = "choices__list choices__list--single";
    /// Menu holding one entry per option.
    pub const MENU: &str = "choices__list choices__list--dropdown";
    /// Menu entry.
    pub const ITEM: &str = "choices__item choices__item--choice";
    /// Marker for entries that can be chosen.
    pub const SELECTABLE: &str = "choices__item--selectable";
    /// Marker for disabled entries.
    pub const DISABLED: &str = "choices__item--disabled";
    /// State class for an open wrapper and a visible menu.
    pub const OPEN: &str = "is-open";
    /// State class for the chosen entry.
    pub const SELECTED: &str = "is-selected";
    /// State class for the entry highlighted from the keyboard.
    pub const HIGHLIGHTED: &str = "is-highlighted";
}

/// One `<option>` of a native select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible text.
    pub text: String,
    /// Whether the option refuses selection.
    pub disabled: bool,
}

impl SelectOption {
    /// Build an enabled option.
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: false,
        }
    }

    /// Build a disabled option.
    #[must_use]
    pub fn disabled(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(value, text)
        }
    }
}

/// Outcome of choosing a menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen option.
    pub index: usize,
    /// Value to write into the native select.
    pub value: String,
    /// Text to show in the trigger.
    pub text: String,
    /// Index of the previously chosen option.
    pub previous: Option<usize>,
}

/// Mirror of a single native select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownModel {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    active: Option<usize>,
    open: bool,
}

impl DropdownModel {
    /// Build a closed model selecting the option at the native `selected_index`.
    ///
    /// The index is used rather than the value so duplicate values resolve to
    /// the option the browser actually selected.
    #[must_use]
    pub fn new(options: Vec<SelectOption>, selected_index: Option<usize>) -> Self {
        let selected = selected_index.filter(|index| *index < options.len());
        Self {
            options,
            selected,
            active: None,
            open: false,
        }
    }

    /// Options in document order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Index of the selected option, if any.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Index of the entry highlighted for keyboard selection.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Whether the menu is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Value of the selected option, or an empty string.
    #[cfg(test)]
    fn value(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map_or("", |option| option.value.as_str())
    }

    /// Text the trigger must display.
    #[must_use]
    pub fn trigger_text(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map_or("", |option| option.text.as_str())
    }

    /// Choose the option at `index` and close the menu.
    ///
    /// Returns `None` for out-of-range or disabled options; the model is left untouched.
    pub fn choose(&mut self, index: usize) -> Option<Selection> {
        let option = self.options.get(index).filter(|option| !option.disabled)?;
        let selection = Selection {
            index,
            value: option.value.clone(),
            text: option.text.clone(),
            previous: self.selected,
        };
        self.selected = Some(index);
        self.set_open(false);
        Some(selection)
    }

    /// Adopt a selection made on the native element, e.g. by a form reset.
    ///
    /// Returns whether the selected index changed.
    pub fn sync(&mut self, selected_index: Option<usize>) -> bool {
        let next = selected_index.filter(|index| *index < self.options.len());
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    fn enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|option| !option.disabled)
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.active = if open {
            self.selected
                .filter(|index| self.enabled(*index))
                .or_else(|| (0..self.options.len()).find(|index| self.enabled(*index)))
        } else {
            None
        };
    }

    /// Move the highlight to the next enabled entry; stops at either end.
    fn step(&mut self, forward: bool) {
        let Some(current) = self.active else {
            self.set_open(true);
            return;
        };
        let next = if forward {
            (current + 1..self.options.len()).find(|index| self.enabled(*index))
        } else {
            (0..current).rev().find(|index| self.enabled(*index))
        };
        if let Some(next) = next {
            self.active = Some(next);
        }
    }
}

/// Keys understood by a focused trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    /// Enter or Space: open the menu, or choose the highlighted entry.
    Activate,
    /// Arrow down: open the menu, or highlight the next entry.
    Next,
    /// Arrow up: open the menu, or highlight the previous entry.
    Previous,
    /// Escape: close the menu.
    Close,
}

impl MenuKey {
    /// Map a `KeyboardEvent.key` value; unrelated keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " | "Spacebar" => Some(Self::Activate),
            "ArrowDown" | "Down" => Some(Self::Next),
            "ArrowUp" | "Up" => Some(Self::Previous),
            "Escape" | "Esc" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Menu and selection changes the DOM layer must mirror after an interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuOutcome {
    /// Menus that opened or closed.
    pub menus: Vec<MenuChange>,
    /// Option chosen by the interaction.
    pub selection: Option<Selection>,
}

/// Handle to a dropdown registered in a [`DropdownRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropdownId(usize);

impl DropdownId {
    /// Position of the dropdown in registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Menu visibility transition the DOM layer must mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuChange {
    /// Dropdown whose menu changed.
    pub id: DropdownId,
    /// New visibility.
    pub open: bool,
}

/// All synthesized dropdowns of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownRegistry {
    models: Vec<DropdownModel>,
}

impl DropdownRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Track a new dropdown.
    pub fn register(&mut self, model: DropdownModel) -> DropdownId {
        self.models.push(model);
        DropdownId(self.models.len() - 1)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.models.len()
    }

    /// Id of the dropdown registered at position `index`.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<DropdownId> {
        (index < self.models.len()).then_some(DropdownId(index))
    }

    /// Look up a model.
    #[must_use]
    pub fn get(&self, id: DropdownId) -> Option<&DropdownModel> {
        self.models.get(id.0)
    }

    #[cfg(test)]
    fn open_ids(&self) -> Vec<DropdownId> {
        self.models
            .iter()
            .enumerate()
            .filter(|(_, model)| model.open)
            .map(|(index, _)| DropdownId(index))
            .collect()
    }

    /// Toggle the menu of `id`, closing every other open menu first.
    pub fn toggle(&mut self, id: DropdownId) -> Vec<MenuChange> {
        let Some(opening) = self.models.get(id.0).map(|model| !model.open) else {
            return Vec::new();
        };
        let mut changes = self.close_except(Some(id));
        if let Some(model) = self.models.get_mut(id.0) {
            model.set_open(opening);
            changes.push(MenuChange { id, open: opening });
        }
        changes
    }

    /// Choose an option of `id`; its menu closes on success.
    pub fn choose(&mut self, id: DropdownId, index: usize) -> Option<Selection> {
        self.models.get_mut(id.0)?.choose(index)
    }

    /// Handle a key pressed on the trigger of `id`.
    ///
    /// A closed menu opens on any key but [`MenuKey::Close`]. An open menu moves
    /// its highlight, chooses the highlighted entry, or closes.
    pub fn press(&mut self, id: DropdownId, key: MenuKey) -> MenuOutcome {
        let Some(open) = self.models.get(id.0).map(DropdownModel::is_open) else {
            return MenuOutcome::default();
        };
        match (open, key) {
            (false, MenuKey::Close) => MenuOutcome::default(),
            (false, _) | (true, MenuKey::Close) => MenuOutcome {
                menus: self.toggle(id),
                selection: None,
            },
            (true, MenuKey::Next | MenuKey::Previous) => {
                if let Some(model) = self.models.get_mut(id.0) {
                    model.step(key == MenuKey::Next);
                }
                MenuOutcome::default()
            }
            (true, MenuKey::Activate) => {
                let active = self.models.get(id.0).and_then(DropdownModel::active_index);
                match active.and_then(|index| self.choose(id, index)) {
                    Some(selection) => MenuOutcome {
                        menus: vec![MenuChange { id, open: false }],
                        selection: Some(selection),
                    },
                    None => MenuOutcome {
                        menus: self.toggle(id),
                        selection: None,
                    },
                }
            }
        }
    }

    /// Adopt the native selected index of `id`; returns whether it changed.
    pub fn sync(&mut self, id: DropdownId, selected_index: Option<usize>) -> bool {
        self.models
            .get_mut(id.0)
            .is_some_and(|model| model.sync(selected_index))
    }

    /// Close every open menu except `keep`.
    pub fn close_except(&mut self, keep: Option<DropdownId>) -> Vec<MenuChange> {
        self.models
            .iter_mut()
            .enumerate()
            .filter(|(index, model)| model.open && keep.is_none_or(|id| id.0 != *index))
            .map(|(index, model)| {
                model.set_open(false);
                MenuChange {
                    id: DropdownId(index),
                    open: false,
                }
            })
            .collect()
    }

    /// Close every open menu.
    pub fn close_all(&mut self) -> Vec<MenuChange> {
        self.close_except(None)
    }
}
