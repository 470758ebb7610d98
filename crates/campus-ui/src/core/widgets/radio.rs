//! Radio label resolution and per-group checked state.

/// Class vocabulary shared with the site stylesheet.
pub mod classes {
    /// Clickable wrapper replacing the native radio.
    pub const WRAPPER: &str = "custom-radio";
    /// Visual checked indicator.
    pub const INDICATOR: &str = "custom-radio-indicator";
    /// Label text.
    pub const LABEL: &str = "custom-radio-label";
    /// State class for the checked wrapper.
    pub const CHECKED: &str = "is-checked";
}

/// Text sources available for a radio, gathered by the DOM layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelSources<'a> {
    /// Text content of the closest enclosing `<label>`.
    pub enclosing_label: Option<&'a str>,
    /// Text content of a `<label for=…>` naming the radio id.
    pub referencing_label: Option<&'a str>,
    /// The radio's value attribute.
    pub value: &'a str,
}

/// Resolve the human-readable label for a radio.
///
/// Checks the enclosing label with the first occurrence of the value text
/// removed, then a referencing label, then falls back to the raw value. A
/// source that yields only whitespace counts as missing.
#[must_use]
pub fn resolve_label(sources: LabelSources<'_>) -> String {
    let enclosing = sources.enclosing_label.map(|text| {
        if sources.value.is_empty() {
            text.trim().to_string()
        } else {
            text.replacen(sources.value, "", 1).trim().to_string()
        }
    });
    let referencing = sources
        .referencing_label
        .map(|text| text.trim().to_string());
    enclosing
        .into_iter()
        .chain(referencing)
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| sources.value.to_string())
}

/// Selector for a `<label>` whose `for` attribute names `id`; `None` for a blank id.
#[must_use]
pub fn label_for_selector(id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    Some(format!("label[for=\"{escaped}\"]"))
}

/// Handle to a radio registered in [`RadioGroups`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RadioId(usize);

impl RadioId {
    /// Position of the radio in registration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Form owner of a radio. Browsers only group radios sharing both owner and name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupScope {
    /// Radio outside any form.
    #[default]
    Document,
    /// Radio owned by the form with this page-local index.
    Form(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct RadioEntry {
    scope: GroupScope,
    name: String,
    checked: bool,
}

/// Checked-state transition the DOM layer must mirror.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckChange {
    /// Radio whose state changed.
    pub id: RadioId,
    /// New checked state.
    pub checked: bool,
}

/// Checked state of every synthesized radio, grouped by form owner and `name`.
///
/// Radios without a name form a group of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioGroups {
    entries: Vec<RadioEntry>,
}

impl RadioGroups {
    /// Create an empty set of groups.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Track a radio with its initial checked state.
    ///
    /// A checked radio joining a group unchecks the previously checked member,
    /// mirroring how browsers parse duplicate `checked` attributes.
    pub fn register(&mut self, scope: GroupScope, name: &str, checked: bool) -> RadioId {
        let id = RadioId(self.entries.len());
        self.entries.push(RadioEntry {
            scope,
            name: name.to_string(),
            checked: false,
        });
        if checked {
            self.check(id);
        }
        id
    }

    /// Mark `id` checked and uncheck the rest of its group.
    pub fn check(&mut self, id: RadioId) -> Vec<CheckChange> {
        let Some((scope, name)) = self
            .entries
            .get(id.0)
            .map(|entry| (entry.scope, entry.name.clone()))
        else {
            return Vec::new();
        };
        let mut changes = Vec::new();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let in_group = if name.is_empty() {
                index == id.0
            } else {
                entry.scope == scope && entry.name == name
            };
            if !in_group {
                continue;
            }
            let next = index == id.0;
            if entry.checked != next {
                entry.checked = next;
                changes.push(CheckChange {
                    id: RadioId(index),
                    checked: next,
                });
            }
        }
        changes
    }

    /// Adopt the native checked state of every radio, in registration order.
    ///
    /// Used after the browser changed radios without a click, e.g. a form reset.
    pub fn sync_all<I>(&mut self, checked: I) -> Vec<CheckChange>
    where
        I: IntoIterator<Item = bool>,
    {
        self.entries
            .iter_mut()
            .zip(checked)
            .enumerate()
            .filter(|(_, (entry, checked))| entry.checked != *checked)
            .map(|(index, (entry, checked))| {
                entry.checked = checked;
                CheckChange {
                    id: RadioId(index),
                    checked,
                }
            })
            .collect()
    }

    #[cfg(test)]
    fn is_checked(&self, id: RadioId) -> bool {
        self.entries.get(id.0).is_some_and(|entry| entry.checked)
    }

    #[cfg(test)]
    fn checked_count(&self, scope: GroupScope, name: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.scope == scope && entry.name == name && entry.checked)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: GroupScope = GroupScope::Document;

    #[test]
    fn enclosing_label_strips_value_text() {
        let label = resolve_label(LabelSources {
            enclosing_label: Some("\n  C  Co-ed\n"),
            referencing_label: Some("ignored"),
            value: "C",
        });
        assert_eq!(label, "Co-ed");
    }

    #[test]
    fn referencing_label_is_second_choice() {
        let label = resolve_label(LabelSources {
            enclosing_label: None,
            referencing_label: Some(" Girls only "),
            value: "G",
        });
        assert_eq!(label, "Girls only");
    }

    #[test]
    fn blank_sources_fall_back_to_value() {
        let label = resolve_label(LabelSources {
            enclosing_label: Some("B"),
            referencing_label: Some("   "),
            value: "B",
        });
        assert_eq!(label, "B");
        assert_eq!(
            resolve_label(LabelSources {
                value: "IGCSE",
                ..LabelSources::default()
            }),
            "IGCSE"
        );
    }

    #[test]
    fn label_selector_quotes_the_id() {
        assert_eq!(
            label_for_selector("co_ed_1").as_deref(),
            Some(r#"label[for="co_ed_1"]"#)
        );
        assert_eq!(
            label_for_selector(r#"odd"id"#).as_deref(),
            Some(r#"label[for="odd\"id"]"#)
        );
        assert_eq!(label_for_selector(""), None);
    }

    #[test]
    fn clicking_any_member_leaves_one_checked() {
        let mut groups = RadioGroups::new();
        let boys = groups.register(DOC, "co_ed", false);
        let girls = groups.register(DOC, "co_ed", false);
        let coed = groups.register(DOC, "co_ed", true);
        let other = groups.register(DOC, "board", true);

        for id in [boys, girls, coed, girls, boys] {
            groups.check(id);
            assert_eq!(groups.checked_count(DOC, "co_ed"), 1);
            assert!(groups.is_checked(id));
        }
        assert!(groups.is_checked(boys));
        assert!(groups.is_checked(other));
    }

    #[test]
    fn check_reports_only_transitions() {
        let mut groups = RadioGroups::new();
        let first = groups.register(DOC, "grade", true);
        let second = groups.register(DOC, "grade", false);
        assert_eq!(
            groups.check(second),
            vec![
                CheckChange {
                    id: first,
                    checked: false
                },
                CheckChange {
                    id: second,
                    checked: true
                },
            ]
        );
        assert!(groups.check(second).is_empty());
    }

    #[test]
    fn unnamed_radios_are_independent() {
        let mut groups = RadioGroups::new();
        let first = groups.register(DOC, "", true);
        let second = groups.register(DOC, "", true);
        assert!(groups.is_checked(first));
        assert!(groups.is_checked(second));
        assert_eq!(groups.checked_count(DOC, ""), 2);
        assert!(groups.check(RadioId(7)).is_empty());
        assert_eq!(second.index(), 1);
    }

    #[test]
    fn same_name_in_different_forms_are_separate_groups() {
        let mut groups = RadioGroups::new();
        let sidebar = groups.register(GroupScope::Form(0), "grade", true);
        let sheet = groups.register(GroupScope::Form(1), "grade", true);
        let sheet_other = groups.register(GroupScope::Form(1), "grade", false);
        assert!(groups.is_checked(sidebar));
        assert!(groups.is_checked(sheet));

        groups.check(sheet_other);
        assert!(groups.is_checked(sidebar));
        assert!(!groups.is_checked(sheet));
        assert!(groups.is_checked(sheet_other));
        assert_eq!(groups.checked_count(GroupScope::Form(0), "grade"), 1);
        assert_eq!(groups.checked_count(GroupScope::Form(1), "grade"), 1);
        assert_eq!(groups.checked_count(DOC, "grade"), 0);
    }

    #[test]
    fn sync_adopts_native_state() {
        let mut groups = RadioGroups::new();
        let first = groups.register(DOC, "co_ed", false);
        let second = groups.register(DOC, "co_ed", true);
        assert_eq!(
            groups.sync_all([true, false]),
            vec![
                CheckChange {
                    id: first,
                    checked: true
                },
                CheckChange {
                    id: second,
                    checked: false
                },
            ]
        );
        assert!(groups.sync_all([true, false]).is_empty());
        assert!(groups.sync_all([true]).is_empty());
    }
}
