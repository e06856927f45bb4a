//! Form serialization and reset.

use indexmap::IndexMap;
use serde::Serialize;

use formdom::{Element, Tag, collect_controls, collect_ids, find_element_mut};

use crate::validation::FormValidator;

/// Control types never included in serialized data.
const SKIPPED_TYPES: [&str; 4] = ["file", "reset", "submit", "button"];

/// A serialized field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Single(String),
    /// Selected option values of a multiple select, in document order.
    Multiple(Vec<String>),
}

impl FormValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }
}

/// Name to value mapping of a form. Keys keep the order in which they were
/// first seen; a later control with the same name overwrites the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    entries: IndexMap<String, FormValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FormValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Collect the submittable values of every named, enabled control.
///
/// Unchecked checkboxes and radios are left out entirely.
pub fn serialize_form(form: &Element) -> FormData {
    let mut data = FormData::new();

    for control in collect_controls(form) {
        let name = control.field_name();
        let control_type = control.control_type();
        if name.is_empty() || control.disabled || SKIPPED_TYPES.contains(&control_type.as_str())
        {
            continue;
        }

        let value = match control_type.as_str() {
            "select-multiple" => FormValue::Multiple(control.selected_values()),
            "select-one" => FormValue::Single(control.current_value()),
            "checkbox" | "radio" if !control.checked => continue,
            _ => FormValue::Single(control.value.clone()),
        };
        data.insert(name, value);
    }

    data
}

/// Reset every visible field: inputs and textareas to empty, checkboxes and
/// radios unchecked, selects to their first option. Button-like inputs keep
/// their labels. Annotations are left alone.
pub fn clear_form(form: &mut Element) {
    let field_ids = collect_ids(form, |el| {
        el.is_field()
            && !matches!(
                el.control_type().as_str(),
                "hidden" | "submit" | "reset" | "button"
            )
    });

    for id in field_ids {
        let Some(field) = find_element_mut(form, &id) else {
            continue;
        };

        if field.is_checkable() {
            field.checked = false;
        } else if field.tag == Tag::Select {
            field.select_index(0);
        } else {
            field.value.clear();
        }
    }
}

impl FormValidator {
    /// Snapshot the form's data. See [`serialize_form`].
    pub fn serialize(&self, form: &Element) -> FormData {
        serialize_form(form)
    }

    /// Reset the form's fields. See [`clear_form`].
    pub fn clear(&self, form: &mut Element) {
        clear_form(form);
        log::debug!("[clear] form {} reset", form.id);
    }
}
