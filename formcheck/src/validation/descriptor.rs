//! Field descriptors read from the live tree.

use formdom::{Element, Tag, collect_controls};

use crate::options::FormOptions;

/// Semantic kind of a control, derived once per descriptor.
///
/// Derivation order matters: a checkbox with `inputmode="email"` is still a
/// checkbox, and a text input with `inputmode="tel"` is a phone field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    SelectMultiple,
    Checkbox,
    Radio,
    Hidden,
    /// Controls no rule handles (textarea, password, number, ...).
    Other,
}

impl FieldKind {
    pub fn of(element: &Element) -> Self {
        let control_type = element.control_type();
        match control_type.as_str() {
            "checkbox" if element.tag == Tag::Input => return Self::Checkbox,
            "radio" if element.tag == Tag::Input => return Self::Radio,
            "select-one" => return Self::Select,
            "select-multiple" => return Self::SelectMultiple,
            _ => {}
        }

        match element.inputmode().as_deref() {
            Some("email") => return Self::Email,
            Some("tel") => return Self::Tel,
            _ => {}
        }

        match control_type.as_str() {
            "text" => Self::Text,
            "hidden" => Self::Hidden,
            _ => Self::Other,
        }
    }

    /// Checkbox and radio validity is a property of the whole name group.
    pub fn is_grouped(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }
}

/// Snapshot of one control, rebuilt on every validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    /// Trimmed current value.
    pub value: String,
    /// Whether the control itself carries the required class. Informational:
    /// a direct live check still runs when only a wrapper is required.
    pub is_required: bool,
    /// The control's own checked state. Informational; group rules read
    /// `any_checked`.
    pub checked: bool,
    /// Whether any input in the same name group is checked. Equal to
    /// `checked` for unnamed controls.
    pub any_checked: bool,
    pub custom_error_text: Option<String>,
    pub ignore_leading_char_rule: bool,
}

impl FieldDescriptor {
    /// Read `field` as it currently appears inside `form`.
    pub fn read(form: &Element, field: &Element, options: &FormOptions) -> Self {
        let kind = FieldKind::of(field);
        let name = field.field_name().to_string();

        let any_checked = if kind.is_grouped() && !name.is_empty() {
            group_has_checked(form, &name)
        } else {
            field.checked
        };

        Self {
            id: field.id.clone(),
            kind,
            value: field.current_value().trim().to_string(),
            is_required: field.has_class(&options.required_class),
            checked: field.checked,
            any_checked,
            custom_error_text: field
                .get_attr("data-error")
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            ignore_leading_char_rule: options.ignores_leading_char(field),
            name,
        }
    }

    /// Cheap presence check used for optimistic feedback while typing.
    /// Looser than the full rule: any non-empty value or checked group member.
    pub fn is_field_valid(&self) -> bool {
        if self.kind.is_grouped() {
            self.any_checked
        } else {
            !self.value.is_empty()
        }
    }
}

fn group_has_checked(form: &Element, name: &str) -> bool {
    collect_controls(form)
        .into_iter()
        .filter(|el| el.tag == Tag::Input && el.field_name() == name)
        .any(|member| member.checked)
}
