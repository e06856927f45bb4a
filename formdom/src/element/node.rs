use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element tag names understood by the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Form,
    Div,
    Label,
    Span,
    Input,
    TextArea,
    Select,
    Option,
    Button,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Div => "div",
            Self::Label => "label",
            Self::Span => "span",
            Self::Input => "input",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::Option => "option",
            Self::Button => "button",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Markup
    pub classes: Vec<String>,
    /// Raw attributes (`type`, `name`, `inputmode`, `data-error`, `multiple`, ...).
    pub attrs: HashMap<String, String>,

    // Control state
    /// Current value for inputs and textareas, submitted value for options.
    pub value: String,
    /// Checked state for checkbox and radio inputs.
    pub checked: bool,
    /// Selected state for options.
    pub selected: bool,
    /// Disabled controls are skipped during serialization.
    pub disabled: bool,
}

impl Element {
    fn with_tag(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            content: Content::None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            value: String::new(),
            checked: false,
            selected: false,
            disabled: false,
        }
    }

    pub fn form() -> Self {
        Self::with_tag(Tag::Form)
    }

    pub fn div() -> Self {
        Self::with_tag(Tag::Div)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::with_tag(Tag::Label).text_content(text)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::with_tag(Tag::Span).text_content(text)
    }

    /// Create an `<input>` with the given `type` attribute.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::with_tag(Tag::Input).attr("type", input_type)
    }

    pub fn textarea() -> Self {
        Self::with_tag(Tag::TextArea)
    }

    pub fn select() -> Self {
        Self::with_tag(Tag::Select)
    }

    /// Create an `<option>` whose submitted value and label are `value`.
    pub fn option(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::with_tag(Tag::Option)
            .text_content(value.clone())
            .value(value)
    }

    pub fn button(button_type: impl Into<String>) -> Self {
        Self::with_tag(Tag::Button).attr("type", button_type)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn input_mode(self, mode: impl Into<String>) -> Self {
        self.attr("inputmode", mode)
    }

    /// Custom error text shown instead of a rule's default message.
    pub fn error_text(self, text: impl Into<String>) -> Self {
        self.attr("data-error", text)
    }

    pub fn multiple(self) -> Self {
        self.attr("multiple", "")
    }

    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Control state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    // Classes
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present. Returns true if the list changed.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class if present. Returns true if the list changed.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Attributes
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// The `name` attribute, empty when missing.
    pub fn field_name(&self) -> &str {
        self.get_attr("name").unwrap_or("")
    }

    /// The `inputmode` attribute, lowercased.
    pub fn inputmode(&self) -> Option<String> {
        self.get_attr("inputmode").map(str::to_ascii_lowercase)
    }

    /// Whether this element is a form control (`input`, `textarea`, `select` or `button`).
    pub fn is_control(&self) -> bool {
        matches!(
            self.tag,
            Tag::Input | Tag::TextArea | Tag::Select | Tag::Button
        )
    }

    /// Whether this element is an editable field (`input`, `textarea` or `select`).
    pub fn is_field(&self) -> bool {
        matches!(self.tag, Tag::Input | Tag::TextArea | Tag::Select)
    }

    /// The control type as a browser reports it: the lowercased `type` attribute
    /// for inputs (defaulting to `text`), `select-one`/`select-multiple` for
    /// selects, `textarea`, and `submit` for untyped buttons.
    pub fn control_type(&self) -> String {
        match self.tag {
            Tag::Input => self
                .get_attr("type")
                .filter(|t| !t.is_empty())
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "text".to_string()),
            Tag::Select if self.has_attr("multiple") => "select-multiple".to_string(),
            Tag::Select => "select-one".to_string(),
            Tag::TextArea => "textarea".to_string(),
            Tag::Button => self
                .get_attr("type")
                .filter(|t| !t.is_empty())
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "submit".to_string()),
            _ => String::new(),
        }
    }

    /// Whether this is a checkbox or radio input.
    pub fn is_checkable(&self) -> bool {
        self.tag == Tag::Input && matches!(self.control_type().as_str(), "checkbox" | "radio")
    }

    // Select semantics
    /// Direct `<option>` children of a select.
    pub fn options(&self) -> impl Iterator<Item = &Element> {
        self.child_elements()
            .iter()
            .filter(|child| child.tag == Tag::Option)
    }

    /// Values of all selected options, in document order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options()
            .filter(|option| option.selected)
            .map(|option| option.value.clone())
            .collect()
    }

    /// The current value of the control. For selects this is the first
    /// selected option; a single select with nothing marked falls back to its
    /// first option, a multiple select to the empty string.
    pub fn current_value(&self) -> String {
        if self.tag != Tag::Select {
            return self.value.clone();
        }

        if let Some(option) = self.options().find(|option| option.selected) {
            return option.value.clone();
        }

        if self.has_attr("multiple") {
            String::new()
        } else {
            self.options()
                .next()
                .map(|option| option.value.clone())
                .unwrap_or_default()
        }
    }

    /// Select the option at `index` and deselect every other option.
    /// Returns false if there is no such option.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(children) = self.child_elements_mut() else {
            return false;
        };

        let mut found = false;
        for (i, option) in children
            .iter_mut()
            .filter(|child| child.tag == Tag::Option)
            .enumerate()
        {
            option.selected = i == index;
            found |= i == index;
        }
        found
    }

    /// Select the option with the given value. Single selects deselect every
    /// other option; multiple selects add to the current selection.
    /// Returns false if no option carries the value.
    pub fn select_value(&mut self, value: &str) -> bool {
        if !self.options().any(|option| option.value == value) {
            return false;
        }

        let multiple = self.has_attr("multiple");
        if let Some(children) = self.child_elements_mut() {
            for option in children.iter_mut().filter(|child| child.tag == Tag::Option) {
                if option.value == value {
                    option.selected = true;
                } else if !multiple {
                    option.selected = false;
                }
            }
        }
        true
    }
}
