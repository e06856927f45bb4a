//! Rule selection.
//!
//! Both live and submit validation go through [`check`], so a field gets the
//! same verdict in either mode.

use super::descriptor::{FieldDescriptor, FieldKind};
use super::rules::{self, Verdict};

/// The rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    RequiredGroup,
    RequiredSelection,
    Email,
    Phone,
    Text,
}

impl Rule {
    /// Evaluate the rule against a descriptor, returning the raw rule verdict.
    pub fn evaluate(self, field: &FieldDescriptor) -> Verdict {
        match self {
            Self::RequiredGroup => rules::required_group(field.any_checked),
            Self::RequiredSelection => rules::required_selection(Some(&field.value)),
            Self::Email => rules::email(&field.value),
            Self::Phone => rules::phone(&field.value),
            Self::Text => rules::text(&field.value, field.ignore_leading_char_rule),
        }
    }
}

/// Select the rule for a field kind. `None` means the field is always valid.
pub fn classify(kind: FieldKind) -> Option<Rule> {
    match kind {
        FieldKind::Checkbox | FieldKind::Radio => Some(Rule::RequiredGroup),
        FieldKind::Select | FieldKind::SelectMultiple => Some(Rule::RequiredSelection),
        FieldKind::Email => Some(Rule::Email),
        FieldKind::Tel => Some(Rule::Phone),
        FieldKind::Text => Some(Rule::Text),
        FieldKind::Hidden | FieldKind::Other => None,
    }
}

/// Classify and evaluate a field, resolving the message to display.
///
/// Custom error text replaces the "required" message of selects and groups.
/// Text, email and phone messages always win.
pub fn check(field: &FieldDescriptor) -> Option<Verdict> {
    let rule = classify(field.kind)?;
    let mut verdict = rule.evaluate(field);

    if let Some(custom) = field.custom_error_text.as_ref().filter(|_| !verdict.dynamic) {
        verdict.message = custom.clone();
    }

    log::trace!(
        "[check] field={} kind={:?} rule={:?} invalid={}",
        field.id,
        field.kind,
        rule,
        verdict.invalid
    );
    Some(verdict)
}
