//! The validation orchestrator.

use formdom::{Element, closest_with_class, collect_ids, find_element};

use super::annotation;
use super::classifier;
use super::descriptor::FieldDescriptor;
use super::result::{FieldError, ValidationResult};
use super::rules::Verdict;
use crate::i18n::{Catalog, Translate};
use crate::live::LiveBinding;
use crate::options::FormOptions;

/// Callback invoked with the container ID of the first invalid field after a
/// failed submit pass (scroll into view, focus, ...).
pub type FirstInvalidHook = Box<dyn Fn(&str) + Send + Sync>;

/// Validates the required fields of a form tree.
///
/// The validator holds configuration only; the tree passed to each call is
/// the single source of truth for values and annotation state.
///
/// # Example
///
/// ```
/// use formcheck::{FormOptions, FormValidator};
/// use formdom::Element;
///
/// let mut form = Element::form().children(vec![
///     Element::input("text").id("email").name("email").class("require")
///         .input_mode("email").value("x@y"),
/// ]);
///
/// let validator = FormValidator::new(FormOptions::default());
/// let result = validator.validate_all(&mut form);
///
/// assert!(result.is_invalid());
/// assert_eq!(result.first_invalid_container(), Some("email"));
/// ```
pub struct FormValidator {
    pub(crate) options: FormOptions,
    catalog: Box<dyn Translate>,
    on_first_invalid: Option<FirstInvalidHook>,
    pub(crate) bindings: Vec<LiveBinding>,
    pub(crate) next_subscription: u64,
}

impl FormValidator {
    /// Create a validator. Live validation is not attached; see [`mount`](Self::mount).
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            catalog: Box::new(Catalog::default()),
            on_first_invalid: None,
            bindings: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a validator for `form`, attaching live validation when the
    /// `watch` option is set.
    pub fn mount(options: FormOptions, form: &Element) -> Self {
        let mut validator = Self::new(options);
        if validator.options.watch {
            validator.attach_live_validation(form);
        }
        validator
    }

    /// Use `catalog` to translate messages before they are displayed.
    pub fn with_catalog(mut self, catalog: impl Translate + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    /// Register a hook called with the first invalid container after a
    /// failed [`validate_all`](Self::validate_all). Without one, nothing happens.
    pub fn on_first_invalid(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_first_invalid = Some(Box::new(hook));
        self
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Evaluate a field without touching annotations. `None` when the ID is
    /// unknown or no rule applies to the field.
    pub fn verdict(&self, form: &Element, field_id: &str) -> Option<Verdict> {
        let field = find_element(form, field_id)?;
        let descriptor = FieldDescriptor::read(form, field, &self.options);
        classifier::check(&descriptor)
    }

    /// Live check for one field (on blur, or on change for grouped and select
    /// fields).
    ///
    /// Clears the container's annotation, then marks it and shows the message
    /// if the field is invalid. No-op when the field has no container.
    /// Returns the verdict, or `None` when nothing was evaluated.
    pub fn validate_field(&self, form: &mut Element, field_id: &str) -> Option<Verdict> {
        let Some(container) = closest_with_class(form, field_id, &self.options.required_class)
        else {
            log::debug!("[validate_field] no container for {field_id}");
            return None;
        };

        annotation::clear_annotation(form, &container, &self.options);

        let verdict = self.verdict(form, field_id)?;
        if verdict.invalid {
            self.annotate(form, &container, &verdict.message);
        }

        log::debug!(
            "[validate_field] field={field_id} container={container} invalid={}",
            verdict.invalid
        );
        Some(verdict)
    }

    /// Optimistic check run on every edit: once the field has any value (or a
    /// checked group member), drop its error state without running the full
    /// rule. Returns true if the annotation was cleared.
    pub fn on_field_improved(&self, form: &mut Element, field_id: &str) -> bool {
        let view: &Element = form;
        let filled = find_element(view, field_id)
            .map(|field| FieldDescriptor::read(view, field, &self.options))
            .is_some_and(|descriptor| descriptor.is_field_valid());
        if !filled {
            return false;
        }

        let Some(container) = closest_with_class(form, field_id, &self.options.required_class)
        else {
            return false;
        };

        annotation::clear_annotation(form, &container, &self.options);
        log::trace!("[on_field_improved] cleared {container}");
        true
    }

    /// Submit-time pass over every required field in document order.
    ///
    /// Every invalid field's container is marked, but only the first one gets
    /// a message. All fields are visited even after the first failure.
    pub fn validate_all(&self, form: &mut Element) -> ValidationResult {
        let required = &self.options.required_class;
        let field_ids = collect_ids(form, |el| el.is_field() && el.has_class(required));

        let mut errors = Vec::new();
        let mut target: Option<String> = None;

        for field_id in field_ids {
            let container = closest_with_class(form, &field_id, required);
            if let Some(container) = &container {
                annotation::clear_annotation(form, container, &self.options);
            }

            let Some(verdict) = self.verdict(form, &field_id) else {
                continue;
            };
            if verdict.is_valid() {
                continue;
            }

            if let Some(container) = &container {
                annotation::mark_invalid(form, container, &self.options);
                if target.is_none() {
                    self.annotate(form, container, &verdict.message);
                    target = Some(container.clone());
                }
            }

            let field_name = find_element(form, &field_id)
                .map(|field| field.field_name().to_string())
                .unwrap_or_default();
            errors.push(FieldError {
                field_name,
                field_id,
                container_id: container,
                message: verdict.message,
            });
        }

        log::debug!(
            "[validate_all] invalid={} target={target:?}",
            errors.len()
        );

        if let (Some(target), Some(hook)) = (&target, &self.on_first_invalid) {
            hook(target.as_str());
        }

        ValidationResult::from(errors)
    }

    /// Mark a container invalid and show the translated message after it.
    fn annotate(&self, form: &mut Element, container: &str, message: &str) {
        annotation::mark_invalid(form, container, &self.options);
        let text = self.catalog.translate(message);
        if !annotation::show_message(form, container, text, &self.options) {
            log::debug!("[annotate] container {container} has no parent for a message");
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("options", &self.options)
            .field("on_first_invalid", &self.on_first_invalid.is_some())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
