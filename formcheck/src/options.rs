//! Validator configuration.

use formdom::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options recognized by [`FormValidator`](crate::FormValidator).
///
/// Field names serialize in camelCase so options can be shared with markup
/// tooling as JSON:
///
/// ```
/// use formcheck::FormOptions;
///
/// let options = FormOptions::from_json(
///     r#"{ "ignoreClassInputStartWithCharacter": ["free-text"], "watch": true }"#,
/// ).unwrap();
/// assert!(options.watch);
/// assert_eq!(options.required_class, "require");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOptions {
    /// Text fields carrying any of these classes skip the leading-letter check.
    pub ignore_class_input_start_with_character: Vec<String>,

    /// Attach live validation when the validator is mounted.
    pub watch: bool,

    /// Class that marks a field as required and its error container.
    pub required_class: String,

    /// Class added to a container while its field is invalid.
    pub invalid_class: String,

    /// Class identifying error message nodes.
    pub message_class: String,
}

/// Extra class applied to message nodes for entry animation.
pub const FADE_IN_CLASS: &str = "fade-in";

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            ignore_class_input_start_with_character: Vec::new(),
            watch: false,
            required_class: "require".to_string(),
            invalid_class: "invalid".to_string(),
            message_class: "error-message".to_string(),
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Opt text fields with `class` out of the leading-letter check.
    pub fn ignore_class(mut self, class: impl Into<String>) -> Self {
        self.ignore_class_input_start_with_character
            .push(class.into());
        self
    }

    /// Attach live validation on mount.
    pub fn watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn required_class(mut self, class: impl Into<String>) -> Self {
        self.required_class = class.into();
        self
    }

    pub fn invalid_class(mut self, class: impl Into<String>) -> Self {
        self.invalid_class = class.into();
        self
    }

    pub fn message_class(mut self, class: impl Into<String>) -> Self {
        self.message_class = class.into();
        self
    }

    /// Check that every class name is usable as a single class token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("requiredClass", &self.required_class),
            ("invalidClass", &self.invalid_class),
            ("messageClass", &self.message_class),
        ];
        for (option, class) in named {
            check_class(option, class)?;
        }
        for class in &self.ignore_class_input_start_with_character {
            check_class("ignoreClassInputStartWithCharacter", class)?;
        }
        Ok(())
    }

    /// Whether `field` opts out of the leading-letter check.
    pub fn ignores_leading_char(&self, field: &Element) -> bool {
        self.ignore_class_input_start_with_character
            .iter()
            .any(|class| field.has_class(class))
    }
}

fn check_class(option: &'static str, class: &str) -> Result<(), ConfigError> {
    if class.is_empty() {
        return Err(ConfigError::EmptyClass { option });
    }
    if class.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidClass {
            option,
            class: class.to_string(),
        });
    }
    Ok(())
}

/// Errors raised while loading options or message catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("option '{option}' must not be empty")]
    EmptyClass { option: &'static str },

    #[error("option '{option}' has invalid class name '{class}'")]
    InvalidClass { option: &'static str, class: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FormOptions::default();
        assert!(options.ignore_class_input_start_with_character.is_empty());
        assert!(!options.watch);
        assert_eq!(options.required_class, "require");
        assert_eq!(options.invalid_class, "invalid");
        assert_eq!(options.message_class, "error-message");
    }

    #[test]
    fn test_from_json_partial() {
        let options = FormOptions::from_json(r#"{ "watch": true }"#).unwrap();
        assert!(options.watch);
        assert_eq!(options.invalid_class, "invalid");
    }

    #[test]
    fn test_from_json_rejects_bad_class() {
        let err = FormOptions::from_json(r#"{ "invalidClass": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyClass { option: "invalidClass" }));

        let err =
            FormOptions::from_json(r#"{ "ignoreClassInputStartWithCharacter": ["a b"] }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClass { .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            FormOptions::from_json("{ watch"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_ignores_leading_char() {
        let options = FormOptions::new().ignore_class("free");
        assert!(options.ignores_leading_char(&Element::input("text").class("free")));
        assert!(!options.ignores_leading_char(&Element::input("text").class("other")));
        assert!(!FormOptions::new().ignores_leading_char(&Element::input("text").class("free")));
    }
}
