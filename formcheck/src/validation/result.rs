/// A required field that failed its rule during a submit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (`name` attribute).
    pub field_name: String,
    /// Field element ID.
    pub field_id: String,
    /// Container that was marked invalid (None when the field has no container).
    pub container_id: Option<String>,
    /// Resolved message key, before translation.
    pub message: String,
}

/// Result of a submit-time pass over all required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    /// Every flagged required field, in document order.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// True when no required field was flagged.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Flagged required fields in document order, empty for a valid form.
    pub fn errors(&self) -> &[FieldError] {
        if let Self::Invalid(errors) = self {
            errors
        } else {
            &[]
        }
    }

    /// First flagged field, which may have no container.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Container carrying the single visible message, i.e. the first flagged
    /// field that has one. Also the scroll/focus target.
    pub fn first_invalid_container(&self) -> Option<&str> {
        self.errors()
            .iter()
            .find_map(|error| error.container_id.as_deref())
    }
}

impl From<Vec<FieldError>> for ValidationResult {
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(id: &str, container: Option<&str>) -> FieldError {
        FieldError {
            field_name: id.to_string(),
            field_id: id.to_string(),
            container_id: container.map(str::to_string),
            message: "This field is required".to_string(),
        }
    }

    #[test]
    fn test_first_container_skips_uncontained_fields() {
        let result = ValidationResult::from(vec![error("a", None), error("b", Some("row-b"))]);
        assert!(result.is_invalid());
        assert_eq!(result.first_error().map(|e| e.field_id.as_str()), Some("a"));
        assert_eq!(result.first_invalid_container(), Some("row-b"));
    }

    #[test]
    fn test_empty_errors_are_valid() {
        let result = ValidationResult::from(Vec::new());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.first_invalid_container(), None);
    }
}
