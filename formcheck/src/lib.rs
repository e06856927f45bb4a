//! Required-field validation for form trees built with [`formdom`].
//!
//! The engine reads each field's current state from the tree, selects one rule
//! per field kind, annotates invalid fields, and serializes the form once it
//! passes.

pub mod form_data;
pub mod i18n;
pub mod live;
pub mod options;
pub mod validation;

pub use form_data::{FormData, FormValue, clear_form, serialize_form};
pub use i18n::{Catalog, Translate};
pub use live::{Check, Subscription};
pub use options::{ConfigError, FormOptions};
pub use validation::{
    FieldDescriptor, FieldError, FieldKind, FormValidator, Rule, ValidationResult, Verdict,
};

pub mod prelude {
    pub use crate::form_data::{FormData, FormValue};
    pub use crate::i18n::{Catalog, Translate};
    pub use crate::live::{Check, Subscription};
    pub use crate::options::FormOptions;
    pub use crate::validation::{FieldError, FormValidator, ValidationResult, Verdict};
    pub use formdom::{Element, Event};
}
