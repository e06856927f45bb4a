//! Required-field validation.
//!
//! Validation runs in two modes that share one rule path:
//!
//! - **Live**: [`FormValidator::validate_field`] re-checks a single field as the
//!   user leaves or changes it, and [`FormValidator::on_field_improved`] clears
//!   error state as soon as the field has a value.
//! - **Submit**: [`FormValidator::validate_all`] checks every required field,
//!   marks all failures and shows exactly one message, on the first one.
//!
//! # Example
//!
//! ```
//! use formcheck::FormValidator;
//! use formdom::{find_element_mut, Element};
//!
//! let mut form = Element::form().children(vec![
//!     Element::div().id("row").child(
//!         Element::input("text").id("phone").name("phone").class("require")
//!             .input_mode("tel").value("12345"),
//!     ),
//! ]);
//! let validator = FormValidator::default();
//!
//! let verdict = validator.validate_field(&mut form, "phone").unwrap();
//! assert_eq!(verdict.message, "Please enter a valid phone number");
//!
//! find_element_mut(&mut form, "phone").unwrap().value = "0123456789".into();
//! assert!(validator.validate_all(&mut form).is_valid());
//! ```

pub mod annotation;
mod classifier;
mod descriptor;
mod result;
pub mod rules;
mod validator;

pub use classifier::{Rule, check, classify};
pub use descriptor::{FieldDescriptor, FieldKind};
pub use result::{FieldError, ValidationResult};
pub use rules::Verdict;
pub use validator::{FirstInvalidHook, FormValidator};
