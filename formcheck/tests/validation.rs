use std::sync::{Arc, Mutex};

use formcheck::validation::annotation::{is_marked_invalid, message_for};
use formcheck::{Catalog, FormOptions, FormValidator};
use formdom::{collect_ids, find_element, find_element_mut, Element};

fn signup_form() -> Element {
    Element::form().id("signup").children(vec![
        Element::div().id("row-name").children(vec![
            Element::label("Name"),
            Element::input("text")
                .id("name")
                .name("name")
                .class("require")
                .error_text("Please enter your name"),
        ]),
        Element::div().id("row-email").children(vec![
            Element::label("Email"),
            Element::input("text")
                .id("email")
                .name("email")
                .class("require")
                .input_mode("email")
                .error_text("Email is required"),
        ]),
        Element::div().id("row-phone").children(vec![
            Element::label("Phone"),
            Element::input("text")
                .id("phone")
                .name("phone")
                .class("require")
                .input_mode("tel"),
        ]),
        Element::div().id("row-country").children(vec![
            Element::select()
                .id("country")
                .name("country")
                .class("require")
                .children(vec![
                    Element::option("").id("country-none"),
                    Element::option("nl").id("country-nl"),
                    Element::option("be").id("country-be"),
                ]),
        ]),
        Element::div().id("row-plan").children(vec![
            Element::input("radio")
                .id("plan-basic")
                .name("plan")
                .class("require")
                .value("basic"),
            Element::input("radio")
                .id("plan-pro")
                .name("plan")
                .class("require")
                .value("pro"),
        ]),
        Element::div().id("row-notes").children(vec![
            Element::textarea().id("notes").name("notes").class("require"),
        ]),
        Element::input("hidden").id("token").name("token").value("abc"),
        Element::button("submit").id("send").name("send"),
    ])
}

fn fill_valid(form: &mut Element) {
    find_element_mut(form, "name").unwrap().value = "Ada".into();
    find_element_mut(form, "email").unwrap().value = "ada@example.com".into();
    find_element_mut(form, "phone").unwrap().value = "012 345 6789".into();
    find_element_mut(form, "country").unwrap().select_value("nl");
    find_element_mut(form, "plan-pro").unwrap().checked = true;
}

fn message_count(form: &Element, options: &FormOptions) -> usize {
    collect_ids(form, |el| el.has_class(&options.message_class)).len()
}

fn required_ids(form: &Element) -> Vec<String> {
    collect_ids(form, |el| el.is_field() && el.has_class("require"))
}

// ============================================================================
// Live validation
// ============================================================================

#[test]
fn test_validate_field_marks_and_shows_message() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    find_element_mut(&mut form, "name").unwrap().value = "7John".into();
    let verdict = validator.validate_field(&mut form, "name").unwrap();

    // Custom text never replaces the format message of a text field
    assert!(verdict.invalid);
    assert_eq!(verdict.message, "Invalid format");
    assert!(is_marked_invalid(&form, "name", &options));
    assert_eq!(message_for(&form, "name", &options), Some("Invalid format"));
}

#[test]
fn test_validate_field_is_idempotent() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "email");
    let first = form.clone();
    validator.validate_field(&mut form, "email");

    assert_eq!(form, first);
    assert_eq!(message_count(&form, &options), 1);
    assert_eq!(
        find_element(&form, "email").unwrap().classes,
        vec!["require", "invalid"]
    );
}

#[test]
fn test_validate_field_clears_when_corrected() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "email");
    assert_eq!(message_for(&form, "email", &options), Some("Please enter email"));

    find_element_mut(&mut form, "email").unwrap().value = "x@y".into();
    validator.validate_field(&mut form, "email");
    assert_eq!(message_for(&form, "email", &options), Some("Invalid email format"));

    find_element_mut(&mut form, "email").unwrap().value = "a.b@sub.example.com".into();
    let verdict = validator.validate_field(&mut form, "email").unwrap();
    assert!(verdict.is_valid());
    assert!(!is_marked_invalid(&form, "email", &options));
    assert_eq!(message_count(&form, &options), 0);
}

#[test]
fn test_validate_field_without_container_is_noop() {
    let mut form = Element::form().children(vec![
        Element::div().child(Element::input("text").id("loose").name("loose")),
    ]);
    let before = form.clone();
    let validator = FormValidator::default();

    assert!(validator.validate_field(&mut form, "loose").is_none());
    assert!(validator.validate_field(&mut form, "missing").is_none());
    assert_eq!(form, before);
}

#[test]
fn test_validate_field_uses_wrapping_container() {
    let mut form = Element::form().children(vec![
        Element::div()
            .id("wrapper")
            .class("require")
            .child(Element::input("text").id("city").name("city")),
    ]);
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "city");
    assert!(is_marked_invalid(&form, "wrapper", &options));
    assert_eq!(message_for(&form, "wrapper", &options), Some("Invalid format"));
}

#[test]
fn test_unhandled_kind_is_always_valid() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    assert!(validator.validate_field(&mut form, "notes").is_none());
    assert!(!is_marked_invalid(&form, "notes", &options));
}

#[test]
fn test_on_field_improved_clears_optimistically() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "email");
    assert!(!validator.on_field_improved(&mut form, "email"));
    assert!(is_marked_invalid(&form, "email", &options));

    // Not a valid address yet, but no longer empty
    find_element_mut(&mut form, "email").unwrap().value = "a".into();
    assert!(validator.on_field_improved(&mut form, "email"));
    assert!(!is_marked_invalid(&form, "email", &options));
    assert_eq!(message_count(&form, &options), 0);

    // The authoritative check brings the error back
    validator.validate_field(&mut form, "email");
    assert_eq!(message_for(&form, "email", &options), Some("Invalid email format"));
}

#[test]
fn test_on_field_improved_for_radio_group() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "plan-basic");
    assert!(is_marked_invalid(&form, "plan-basic", &options));

    find_element_mut(&mut form, "plan-pro").unwrap().checked = true;
    assert!(validator.on_field_improved(&mut form, "plan-basic"));
    assert!(!is_marked_invalid(&form, "plan-basic", &options));
}

#[test]
fn test_live_checks_in_either_order_agree() {
    let validator = FormValidator::default();
    let options = validator.options().clone();

    let mut a = signup_form();
    let mut b = signup_form();
    find_element_mut(&mut a, "phone").unwrap().value = "12345".into();
    find_element_mut(&mut b, "phone").unwrap().value = "12345".into();

    validator.validate_field(&mut a, "phone");
    validator.on_field_improved(&mut a, "phone");

    validator.on_field_improved(&mut b, "phone");
    validator.validate_field(&mut b, "phone");

    // Optimistic clear ran last on `a`, so only `b` still shows the error
    assert_eq!(message_count(&a, &options), 0);
    assert_eq!(
        message_for(&b, "phone", &options),
        Some("Please enter a valid phone number")
    );

    // Running the authoritative check again converges both trees
    validator.validate_field(&mut a, "phone");
    assert_eq!(a, b);
}

// ============================================================================
// Submit validation
// ============================================================================

#[test]
fn test_validate_all_single_message() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    let result = validator.validate_all(&mut form);
    assert!(result.is_invalid());

    let invalid: Vec<&str> = result.errors().iter().map(|e| e.field_id.as_str()).collect();
    assert_eq!(
        invalid,
        vec!["name", "email", "phone", "country", "plan-basic", "plan-pro"]
    );

    for id in &invalid {
        assert!(is_marked_invalid(&form, id, &options), "{id} not marked");
    }
    assert_eq!(message_count(&form, &options), 1);
    assert_eq!(result.first_invalid_container(), Some("name"));
    assert_eq!(message_for(&form, "name", &options), Some("Invalid format"));
}

#[test]
fn test_validate_all_moves_message_to_new_first_failure() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_all(&mut form);
    find_element_mut(&mut form, "name").unwrap().value = "Ada".into();
    let result = validator.validate_all(&mut form);

    assert_eq!(result.first_invalid_container(), Some("email"));
    assert_eq!(message_count(&form, &options), 1);
    assert!(!is_marked_invalid(&form, "name", &options));
    assert_eq!(message_for(&form, "email", &options), Some("Please enter email"));
}

#[test]
fn test_validate_all_field_without_container() {
    // A required control used as the traversal root has no container
    let mut root = Element::input("text")
        .id("outer")
        .name("outer")
        .class("require")
        .child(Element::input("text").id("inner").name("inner").class("require"));
    let validator = FormValidator::default();
    let options = validator.options().clone();

    let result = validator.validate_all(&mut root);

    assert!(result.is_invalid());
    let errors = result.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field_id, "outer");
    assert_eq!(errors[0].container_id, None);
    assert!(!root.has_class(&options.invalid_class));

    // The single message goes to the next invalid field instead
    assert_eq!(errors[1].container_id.as_deref(), Some("inner"));
    assert_eq!(result.first_invalid_container(), Some("inner"));
    assert!(is_marked_invalid(&root, "inner", &options));
    assert_eq!(message_for(&root, "inner", &options), Some("Invalid format"));
    assert_eq!(message_count(&root, &options), 1);
}

#[test]
fn test_validate_all_valid_form() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_all(&mut form);
    fill_valid(&mut form);
    let result = validator.validate_all(&mut form);

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert_eq!(message_count(&form, &options), 0);
    for id in required_ids(&form) {
        assert!(!is_marked_invalid(&form, &id, &options));
    }
}

#[test]
fn test_modes_agree() {
    let validator = FormValidator::default();
    let mut form = signup_form();
    find_element_mut(&mut form, "name").unwrap().value = "9lives".into();
    find_element_mut(&mut form, "phone").unwrap().value = "1234567890".into();
    find_element_mut(&mut form, "plan-basic").unwrap().checked = true;

    let mut live = form.clone();
    let live_verdicts: Vec<_> = required_ids(&form)
        .iter()
        .map(|id| (id.clone(), validator.validate_field(&mut live, id)))
        .collect();

    let result = validator.validate_all(&mut form);

    for (id, verdict) in live_verdicts {
        let submit_error = result.errors().iter().find(|e| e.field_id == id);
        match verdict {
            Some(verdict) if verdict.invalid => {
                let error = submit_error.unwrap_or_else(|| panic!("{id} missing in submit"));
                assert_eq!(error.message, verdict.message, "{id}");
            }
            _ => assert!(submit_error.is_none(), "{id} only invalid on submit"),
        }
    }
}

#[test]
fn test_first_invalid_hook() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let validator = FormValidator::default().on_first_invalid(move |container| {
        sink.lock().unwrap().push(container.to_string());
    });

    let mut form = signup_form();
    validator.validate_all(&mut form);
    fill_valid(&mut form);
    validator.validate_all(&mut form);

    assert_eq!(*seen.lock().unwrap(), vec!["name".to_string()]);
}

#[test]
fn test_messages_are_translated() {
    let catalog = Catalog::new().with("Please enter email", "Vul uw e-mailadres in");
    let validator = FormValidator::default().with_catalog(catalog);
    let options = validator.options().clone();

    let mut form = signup_form();
    find_element_mut(&mut form, "name").unwrap().value = "Ada".into();
    let result = validator.validate_all(&mut form);

    // The result keeps the key, the rendered node shows the translation
    assert_eq!(result.first_error().unwrap().message, "Please enter email");
    assert_eq!(
        message_for(&form, "email", &options),
        Some("Vul uw e-mailadres in")
    );
}

#[test]
fn test_ignore_class_skips_leading_letter_rule() {
    let options = FormOptions::default().ignore_class("free-text");
    let validator = FormValidator::new(options);

    let mut form = Element::form().children(vec![
        Element::input("text")
            .id("street")
            .name("street")
            .class("require")
            .class("free-text")
            .value("12 Main St"),
        Element::input("text")
            .id("city")
            .name("city")
            .class("require")
            .value("12 Main St"),
    ]);

    let result = validator.validate_all(&mut form);
    let invalid: Vec<&str> = result.errors().iter().map(|e| e.field_id.as_str()).collect();
    assert_eq!(invalid, vec!["city"]);
}

#[test]
fn test_custom_classes() {
    let options = FormOptions::default()
        .required_class("needed")
        .invalid_class("has-error")
        .message_class("hint");
    let validator = FormValidator::new(options.clone());

    let mut form = Element::form().children(vec![
        Element::input("text").id("a").name("a").class("needed"),
        Element::input("text").id("b").name("b").class("require"),
    ]);

    let result = validator.validate_all(&mut form);
    assert_eq!(result.errors().len(), 1);
    assert!(find_element(&form, "a").unwrap().has_class("has-error"));
    assert_eq!(message_for(&form, "a", &options), Some("Invalid format"));
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_and_revalidate() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    fill_valid(&mut form);
    assert!(validator.validate_all(&mut form).is_valid());

    validator.clear(&mut form);
    assert_eq!(message_count(&form, &options), 0);

    let result = validator.validate_all(&mut form);
    let messages: Vec<(&str, &str)> = result
        .errors()
        .iter()
        .map(|e| (e.field_id.as_str(), e.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("name", "Invalid format"),
            ("email", "Please enter email"),
            ("phone", "Please enter phone number"),
            ("country", "This field is required"),
            ("plan-basic", "This field is required"),
            ("plan-pro", "This field is required"),
        ]
    );
    assert_eq!(message_for(&form, "name", &options), Some("Invalid format"));

    // Live checks report the same default messages
    for (id, message) in messages {
        let verdict = validator.verdict(&form, id).unwrap();
        assert_eq!(verdict.message, message, "{id}");
    }
}

#[test]
fn test_custom_text_used_for_groups_and_selects() {
    let mut form = Element::form().children(vec![
        Element::div().id("row-country").children(vec![
            Element::select()
                .id("country")
                .name("country")
                .class("require")
                .error_text("Pick a country")
                .children(vec![Element::option(""), Element::option("nl")]),
        ]),
        Element::div().id("row-terms").children(vec![
            Element::input("checkbox")
                .id("terms")
                .name("terms")
                .class("require")
                .error_text("Please accept the terms"),
        ]),
    ]);
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_field(&mut form, "terms");
    assert_eq!(
        message_for(&form, "terms", &options),
        Some("Please accept the terms")
    );

    let result = validator.validate_all(&mut form);
    assert_eq!(result.first_error().unwrap().message, "Pick a country");
    assert_eq!(message_for(&form, "country", &options), Some("Pick a country"));
}

#[test]
fn test_clear_resets_fields() {
    let mut form = signup_form();
    fill_valid(&mut form);
    find_element_mut(&mut form, "notes").unwrap().value = "hello".into();

    let validator = FormValidator::default();
    validator.clear(&mut form);

    assert_eq!(find_element(&form, "name").unwrap().value, "");
    assert_eq!(find_element(&form, "notes").unwrap().value, "");
    assert!(!find_element(&form, "plan-pro").unwrap().checked);
    assert_eq!(find_element(&form, "country").unwrap().current_value(), "");
    assert!(find_element(&form, "country-none").unwrap().selected);
    // Hidden inputs keep their value
    assert_eq!(find_element(&form, "token").unwrap().value, "abc");
}

#[test]
fn test_clear_leaves_annotations() {
    let mut form = signup_form();
    let validator = FormValidator::default();
    let options = validator.options().clone();

    validator.validate_all(&mut form);
    validator.clear(&mut form);

    assert_eq!(message_count(&form, &options), 1);
    assert!(is_marked_invalid(&form, "email", &options));
}
