use std::fs::File;

use formcheck::prelude::*;
use formdom::find_element_mut;
use simplelog::{Config, LevelFilter, WriteLogger};

fn signup_form() -> Element {
    Element::form().id("signup").children(vec![
        Element::div().children(vec![
            Element::label("Name"),
            Element::input("text").id("name").name("name").class("require"),
        ]),
        Element::div().children(vec![
            Element::label("Email"),
            Element::input("text")
                .id("email")
                .name("email")
                .class("require")
                .input_mode("email"),
        ]),
        Element::div().children(vec![
            Element::label("Phone"),
            Element::input("text")
                .id("phone")
                .name("phone")
                .class("require")
                .input_mode("tel"),
        ]),
        Element::div().children(vec![
            Element::input("checkbox")
                .id("terms")
                .name("terms")
                .class("require")
                .value("accepted")
                .error_text("Please accept the terms"),
        ]),
        Element::button("submit").id("send"),
    ])
}

fn report(result: &ValidationResult) {
    match result {
        ValidationResult::Valid => println!("valid"),
        ValidationResult::Invalid(errors) => {
            for error in errors {
                println!("  {:<8} {}", error.field_name, error.message);
            }
        }
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("signup.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut form = signup_form();
    let options = FormOptions::default().watch(true);
    let validator = FormValidator::mount(options, &form).on_first_invalid(|container| {
        println!("-> scroll to {container}");
    });

    println!("submit empty form:");
    report(&validator.validate_all(&mut form));

    // Simulate the user filling in the form
    find_element_mut(&mut form, "name").unwrap().value = "Ada".into();
    validator.dispatch(&mut form, &Event::input("name"));
    validator.dispatch(&mut form, &Event::blur("name"));

    find_element_mut(&mut form, "email").unwrap().value = "ada@example.com".into();
    validator.dispatch(&mut form, &Event::blur("email"));

    find_element_mut(&mut form, "phone").unwrap().value = "06 1234 5678".into();
    validator.dispatch(&mut form, &Event::blur("phone"));

    find_element_mut(&mut form, "terms").unwrap().checked = true;
    validator.dispatch(&mut form, &Event::change("terms"));

    println!("submit filled form:");
    let result = validator.validate_all(&mut form);
    report(&result);

    if result.is_valid() {
        println!("{}", validator.serialize(&form).to_json()?);
    }

    Ok(())
}
