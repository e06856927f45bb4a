//! Error annotations: the invalid marker on a container and the message node
//! placed directly after it.

use formdom::{
    Element, find_element, find_element_mut, insert_after, next_sibling, remove_next_sibling_if,
};

use crate::options::{FADE_IN_CLASS, FormOptions};

/// Add the invalid marker to a container.
pub fn mark_invalid(form: &mut Element, container_id: &str, options: &FormOptions) {
    if let Some(container) = find_element_mut(form, container_id) {
        container.add_class(options.invalid_class.clone());
    }
}

/// Remove the invalid marker from a container.
pub fn unmark_invalid(form: &mut Element, container_id: &str, options: &FormOptions) {
    if let Some(container) = find_element_mut(form, container_id) {
        container.remove_class(&options.invalid_class);
    }
}

pub fn is_marked_invalid(form: &Element, container_id: &str, options: &FormOptions) -> bool {
    find_element(form, container_id).is_some_and(|c| c.has_class(&options.invalid_class))
}

/// Insert a message node after the container, replacing any existing one.
/// Returns false if the container has no parent to insert into.
pub fn show_message(
    form: &mut Element,
    container_id: &str,
    text: impl Into<String>,
    options: &FormOptions,
) -> bool {
    remove_message(form, container_id, options);

    let node = Element::div()
        .id(format!("{container_id}-error"))
        .class(options.message_class.clone())
        .class(FADE_IN_CLASS)
        .text_content(text);
    insert_after(form, container_id, node)
}

/// Remove the message node following the container. Returns true if one was removed.
pub fn remove_message(form: &mut Element, container_id: &str, options: &FormOptions) -> bool {
    remove_next_sibling_if(form, container_id, |next| {
        next.has_class(&options.message_class)
    })
    .is_some()
}

/// Text of the message currently shown for a container.
pub fn message_for<'a>(
    form: &'a Element,
    container_id: &str,
    options: &FormOptions,
) -> Option<&'a str> {
    next_sibling(form, container_id)
        .filter(|next| next.has_class(&options.message_class))
        .and_then(|next| next.content.text())
}

/// Drop both the marker and the message for a container.
pub fn clear_annotation(form: &mut Element, container_id: &str, options: &FormOptions) {
    unmark_invalid(form, container_id, options);
    remove_message(form, container_id, options);
}
