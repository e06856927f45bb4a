mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Some(children) = root.child_elements_mut() {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Chain of elements from `root` down to the element with `id`, both ends included.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// The parent of the element with `id`. None for the root or unknown IDs.
pub fn parent_of<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let path = path_to(root, id)?;
    let len = path.len();
    if len < 2 {
        return None;
    }
    Some(path[len - 2])
}

/// Nearest element carrying `class`, starting at the element with `id` itself
/// and walking up its ancestors. The walk stops before `root`, so the root is
/// never returned.
pub fn closest_with_class(root: &Element, id: &str, class: &str) -> Option<String> {
    let path = path_to(root, id)?;

    let found = path
        .iter()
        .skip(1)
        .rev()
        .find(|element| element.has_class(class))
        .map(|element| element.id.clone());

    log::trace!("[closest_with_class] id={id} class={class} found={found:?}");
    found
}

/// Collect IDs of every element matching `predicate`, in document order.
pub fn collect_ids(root: &Element, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut result = Vec::new();
    collect_ids_recursive(root, &predicate, &mut result);
    result
}

fn collect_ids_recursive(
    element: &Element,
    predicate: &impl Fn(&Element) -> bool,
    result: &mut Vec<String>,
) {
    if predicate(element) {
        result.push(element.id.clone());
    }

    for child in element.child_elements() {
        collect_ids_recursive(child, predicate, result);
    }
}

/// All form controls under `root`, in document order.
pub fn collect_controls(root: &Element) -> Vec<&Element> {
    let mut result = Vec::new();
    collect_controls_recursive(root, &mut result);
    result
}

fn collect_controls_recursive<'a>(element: &'a Element, result: &mut Vec<&'a Element>) {
    if element.is_control() {
        result.push(element);
    }

    for child in element.child_elements() {
        collect_controls_recursive(child, result);
    }
}

/// The sibling immediately following the element with `id`.
pub fn next_sibling<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let parent = parent_of(root, id)?;
    let siblings = parent.child_elements();
    let index = siblings.iter().position(|sibling| sibling.id == id)?;
    siblings.get(index + 1)
}

/// Insert `element` directly after the element with `id` in its parent.
/// Returns false if `id` is unknown or is the root.
pub fn insert_after(root: &mut Element, id: &str, element: Element) -> bool {
    let Some(parent_id) = parent_of(root, id).map(|parent| parent.id.clone()) else {
        return false;
    };
    let Some(siblings) = find_element_mut(root, &parent_id).and_then(Element::child_elements_mut)
    else {
        return false;
    };
    let Some(index) = siblings.iter().position(|sibling| sibling.id == id) else {
        return false;
    };

    siblings.insert(index + 1, element);
    true
}

/// Remove the sibling directly after the element with `id` if it matches
/// `predicate`. Returns the removed element.
pub fn remove_next_sibling_if(
    root: &mut Element,
    id: &str,
    predicate: impl Fn(&Element) -> bool,
) -> Option<Element> {
    let parent_id = parent_of(root, id)?.id.clone();
    let siblings = find_element_mut(root, &parent_id)?.child_elements_mut()?;
    let index = siblings.iter().position(|sibling| sibling.id == id)?;

    if siblings.get(index + 1).is_some_and(|next| predicate(next)) {
        Some(siblings.remove(index + 1))
    } else {
        None
    }
}

/// Visit every element under `root` (inclusive) mutably, in document order.
pub fn for_each_mut(root: &mut Element, f: &mut impl FnMut(&mut Element)) {
    f(root);
    if let Some(children) = root.child_elements_mut() {
        for child in children {
            for_each_mut(child, f);
        }
    }
}
