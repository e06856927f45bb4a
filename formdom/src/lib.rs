pub mod element;
pub mod event;

pub use element::{
    closest_with_class, collect_controls, collect_ids, find_element, find_element_mut,
    for_each_mut, insert_after, next_sibling, parent_of, path_to, remove_next_sibling_if,
    Content, Element, Tag,
};
pub use event::{Event, EventKind};
