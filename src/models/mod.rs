pub mod clipboard;
pub mod explorer_item;
pub mod layout;
pub mod object_kind;
