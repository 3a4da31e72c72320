//! Dashboard UI components

pub mod edit_modal;
pub mod footer;
pub mod header;
pub mod logs;
pub mod search_bar;
pub mod table;
