pub mod content;
pub mod viewer;
