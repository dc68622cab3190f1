pub mod section;
pub mod view;
