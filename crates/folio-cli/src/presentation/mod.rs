pub mod document;
pub mod formatters;
pub mod style;
pub mod views;
