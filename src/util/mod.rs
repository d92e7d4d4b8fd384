//! Utility modules for common functionality

mod string;

pub use string::{capitalize_first, truncate_chars};
