pub mod json;

pub use json::{is_truthy, render_text};
