pub mod prompt;
pub mod providers;
pub mod reply;

pub use prompt::build_prompt;
pub use reply::extract_reply;
