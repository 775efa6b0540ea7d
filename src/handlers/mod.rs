mod document;
mod text;
mod user;

pub use document::{json_document, JSON_UTF8};
pub use text::{submit_text, text_by_hash};
pub use user::current_user;
