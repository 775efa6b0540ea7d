mod user;
mod text;

pub use user::{User, AuthenticatedUser};
pub use text::{TextDocument, HashDocument};
