pub mod get;
pub mod list;

pub use get::{GetGameError, GetGameQuery};
pub use list::ListGamesError;
