pub mod get;
pub mod list;

pub use get::{GetPlayerError, GetPlayerQuery};
pub use list::ListPlayersError;
