pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreatePlayerCommand, CreatePlayerError};
pub use delete::{DeletePlayerCommand, DeletePlayerError};
pub use update::{UpdatePlayerCommand, UpdatePlayerError};
