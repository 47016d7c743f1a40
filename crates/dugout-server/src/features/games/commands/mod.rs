pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateGameCommand, CreateGameError, GameFieldsError};
pub use delete::{DeleteGameCommand, DeleteGameError};
pub use update::{UpdateGameCommand, UpdateGameError};
