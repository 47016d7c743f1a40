//! Game schedule management

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateGameCommand, CreateGameError, DeleteGameCommand, DeleteGameError, UpdateGameCommand,
    UpdateGameError,
};
pub use queries::{GetGameError, GetGameQuery, ListGamesError};
pub use routes::games_routes;
