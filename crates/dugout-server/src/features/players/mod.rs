//! Player roster management

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreatePlayerCommand, CreatePlayerError, DeletePlayerCommand, DeletePlayerError,
    UpdatePlayerCommand, UpdatePlayerError,
};
pub use queries::{GetPlayerError, GetPlayerQuery, ListPlayersError};
pub use routes::players_routes;
