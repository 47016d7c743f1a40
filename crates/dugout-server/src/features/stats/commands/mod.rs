pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateStatCommand, CreateStatError};
pub use delete::{DeleteStatCommand, DeleteStatError};
pub use update::{UpdateStatCommand, UpdateStatError};
