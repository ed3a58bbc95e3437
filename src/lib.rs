//! A small notes service: an actix-web JSON API over diesel, plus a
//! client-side store that consumes it.

pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod validation;

pub use config::{Config, RuntimeMode};
pub use db::{ConnectionProvider, Connector, DbPool};
pub use errors::{ApiResponse, ServerError};
pub use models::note::{Note, NoteInput};
