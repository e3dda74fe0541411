//! trivia-server: HTTP API for the trivia app
//!
//! Lists categories, lists/searches/creates/deletes questions and serves
//! random quiz questions, backed by PostgreSQL or an in-memory store.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, TriviaConfig};
pub use db::{DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use state::AppState;
