//! Database layer - connection pool, repositories and the store seam
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Handlers talk to `TriviaStore`, never to sqlx directly
//! - Referential integrity is enforced in the insert query itself

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use store::{DbError, TriviaStore};
