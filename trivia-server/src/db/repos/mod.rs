//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues a single query per call.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
