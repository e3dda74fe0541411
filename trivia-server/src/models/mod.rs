//! Domain models with validation at construction
//!
//! Create payloads are validated when building a `NewQuestion`.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::{int_value, ValidationError};
pub use category::Category;
pub use question::{CreateQuestionRequest, NewQuestion, Question};
pub use pagination::{PageParams, Pagination, QUESTIONS_PER_PAGE};
