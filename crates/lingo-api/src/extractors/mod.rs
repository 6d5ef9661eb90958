//! Axum extractors for request handling
//!
//! Custom extractors for caller identity, validation, and query parameters.

mod identity;
mod query;
mod validated;

pub use identity::{CurrentUser, XUserHandle, USER_HANDLE_HEADER};
pub use query::ReadLimit;
pub use validated::ValidatedJson;
