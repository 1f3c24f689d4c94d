//! Axum extractors for request handling
//!
//! Wrap the stock extractors so every rejection renders as an [`ApiError`].
//!
//! [`ApiError`]: crate::response::ApiError

mod path;
mod query;
mod validated;

pub use path::PathParam;
pub use query::ValidatedQuery;
pub use validated::ValidatedJson;
