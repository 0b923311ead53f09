//! # Todo Query API
//!
//! The query pipeline and its parameter/error types. Given the full
//! collection and the raw query pairs, this module produces the derived
//! view the HTTP layer serializes.

pub mod errors;
pub mod params;
pub mod pipeline;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use params::{OrderField, QueryParams};
