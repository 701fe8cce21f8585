//! HTTP Adapter
//!
//! REST API for the order service.

pub mod controller;
pub mod error;
pub mod request;
pub mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
