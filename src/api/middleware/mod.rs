//! Middleware components for request processing.
//!
//! This module contains middleware for request ID tracking, request/response
//! logging, and the AppError-to-HTTP response mapping.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::{error_to_status_code, global_error_handler};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
