//! Shared types for the restaurant CMS
//!
//! Types used by the server and by anything that talks to it: the error
//! system, request/response DTOs for the JSON endpoints, the menu and
//! reservation API models, and small utilities.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};
