//! # LearnHub Core
//!
//! Core types shared by every LearnHub crate.
//!
//! - [`errors`]: the application error type and its HTTP rendering
//!
//! # Example
//!
//! ```ignore
//! use learnhub_core::AppError;
//!
//! let error = AppError::unauthorized("No token provided");
//! assert_eq!(error.message(), "No token provided");
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorBody};
