//! Domain-specific error types for recordchart
//!
//! Each domain gets its own `thiserror` enum so callers can match on the
//! failure instead of inspecting strings. The HTTP layer turns them into
//! status codes through `is_client_error`, `is_not_found` and `error_code`.
//!
//! # Error Categories
//!
//! - **RecordError**: Record store operations (lookup, validation, database)
//! - **ImportError**: CSV upload handling and row parsing
//! - **ChartError**: Dataset loading and chart rendering
//!
//! # Examples
//!
//! ```rust
//! use recordchart::errors::{ChartError, RecordError};
//!
//! let err = RecordError::NotFound(42);
//! assert!(err.is_not_found());
//!
//! let err = ChartError::FileNotFound("data.csv".to_string());
//! assert_eq!(err.error_code(), "NOT_FOUND");
//! ```

pub mod chart;
pub mod import;
pub mod record;

pub use chart::ChartError;
pub use import::ImportError;
pub use record::RecordError;

/// Result type alias for record store operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type alias for CSV import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Result type alias for chart pipeline operations
pub type ChartResult<T> = Result<T, ChartError>;
