//! # Error Types
//!
//! Domain-specific error types for comanda-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  comanda-core errors (this file)                                       │
//! │  ├── CoreError        - Menu lookup failures                           │
//! │  └── ValidationError  - Console input that can't be used               │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── ConsoleError     - stdin/stdout failures                          │
//! │                                                                         │
//! │  Core errors never end the program: the console prints them and        │
//! │  prompts again.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning a console turn into an order change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No menu item at the requested position.
    ///
    /// ## When This Occurs
    /// - Position is negative
    /// - Position is past the last listed item
    #[error("No menu item at position {position}")]
    ItemNotFound { position: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is not an integer, or does not fit the field's range.
    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: String, input: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is above the allowed maximum.
    #[error("{field} must be at most {max}")]
    ExceedsMaximum { field: String, max: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
