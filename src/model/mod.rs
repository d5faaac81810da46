//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `BrandCheckResult` - A single normalized check outcome
//! - `DiagnosticEntry` - Session-scoped record of swallowed failures
//! - `ModalStack` - Modal overlay management

pub mod check;
pub mod diagnostics;
pub mod modal;

// Re-export commonly used types
pub use check::{BrandCheckResult, CheckResponse, Mentioned};
pub use diagnostics::DiagnosticEntry;
