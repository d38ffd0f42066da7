//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics and error reporting
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{
    diagnose, format_diagnostics, CheckReport, Diagnostic, DiagnosticLevel, LineIndex,
};
pub use error::{
    CheckError, CheckResult, ConfigError, LexError, SyntaxError, SyntaxErrorKind,
};
