//! # texcheck
//!
//! Validator and normalizer for wiki-style TeX math formulas written in Rust.
//!
//! ## Features
//!
//! - **Whitelist**: Only known-safe commands are accepted; anything else is
//!   rejected with the offending name
//! - **Canonical Output**: Implicit arguments are made explicit and every
//!   command is wrapped with its arguments, so accepted output is a fixed
//!   point of the checker
//! - **Linear Time**: Table-driven scanner over non-backtracking patterns
//! - **Diagnostics**: Located error messages with "did you mean" suggestions
//!
//! ## Usage Examples
//!
//! ```rust
//! use texcheck::{check_tex, RewriteResult};
//!
//! assert_eq!(check_tex(r"\frac12"), RewriteResult::Accepted(r"{\frac{1}{2}}".into()));
//! assert_eq!(check_tex(r"\sin(x^2)").to_string(), r"+\sin(x{^2})");
//! assert_eq!(check_tex(r"\notacommand").to_string(), r"F\notacommand");
//! assert_eq!(check_tex("a^^b").to_string(), "S");
//! ```
//!
//! ### Custom Whitelist
//!
//! ```rust
//! use texcheck::{check_tex_with, CheckOptions, CommandClass, Whitelist};
//!
//! let whitelist = Whitelist::new().with_command("abs", CommandClass::Function { arity: 1 });
//! let result = check_tex_with(r"\abs x", &whitelist, CheckOptions::strict());
//! assert_eq!(result.canonical(), Some(r"{\abs {x}}"));
//! ```

/// Core checking modules
pub mod core;

/// Data layer - command tables
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types
pub use crate::core::{
    check, CheckOptions, Mode, RewriteResult, Rewriter, Rewritten, Token, TokenKind,
    TokenStream, Tokenizer,
};

// Re-export data modules
pub use data::whitelist::{CommandClass, Whitelist};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{CheckError, CheckResult, ConfigError, LexError, SyntaxError};

/// Check a formula against the built-in whitelist with default options
///
/// # Arguments
/// * `input` - TeX math code
///
/// # Returns
/// The accept/reject decision; `Display` renders the one-character result
/// code
pub fn check_tex(input: &str) -> RewriteResult {
    check_tex_with_options(input, CheckOptions::default())
}

/// Check a formula against the built-in whitelist with custom options
pub fn check_tex_with_options(input: &str, options: CheckOptions) -> RewriteResult {
    check_tex_with(input, &Whitelist::new(), options)
}

/// Check a formula against a custom whitelist
pub fn check_tex_with(input: &str, whitelist: &Whitelist, options: CheckOptions) -> RewriteResult {
    check(input, whitelist, options)
        .map(|done| done.canonical)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tex_basic() {
        assert_eq!(check_tex("a+b"), RewriteResult::Accepted("a+b".into()));
    }

    #[test]
    fn test_check_tex_result_codes() {
        assert_eq!(check_tex(r"\alpha").to_string(), r"+\alpha");
        assert_eq!(check_tex(r"\foo").to_string(), r"F\foo");
        assert_eq!(check_tex(r"\text{abc").to_string(), "S");
    }

    #[test]
    fn test_check_options_strict() {
        let lenient = check_tex_with_options(r"x^", CheckOptions::lenient());
        assert!(lenient.is_accepted());

        let strict = check_tex_with_options(r"x^", CheckOptions::strict());
        assert!(matches!(strict, RewriteResult::RejectedSyntax(_)));
    }

    #[test]
    fn test_custom_whitelist() {
        let whitelist = Whitelist::new().with_command("degree", CommandClass::Literal);
        let result = check_tex_with(r"90\degree", &whitelist, CheckOptions::default());
        assert_eq!(result.canonical(), Some(r"90\degree"));
        assert!(!check_tex(r"90\degree").is_accepted());
    }
}
