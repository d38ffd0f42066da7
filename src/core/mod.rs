//! Core checking modules
//!
//! This module contains the two passes every formula goes through:
//! - `tokenizer`: mode-stack scanner producing a complete token stream
//! - `rewriter`: whitelist validation and canonical bracing

pub mod rewriter;
pub mod tokenizer;

pub use rewriter::{CheckOptions, RewriteResult, Rewriter, Rewritten};
pub use tokenizer::{Mode, Token, TokenKind, TokenStream, Tokenizer};

use crate::data::whitelist::Whitelist;
use crate::utils::error::CheckResult;

/// Tokenize and rewrite `input` in one call.
///
/// A scanner failure becomes a syntax error; a scan that ends inside an open
/// group becomes a mode error before any token is rewritten.
pub fn check(input: &str, whitelist: &Whitelist, options: CheckOptions) -> CheckResult<Rewritten> {
    let stream = Tokenizer::new().tokenize(input)?;
    log::trace!("{} tokens, final modes {:?}", stream.len(), stream.final_modes());
    Rewriter::with_options(whitelist, options).rewrite(&stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{CheckError, SyntaxErrorKind};

    #[test]
    fn test_lex_error_is_syntax_error() {
        let err = check("a$b", &Whitelist::new(), CheckOptions::default()).unwrap_err();
        match err {
            CheckError::Syntax(err) => assert!(matches!(err.kind, SyntaxErrorKind::Lex(_))),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_mode_checked_before_rewriting() {
        let err = check(r"\foo{", &Whitelist::new(), CheckOptions::default()).unwrap_err();
        assert!(matches!(err, CheckError::Mode { .. }));
    }

    #[test]
    fn test_check_accepts() {
        let done = check(r"\frac12", &Whitelist::new(), CheckOptions::default()).unwrap();
        assert_eq!(done.canonical, r"{\frac{1}{2}}");
        assert!(done.repaired.is_empty());
    }
}
