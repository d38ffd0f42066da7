//! Outcome of checking one formula

use std::fmt;

use crate::utils::error::{CheckError, CheckResult, SyntaxError};

/// Accept/reject decision for one formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteResult {
    /// Canonical, fully braced TeX
    Accepted(String),
    /// Name of the first command missing from the whitelist, without the
    /// backslash
    RejectedUnknownCommand(String),
    RejectedSyntax(SyntaxError),
    /// The scanner ended inside an open group or text command
    RejectedMode,
}

impl RewriteResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RewriteResult::Accepted(_))
    }

    /// Canonical text when accepted
    pub fn canonical(&self) -> Option<&str> {
        match self {
            RewriteResult::Accepted(text) => Some(text),
            _ => None,
        }
    }

    /// One-character result code: `+` accepted, `F` unknown command, `S`
    /// syntax or mode error
    pub fn code(&self) -> char {
        match self {
            RewriteResult::Accepted(_) => '+',
            RewriteResult::RejectedUnknownCommand(_) => 'F',
            RewriteResult::RejectedSyntax(_) | RewriteResult::RejectedMode => 'S',
        }
    }
}

/// Renders the legacy result string: `+<tex>`, `F\<name>` or `S`
impl fmt::Display for RewriteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteResult::Accepted(text) => write!(f, "+{}", text),
            RewriteResult::RejectedUnknownCommand(name) => write!(f, "F\\{}", name),
            RewriteResult::RejectedSyntax(_) | RewriteResult::RejectedMode => f.write_str("S"),
        }
    }
}

impl From<CheckError> for RewriteResult {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::UnknownCommand { name, .. } => RewriteResult::RejectedUnknownCommand(name),
            CheckError::Syntax(err) => RewriteResult::RejectedSyntax(err),
            CheckError::Mode { .. } => RewriteResult::RejectedMode,
        }
    }
}

impl From<CheckResult<String>> for RewriteResult {
    fn from(result: CheckResult<String>) -> Self {
        match result {
            Ok(text) => RewriteResult::Accepted(text),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_codes() {
        assert_eq!(RewriteResult::Accepted("a+b".into()).to_string(), "+a+b");
        assert_eq!(
            RewriteResult::RejectedUnknownCommand("foo".into()).to_string(),
            "F\\foo"
        );
        assert_eq!(RewriteResult::RejectedMode.to_string(), "S");
        assert_eq!(
            RewriteResult::RejectedSyntax(SyntaxError::double_script(1)).code(),
            'S'
        );
    }

    #[test]
    fn test_from_check_error() {
        let result: RewriteResult = Err::<String, _>(CheckError::unknown("foo", 1)).into();
        assert_eq!(result, RewriteResult::RejectedUnknownCommand("foo".into()));
        assert!(!result.is_accepted());
        assert_eq!(result.canonical(), None);
    }
}
