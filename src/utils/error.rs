//! Error handling for texcheck
//!
//! This module provides the error taxonomy shared by the tokenizer and the
//! rewriter, plus the result alias used while a formula is being checked.

use std::fmt;

use crate::core::tokenizer::Mode;

/// Scanner failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No rule of the current mode matched at this position
    UnexpectedCharacter { ch: char, line: usize },
    /// Input ended while a group or text mode was still open
    UnterminatedGroup { modes: Vec<Mode> },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { ch, line } => {
                write!(f, "Unexpected character '{}' at line {}", ch.escape_debug(), line)
            }
            LexError::UnterminatedGroup { modes } => {
                write!(f, "Unterminated group, scanner ended in {:?}", modes)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Structural problems found while rewriting a token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Two sub/superscript markers with nothing but whitespace in between
    DoubleScript,
    /// A closing brace with no open group to close
    UnbalancedClose,
    /// A group closed while a command was still waiting for an argument
    MissingArgument { command: String },
    /// A closing brace where a single text character was expected
    TextModeClose,
    /// A text command followed by something other than a plain character
    /// or a braced group
    TextArgument { command: String },
    /// A command was still waiting for arguments at end of input
    DanglingArgument { command: String },
    /// The scanner rejected the input
    Lex(LexError),
}

/// Syntax rejection with the line it was detected on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SyntaxErrorKind::DoubleScript => {
                write!(f, "Double subscript or superscript at line {}", self.line)
            }
            SyntaxErrorKind::UnbalancedClose => {
                write!(f, "Unbalanced closing brace at line {}", self.line)
            }
            SyntaxErrorKind::MissingArgument { command } => {
                write!(f, "Missing argument for '{}' at line {}", command, self.line)
            }
            SyntaxErrorKind::TextModeClose => {
                write!(f, "Closing brace after text command at line {}", self.line)
            }
            SyntaxErrorKind::TextArgument { command } => {
                write!(f, "Invalid text argument for '{}' at line {}", command, self.line)
            }
            SyntaxErrorKind::DanglingArgument { command } => {
                write!(f, "Missing argument for '{}' at end of input", command)
            }
            SyntaxErrorKind::Lex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn double_script(line: usize) -> Self {
        Self::new(SyntaxErrorKind::DoubleScript, line)
    }

    pub fn unbalanced(line: usize) -> Self {
        Self::new(SyntaxErrorKind::UnbalancedClose, line)
    }

    pub fn missing_argument(command: impl Into<String>, line: usize) -> Self {
        Self::new(
            SyntaxErrorKind::MissingArgument {
                command: command.into(),
            },
            line,
        )
    }

    pub fn text_mode_close(line: usize) -> Self {
        Self::new(SyntaxErrorKind::TextModeClose, line)
    }

    pub fn text_argument(command: impl Into<String>, line: usize) -> Self {
        Self::new(
            SyntaxErrorKind::TextArgument {
                command: command.into(),
            },
            line,
        )
    }

    pub fn dangling(command: impl Into<String>, line: usize) -> Self {
        Self::new(
            SyntaxErrorKind::DanglingArgument {
                command: command.into(),
            },
            line,
        )
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        let line = match err {
            LexError::UnexpectedCharacter { line, .. } => line,
            LexError::UnterminatedGroup { .. } => 0,
        };
        SyntaxError::new(SyntaxErrorKind::Lex(err), line)
    }
}

/// Any reason a formula was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Command name found in none of the whitelist tables
    UnknownCommand { name: String, line: usize },
    /// Structural error in the token stream
    Syntax(SyntaxError),
    /// The scanner did not finish in plain math mode
    Mode { modes: Vec<Mode> },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::UnknownCommand { name, line } => {
                write!(f, "Unknown command '\\{}' at line {}", name, line)
            }
            CheckError::Syntax(err) => write!(f, "Syntax error: {}", err),
            CheckError::Mode { modes } => {
                write!(f, "Unterminated group, scanner ended in {:?}", modes)
            }
        }
    }
}

impl std::error::Error for CheckError {}

impl From<SyntaxError> for CheckError {
    fn from(err: SyntaxError) -> Self {
        CheckError::Syntax(err)
    }
}

impl From<LexError> for CheckError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnterminatedGroup { modes } => CheckError::Mode { modes },
            other => CheckError::Syntax(other.into()),
        }
    }
}

impl CheckError {
    pub fn unknown(name: impl Into<String>, line: usize) -> Self {
        CheckError::UnknownCommand {
            name: name.into(),
            line,
        }
    }

    /// Line the problem was detected on, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            CheckError::UnknownCommand { line, .. } => Some(*line),
            CheckError::Syntax(err) if err.line > 0 => Some(err.line),
            _ => None,
        }
    }
}

/// Result type for checking operations
pub type CheckResult<T> = Result<T, CheckError>;

/// Whitelist extension files that could not be read
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The file contents did not parse
    Parse {
        format: &'static str,
        message: String,
    },
    /// IO error while reading the file
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { format, message } => {
                write!(f, "Invalid {} whitelist: {}", format, message)
            }
            ConfigError::IoError { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::UnexpectedCharacter { ch: '$', line: 3 };
        let msg = err.to_string();
        assert!(msg.contains("'$'"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_lex_error_becomes_syntax_error() {
        let err: CheckError = LexError::UnexpectedCharacter { ch: '#', line: 2 }.into();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(err, CheckError::Syntax(_)));
    }

    #[test]
    fn test_unterminated_group_becomes_mode_error() {
        let err: CheckError = LexError::UnterminatedGroup {
            modes: vec![Mode::MathMode, Mode::LongTextMode],
        }
        .into();
        assert!(matches!(err, CheckError::Mode { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_missing_argument_display() {
        let err = SyntaxError::missing_argument("\\sqrt", 1);
        let msg = err.to_string();
        assert!(msg.contains("\\sqrt"));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_text_argument_display() {
        let err = SyntaxError::text_argument("\\mbox", 2);
        assert_eq!(err.to_string(), "Invalid text argument for '\\mbox' at line 2");
    }

    #[test]
    fn test_io_error_becomes_config_error() {
        let err: ConfigError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ConfigError::IoError { .. }));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_unknown_command_display() {
        let err = CheckError::unknown("foo", 4);
        assert_eq!(err.to_string(), "Unknown command '\\foo' at line 4");
    }
}
