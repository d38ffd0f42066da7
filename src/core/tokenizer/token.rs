//! Token model shared by the tokenizer and the rewriter

use std::fmt;

/// Category of a scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Backslash followed by a reserved symbol, e.g. `\{` or `\,`
    EscapedChar,
    /// A lone backslash; the next token is the command name
    Backslash,
    /// `_` or `^`
    Script,
    /// Run of whitespace
    Whitespace,
    /// Bare `%`
    MwEscape,
    /// Single allowed math character
    MathChar,
    OpenBrace,
    CloseBrace,
    /// Command name after a backslash, without the backslash
    CommandName,
    /// `text`, `mbox`, `hbox` or `vbox` together with the whitespace or
    /// opening brace that follows it
    TextCommand,
    /// Text-mode content
    Text,
    /// Opening brace inside text mode
    TextOpen,
    /// Closing brace inside text mode
    TextClose,
    /// Closing brace with no group to close
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EscapedChar => "escaped character",
            TokenKind::Backslash => "backslash",
            TokenKind::Script => "script marker",
            TokenKind::Whitespace => "whitespace",
            TokenKind::MwEscape => "percent sign",
            TokenKind::MathChar => "math character",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::CommandName => "command name",
            TokenKind::TextCommand => "text command",
            TokenKind::Text => "text",
            TokenKind::TextOpen => "text '{'",
            TokenKind::TextClose => "text '}'",
            TokenKind::Error => "unbalanced '}'",
        };
        f.write_str(name)
    }
}

/// One scanned token, borrowing its lexeme from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    /// 1-based line the token starts on
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, line: usize) -> Self {
        Self { kind, lexeme, line }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} (line {})", self.kind, self.lexeme, self.line)
    }
}
