//! Stateful tokenizer for wiki-style TeX math
//!
//! The scanner keeps a stack of [`Mode`]s starting at `[MathMode]`. At each
//! position it looks up the rules of the mode on top of the stack, applies
//! the first one that matches and emits exactly one token. The whole input is
//! scanned before rewriting starts.
//!
//! ## Example
//!
//! ```rust
//! use texcheck::core::tokenizer::{TokenKind, Tokenizer};
//!
//! let stream = Tokenizer::new().tokenize(r"\frac12").unwrap();
//! let kinds: Vec<_> = stream.tokens().iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Backslash, TokenKind::CommandName, TokenKind::MathChar, TokenKind::MathChar]
//! );
//! assert!(stream.is_balanced());
//! ```

pub mod rules;
pub mod token;

pub use rules::{Mode, PatternTable, Rule, RuleAction, PATTERN_TABLE};
pub use token::{Token, TokenKind};

use crate::utils::error::LexError;

/// Tokens of one input together with the mode stack the scanner ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    modes: Vec<Mode>,
}

impl<'a> TokenStream<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Mode stack at end of input, bottom first
    pub fn final_modes(&self) -> &[Mode] {
        &self.modes
    }

    /// True when the scanner ended in plain math mode with nothing pushed
    pub fn is_balanced(&self) -> bool {
        self.modes == [Mode::MathMode]
    }

    /// Fail with [`LexError::UnterminatedGroup`] unless balanced
    pub fn ensure_balanced(&self) -> Result<(), LexError> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(LexError::UnterminatedGroup {
                modes: self.modes.clone(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Scanner over a [`PatternTable`]
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    table: &'static PatternTable,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            table: &PATTERN_TABLE,
        }
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `input` completely.
    ///
    /// Fails on the first position where no rule of the current mode
    /// matches. An unbalanced mode stack is not an error here; check
    /// [`TokenStream::is_balanced`].
    pub fn tokenize<'a>(&self, input: &'a str) -> Result<TokenStream<'a>, LexError> {
        let mut modes = vec![Mode::MathMode];
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut line = 1;

        while pos < input.len() {
            let rest = &input[pos..];
            let mode = modes.last().copied().unwrap_or(Mode::MathMode);

            let (action, len) = self
                .table
                .rules(mode)
                .iter()
                .find_map(|rule| rule.match_len(rest).map(|len| (rule.action, len)))
                .ok_or_else(|| LexError::UnexpectedCharacter {
                    ch: rest.chars().next().unwrap_or_default(),
                    line,
                })?;

            let kind = apply(action, &mut modes);
            let lexeme = &rest[..len];
            let token = Token::new(kind, lexeme, line);
            log::trace!("{:?} -> {}", mode, token);
            tokens.push(token);

            line += lexeme.matches('\n').count();
            pos += len;
        }

        Ok(TokenStream { tokens, modes })
    }
}

/// Run a rule's transition on the mode stack and return the token kind
fn apply(action: RuleAction, modes: &mut Vec<Mode>) -> TokenKind {
    match action {
        RuleAction::Emit(kind) => kind,
        RuleAction::Swap(mode, kind) => {
            swap(modes, mode);
            kind
        }
        RuleAction::Push(mode, kind) => {
            modes.push(mode);
            kind
        }
        RuleAction::Pop(kind) => {
            if modes.len() > 1 {
                modes.pop();
                kind
            } else {
                TokenKind::Error
            }
        }
        RuleAction::SwapPush(swapped, pushed, kind) => {
            swap(modes, swapped);
            modes.push(pushed);
            kind
        }
    }
}

fn swap(modes: &mut [Mode], mode: Mode) {
    if let Some(top) = modes.last_mut() {
        *top = mode;
    }
}
