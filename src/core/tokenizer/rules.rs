//! Pattern table driving the tokenizer
//!
//! Each mode owns an ordered list of rules. The scanner tries them top to
//! bottom and commits to the first pattern matching at the current position,
//! even when a later pattern would match more input. Escaped symbols must
//! therefore precede the bare backslash rule, and the generic math character
//! class comes last in math mode.
//!
//! Patterns are compiled with the `regex` crate and anchored at the scan
//! position; its finite automata keep every match linear in the input.

use lazy_static::lazy_static;
use regex::Regex;

use super::token::TokenKind;
use crate::data::commands::TEXT_COMMANDS;

/// Lexical sub-state of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    MathMode,
    CommandName,
    /// Single character or group after `\text ` and friends
    TextMode,
    /// Inside a braced text group
    LongTextMode,
}

/// Token tag and mode transition selected by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Stay in the current mode
    Emit(TokenKind),
    /// Replace the current mode
    Swap(Mode, TokenKind),
    /// Enter a nested mode
    Push(Mode, TokenKind),
    /// Return to the enclosing mode; emits [`TokenKind::Error`] when there is
    /// none
    Pop(TokenKind),
    /// Replace the current mode, then enter a nested one on top of it
    SwapPush(Mode, Mode, TokenKind),
}

/// A pattern anchored at the scan position, and what matching it does
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    pub action: RuleAction,
}

impl Rule {
    fn new(pattern: &str, action: RuleAction) -> Self {
        Self {
            pattern: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            action,
        }
    }

    /// Length in bytes of the match at the start of `rest`, if any
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.pattern
            .find(rest)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Ordered rule lists for every mode
#[derive(Debug)]
pub struct PatternTable {
    math: Vec<Rule>,
    command_name: Vec<Rule>,
    text: Vec<Rule>,
    long_text: Vec<Rule>,
}

impl PatternTable {
    pub fn rules(&self, mode: Mode) -> &[Rule] {
        match mode {
            Mode::MathMode => &self.math,
            Mode::CommandName => &self.command_name,
            Mode::TextMode => &self.text,
            Mode::LongTextMode => &self.long_text,
        }
    }
}

/// Characters allowed as literal math content: ASCII letters and digits,
/// operators and punctuation, and the Latin-1 range used for box characters.
const MATH_CHAR: &str = r"[0-9a-zA-Z+\-=*,:;/.?!()\[\]<>|'`\x{80}-\x{FF}]";

lazy_static! {
    /// Default pattern table
    pub static ref PATTERN_TABLE: PatternTable = {
        use RuleAction::*;
        use TokenKind::*;

        let text_commands = TEXT_COMMANDS.iter().copied().collect::<Vec<_>>().join("|");

        PatternTable {
            math: vec![
                Rule::new(r"\\[\\, ;!{}|#%$&_^]", Emit(EscapedChar)),
                Rule::new(r"\\", Swap(Mode::CommandName, Backslash)),
                Rule::new(r"[_^]", Emit(Script)),
                Rule::new(r"\s+", Emit(Whitespace)),
                Rule::new(r"%", Emit(MwEscape)),
                Rule::new(r"\{", Push(Mode::MathMode, OpenBrace)),
                Rule::new(r"\}", Pop(CloseBrace)),
                Rule::new(MATH_CHAR, Emit(MathChar)),
            ],
            command_name: vec![
                Rule::new(
                    &format!(r"(?:{})\s+", text_commands),
                    Swap(Mode::TextMode, TextCommand),
                ),
                Rule::new(
                    &format!(r"(?:{})\{{", text_commands),
                    SwapPush(Mode::MathMode, Mode::LongTextMode, TextCommand),
                ),
                Rule::new(r"[a-zA-Z]+", Swap(Mode::MathMode, CommandName)),
            ],
            text: vec![
                Rule::new(r"\\[{}]|[^{}]", Swap(Mode::MathMode, Text)),
                Rule::new(r"\{", SwapPush(Mode::MathMode, Mode::LongTextMode, TextOpen)),
                Rule::new(r"\}", Emit(Error)),
            ],
            long_text: vec![
                Rule::new(r"(?:\\[{}]|[^{}])+", Emit(Text)),
                Rule::new(r"\{", Push(Mode::LongTextMode, TextOpen)),
                Rule::new(r"\}", Pop(TextClose)),
            ],
        }
    };
}
