//! Human-readable diagnostics for rejected formulas
//!
//! The checker itself only answers accept/reject with a reason. This module
//! turns that reason into located messages:
//!
//! - Unknown commands, with the closest whitelisted names as a suggestion
//! - Syntax errors (double scripts, stray braces, missing arguments)
//! - Unterminated groups
//! - Warnings for arguments filled in at end of input
//!
//! ## Example
//!
//! ```rust
//! use texcheck::diagnostics::diagnose;
//! use texcheck::{CheckOptions, Whitelist};
//!
//! let report = diagnose(r"\fracc12", &Whitelist::new(), CheckOptions::default());
//! assert!(report.has_errors());
//! assert!(report.diagnostics[0].suggestion.as_deref().unwrap().contains(r"\frac"));
//! ```

use std::fmt;

use crate::core::{check, CheckOptions, RewriteResult};
use crate::data::whitelist::Whitelist;
use crate::utils::error::{CheckError, LexError, SyntaxErrorKind};

/// Largest edit distance still offered as a suggestion
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Number of suggestions listed for an unknown command
const MAX_SUGGESTIONS: usize = 3;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Warning - the formula was accepted after a repair
    Warning,
    /// Error - the formula was rejected
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number (1-indexed, in characters)
    pub column: Option<usize>,
    /// Relevant source line
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add location information
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add a line without a column
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         --> line 1:5
        //         |
        //         | source text
        //         | ^
        //         = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "\n  --> line {}:{}", line, col)?,
            (Some(line), None) => write!(f, "\n  --> line {}", line)?,
            _ => {}
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
            if let Some(col) = self.column {
                write!(f, "\n  | {}^", " ".repeat(col.saturating_sub(1)))?;
            }
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Byte offset to line/column mapping for one input
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of each line start
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, starts }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 1-based line and character column of a byte offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts[line - 1];
        let column = self.text[start..offset].chars().count() + 1;
        (line, column)
    }

    /// Text of a 1-based line, without its newline
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.starts.get(line.checked_sub(1)?)?;
        let end = self
            .starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches('\r'))
    }

    /// Byte offset of the first occurrence of `needle` on a 1-based line for
    /// which `accept` holds on the text following it
    fn find_on_line(
        &self,
        line: usize,
        needle: &str,
        accept: impl Fn(&str) -> bool,
    ) -> Option<usize> {
        let start = *self.starts.get(line.checked_sub(1)?)?;
        let text = self.line_text(line)?;
        text.match_indices(needle)
            .find(|(i, _)| accept(&text[i + needle.len()..]))
            .map(|(i, _)| start + i)
    }
}

/// Outcome of [`diagnose`] with its diagnostics
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Accept/reject decision
    pub result: RewriteResult,
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
}

impl CheckReport {
    pub fn new(result: RewriteResult) -> Self {
        Self {
            result,
            diagnostics: Vec::new(),
            errors: 0,
            warnings: 0,
        }
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(plural(self.errors, "error"));
        }
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// Check a formula and explain the outcome
pub fn diagnose(input: &str, whitelist: &Whitelist, options: CheckOptions) -> CheckReport {
    let index = LineIndex::new(input);

    match check(input, whitelist, options) {
        Ok(done) => {
            let mut report = CheckReport::new(RewriteResult::Accepted(done.canonical));
            for command in done.repaired {
                report.add(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        format!("'{}' is missing arguments at end of input", command),
                    )
                    .with_line(index.line_count())
                    .with_suggestion("Empty arguments were filled in; supply them explicitly"),
                );
            }
            report
        }
        Err(err) => {
            let diag = error_diagnostic(&err, &index, whitelist);
            let mut report = CheckReport::new(err.into());
            report.add(diag);
            report
        }
    }
}

fn error_diagnostic(err: &CheckError, index: &LineIndex<'_>, whitelist: &Whitelist) -> Diagnostic {
    let diag = Diagnostic::new(DiagnosticLevel::Error, err.to_string());

    match err {
        CheckError::UnknownCommand { name, line } => {
            let needle = format!("\\{}", name);
            let diag = locate(diag, index, *line, &needle, |rest| {
                !rest.starts_with(|c: char| c.is_ascii_alphabetic())
            });
            let close = suggest_commands(name, whitelist);
            if close.is_empty() {
                diag.with_suggestion("Only whitelisted commands are allowed")
            } else {
                let names: Vec<String> = close.iter().map(|n| format!("'\\{}'", n)).collect();
                diag.with_suggestion(format!("did you mean {}?", names.join(" or ")))
            }
        }
        CheckError::Syntax(err) => match &err.kind {
            SyntaxErrorKind::Lex(LexError::UnexpectedCharacter { ch, line }) => {
                locate(diag, index, *line, &ch.to_string(), |_| true)
                    .with_suggestion("Escape the character or remove it")
            }
            SyntaxErrorKind::DoubleScript => with_line(diag, index, err.line)
                .with_suggestion("Group the script, e.g. 'x^{a^b}'"),
            SyntaxErrorKind::UnbalancedClose => with_line(diag, index, err.line)
                .with_suggestion("Check for missing opening brace '{'"),
            SyntaxErrorKind::MissingArgument { command } => with_line(diag, index, err.line)
                .with_suggestion(format!("Give '{}' all of its arguments", command)),
            SyntaxErrorKind::TextModeClose | SyntaxErrorKind::TextArgument { .. } => {
                with_line(diag, index, err.line)
                    .with_suggestion("Put the text in braces, e.g. '\\text{...}'")
            }
            SyntaxErrorKind::DanglingArgument { command } => with_line(diag, index, err.line)
                .with_suggestion(format!("Give '{}' all of its arguments", command)),
            SyntaxErrorKind::Lex(LexError::UnterminatedGroup { .. }) => {
                diag.with_suggestion("Check for missing closing brace '}'")
            }
        },
        CheckError::Mode { .. } => diag.with_suggestion("Check for missing closing brace '}'"),
    }
}

fn with_line(diag: Diagnostic, index: &LineIndex<'_>, line: usize) -> Diagnostic {
    match index.line_text(line) {
        Some(text) if line > 0 => diag.with_line(line).with_source(text),
        _ => diag,
    }
}

fn locate(
    diag: Diagnostic,
    index: &LineIndex<'_>,
    line: usize,
    needle: &str,
    accept: impl Fn(&str) -> bool,
) -> Diagnostic {
    match index.find_on_line(line, needle, accept) {
        Some(offset) => {
            let (line, column) = index.line_col(offset);
            let diag = diag.with_location(line, column);
            match index.line_text(line) {
                Some(text) => diag.with_source(text),
                None => diag,
            }
        }
        None => with_line(diag, index, line),
    }
}

/// Whitelisted command names closest to `name`, nearest first
pub fn suggest_commands<'w>(name: &str, whitelist: &'w Whitelist) -> Vec<&'w str> {
    let mut close: Vec<(usize, &str)> = whitelist
        .names()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|&(distance, _)| distance <= MAX_SUGGESTION_DISTANCE)
        .collect();
    close.sort();
    close
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Edit distance with unit cost for insertions, deletions and substitutions
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two rows of the dynamic programming matrix
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Format check results for terminal output
pub fn format_diagnostics(report: &CheckReport, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &report.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    if let Some(canonical) = report.result.canonical() {
        output.push_str(&format!("Canonical: {}\n", canonical));
    }

    // Summary
    if use_color {
        if report.has_errors() {
            output.push_str("\x1b[31m");
        } else if report.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", report.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(input: &str) -> CheckReport {
        diagnose(input, &Whitelist::new(), CheckOptions::default())
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n\u{E9}x");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(4), (2, 2));
        assert_eq!(index.line_col(8), (3, 2));
        assert_eq!(index.line_text(2), Some("cd"));
        assert_eq!(index.line_text(4), None);
        assert_eq!(index.line_text(0), None);
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("frac", "frac"), 0);
        assert_eq!(levenshtein_distance("fracc", "frac"), 1);
        assert_eq!(levenshtein_distance("alpah", "alpha"), 2);
        assert_eq!(levenshtein_distance("", "sin"), 3);
    }

    #[test]
    fn test_accepted_formula_has_no_issues() {
        let report = report(r"\frac{1}{2}");
        assert!(report.is_empty());
        assert_eq!(report.summary(), "no issues found");
        assert!(report.result.is_accepted());
    }

    #[test]
    fn test_unknown_command_located() {
        let report = report("x +\n  \\alpah");
        assert!(report.has_errors());
        let diag = &report.diagnostics[0];
        assert_eq!(diag.line, Some(2));
        assert_eq!(diag.column, Some(3));
        assert!(diag.suggestion.as_deref().unwrap().contains(r"'\alpha'"));
        assert_eq!(report.result.code(), 'F');
    }

    #[test]
    fn test_unexpected_character_located() {
        let report = report("a + $b");
        let diag = &report.diagnostics[0];
        assert_eq!(diag.column, Some(5));
        assert_eq!(report.result.code(), 'S');
    }

    #[test]
    fn test_repair_is_a_warning() {
        let report = report(r"\frac1");
        assert!(!report.has_errors());
        assert_eq!(report.warnings, 1);
        assert!(report.diagnostics[0].message.contains(r"\frac"));
    }

    #[test]
    fn test_text_argument_error() {
        let report = report(r"\text\frac12");
        assert_eq!(report.result.code(), 'S');
        let diag = &report.diagnostics[0];
        assert!(diag.message.contains(r"'\text'"), "got {}", diag.message);
        assert!(diag.suggestion.as_deref().unwrap().contains(r"\text{"));
    }

    #[test]
    fn test_format_diagnostics() {
        let text = format_diagnostics(&report("a^^b"), false);
        assert!(text.contains("error: "));
        assert!(text.contains("Summary: 1 error"));
        assert!(!text.contains("\x1b["));

        let text = format_diagnostics(&report("a+b"), true);
        assert!(text.contains("Canonical: a+b"));
        assert!(text.contains("\x1b[32m"));
    }
}
