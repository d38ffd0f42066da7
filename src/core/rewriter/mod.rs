//! Whitelist validation and canonical bracing
//!
//! The rewriter consumes a complete [`TokenStream`] in one pass. Every command
//! name is looked up in the [`Whitelist`]; commands that take arguments are
//! wrapped in braces together with those arguments, and implicit
//! single-token arguments are made explicit:
//!
//! - `\frac12` becomes `{\frac{1}{2}}`
//! - `x^2` becomes `x{^2}`
//! - `\big(` becomes `{\big(}`
//! - `a^b_c` becomes `a{_c}{^b}`
//!
//! The output is a fixed point: rewriting an accepted formula again yields
//! the same text. A user brace directly around a command is reused as the
//! command's wrapper, so `{\frac{1}{2}}` is not wrapped a second time.

pub mod result;
pub mod state;

pub use result::RewriteResult;
pub use state::{CheckOptions, Frame, FrameKind, HatState, ScriptKind};

use super::tokenizer::{Token, TokenKind, TokenStream};
use crate::data::whitelist::{CommandClass, Whitelist};
use crate::utils::error::{CheckError, CheckResult, SyntaxError};

/// Canonical text of an accepted formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub canonical: String,
    /// Commands whose missing trailing arguments were filled in, in the
    /// order they were closed
    pub repaired: Vec<String>,
}

/// Validator over a fixed whitelist
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'w> {
    whitelist: &'w Whitelist,
    options: CheckOptions,
}

impl<'w> Rewriter<'w> {
    pub fn new(whitelist: &'w Whitelist) -> Self {
        Self::with_options(whitelist, CheckOptions::default())
    }

    pub fn with_options(whitelist: &'w Whitelist, options: CheckOptions) -> Self {
        Self { whitelist, options }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Accept or reject a token stream
    pub fn process(&self, stream: &TokenStream<'_>) -> RewriteResult {
        self.rewrite(stream).map(|done| done.canonical).into()
    }

    /// Like [`Rewriter::process`], keeping the error detail and the list of
    /// repaired commands
    pub fn rewrite(&self, stream: &TokenStream<'_>) -> CheckResult<Rewritten> {
        stream.ensure_balanced().map_err(|err| {
            log::debug!("rejected: {}", err);
            CheckError::from(err)
        })?;

        let mut pass = Pass::new(self.whitelist, self.options);
        let tokens = stream.tokens();
        for (i, token) in tokens.iter().enumerate() {
            pass.step(token, tokens.get(i + 1)).map_err(|err| {
                log::debug!("rejected: {}", err);
                err
            })?;
        }
        pass.finish()
    }
}

/// State of a single rewrite
struct Pass<'w> {
    whitelist: &'w Whitelist,
    options: CheckOptions,
    out: String,
    /// Never empty; `frames[0]` is the root scope
    frames: Vec<Frame>,
    hat: HatState,
    /// Previous non-whitespace token was `_` or `^`
    last_script: bool,
    /// Last output was a user `{`
    last_open_brace: bool,
    repaired: Vec<String>,
}

impl<'w> Pass<'w> {
    fn new(whitelist: &'w Whitelist, options: CheckOptions) -> Self {
        Self {
            whitelist,
            options,
            out: String::new(),
            frames: vec![Frame::root()],
            hat: HatState::None,
            last_script: false,
            last_open_brace: false,
            repaired: Vec::new(),
        }
    }

    fn current(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    fn top(&mut self) -> &mut Frame {
        let depth = self.frames.len() - 1;
        &mut self.frames[depth]
    }

    fn step(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> CheckResult<()> {
        log::trace!("rewrite {} at depth {}", token, self.frames.len() - 1);
        if self.current().awaits_text() && !is_text_argument(token) {
            let command = self.current().describe();
            return Err(SyntaxError::text_argument(command, token.line).into());
        }
        self.update_hat(token);

        if token.is(TokenKind::Script) {
            if self.last_script {
                return Err(SyntaxError::double_script(token.line).into());
            }
            self.last_script = true;
        } else if !token.is(TokenKind::Whitespace) {
            self.last_script = false;
        }

        match token.kind {
            TokenKind::MathChar if token.lexeme == "[" && self.current().accepts_optional() => {
                self.top().in_optional = true;
                self.emit("[");
            }
            TokenKind::MathChar
                if token.lexeme == "]"
                    && self.current().in_optional
                    && self.current().optional_braces == 0 =>
            {
                let top = self.top();
                top.in_optional = false;
                top.close_optional_window();
                self.emit("]");
            }
            TokenKind::MathChar | TokenKind::EscapedChar => self.unit(token.lexeme, false, next),
            TokenKind::MwEscape => self.unit("\\%", false, next),
            TokenKind::Whitespace => self.emit(token.lexeme),
            TokenKind::Backslash => {}
            TokenKind::CommandName => self.command(token, next)?,
            TokenKind::Script => self.script(token),
            TokenKind::OpenBrace => self.open_brace(),
            TokenKind::CloseBrace => self.close_brace(token, next)?,
            TokenKind::TextCommand => self.text_command(token),
            TokenKind::Text => self.text(token, next)?,
            TokenKind::TextOpen => self.text_open(token)?,
            TokenKind::TextClose => self.text_close(token, next)?,
            TokenKind::Error => {
                let err = if matches!(self.current().kind, FrameKind::Text { .. }) {
                    SyntaxError::text_mode_close(token.line)
                } else {
                    SyntaxError::unbalanced(token.line)
                };
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// A finished superscript stays eligible for reordering across
    /// whitespace and up to the next `_`
    fn update_hat(&mut self, token: &Token<'_>) {
        self.hat = match self.hat {
            HatState::Done { .. }
                if token.is(TokenKind::Whitespace)
                    || (token.is(TokenKind::Script) && token.lexeme == "_") =>
            {
                self.hat
            }
            HatState::AwaitClose { .. } if token.is(TokenKind::CloseBrace) => self.hat,
            _ => HatState::None,
        };
    }

    fn emit(&mut self, text: &str) {
        self.out.push_str(text);
        self.last_open_brace = false;
    }

    /// Output one token-sized piece, taking it as an implicit argument when
    /// the innermost scope is waiting for one
    fn unit(&mut self, text: &str, self_wrapped: bool, next: Option<&Token<'_>>) {
        let top = self.top();
        if !top.awaits_implicit() {
            self.emit(text);
            return;
        }

        let braced = top.braces_implicit() && !self_wrapped;
        top.expected_args -= 1;
        top.close_optional_window();
        if braced {
            self.out.push('{');
            self.emit(text);
            self.out.push('}');
        } else {
            self.emit(text);
        }
        self.settle(next);
    }

    fn open_frame(&mut self, kind: FrameKind, arity: usize, opening: &str, line: usize) {
        let mut frame = Frame::new(kind, arity, self.out.len(), line);
        frame.adoptable = self.last_open_brace;
        self.emit(opening);
        self.frames.push(frame);
    }

    fn command(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> CheckResult<()> {
        let name = token.lexeme;
        let class = self
            .whitelist
            .classify(name)
            .ok_or_else(|| CheckError::unknown(name, token.line))?;
        let rendered = class.rendered_name(name);

        match class.arity() {
            0 if matches!(class, CommandClass::BoxAlias { .. }) => {
                self.unit(&format!("{{\\{}}}", rendered), true, next)
            }
            0 if class == CommandClass::TextCommand => {
                // `\text` glued to the next token; only a plain character may follow
                let kind = FrameKind::Text {
                    name: name.to_string(),
                };
                self.open_frame(kind, 1, &format!("{{\\{}", name), token.line);
            }
            0 => self.unit(&format!("\\{}", rendered), false, next),
            arity => {
                let kind = FrameKind::Command {
                    name: name.to_string(),
                    brace_args: self.options.brace_arguments && class.braces_arguments(),
                    delimiter: class == CommandClass::BigDelimiter,
                    optional: self.whitelist.takes_optional_argument(name),
                };
                self.open_frame(kind, arity, &format!("{{\\{}", rendered), token.line);
            }
        }
        Ok(())
    }

    fn script(&mut self, token: &Token<'_>) {
        let kind = ScriptKind::from_marker(token.lexeme);
        let reorder = match self.hat {
            HatState::Done { start, end } if kind == ScriptKind::Sub && self.options.reorder_scripts => {
                Some((start, end))
            }
            _ => None,
        };
        self.hat = HatState::None;
        self.open_frame(
            FrameKind::Script { kind, reorder },
            1,
            &format!("{{{}", kind.marker()),
            token.line,
        );
    }

    fn open_brace(&mut self) {
        let top = self.top();
        if top.in_optional {
            top.optional_braces += 1;
        } else {
            top.open_braces += 1;
            if !top.is_root() {
                top.close_optional_window();
            }
        }
        self.out.push('{');
        self.last_open_brace = true;
    }

    fn close_brace(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> CheckResult<()> {
        let top = self.top();
        if top.in_optional {
            if top.optional_braces == 0 {
                return Err(SyntaxError::unbalanced(token.line).into());
            }
            top.optional_braces -= 1;
            self.emit("}");
            return Ok(());
        }
        if top.open_braces == 0 {
            let err = if top.is_root() {
                SyntaxError::unbalanced(token.line)
            } else {
                SyntaxError::missing_argument(top.describe(), token.line)
            };
            return Err(err.into());
        }

        top.open_braces -= 1;
        let completes_arg = !top.is_root() && top.open_braces == 0;
        if completes_arg {
            top.expected_args -= 1;
        }
        self.emit("}");

        self.hat = match self.hat {
            HatState::AwaitClose { start } if !completes_arg => HatState::Done {
                start,
                end: self.out.len(),
            },
            _ => HatState::None,
        };
        if completes_arg {
            self.settle(next);
        }
        Ok(())
    }

    fn text_command(&mut self, token: &Token<'_>) {
        let name = token
            .lexeme
            .trim_end_matches(|c: char| c == '{' || c.is_whitespace());
        self.open_frame(
            FrameKind::Text {
                name: name.to_string(),
            },
            1,
            &format!("{{\\{}", name),
            token.line,
        );
        if token.lexeme.ends_with('{') {
            self.top().open_braces = 1;
            self.out.push('{');
        }
    }

    fn text_frame(&mut self, token: &Token<'_>) -> CheckResult<&mut Frame> {
        let top = self.top();
        if matches!(top.kind, FrameKind::Text { .. }) {
            Ok(top)
        } else {
            Err(SyntaxError::unbalanced(token.line).into())
        }
    }

    fn text(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> CheckResult<()> {
        let frame = self.text_frame(token)?;
        if frame.open_braces > 0 {
            self.emit(token.lexeme);
            return Ok(());
        }
        frame.expected_args = 0;
        self.out.push('{');
        self.emit(token.lexeme);
        self.out.push('}');
        self.settle(next);
        Ok(())
    }

    fn text_open(&mut self, token: &Token<'_>) -> CheckResult<()> {
        self.text_frame(token)?.open_braces += 1;
        self.emit("{");
        Ok(())
    }

    fn text_close(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> CheckResult<()> {
        let frame = self.text_frame(token)?;
        if frame.open_braces == 0 {
            return Err(SyntaxError::text_mode_close(token.line).into());
        }
        frame.open_braces -= 1;
        let done = frame.open_braces == 0;
        if done {
            frame.expected_args = 0;
        }
        self.emit("}");
        if done {
            self.settle(next);
        }
        Ok(())
    }

    /// Close every innermost scope that has all its arguments
    fn settle(&mut self, next: Option<&Token<'_>>) {
        while self.frames.len() > 1 && self.current().expected_args == 0 {
            if let Some(frame) = self.frames.pop() {
                self.close_frame(frame, next);
            }
        }
    }

    fn close_frame(&mut self, frame: Frame, next: Option<&Token<'_>>) {
        let adopted =
            frame.adoptable && matches!(next, Some(t) if t.is(TokenKind::CloseBrace));
        if adopted {
            self.out.remove(frame.wrapper);
        } else {
            self.out.push('}');
        }
        self.last_open_brace = false;
        log::trace!("closed {}{}", frame.describe(), if adopted { " (adopted)" } else { "" });

        self.hat = match frame.kind {
            FrameKind::Script {
                kind: ScriptKind::Sup,
                ..
            } if adopted => HatState::AwaitClose {
                start: frame.wrapper.saturating_sub(1),
            },
            FrameKind::Script {
                kind: ScriptKind::Sup,
                ..
            } => HatState::Done {
                start: frame.wrapper,
                end: self.out.len(),
            },
            FrameKind::Script {
                kind: ScriptKind::Sub,
                reorder: Some((start, end)),
            } => {
                self.move_before(start, end, frame.wrapper);
                HatState::None
            }
            _ => HatState::None,
        };

        let parent = self.top();
        if parent.awaits_implicit() {
            parent.expected_args -= 1;
            parent.close_optional_window();
            self.hat = HatState::None;
        }
    }

    /// Move `out[sub..]` in front of the superscript at `start..end`
    fn move_before(&mut self, start: usize, end: usize, sub: usize) {
        let sub = self.out.split_off(sub);
        let between = self.out.split_off(end);
        let hat = self.out.split_off(start);
        self.out.push_str(&sub);
        self.out.push_str(&between);
        self.out.push_str(&hat);
    }

    fn finish(mut self) -> CheckResult<Rewritten> {
        while self.frames.len() > 1 {
            let repair = self.options.repair_dangling;
            let frame = self.top();
            let command = frame.describe();
            if frame.open_braces > 0 || frame.optional_braces > 0 {
                return Err(SyntaxError::unbalanced(frame.line).into());
            }
            if !repair {
                let err = SyntaxError::dangling(command, frame.line);
                log::debug!("rejected: {}", err);
                return Err(err.into());
            }

            let closes_optional = std::mem::replace(&mut frame.in_optional, false);
            let missing = std::mem::replace(&mut frame.expected_args, 0);
            let placeholder = frame.placeholder();
            if closes_optional {
                self.out.push(']');
            }
            for _ in 0..missing {
                self.out.push_str(placeholder);
            }
            log::debug!("filled {} missing argument(s) of {}", missing, command);
            self.repaired.push(command);
            self.settle(None);
        }

        Ok(Rewritten {
            canonical: self.out,
            repaired: self.repaired,
        })
    }
}

/// Whether `token` may stand as the argument of a text command, or pass
/// through while one is pending. The argument is re-scanned as text, where a
/// trailing backslash would escape the closing brace.
fn is_text_argument(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::MathChar
        | TokenKind::MwEscape
        | TokenKind::Backslash
        | TokenKind::TextOpen
        | TokenKind::CloseBrace
        | TokenKind::Error => true,
        TokenKind::EscapedChar | TokenKind::Text => !token.lexeme.ends_with('\\'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::Tokenizer;
    use crate::utils::error::SyntaxErrorKind;

    fn run(input: &str, options: CheckOptions) -> RewriteResult {
        let whitelist = Whitelist::new();
        let stream = Tokenizer::new().tokenize(input).unwrap();
        Rewriter::with_options(&whitelist, options).process(&stream)
    }

    fn accept(input: &str) -> String {
        match run(input, CheckOptions::default()) {
            RewriteResult::Accepted(text) => text,
            other => panic!("{:?} was not accepted: {:?}", input, other),
        }
    }

    fn syntax_kind(input: &str, options: CheckOptions) -> SyntaxErrorKind {
        match run(input, options) {
            RewriteResult::RejectedSyntax(err) => err.kind,
            other => panic!("{:?} was not a syntax error: {:?}", input, other),
        }
    }

    #[test]
    fn test_plain_math_is_unchanged() {
        assert_eq!(accept("a+b"), "a+b");
        assert_eq!(accept(r"\left( x \right)"), r"\left( x \right)");
        assert_eq!(accept(""), "");
    }

    #[test]
    fn test_scripts_are_wrapped() {
        assert_eq!(accept(r"\sin(x^2)"), r"\sin(x{^2})");
        assert_eq!(accept("x^{2}"), "x{^{2}}");
        assert_eq!(accept(r"x^\alpha"), r"x{^\alpha}");
    }

    #[test]
    fn test_implicit_arguments_are_braced() {
        assert_eq!(accept(r"\frac12"), r"{\frac{1}{2}}");
        assert_eq!(accept(r"\frac{a}{b}"), r"{\frac{a}{b}}");
        assert_eq!(accept(r"\frac\alpha2"), r"{\frac{\alpha}{2}}");
        assert_eq!(accept(r"\frac 1 2"), r"{\frac {1} {2}}");
    }

    #[test]
    fn test_nested_commands() {
        assert_eq!(accept(r"\sqrt\frac12"), r"{\sqrt{\frac{1}{2}}}");
        assert_eq!(accept(r"\sqrt{\frac12}"), r"{\sqrt{\frac{1}{2}}}");
        assert_eq!(accept(r"{\frac12}"), r"{\frac{1}{2}}");
        assert_eq!(accept(r"{\frac12 }"), r"{{\frac{1}{2}} }");
    }

    #[test]
    fn test_big_delimiters() {
        assert_eq!(accept(r"\big(x\big)"), r"{\big(}x{\big)}");
        assert_eq!(accept(r"\Bigl\langle"), r"{\Bigl\langle}");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(accept(r"a\le b"), r"a\leq b");
        assert_eq!(accept(r"\reals"), r"{\mathbb{R}}");
        assert_eq!(accept(r"\frac\Alpha2"), r"{\frac{\mathrm{A}}{2}}");
        assert_eq!(accept(r"\Bbb R"), r"{\mathbb {R}}");
        assert_eq!(accept(r"\left\lang x\right\rang"), r"\left\langle x\right\rangle");
    }

    #[test]
    fn test_text_commands() {
        assert_eq!(accept(r"\text{a b}"), r"{\text{a b}}");
        assert_eq!(accept(r"\text x+1"), r"{\text{x}}+1");
        assert_eq!(accept(r"\mbox {a{b}}"), r"{\mbox{a{b}}}");
        assert_eq!(accept(r"\frac\text{a}2"), r"{\frac{\text{a}}{2}}");
    }

    #[test]
    fn test_glued_text_command_takes_one_character() {
        assert_eq!(accept(r"\text1"), r"{\text{1}}");
        assert_eq!(accept(r"\mbox%"), r"{\mbox{\%}}");
        assert_eq!(accept(r"x^\hbox'"), r"x{^{\hbox{'}}}");
        assert_eq!(accept(r"\text"), r"{\text{}}");
    }

    #[test]
    fn test_glued_text_command_rejects_markup() {
        let options = CheckOptions::default();
        for input in [r"\text\frac12", r"\mbox\reals", r"\hbox\rm x", r"\vbox^2", r"\text\\"] {
            let command = input[..5].to_string();
            assert_eq!(
                syntax_kind(input, options),
                SyntaxErrorKind::TextArgument { command },
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_text_backslash_rejected() {
        let options = CheckOptions::default();
        for (input, command) in [
            (r"\text \big", "\\text"),
            (r"\text \reals", "\\text"),
            (r"\sqrt\text \rm", "\\text"),
        ] {
            assert_eq!(
                syntax_kind(input, options),
                SyntaxErrorKind::TextArgument {
                    command: command.into()
                }
            );
        }
        assert_eq!(accept(r"\text \{"), r"{\text{\{}}");
    }

    #[test]
    fn test_optional_argument() {
        assert_eq!(accept(r"\sqrt[3]{x}"), r"{\sqrt[3]{x}}");
        assert_eq!(accept(r"\sqrt[3]x"), r"{\sqrt[3]{x}}");
        assert_eq!(accept(r"\sqrt[\alpha^2]x"), r"{\sqrt[\alpha{^2}]{x}}");
        assert_eq!(accept(r"\frac[2"), r"{\frac{[}{2}}");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(accept("5%"), r"5\%");
        assert_eq!(accept(r"5\%"), r"5\%");
    }

    #[test]
    fn test_operatorname_passes_through() {
        assert_eq!(accept(r"\operatorname{sn}x"), r"\operatorname{sn}x");
        assert_eq!(accept(r"\operatorname*{arg\,max}"), r"\operatorname*{arg\,max}");
    }

    #[test]
    fn test_superscript_moves_after_subscript() {
        assert_eq!(accept("a^b_c"), "a{_c}{^b}");
        assert_eq!(accept("a_c^b"), "a{_c}{^b}");
        assert_eq!(accept("a^{b}_c"), "a{_c}{^{b}}");
        assert_eq!(accept("x^2 _3"), "x{_3} {^2}");
    }

    #[test]
    fn test_reorder_can_be_disabled() {
        let options = CheckOptions {
            reorder_scripts: false,
            ..CheckOptions::default()
        };
        assert_eq!(run("a^b_c", options), RewriteResult::Accepted("a{^b}{_c}".into()));
    }

    #[test]
    fn test_unbraced_arguments() {
        let options = CheckOptions {
            brace_arguments: false,
            ..CheckOptions::default()
        };
        assert_eq!(run(r"\frac12", options), RewriteResult::Accepted(r"{\frac12}".into()));
    }

    #[test]
    fn test_double_scripts_rejected() {
        let options = CheckOptions::default();
        assert_eq!(syntax_kind("a^^b", options), SyntaxErrorKind::DoubleScript);
        assert_eq!(syntax_kind("a__b", options), SyntaxErrorKind::DoubleScript);
        assert_eq!(syntax_kind("a^ _b", options), SyntaxErrorKind::DoubleScript);
    }

    #[test]
    fn test_brace_errors() {
        let options = CheckOptions::default();
        assert_eq!(syntax_kind("a}", options), SyntaxErrorKind::UnbalancedClose);
        assert_eq!(
            syntax_kind(r"{\frac1}", options),
            SyntaxErrorKind::MissingArgument {
                command: "\\frac".into()
            }
        );
        assert_eq!(syntax_kind(r"\text }x", options), SyntaxErrorKind::TextModeClose);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            run(r"a+\notacommand", CheckOptions::default()),
            RewriteResult::RejectedUnknownCommand("notacommand".into())
        );
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(run(r"\text{abc", CheckOptions::default()), RewriteResult::RejectedMode);
        assert_eq!(run("{a", CheckOptions::default()), RewriteResult::RejectedMode);
    }

    #[test]
    fn test_dangling_arguments_repaired() {
        assert_eq!(accept(r"\frac1"), r"{\frac{1}{}}");
        assert_eq!(accept("x^"), "x{^{}}");
        assert_eq!(accept(r"\big"), r"{\big.}");
        assert_eq!(accept(r"\sqrt[3"), r"{\sqrt[3]{}}");

        let whitelist = Whitelist::new();
        let stream = Tokenizer::new().tokenize(r"\sqrt\frac1").unwrap();
        let done = Rewriter::new(&whitelist).rewrite(&stream).unwrap();
        assert_eq!(done.canonical, r"{\sqrt{\frac{1}{}}}");
        assert_eq!(done.repaired, vec!["\\frac".to_string()]);
    }

    #[test]
    fn test_dangling_arguments_rejected_when_strict() {
        assert_eq!(
            syntax_kind(r"\frac1", CheckOptions::strict()),
            SyntaxErrorKind::DanglingArgument {
                command: "\\frac".into()
            }
        );
    }

    #[test]
    fn test_output_is_fixed_point() {
        for input in [
            r"\frac12",
            r"\sqrt\frac12",
            r"a^b_c",
            r"x^{2}_{i}",
            r"\sqrt[3]x",
            r"\text x",
            r"\big(",
            r"\Bbb R",
            r"\reals^2",
            r"{\frac12 }",
            r"\frac1",
            r"\varcoppa",
            r"\sqrt{^2}_3",
            r"\text1",
            r"{\mbox%}",
            r"x^\text'",
            r"\text",
        ] {
            let once = accept(input);
            assert_eq!(accept(&once), once, "not a fixed point for {:?}", input);
        }
    }
}
