//! Options and per-call state of the rewriter
//!
//! Pending arguments are tracked in an arena of [`Frame`]s indexed by depth.
//! Frame 0 is the root scope of the formula; every command, script marker
//! or text command that still expects arguments sits on top of it.

/// Rewriter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Emit a superscript that is directly followed by a subscript after it,
    /// so `a^b_c` and `a_c^b` canonicalize the same way
    /// Default: true
    pub reorder_scripts: bool,

    /// Give each implicit single-token argument of a function or declaration
    /// its own braces (`\frac12` becomes `{\frac{1}{2}}`)
    /// Default: true
    pub brace_arguments: bool,

    /// Close argument scopes still open at end of input with empty
    /// arguments instead of rejecting the formula
    /// Default: true
    pub repair_dangling: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            reorder_scripts: true,
            brace_arguments: true,
            repair_dangling: true,
        }
    }
}

impl CheckOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept everything the legacy checker accepted
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Reject formulas whose last command is missing arguments
    pub fn strict() -> Self {
        Self {
            repair_dangling: false,
            ..Self::default()
        }
    }
}

/// Script marker of a [`FrameKind::Script`] frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Sub,
    Sup,
}

impl ScriptKind {
    pub fn from_marker(marker: &str) -> Self {
        if marker == "_" {
            ScriptKind::Sub
        } else {
            ScriptKind::Sup
        }
    }

    pub fn marker(self) -> char {
        match self {
            ScriptKind::Sub => '_',
            ScriptKind::Sup => '^',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
    Root,
    Command {
        /// Name as written in the input
        name: String,
        /// Implicit arguments are braced individually
        brace_args: bool,
        /// Missing arguments are repaired with `.` instead of `{}`
        delimiter: bool,
        /// May still start a `[...]` optional argument
        optional: bool,
    },
    Script {
        kind: ScriptKind,
        /// Output range of the superscript this subscript must move in
        /// front of
        reorder: Option<(usize, usize)>,
    },
    Text {
        name: String,
    },
}

/// One argument scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    /// Arguments still missing
    pub expected_args: usize,
    /// User braces open in the current explicit argument
    pub open_braces: usize,
    /// Inside `[...]`
    pub in_optional: bool,
    /// User braces open inside `[...]`
    pub optional_braces: usize,
    /// Output offset of the injected `{` wrapping this scope
    pub wrapper: usize,
    /// Opened directly after a user `{`; that brace can stand in for the
    /// injected one
    pub adoptable: bool,
    /// Input line of the token that opened the scope
    pub line: usize,
}

impl Frame {
    pub fn root() -> Self {
        Self::new(FrameKind::Root, 0, 0, 1)
    }

    pub fn new(kind: FrameKind, expected_args: usize, wrapper: usize, line: usize) -> Self {
        Self {
            kind,
            expected_args,
            open_braces: 0,
            in_optional: false,
            optional_braces: 0,
            wrapper,
            adoptable: false,
            line,
        }
    }

    pub fn is_root(&self) -> bool {
        self.kind == FrameKind::Root
    }

    /// True when the next token would be taken as an implicit argument
    pub fn awaits_implicit(&self) -> bool {
        !self.is_root() && self.expected_args > 0 && self.open_braces == 0 && !self.in_optional
    }

    /// Implicit single-token arguments get their own braces
    pub fn braces_implicit(&self) -> bool {
        matches!(
            self.kind,
            FrameKind::Command { brace_args: true, .. } | FrameKind::Text { .. }
        )
    }

    /// A text command still waiting for its character or group
    pub fn awaits_text(&self) -> bool {
        matches!(self.kind, FrameKind::Text { .. }) && self.awaits_implicit()
    }

    /// A `[` here starts the optional argument
    pub fn accepts_optional(&self) -> bool {
        matches!(self.kind, FrameKind::Command { optional: true, .. })
            && self.open_braces == 0
            && !self.in_optional
    }

    /// Forbid a later `[` from starting an optional argument
    pub fn close_optional_window(&mut self) {
        if let FrameKind::Command { optional, .. } = &mut self.kind {
            *optional = false;
        }
    }

    /// Name used in diagnostics
    pub fn describe(&self) -> String {
        match &self.kind {
            FrameKind::Root => String::new(),
            FrameKind::Command { name, .. } | FrameKind::Text { name } => format!("\\{}", name),
            FrameKind::Script { kind, .. } => kind.marker().to_string(),
        }
    }

    /// Placeholder written for each argument missing at end of input
    pub fn placeholder(&self) -> &'static str {
        match self.kind {
            FrameKind::Command {
                delimiter: true, ..
            } => ".",
            _ => "{}",
        }
    }
}

/// Where the last superscript stands in the output, for reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HatState {
    #[default]
    None,
    /// A superscript group occupies `start..end` of the output
    Done { start: usize, end: usize },
    /// A superscript reused the user brace at `start`; its group ends with
    /// the next `}`
    AwaitClose { start: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_presets() {
        let strict = CheckOptions::strict();
        assert!(!strict.repair_dangling);
        assert!(strict.reorder_scripts);
        assert_eq!(CheckOptions::lenient(), CheckOptions::default());
    }

    #[test]
    fn test_root_never_awaits() {
        let root = Frame::root();
        assert!(root.is_root());
        assert!(!root.awaits_implicit());
    }

    #[test]
    fn test_frame_expectations() {
        let mut frame = Frame::new(
            FrameKind::Command {
                name: "sqrt".into(),
                brace_args: true,
                delimiter: false,
                optional: true,
            },
            1,
            0,
            1,
        );
        assert!(frame.awaits_implicit());
        assert!(frame.braces_implicit());
        assert!(frame.accepts_optional());
        assert_eq!(frame.describe(), "\\sqrt");

        frame.close_optional_window();
        assert!(!frame.accepts_optional());

        frame.open_braces = 1;
        assert!(!frame.awaits_implicit());
    }

    #[test]
    fn test_placeholders() {
        let big = Frame::new(
            FrameKind::Command {
                name: "big".into(),
                brace_args: false,
                delimiter: true,
                optional: false,
            },
            1,
            0,
            1,
        );
        assert_eq!(big.placeholder(), ".");
        let script = Frame::new(
            FrameKind::Script {
                kind: ScriptKind::Sup,
                reorder: None,
            },
            1,
            0,
            1,
        );
        assert_eq!(script.placeholder(), "{}");
        assert_eq!(script.describe(), "^");
    }
}
