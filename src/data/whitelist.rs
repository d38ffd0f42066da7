//! Command lookup over the classification tables
//!
//! A command name is classified by the first table that contains it, in this
//! order: unary functions, binary functions, big delimiters, declarations,
//! argument aliases, literal aliases, box aliases, delimiter aliases, and
//! finally the flat literal / named function / delimiter / infix / keyword /
//! text command sets. Runtime extensions are only consulted when no built-in table
//! matches, so they can add commands but never reclassify one.

use std::borrow::Cow;

use fxhash::FxHashMap;

use super::aliases::{ARGUMENT_ALIASES, BOX_ALIASES, DELIMITER_ALIASES, LITERAL_ALIASES};
use super::commands::{
    BIG_DELIMITERS, BINARY_FUNCTIONS, DECLARATIONS, DELIMITERS, INFIX_OPERATORS, KEYWORDS,
    LITERALS, NAMED_FUNCTIONS, OPTIONAL_ARGUMENT, TEXT_COMMANDS, UNARY_FUNCTIONS,
};

/// How a whitelisted command is rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Deserialize),
    serde(tag = "class", rename_all = "snake_case")
)]
pub enum CommandClass {
    /// Command taking `arity` arguments, wrapped together with them
    Function { arity: u8 },
    /// `\big` family, one delimiter argument
    BigDelimiter,
    /// Font switch treated as a one-argument command
    Declaration,
    /// Renamed command that keeps its arguments
    ArgumentAlias {
        target: Cow<'static, str>,
        arity: u8,
    },
    /// Renamed control word
    Alias { target: Cow<'static, str> },
    /// Expands to a boxed character, e.g. `mathbb{R}`
    BoxAlias { target: Cow<'static, str> },
    /// Renamed delimiter
    DelimiterAlias { target: Cow<'static, str> },
    Literal,
    NamedFunction,
    Delimiter,
    Infix,
    Keyword,
    /// `\text` and the box commands; the argument is copied as text. Only
    /// the built-in names are scanned as text, so extensions cannot use it.
    #[cfg_attr(feature = "data-loading", serde(skip_deserializing))]
    TextCommand,
}

impl CommandClass {
    /// Number of arguments the rewriter must collect
    pub fn arity(&self) -> usize {
        match self {
            CommandClass::Function { arity } | CommandClass::ArgumentAlias { arity, .. } => {
                *arity as usize
            }
            CommandClass::BigDelimiter | CommandClass::Declaration => 1,
            _ => 0,
        }
    }

    /// Control word written to the output for a command spelled `name`
    pub fn rendered_name<'a>(&'a self, name: &'a str) -> &'a str {
        match self {
            CommandClass::ArgumentAlias { target, .. }
            | CommandClass::Alias { target }
            | CommandClass::BoxAlias { target }
            | CommandClass::DelimiterAlias { target } => target,
            _ => name,
        }
    }

    /// Whether implicit arguments of this command get their own braces
    pub fn braces_arguments(&self) -> bool {
        matches!(
            self,
            CommandClass::Function { .. }
                | CommandClass::Declaration
                | CommandClass::ArgumentAlias { .. }
        )
    }
}

/// Read-only view over the command tables, plus optional extensions
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    extensions: FxHashMap<String, CommandClass>,
}

impl Whitelist {
    /// Whitelist with only the built-in tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, builder style
    pub fn with_command(mut self, name: impl Into<String>, class: CommandClass) -> Self {
        self.insert(name, class);
        self
    }

    /// Add a command. Built-in names keep their built-in class, and an
    /// extension given [`CommandClass::TextCommand`] is kept as a keyword.
    pub fn insert(&mut self, name: impl Into<String>, class: CommandClass) {
        let class = match class {
            CommandClass::TextCommand => CommandClass::Keyword,
            other => other,
        };
        self.extensions.insert(name.into(), class);
    }

    /// Classify a command name (without the backslash)
    pub fn classify(&self, name: &str) -> Option<CommandClass> {
        builtin_class(name).or_else(|| self.extensions.get(name).cloned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classify(name).is_some()
    }

    /// Whether `name` accepts a bracketed optional argument
    pub fn takes_optional_argument(&self, name: &str) -> bool {
        OPTIONAL_ARGUMENT.contains(name)
    }

    /// Every accepted command name, built-ins first
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        UNARY_FUNCTIONS
            .iter()
            .chain(BINARY_FUNCTIONS.iter())
            .chain(BIG_DELIMITERS.iter())
            .chain(DECLARATIONS.iter())
            .chain(ARGUMENT_ALIASES.keys())
            .chain(LITERAL_ALIASES.keys())
            .chain(BOX_ALIASES.keys())
            .chain(DELIMITER_ALIASES.keys())
            .chain(LITERALS.iter())
            .chain(NAMED_FUNCTIONS.iter())
            .chain(DELIMITERS.iter())
            .chain(INFIX_OPERATORS.iter())
            .chain(KEYWORDS.iter())
            .chain(TEXT_COMMANDS.iter())
            .map(|name| -> &str { name })
            .chain(self.extensions.keys().map(String::as_str))
    }

    /// Number of extension commands
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }
}

fn builtin_class(name: &str) -> Option<CommandClass> {
    if UNARY_FUNCTIONS.contains(name) {
        return Some(CommandClass::Function { arity: 1 });
    }
    if BINARY_FUNCTIONS.contains(name) {
        return Some(CommandClass::Function { arity: 2 });
    }
    if BIG_DELIMITERS.contains(name) {
        return Some(CommandClass::BigDelimiter);
    }
    if DECLARATIONS.contains(name) {
        return Some(CommandClass::Declaration);
    }
    if let Some(target) = ARGUMENT_ALIASES.get(name) {
        return Some(CommandClass::ArgumentAlias {
            target: Cow::Borrowed(target),
            arity: 1,
        });
    }
    if let Some(target) = LITERAL_ALIASES.get(name) {
        return Some(CommandClass::Alias {
            target: Cow::Borrowed(target),
        });
    }
    if let Some(target) = BOX_ALIASES.get(name) {
        return Some(CommandClass::BoxAlias {
            target: Cow::Borrowed(target),
        });
    }
    if let Some(target) = DELIMITER_ALIASES.get(name) {
        return Some(CommandClass::DelimiterAlias {
            target: Cow::Borrowed(target),
        });
    }
    if LITERALS.contains(name) {
        Some(CommandClass::Literal)
    } else if NAMED_FUNCTIONS.contains(name) {
        Some(CommandClass::NamedFunction)
    } else if DELIMITERS.contains(name) {
        Some(CommandClass::Delimiter)
    } else if INFIX_OPERATORS.contains(name) {
        Some(CommandClass::Infix)
    } else if KEYWORDS.contains(name) {
        Some(CommandClass::Keyword)
    } else if TEXT_COMMANDS.contains(name) {
        Some(CommandClass::TextCommand)
    } else {
        None
    }
}

#[cfg(feature = "data-loading")]
mod loading {
    use std::collections::BTreeMap;
    use std::path::Path;

    use serde::Deserialize;

    use super::{CommandClass, Whitelist};
    use crate::utils::error::ConfigError;

    #[derive(Deserialize)]
    struct WhitelistFile {
        #[serde(default)]
        commands: BTreeMap<String, CommandClass>,
    }

    impl Whitelist {
        /// Load extension commands from a TOML document:
        ///
        /// ```toml
        /// [commands]
        /// degree = { class = "literal" }
        /// abs = { class = "function", arity = 1 }
        /// ```
        pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
            let file: WhitelistFile = toml::from_str(input).map_err(|e| ConfigError::Parse {
                format: "TOML",
                message: e.to_string(),
            })?;
            Ok(Self::from_file(file))
        }

        /// Load extension commands from a JSON document with the same shape
        /// as the TOML format.
        pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
            let file: WhitelistFile =
                serde_json::from_str(input).map_err(|e| ConfigError::Parse {
                    format: "JSON",
                    message: e.to_string(),
                })?;
            Ok(Self::from_file(file))
        }

        /// Load extension commands from a file. `.json` files are read as
        /// JSON, anything else as TOML.
        pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)?;
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_str(&content),
                _ => Self::from_toml_str(&content),
            }
        }

        fn from_file(file: WhitelistFile) -> Self {
            let mut whitelist = Whitelist::new();
            for (name, class) in file.commands {
                log::debug!("whitelist extension \\{} as {:?}", name, class);
                whitelist.insert(name, class);
            }
            whitelist
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let wl = Whitelist::new();
        assert_eq!(wl.classify("sqrt"), Some(CommandClass::Function { arity: 1 }));
        assert_eq!(wl.classify("frac"), Some(CommandClass::Function { arity: 2 }));
        assert_eq!(wl.classify("bigl"), Some(CommandClass::BigDelimiter));
        assert_eq!(wl.classify("rm"), Some(CommandClass::Declaration));
        assert_eq!(wl.classify("alpha"), Some(CommandClass::Literal));
        assert_eq!(wl.classify("sin"), Some(CommandClass::NamedFunction));
        assert_eq!(wl.classify("langle"), Some(CommandClass::Delimiter));
        assert_eq!(wl.classify("choose"), Some(CommandClass::Infix));
        assert_eq!(wl.classify("left"), Some(CommandClass::Keyword));
        assert_eq!(wl.classify("mbox"), Some(CommandClass::TextCommand));
        assert_eq!(wl.classify("notacommand"), None);
    }

    #[test]
    fn test_aliases() {
        let wl = Whitelist::new();
        let reals = wl.classify("reals").unwrap();
        assert_eq!(reals.rendered_name("reals"), "mathbb{R}");
        let le = wl.classify("le").unwrap();
        assert_eq!(le.rendered_name("le"), "leq");
        let lang = wl.classify("lang").unwrap();
        assert!(matches!(lang, CommandClass::DelimiterAlias { .. }));
        let bbb = wl.classify("Bbb").unwrap();
        assert_eq!(bbb.arity(), 1);
        assert_eq!(bbb.rendered_name("Bbb"), "mathbb");
    }

    #[test]
    fn test_tables_are_disjoint() {
        let wl = Whitelist::new();
        let mut seen = std::collections::HashSet::new();
        for name in wl.names() {
            assert!(seen.insert(name), "'{}' appears in two tables", name);
        }
    }

    #[test]
    fn test_extensions_do_not_override() {
        let wl = Whitelist::new()
            .with_command("abs", CommandClass::Function { arity: 1 })
            .with_command("sqrt", CommandClass::Literal);
        assert_eq!(wl.classify("abs"), Some(CommandClass::Function { arity: 1 }));
        assert_eq!(wl.classify("sqrt"), Some(CommandClass::Function { arity: 1 }));
        assert!(wl.names().any(|n| n == "abs"));
        assert!(wl.names().any(|n| n == "text"));
    }

    #[test]
    fn test_text_class_is_builtin_only() {
        let wl = Whitelist::new().with_command("textnormal", CommandClass::TextCommand);
        assert_eq!(wl.classify("textnormal"), Some(CommandClass::Keyword));
    }

    #[test]
    fn test_operatorname_is_not_braced() {
        let wl = Whitelist::new();
        let class = wl.classify("operatorname").unwrap();
        assert_eq!(class.arity(), 0);
        assert!(!class.braces_arguments());
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_load_toml_extension() {
        let wl = Whitelist::from_toml_str(
            r#"
            [commands]
            degree = { class = "literal" }
            abs = { class = "function", arity = 1 }
            "#,
        )
        .unwrap();
        assert_eq!(wl.extension_count(), 2);
        assert_eq!(wl.classify("degree"), Some(CommandClass::Literal));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_load_json_extension() {
        let wl = Whitelist::from_json_str(
            r#"{"commands": {"ddeg": {"class": "alias", "target": "deg"}}}"#,
        )
        .unwrap();
        let class = wl.classify("ddeg").unwrap();
        assert_eq!(class.rendered_name("ddeg"), "deg");
        assert!(Whitelist::from_json_str("{").is_err());
        assert!(Whitelist::from_json_str(r#"{"commands": {"t": {"class": "text_command"}}}"#).is_err());
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!("texcheck-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"commands": {"degree": {"class": "literal"}}}"#).unwrap();
        let wl = Whitelist::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(wl.classify("degree"), Some(CommandClass::Literal));

        let missing = Whitelist::from_path(path.with_extension("toml"));
        assert!(matches!(missing, Err(crate::utils::error::ConfigError::IoError { .. })));
    }
}
