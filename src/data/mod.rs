//! Data layer - Static command tables
//!
//! This module contains the command whitelist used to validate formulas:
//! - Command classification sets (functions, delimiters, literals, ...)
//! - MediaWiki alias substitutions
//! - The `Whitelist` lookup combining them with runtime extensions

pub mod aliases;
pub mod commands;
pub mod whitelist;

// Re-export commonly used items
pub use aliases::{ARGUMENT_ALIASES, BOX_ALIASES, DELIMITER_ALIASES, LITERAL_ALIASES};
pub use commands::{
    BIG_DELIMITERS, BINARY_FUNCTIONS, DECLARATIONS, DELIMITERS, INFIX_OPERATORS, KEYWORDS,
    LITERALS, NAMED_FUNCTIONS, OPTIONAL_ARGUMENT, TEXT_COMMANDS, UNARY_FUNCTIONS,
};
pub use whitelist::{CommandClass, Whitelist};
