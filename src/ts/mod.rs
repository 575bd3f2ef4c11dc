//! Tree-sitter integration: parsing, point resolution and category search.
//!
//! Grammars come from `ast-grep-language`; this module never interprets a
//! grammar's node kinds itself. Which kinds matter is decided by the
//! language profile handed to the operations.

pub mod errors;
pub mod parser;
pub mod search;
pub mod validator;

pub use errors::TreeSitterError;
pub use parser::{ErrorNode, LanguageParser, ParsedSource};
pub use search::{
    find_ancestor_of_type, find_descendant_of_type, find_node_of_type, node_at, point_index,
};
pub use validator::{is_valid_replacement, validate_syntax};
