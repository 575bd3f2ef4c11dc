//! Tree Climber: structural navigation and editing over tree-sitter trees.
//!
//! Every request parses a fresh snapshot of the text, resolves a cursor
//! [`Point`] to a syntax node and answers one command: move the cursor
//! between scopes, describe nodes, or compute a structural edit (split,
//! barf, raise) as a [`Replacement`] for the caller to apply.
//!
//! # Architecture
//!
//! Languages are data, not types. A [`LanguageProfile`] pairs an ast-grep
//! grammar with the node-kind tables (`scopes`, `splittable`, `units`,
//! `delimiters`) that every operation is parameterised over. Profiles are
//! built once per name and shared through a [`ProfileRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use tree_climber::{operate, OperationCommand, Point};
//!
//! let source = r#"const s = "my dapper string";"#;
//! if let Some(edit) = operate("typescript", OperationCommand::SplitExpr, source, Point::new(0, 13))? {
//!     println!("{}", edit.apply(source));
//! }
//! # Ok::<(), tree_climber::EngineError>(())
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod lang;
pub mod node;
pub mod ops;
pub mod pool;
pub mod position;
pub mod scope;
pub mod ts;

// Re-exports
pub use command::{
    execute_navigation, execute_operation, execute_query, navigate, operate, query, Navigation,
    NavigationCommand, OperationCommand, QueryCommand,
};
pub use config::{load_from_path, load_from_str, ConfigError, LanguagesConfig};
pub use error::EngineError;
pub use lang::{registry, LanguageProfile, NodeTables, ProfileDefinition, ProfileRegistry};
pub use node::{NodeDescriptor, NodeInfo};
pub use ops::Replacement;
pub use position::Point;
pub use scope::ScopeResolver;
pub use ts::TreeSitterError;
