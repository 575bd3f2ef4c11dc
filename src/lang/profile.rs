use crate::pool;
use crate::ts::{validator, LanguageParser, ParsedSource, TreeSitterError};
use ast_grep_language::SupportLang;
use std::collections::HashMap;

/// Separator used between re-segmented children when a parent kind has no
/// configured delimiter.
pub const DEFAULT_DELIMITER: &str = " ";

/// Grammar node kinds that drive navigation and the structural operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTables {
    /// Kinds that bound scope navigation and barf.
    pub scopes: Vec<String>,
    /// Delimited kinds that split can divide in two.
    pub splittable: Vec<String>,
    /// Kinds raise may lift or replace.
    pub units: Vec<String>,
    /// Parent kind -> text placed between split segments.
    pub delimiters: HashMap<String, String>,
}

impl NodeTables {
    pub fn new<S: Into<String>>(
        scopes: impl IntoIterator<Item = S>,
        splittable: impl IntoIterator<Item = S>,
        units: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
            splittable: splittable.into_iter().map(Into::into).collect(),
            units: units.into_iter().map(Into::into).collect(),
            delimiters: HashMap::new(),
        }
    }

    pub fn with_delimiter(mut self, parent_kind: &str, delimiter: &str) -> Self {
        self.delimiters
            .insert(parent_kind.to_string(), delimiter.to_string());
        self
    }

    /// Delimiter configured for `parent_kind`, or [`DEFAULT_DELIMITER`].
    pub fn delimiter_for(&self, parent_kind: &str) -> &str {
        self.delimiters
            .get(parent_kind)
            .map_or(DEFAULT_DELIMITER, String::as_str)
    }
}

/// Everything needed to build a [`LanguageProfile`].
#[derive(Debug, Clone)]
pub struct ProfileDefinition {
    /// Registry key, lowercase.
    pub name: String,
    pub display_name: String,
    pub grammar: SupportLang,
    pub nodes: NodeTables,
}

impl ProfileDefinition {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        grammar: SupportLang,
        nodes: NodeTables,
    ) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            display_name: display_name.into(),
            grammar,
            nodes,
        }
    }
}

/// An immutable, shareable language configuration.
///
/// Profiles hold the grammar rather than a parser; parsing borrows a pooled
/// per-thread parser, which keeps profiles `Send + Sync`.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    definition: ProfileDefinition,
}

impl LanguageProfile {
    /// Build a profile, checking that its grammar binds to a parser.
    pub fn new(definition: ProfileDefinition) -> Result<Self, TreeSitterError> {
        LanguageParser::new(definition.grammar)?;
        Ok(Self { definition })
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn display_name(&self) -> &str {
        &self.definition.display_name
    }

    pub fn grammar(&self) -> SupportLang {
        self.definition.grammar
    }

    pub fn nodes(&self) -> &NodeTables {
        &self.definition.nodes
    }

    /// Parse a snapshot of `source`.
    pub fn parse<'a>(&self, source: &'a str) -> Result<ParsedSource<'a>, TreeSitterError> {
        pool::with_parser(self.grammar(), |parser| parser.parse_with_source(source))?
    }

    /// See [`validator::is_valid_replacement`].
    pub fn is_valid_replacement(
        &self,
        source: &str,
        byte_start: usize,
        byte_end: usize,
        new_text: &str,
    ) -> Result<bool, TreeSitterError> {
        validator::is_valid_replacement(self.grammar(), source, byte_start, byte_end, new_text)
    }
}
