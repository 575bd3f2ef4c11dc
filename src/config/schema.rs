use crate::lang::{builtin, NodeTables, ProfileDefinition, ProfileRegistry};
use ast_grep_language::SupportLang;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LanguagesConfig {
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

impl LanguagesConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.languages.is_empty() {
            issues.push(ValidationIssue::EmptyLanguageList);
        }

        let mut seen = HashSet::new();
        for entry in &self.languages {
            let key = entry.key();
            if key.is_empty() {
                issues.push(ValidationIssue::MissingField {
                    language: None,
                    field: "name",
                });
                continue;
            }
            if !seen.insert(key.clone()) {
                issues.push(ValidationIssue::DuplicateLanguage { language: key.clone() });
            }

            if entry.grammar().is_none() {
                issues.push(ValidationIssue::UnknownGrammar {
                    language: key.clone(),
                    grammar: entry.grammar_name().to_string(),
                });
            }

            let tables = [
                ("scopes", &entry.scopes),
                ("splittable", &entry.splittable),
                ("units", &entry.units),
            ];
            let has_builtin = builtin::definition(&key).is_some();
            for (field, kinds) in tables {
                match kinds {
                    None if !has_builtin => issues.push(ValidationIssue::MissingField {
                        language: Some(key.clone()),
                        field,
                    }),
                    Some(kinds) if kinds.iter().any(|kind| kind.trim().is_empty()) => {
                        issues.push(ValidationIssue::BlankCategory {
                            language: key.clone(),
                            field,
                        })
                    }
                    _ => {}
                }
            }
            if entry.delimiters.keys().any(|kind| kind.trim().is_empty()) {
                issues.push(ValidationIssue::BlankCategory {
                    language: key.clone(),
                    field: "delimiters",
                });
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Profile definitions for every configured language.
    ///
    /// Entries that fail validation are skipped; call [`Self::validate`]
    /// first to have them reported.
    pub fn definitions(&self) -> Vec<ProfileDefinition> {
        self.languages
            .iter()
            .filter_map(LanguageEntry::definition)
            .collect()
    }

    /// A registry with the builtin languages plus everything configured
    /// here, configured entries taking precedence.
    pub fn registry(&self) -> ProfileRegistry {
        ProfileRegistry::with_definitions(builtin::definitions().into_iter().chain(self.definitions()))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LanguageEntry {
    pub name: String,
    /// Grammar name understood by ast-grep; defaults to `name`.
    #[serde(default)]
    pub grammar: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub splittable: Option<Vec<String>>,
    #[serde(default)]
    pub units: Option<Vec<String>>,
    /// Parent kind -> separator. Merged over the builtin delimiters.
    #[serde(default)]
    pub delimiters: HashMap<String, String>,
}

impl LanguageEntry {
    fn key(&self) -> String {
        self.name.trim().to_ascii_lowercase()
    }

    pub fn grammar_name(&self) -> &str {
        self.grammar.as_deref().unwrap_or(&self.name).trim()
    }

    pub fn grammar(&self) -> Option<SupportLang> {
        self.grammar_name().to_ascii_lowercase().parse().ok()
    }

    /// Resolve this entry against the builtin of the same name.
    pub fn definition(&self) -> Option<ProfileDefinition> {
        let key = self.key();
        if key.is_empty() {
            return None;
        }
        let grammar = self.grammar()?;
        let base = builtin::definition(&key);
        let base_nodes = base.as_ref().map(|def| &def.nodes);

        let mut nodes = NodeTables {
            scopes: self
                .scopes
                .clone()
                .or_else(|| base_nodes.map(|nodes| nodes.scopes.clone()))?,
            splittable: self
                .splittable
                .clone()
                .or_else(|| base_nodes.map(|nodes| nodes.splittable.clone()))?,
            units: self
                .units
                .clone()
                .or_else(|| base_nodes.map(|nodes| nodes.units.clone()))?,
            delimiters: base_nodes
                .map(|nodes| nodes.delimiters.clone())
                .unwrap_or_default(),
        };
        nodes.delimiters.extend(self.delimiters.clone());

        let display_name = self
            .display_name
            .clone()
            .or_else(|| base.as_ref().map(|def| def.display_name.clone()))
            .unwrap_or_else(|| self.name.trim().to_string());

        Some(ProfileDefinition::new(key, display_name, grammar, nodes))
    }
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyLanguageList,
    MissingField {
        language: Option<String>,
        field: &'static str,
    },
    DuplicateLanguage {
        language: String,
    },
    UnknownGrammar {
        language: String,
        grammar: String,
    },
    BlankCategory {
        language: String,
        field: &'static str,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyLanguageList => {
                write!(f, "language config contains no languages")
            }
            ValidationIssue::MissingField { language, field } => match language {
                Some(name) => write!(f, "language '{name}' missing required field '{field}'"),
                None => write!(f, "language missing required field '{field}'"),
            },
            ValidationIssue::DuplicateLanguage { language } => {
                write!(f, "language '{language}' is declared more than once")
            }
            ValidationIssue::UnknownGrammar { language, grammar } => {
                write!(f, "language '{language}' uses unknown grammar '{grammar}'")
            }
            ValidationIssue::BlankCategory { language, field } => {
                write!(f, "language '{language}' has a blank category in '{field}'")
            }
        }
    }
}
