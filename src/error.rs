use crate::position::Point;
use crate::ts::TreeSitterError;
use thiserror::Error;

/// Errors surfaced by the navigation, operation and query entry points.
///
/// "Nothing to do at this point" is never an error: operations return
/// `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported language: {name}{}", did_you_mean(.suggestion))]
    UnsupportedLanguage {
        name: String,
        suggestion: Option<String>,
    },

    #[error("cannot raise `{kind}` at {start}: no ancestor accepts it without syntax errors")]
    RaiseExhausted { kind: String, start: Point },

    #[error("tree-sitter error: {0}")]
    TreeSitter(#[from] TreeSitterError),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_language_mentions_suggestion() {
        let err = EngineError::UnsupportedLanguage {
            name: "typescipt".into(),
            suggestion: Some("typescript".into()),
        };
        assert_eq!(
            err.to_string(),
            "unsupported language: typescipt (did you mean 'typescript'?)"
        );

        let err = EngineError::UnsupportedLanguage {
            name: "cobol".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unsupported language: cobol");
    }
}
