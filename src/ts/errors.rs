use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeSitterError {
    #[error("failed to set {grammar} grammar for parser")]
    LanguageSet { grammar: String },

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("syntax error detected at {row}:{column} (byte {byte_start}..{byte_end})")]
    SyntaxError {
        row: usize,
        column: usize,
        byte_start: usize,
        byte_end: usize,
    },

    #[error("multiple syntax errors detected: {count} ERROR nodes")]
    MultipleSyntaxErrors { count: usize },
}

impl TreeSitterError {
    /// Whether this error reports a problem in the parsed text rather than in
    /// the parser itself.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            TreeSitterError::SyntaxError { .. } | TreeSitterError::MultipleSyntaxErrors { .. }
        )
    }
}
