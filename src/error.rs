use thiserror::Error;

/// Syntax errors raised while splitting a path expression into tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening `[` at byte `position` has no matching `]`
    #[error("closing bracket not found for `[` at position {position}")]
    UnbalancedBrackets { position: usize },
}

/// Errors raised while resolving a path expression against a document
///
/// Every `path` field holds the canonical rendering of the tokens consumed
/// up to and including the one that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("key not found: {path}")]
    KeyNotFound { path: String },
    #[error("expected {expected} at `{path}`, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("queries on multiple array members are not supported: `{path}`")]
    UnsupportedQuery { path: String },
    #[error("array queries must contain a single equality operator: `{path}`")]
    MalformedFilter { path: String },
    #[error("invalid array index `{index}` at `{path}`")]
    InvalidIndex { path: String, index: String },
    #[error("no child matching query found: `{path}`")]
    NoMatchingElement { path: String },
    #[error("index {index} out of range for array of length {len} at `{path}`")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
}
