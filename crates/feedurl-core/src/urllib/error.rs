//! Error types for URL parsing, resolution and joining.

use thiserror::Error;

/// Why a string could not be used as a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Rejected by the `url` crate (bad host, bad port, ...).
    #[error(transparent)]
    Url(#[from] url::ParseError),
    /// ASCII control character (0x00-0x1F or 0x7F) in the input.
    #[error("invalid control character at byte {position}")]
    ControlCharacter { position: usize },
    /// `%` not followed by two hex digits.
    #[error("invalid URL escape at byte {position}")]
    InvalidEscape { position: usize },
    /// A relative reference whose first path segment contains `:`,
    /// i.e. a missing or malformed scheme.
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,
    /// Parsed, but not absolute where an absolute URL is required.
    #[error("URL is not absolute")]
    NotAbsolute,
    /// Non-hierarchical URL (`mailto:`, `data:`) where a path is required.
    #[error("URL cannot be used as a base")]
    CannotBeABase,
}

/// Errors returned by the Resolver and the Path Joiner.
///
/// The Transformer never returns these; it degrades to a fallback value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("unable to parse input URL {input:?}: {source}")]
    InvalidInput { input: String, source: ParseError },

    #[error("unable to parse base URL {base:?}: {source}")]
    InvalidBase { base: String, source: ParseError },

    #[error("empty base URL")]
    EmptyBase,

    #[error("empty path")]
    EmptyPath,

    #[error("unable to join base URL {base} and path {path}: {source}")]
    JoinFailed {
        base: String,
        path: String,
        source: ParseError,
    },
}

impl UrlError {
    pub(crate) fn invalid_input(input: &str, source: impl Into<ParseError>) -> Self {
        UrlError::InvalidInput {
            input: input.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn invalid_base(base: &str, source: impl Into<ParseError>) -> Self {
        UrlError::InvalidBase {
            base: base.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn join_failed(base: &str, path: &str, source: impl Into<ParseError>) -> Self {
        UrlError::JoinFailed {
            base: base.to_string(),
            path: path.to_string(),
            source: source.into(),
        }
    }
}
