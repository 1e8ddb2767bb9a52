//! Failure reasons for content parsing.

use thiserror::Error;

use crate::content::Content;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a payload could not be turned into [`Content`].
pub enum ParseError {
    /// The `html` field is missing or is not a string.
    #[error("no html")]
    MissingHtml,
    /// The HTML body has no link marker; the offending HTML is echoed back.
    #[error("No href tag found in in-app html payload {html}")]
    MissingHref { html: String },
}

impl ParseError {
    /// Human-readable diagnostic for callers that surface the failure.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Short stable label, used as a metrics dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MissingHtml => "missing_html",
            ParseError::MissingHref { .. } => "missing_href",
        }
    }
}

/// Result of parsing one payload.
pub type ParseResult = std::result::Result<Content, ParseError>;
