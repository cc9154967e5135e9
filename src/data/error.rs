use thiserror::Error;

/// Why a piece of raw text could not become a [`Dataset`](super::model::Dataset).
///
/// Parsing is all-or-nothing: any of these means no dataset was produced.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text is blank, or contains only blank lines.
    #[error("no data to parse: input is empty")]
    EmptyInput,

    /// The text was submitted as JSON but is not valid JSON.
    #[error("invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// Valid JSON, but not an array of objects.
    #[error("expected a JSON array of objects, found {found}")]
    UnexpectedShape { found: String },

    /// The CSV reader rejected the text.
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
}

/// Payload-free tag for [`ParseError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    EmptyInput,
    InvalidJson,
    UnexpectedShape,
    MalformedCsv,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::InvalidJson(_) => ParseErrorKind::InvalidJson,
            ParseError::UnexpectedShape { .. } => ParseErrorKind::UnexpectedShape,
            ParseError::Csv(_) => ParseErrorKind::MalformedCsv,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
