use thiserror::Error;

/// Failures raised while turning one Markdown document into HTML.
///
/// Every variant is terminal for the document being converted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    #[error("unbalanced `{delimiter}` delimiter in: {text}")]
    MalformedEmphasis { delimiter: String, text: String },

    #[error("heading has no text: {0}")]
    MalformedHeading(String),

    #[error("code block must start and end with ```")]
    MalformedCodeBlock,

    #[error("quote line is missing its `>` prefix: {0}")]
    MalformedQuote(String),

    #[error("invalid HTML node: {0}")]
    InvalidNodeConstruction(&'static str),

    #[error("no `# ` title line found")]
    NoTitleFound,

    #[error("no compiler registered for block kind {0}")]
    UnknownBlockKind(String),
}
