use crate::error::MarkdownError;
use crate::html::HtmlNode;

/// Formatting applied to an inline run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed, non-overlapping run of inline text.
///
/// `target` carries the URL for links and images and is `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl Span {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert to a leaf node. Images render with an empty value and the
    /// alt text as an attribute.
    ///
    /// Links and images must carry a target.
    pub fn to_html_node(&self) -> Result<HtmlNode, MarkdownError> {
        let node = match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.content),
            SpanKind::Bold => HtmlNode::leaf("b", &self.content),
            SpanKind::Italic => HtmlNode::leaf("i", &self.content),
            SpanKind::Code => HtmlNode::leaf("code", &self.content),
            SpanKind::Link => {
                HtmlNode::leaf("a", &self.content).with_attr("href", self.required_target()?)
            }
            SpanKind::Image => HtmlNode::leaf("img", "")
                .with_attr("src", self.required_target()?)
                .with_attr("alt", &self.content),
        };
        Ok(node)
    }

    fn required_target(&self) -> Result<&str, MarkdownError> {
        self.target
            .as_deref()
            .ok_or(MarkdownError::InvalidNodeConstruction(
                "link or image span has no target",
            ))
    }
}
