use crate::error::MarkdownError;

/// Element attributes in insertion order.
pub type Attributes = Vec<(String, String)>;

/// Output HTML tree.
///
/// Nodes are built bottom-up and never mutated afterwards, so a parent owns
/// its children outright. Fields are optional to mirror partially built
/// nodes; validity is checked when serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A terminal value holder. With no tag the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    /// A tag wrapping an ordered list of children.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Raw text with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children,
            attrs: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.push((key.to_string(), value.into()));
            }
        }
        self
    }

    /// Render this node and its subtree as an HTML string.
    ///
    /// Text and attribute values are written as-is; nothing is escaped.
    pub fn to_html(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(MarkdownError::InvalidNodeConstruction(
                    "leaf node has no value",
                ))?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attrs, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_deref().ok_or(MarkdownError::InvalidNodeConstruction(
                    "parent node has no tag",
                ))?;
                open_tag(tag, attrs, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
