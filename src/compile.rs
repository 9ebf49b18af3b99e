use crate::block::{self, BlockKind, CODE_FENCE};
use crate::error::MarkdownError;
use crate::html::HtmlNode;
use crate::inline::parse_inline;

/// Convert a whole document into a `div` holding one node per block.
pub fn markdown_to_node(document: &str) -> Result<HtmlNode, MarkdownError> {
    let children = block::segment(document)
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Convert a whole document into an HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, MarkdownError> {
    markdown_to_node(document)?.to_html()
}

/// Classify a single block and compile it.
pub fn block_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    compile_block(block, block::classify(block))
}

/// Compile a block as the given kind.
pub fn compile_block(block: &str, kind: BlockKind) -> Result<HtmlNode, MarkdownError> {
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading(level @ 1..=6) => heading_to_node(block, level),
        BlockKind::Heading(_) => Err(MarkdownError::UnknownBlockKind(kind.to_string())),
        BlockKind::Code => code_to_node(block),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    parse_inline(text)?
        .iter()
        .map(|span| span.to_html_node())
        .collect()
}

pub fn paragraph_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

pub fn heading_to_node(block: &str, level: u8) -> Result<HtmlNode, MarkdownError> {
    // `level` hashes plus the separating space
    let offset = level as usize + 1;
    let text = match block.get(offset..) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(MarkdownError::MalformedHeading(block.to_string())),
    };
    Ok(HtmlNode::parent(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

/// Code content is kept literal: no inline parsing.
pub fn code_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    if !block.starts_with(CODE_FENCE) || !block.ends_with(CODE_FENCE) {
        return Err(MarkdownError::MalformedCodeBlock);
    }

    // Drop the opening fence, its language tag and the newline after it
    let start = block.find('\n').ok_or(MarkdownError::MalformedCodeBlock)? + 1;
    let end = block.len() - CODE_FENCE.len();
    let code = block
        .get(start..end)
        .ok_or(MarkdownError::MalformedCodeBlock)?;

    Ok(HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent("code", vec![HtmlNode::text(code)])],
    ))
}

pub fn quote_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        if !line.starts_with('>') {
            return Err(MarkdownError::MalformedQuote(line.to_string()));
        }
        lines.push(line.trim_start_matches('>').trim());
    }
    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

pub fn unordered_list_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let items = block
        .split('\n')
        .map(|line| list_item(line.get(2..).unwrap_or_default()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ul", items))
}

pub fn ordered_list_to_node(block: &str) -> Result<HtmlNode, MarkdownError> {
    let items = block
        .split('\n')
        .map(|line| {
            let digits = line.bytes().take_while(u8::is_ascii_digit).count();
            list_item(line.get(digits + 2..).unwrap_or_default())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        markdown_to_html(md).unwrap()
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            html("# Title\n\nSome **bold** text."),
            "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
        );
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            html("This is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with *italic* text and `code` here\n\n"),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            html("## Second\n\n###### Sixth with *style*"),
            "<div><h2>Second</h2><h6>Sixth with <i>style</i></h6></div>"
        );
    }

    #[test]
    fn heading_without_text_fails() {
        assert_eq!(
            heading_to_node("##", 2),
            Err(MarkdownError::MalformedHeading("##".to_string()))
        );
        assert!(heading_to_node("# ", 1).is_err());
    }

    #[test]
    fn out_of_range_heading_level_is_unknown() {
        assert!(matches!(
            compile_block("####### deep", BlockKind::Heading(7)),
            Err(MarkdownError::UnknownBlockKind(_))
        ));
    }

    #[test]
    fn code_block_is_literal() {
        assert_eq!(
            html("```\ncode here\n```"),
            "<div><pre><code>code here\n</code></pre></div>"
        );
        assert_eq!(
            html("```rust\nlet x = *y;\n```"),
            "<div><pre><code>let x = *y;\n</code></pre></div>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(
            code_to_node("```\n```").unwrap().to_html().unwrap(),
            "<pre><code></code></pre>"
        );
    }

    #[test]
    fn code_block_needs_both_fences() {
        assert_eq!(
            code_to_node("```\nno closing fence"),
            Err(MarkdownError::MalformedCodeBlock)
        );
        assert_eq!(
            code_to_node("no opening\n```"),
            Err(MarkdownError::MalformedCodeBlock)
        );
    }

    #[test]
    fn quote_lines_are_stripped_and_joined() {
        assert_eq!(
            html("> This is a\n>   **quote** block\n>> nested marker"),
            "<div><blockquote>This is a <b>quote</b> block nested marker</blockquote></div>"
        );
    }

    #[test]
    fn quote_line_without_marker_fails() {
        assert_eq!(
            quote_to_node("> fine\nnot fine"),
            Err(MarkdownError::MalformedQuote("not fine".to_string()))
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            unordered_list_to_node("- a\n- b").unwrap().to_html().unwrap(),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn ordered_list_with_inline_spans() {
        assert_eq!(
            html("1. first [link](/a)\n2. *second*\n3. `third`"),
            r#"<div><ol><li>first <a href="/a">link</a></li><li><i>second</i></li><li><code>third</code></li></ol></div>"#
        );
    }

    #[test]
    fn ordered_list_past_nine_strips_whole_marker() {
        let block = (1..=10)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        let out = html(&block);
        assert!(out.ends_with("<li>item</li><li>item</li></ol></div>"));
        assert!(!out.contains(". item"));
    }

    #[test]
    fn image_in_paragraph() {
        assert_eq!(
            html("Look: ![a cat](/images/cat.png)"),
            r#"<div><p>Look: <img src="/images/cat.png" alt="a cat"></img></p></div>"#
        );
    }

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(html(""), "<div></div>");
        assert_eq!(html("\n\n  \n\n"), "<div></div>");
    }

    #[test]
    fn one_bad_block_aborts_document() {
        assert!(matches!(
            markdown_to_html("# Fine\n\nThis *breaks\n\nNever reached"),
            Err(MarkdownError::MalformedEmphasis { .. })
        ));
    }

    #[test]
    fn mixed_document() {
        let md = "# Tolkien Fan Club\n\n![JRR Tolkien sitting](/images/tolkien.png)\n\nHere's the deal, **I like Tolkien**.\n\n> \"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien\n\n## Reasons\n\n- It's a *masterpiece*\n- [Read more](/blog/glorfindel)\n\n```\nfn main() {}\n```";
        assert_eq!(
            html(md),
            concat!(
                "<div>",
                "<h1>Tolkien Fan Club</h1>",
                r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
                "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
                "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
                "<h2>Reasons</h2>",
                "<ul><li>It's a <i>masterpiece</i></li><li><a href=\"/blog/glorfindel\">Read more</a></li></ul>",
                "<pre><code>fn main() {}\n</code></pre>",
                "</div>"
            )
        );
    }
}
