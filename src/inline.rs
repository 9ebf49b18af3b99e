//! Inline span parsing.
//!
//! Text is parsed by a fixed pipeline of passes over a list of spans. Each
//! pass only touches spans that are still plain, so once a run has been given
//! a kind it is frozen and later delimiters cannot re-enter it.
//!
//! 1. Paired delimiters in priority order: `**` bold, `*` italic, `` ` `` code.
//! 2. Images (`![alt](url)`), then links (`[text](url)`).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::MarkdownError;
use crate::span::{Span, SpanKind};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

// Only ever run after images are split out, so a leading `!` is never seen.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Parse a run of inline Markdown into spans, left to right.
pub fn parse_inline(text: &str) -> Result<Vec<Span>, MarkdownError> {
    let mut spans = vec![Span::plain(text)];
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on `delimiter`. Odd fragments take `kind`.
///
/// Empty fragments are dropped, so text that starts or ends on a delimiter
/// does not leave an empty plain span behind.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, MarkdownError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let fragments: Vec<&str> = span.content.split(delimiter).collect();
        // n delimiters yield n + 1 fragments; an even fragment count means
        // a closing delimiter is missing
        if fragments.len() % 2 == 0 {
            return Err(MarkdownError::MalformedEmphasis {
                delimiter: delimiter.to_string(),
                text: span.content.clone(),
            });
        }

        for (i, fragment) in fragments.into_iter().enumerate() {
            if fragment.is_empty() {
                continue;
            }
            let fragment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(Span::new(fragment, fragment_kind));
        }
    }

    Ok(out)
}

pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &IMAGE_RE, |alt, url| Span::image(alt, url))
}

pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &LINK_RE, |text, url| Span::link(text, url))
}

/// `(alt, url)` for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(text, &IMAGE_RE)
}

/// `(text, url)` for every link in `text`. Images are not links.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| !text[..caps.get_match().start()].ends_with('!'))
        .map(|caps| {
            let (_, [label, url]) = caps.extract();
            (label.to_string(), url.to_string())
        })
        .collect()
}

fn extract_pairs(text: &str, pattern: &Regex) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| {
            let (_, [label, url]) = caps.extract();
            (label.to_string(), url.to_string())
        })
        .collect()
}

fn split_pattern(spans: Vec<Span>, pattern: &Regex, make: fn(&str, &str) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut pieces = Vec::new();
        let mut cursor = 0;
        for caps in pattern.captures_iter(text) {
            let whole = caps.get_match();
            let (_, [label, url]) = caps.extract();

            if whole.start() > cursor {
                pieces.push(Span::plain(&text[cursor..whole.start()]));
            }
            pieces.push(make(label, url));
            cursor = whole.end();
        }

        if pieces.is_empty() {
            // No match: keep the span as it was
            out.push(span);
            continue;
        }
        if cursor < text.len() {
            pieces.push(Span::plain(&text[cursor..]));
        }
        out.extend(pieces);
    }

    out
}
