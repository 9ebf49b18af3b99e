use std::fmt;

pub const CODE_FENCE: &str = "```";

/// Block-level kinds, determined purely from a block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    OrderedList,
    UnorderedList,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Heading(level) => write!(f, "heading level {level}"),
            BlockKind::Code => write!(f, "code"),
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::OrderedList => write!(f, "ordered list"),
            BlockKind::UnorderedList => write!(f, "unordered list"),
        }
    }
}

/// Split a document into blank-line separated blocks, in document order.
///
/// Each block is trimmed; blocks that are empty after trimming are dropped.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Decide a block's kind. The first matching rule wins; anything that only
/// partially matches a line-prefixed kind is a paragraph.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if is_code(&lines) {
        BlockKind::Code
    } else if lines.iter().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Number of leading `#` when followed by a space, for 1 to 6 hashes.
pub fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn is_code(lines: &[&str]) -> bool {
    match (lines.first(), lines.last()) {
        (Some(first), Some(last)) if lines.len() > 1 => {
            first.starts_with(CODE_FENCE) && last.starts_with(CODE_FENCE)
        }
        _ => false,
    }
}

fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
