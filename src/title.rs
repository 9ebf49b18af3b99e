use crate::error::MarkdownError;

/// Text of the first `# ` line in the document.
pub fn extract_title(document: &str) -> Result<String, MarkdownError> {
    document
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(MarkdownError::NoTitleFound)
}
