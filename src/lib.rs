mod block;
mod compile;
mod config;
mod error;
mod html;
mod inline;
pub mod site;
mod span;
mod template;
mod title;

pub use block::{BlockKind, classify, segment};
pub use compile::{block_to_node, compile_block, markdown_to_node};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE, PathsConfig, SiteConfig};
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode};
pub use inline::{extract_images, extract_links, parse_inline};
pub use span::{Span, SpanKind};
pub use template::{normalize_base_path, render_page};
pub use title::extract_title;

/// Convert a Markdown document into an HTML fragment rooted at a `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    compile::markdown_to_html(markdown)
}
