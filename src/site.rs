//! Building a site from a content tree: static assets are copied, every
//! Markdown page is rendered through the template.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::compile::markdown_to_html;
use crate::config::Config;
use crate::error::MarkdownError;
use crate::template::{normalize_base_path, render_page};
use crate::title::extract_title;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Failed to convert {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Replace `dst` with a copy of the `src` tree.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::MissingSource(src.to_path_buf()));
    }
    if dst.exists() {
        debug!("Removing {}", dst.display());
        fs::remove_dir_all(dst).map_err(io_err(dst))?;
    }
    fs::create_dir_all(dst).map_err(io_err(dst))?;

    let mut copied = 0;
    for entry in sorted_walk(src) {
        let entry = entry.map_err(|source| SiteError::Walk {
            path: src.to_path_buf(),
            source,
        })?;
        let from = entry.path();
        let to = dst.join(relative_to(from, src));

        if entry.file_type().is_dir() {
            fs::create_dir_all(&to).map_err(io_err(&to))?;
        } else {
            info!(" * {} -> {}", from.display(), to.display());
            fs::copy(from, &to).map_err(io_err(from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render one Markdown file to an HTML page.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    info!(
        " * {} {} -> {}",
        from.display(),
        template_path.display(),
        dest.display()
    );

    let markdown = fs::read_to_string(from).map_err(io_err(from))?;
    let template = fs::read_to_string(template_path).map_err(io_err(template_path))?;

    let page = render_markdown_page(&markdown, &template, base_path).map_err(|source| {
        SiteError::Markdown {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    fs::write(dest, page).map_err(io_err(dest))
}

/// Convert Markdown and place it with its title into `template`.
pub fn render_markdown_page(
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, MarkdownError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(render_page(template, &title, &content, base_path))
}

/// Render every `.md` file under `content_dir` to the same relative path
/// under `dest_dir`, with an `.html` extension. Returns the pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingSource(content_dir.to_path_buf()));
    }

    let mut pages = Vec::new();
    for entry in sorted_walk(content_dir) {
        let entry = entry.map_err(|source| SiteError::Walk {
            path: content_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let from = entry.path();
        if from.extension().and_then(|ext| ext.to_str()) != Some("md") {
            warn!("Skipping non-markdown file {}", from.display());
            continue;
        }

        let dest = dest_dir
            .join(relative_to(from, content_dir))
            .with_extension("html");
        generate_page(from, template_path, &dest, base_path)?;
        pages.push(dest);
    }
    Ok(pages)
}

/// Copy static assets, then generate all pages.
pub fn build_site(config: &Config) -> Result<Vec<PathBuf>, SiteError> {
    let paths = &config.paths;
    let base_path = normalize_base_path(&config.site.base_path);

    info!(
        "Copying static files from {} to {}",
        paths.static_dir.display(),
        paths.output_dir.display()
    );
    let copied = copy_static(&paths.static_dir, &paths.output_dir)?;
    debug!("Copied {copied} static files");

    info!(
        "Generating pages from {} with base path {base_path}",
        paths.content_dir.display()
    );
    generate_pages_recursive(
        &paths.content_dir,
        &paths.template,
        &paths.output_dir,
        &base_path,
    )
}

fn sorted_walk(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
