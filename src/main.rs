use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use mdsite::{Config, DEFAULT_CONFIG_FILE, site};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Base path the site is served from (e.g. /repo/)
    base_path: Option<String>,

    /// Config file (defaults to mdsite.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied verbatim
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base path, same as the positional argument
    #[arg(long = "base-path", conflicts_with = "base_path")]
    base_path_flag: Option<String>,

    /// Print the HTML for a single Markdown file instead of building the site
    #[arg(long, value_name = "FILE")]
    print: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if let Some(path) = &cli.print {
        let markdown = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        match mdsite::markdown_to_html(&markdown) {
            Ok(html) => println!("{html}"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    apply_overrides(&mut config, cli);

    match site::build_site(&config) {
        Ok(pages) => println!(
            "Generated {} pages in {}",
            pages.len(),
            config.paths.output_dir.display()
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(dir) = cli.content {
        config.paths.content_dir = dir;
    }
    if let Some(dir) = cli.static_dir {
        config.paths.static_dir = dir;
    }
    if let Some(path) = cli.template {
        config.paths.template = path;
    }
    if let Some(dir) = cli.output {
        config.paths.output_dir = dir;
    }
    if let Some(base_path) = cli.base_path.or(cli.base_path_flag) {
        config.site.base_path = base_path;
    }
}
