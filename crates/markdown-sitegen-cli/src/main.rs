use anyhow::{Context, Result, anyhow};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{RenderOptions, SiteOptions, generate_site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a folder of markdown files")]
struct Cli {
    /// Config file (defaults to ./sitegen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown pages and assets
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory, emptied before every build
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Escape HTML special characters in page text
    #[arg(long)]
    escape_html: bool,

    /// Log every page and asset
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line values win over anything in the config file.
    fn into_site_options(self, config: Option<Config>) -> Result<SiteOptions> {
        let (content_dir, template_path, output_dir, static_dir, escape_html) = match config {
            Some(c) => (
                Some(c.content_dir),
                Some(c.template_path),
                Some(c.output_dir),
                c.static_dir,
                c.escape_html,
            ),
            None => (None, None, None, None, false),
        };

        Ok(SiteOptions {
            content_dir: self
                .content
                .or(content_dir)
                .ok_or_else(|| missing("content directory", "--content"))?,
            template_path: self
                .template
                .or(template_path)
                .ok_or_else(|| missing("template", "--template"))?,
            output_dir: self
                .output
                .or(output_dir)
                .ok_or_else(|| missing("output directory", "--output"))?,
            static_dir: self.static_dir.or(static_dir),
            render: RenderOptions {
                escape_html: self.escape_html || escape_html,
            },
        })
    }
}

fn missing(what: &str, flag: &str) -> anyhow::Error {
    anyhow!(
        "No {what} given: pass {flag} or set it in {}",
        Config::FILE_NAME
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
    if config.is_none() && cli.config.is_some() {
        return Err(anyhow!("Config file {} not found", config_path.display()));
    }

    let options = cli.into_site_options(config)?;
    log::info!(
        "Building site from {} into {}",
        options.content_dir.display(),
        options.output_dir.display()
    );

    let report = generate_site(&options).context("Site generation failed")?;
    log::info!(
        "Done: {} pages, {} assets copied",
        report.pages,
        report.assets
    );

    Ok(())
}
