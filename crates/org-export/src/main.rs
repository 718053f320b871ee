//! org-export CLI - Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use org_export_html::filter::resolve_include_tags;
use org_export_html::{ExportConfig, render};
use org_export_types::Document;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "org-export")]
#[command(version)]
#[command(about = "Render a parsed org document tree to HTML", long_about = None)]
struct Cli {
    /// Input tree file (JSON, as produced by an org parser)
    input: PathBuf,

    /// Write output to FILE (use '--output -' for stdout); defaults to
    /// the input path with an .html extension
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Emit only the rendered body, without the document envelope
    #[arg(long)]
    naked: bool,

    /// Export only subtrees whose headline carries TAG
    #[arg(long = "include-tag", value_name = "TAG")]
    include_tags: Vec<String>,

    /// Drop subtrees whose headline carries TAG
    #[arg(long = "exclude-tag", value_name = "TAG")]
    exclude_tags: Vec<String>,

    /// Document title; defaults to the input file stem
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet URL to reference from the document head
    #[arg(long, value_name = "URL")]
    stylesheet: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("failed to read tree file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse tree file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_document(path: &Path) -> Result<Document, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The title a document gets when the caller does not name one: the
/// input file's stem.
fn title_from_input(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn tag_set(tags: &[String]) -> Option<BTreeSet<String>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.iter().cloned().collect())
    }
}

fn build_config(cli: &Cli) -> ExportConfig {
    ExportConfig {
        naked: cli.naked,
        include_tags: tag_set(&cli.include_tags),
        exclude_tags: tag_set(&cli.exclude_tags),
        title: cli.title.clone().or_else(|| title_from_input(&cli.input)),
        stylesheet_url: cli.stylesheet.clone(),
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

fn execute(cli: &Cli) -> Result<()> {
    let document = load_document(&cli.input)?;
    let config = resolve_include_tags(&document, &build_config(cli));

    let output = render(&document, &config).context("failed to render document")?;
    for diagnostic in &output.diagnostics {
        tracing::warn!("{diagnostic}");
    }

    match cli.output.as_deref() {
        Some("-") => {
            print!("{}", output.html);
        }
        Some(path) => {
            std::fs::write(path, &output.html)
                .with_context(|| format!("failed to write {path}"))?;
            tracing::info!("wrote {path}");
        }
        None => {
            let path = default_output_path(&cli.input);
            std::fs::write(&path, &output.html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "org_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    execute(&cli)
}
