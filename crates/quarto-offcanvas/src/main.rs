//! Offcanvas filter binary - Pandoc JSON filter entry point

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use offcanvas_pandoc_types::Pandoc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quarto_offcanvas::{
    Format, embed_dependencies, read_document, render_offcanvas, write_document,
};

#[derive(Parser, Debug)]
#[command(name = "quarto-offcanvas")]
#[command(version)]
#[command(about = "Turn offcanvas divs and margin notes into Bootstrap offcanvas panels")]
struct Args {
    /// Target format (Pandoc passes this to JSON filters)
    #[arg(default_value = "html")]
    to: String,

    /// Read the Pandoc JSON document from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// The target page does not load Bootstrap
    #[arg(long)]
    no_bootstrap: bool,

    /// Do not add the offcanvas stylesheet to header-includes
    #[arg(long)]
    no_embed_css: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<Pandoc> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_document(BufReader::new(file)).with_context(|| {
                format!("Failed to read a Pandoc document from {}", path.display())
            })
        }
        None => read_document(io::stdin().lock())
            .context("Failed to read a Pandoc document from stdin"),
    }
}

fn write_output(path: Option<&PathBuf>, ast: &Pandoc) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_document(ast, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => write_document(ast, io::stdout().lock()).context("Failed to write to stdout"),
    }
}

fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quarto_offcanvas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut ast = read_input(args.input.as_ref())?;

    let format = Format::from_target(&args.to).with_bootstrap(!args.no_bootstrap);
    tracing::debug!(
        target_format = %args.to,
        enabled = format.supports_offcanvas(),
        "Running offcanvas filter"
    );

    let ctx = render_offcanvas(&mut ast, format)?;
    if !args.no_embed_css {
        embed_dependencies(&mut ast.meta, &ctx.dependencies);
    }
    if !ctx.warnings.is_empty() {
        tracing::info!(count = ctx.warnings.len(), "Offcanvas filter finished with warnings");
    }

    write_output(args.output.as_ref(), &ast)
}
