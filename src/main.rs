mod cli;
mod config;
mod errors;
mod hierarchy;
mod obfuscate;
mod render;

use clap::Parser;
use cli::Args;
use config::SnapshotConfig;
use errors::AppError;
use hierarchy::{build_hierarchy, filter_hierarchy, format_outline, Node};
use render::{add_file_blocks, RenderOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirsnap=warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => SnapshotConfig::load(path)?,
        None => SnapshotConfig::default(),
    };

    let mut ignore_patterns = config.ignore_patterns;
    ignore_patterns.extend(args.ignore_patterns.iter().cloned());
    let mut focus_patterns = config.focus_patterns;
    focus_patterns.extend(args.focus_patterns.iter().cloned());

    let options = RenderOptions {
        obfuscate_json: if args.no_obfuscate {
            false
        } else {
            config.obfuscate_sensitive_data.unwrap_or(true)
        },
    };

    let hierarchy = build_hierarchy(&args.directory)?;
    let filtered = filter_hierarchy(&hierarchy, &ignore_patterns, &focus_patterns, &args.directory);
    info!(
        root = %args.directory.display(),
        entries = filtered.len(),
        "hierarchy built and filtered"
    );

    match args.output.as_ref().or(config.output.as_ref()) {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_document(&filtered, &mut out, args, &options)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            write_document(&filtered, &mut stdout.lock(), args, &options)?;
        }
    }

    Ok(())
}

fn write_document<W: Write>(
    filtered: &[Node],
    out: &mut W,
    args: &Args,
    options: &RenderOptions,
) -> Result<(), AppError> {
    if args.outline {
        write!(out, "{}", format_outline(filtered))?;
    }
    add_file_blocks(filtered, out, &args.directory, options)?;
    Ok(())
}
