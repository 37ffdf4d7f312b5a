use anyhow::{Context, Result};
use clap::Parser;
use search_cli::output::OutputFormat;
use search_cli::{run, RunOptions};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank a small corpus against one query by TF-IDF", long_about = None)]
struct Args {
    /// Read stop words, document count, documents and query from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,
    /// Maximum number of documents to print
    #[arg(long, default_value_t = search_core::MAX_RESULT_DOCUMENT_COUNT)]
    top_k: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let args = Args::parse();
    let options = RunOptions { top_k: args.top_k, format: args.format };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.input {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
            run(&mut BufReader::new(file), &mut out, options)
        }
        None => run(&mut io::stdin().lock(), &mut out, options),
    }
}
