use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokcompare::{Comparison, ExampleSet, DEFAULT_OUT_DIR};
use tracing_subscriber::EnvFilter;

/// Tokenize biomedical example sentences with several tokenizers and write one `;`-delimited
/// file per tokenizer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the output files are written to.
    #[clap(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// CSV file with a `category,text` header that replaces the built-in examples.
    #[clap(short, long)]
    examples: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.
    #[clap(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("tokcompare={}", args.log_level)))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let examples = match &args.examples {
        Some(path) => ExampleSet::from_csv(path)?,
        None => ExampleSet::builtin(),
    };
    let comparison = Comparison::builder()
        .examples(examples)
        .out_dir(&args.out_dir)
        .build();

    let reports = comparison
        .run()
        .context("Tokenizer comparison failed")?;
    for report in reports {
        println!("{report}");
    }
    Ok(())
}
