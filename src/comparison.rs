use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    adapter::AdapterKind, error::Result, example_set::ExampleSet, format::format_lines,
    tokenizer::Tokenizer, writer::write_lines,
};

/// The directory output files are written to unless another is configured.
pub const DEFAULT_OUT_DIR: &str = "Tokenized_Outputs";

/// The outcome of running one adapter over the example set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The adapter's name.
    pub adapter: String,
    /// The file the adapter's output was written to.
    pub path: PathBuf,
    /// The number of lines written, one per example.
    pub lines: usize,
    /// The total number of tokens across all examples.
    pub tokens: usize,
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} lines, {} tokens -> {}",
            self.adapter,
            self.lines,
            self.tokens,
            self.path.display()
        )
    }
}

/// Runs every configured tokenizer over the same examples and writes one file per tokenizer.
#[derive(Debug, Clone)]
pub struct Comparison {
    examples: ExampleSet,
    out_dir: PathBuf,
    adapters: Vec<AdapterKind>,
}

impl Comparison {
    /// Creates a new `ComparisonBuilder` that you can use to customise the run.
    pub fn builder() -> ComparisonBuilder {
        ComparisonBuilder::new()
    }

    /// The examples every adapter tokenizes.
    pub fn examples(&self) -> &ExampleSet {
        &self.examples
    }

    /// The directory output files are written to.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Tokenizes every example with `tokenizer`, in example order. The first failure aborts.
    pub fn tokenize_all(&self, tokenizer: &dyn Tokenizer) -> Result<Vec<Vec<String>>> {
        self.examples
            .iter()
            .enumerate()
            .map(|(index, example)| -> Result<Vec<String>> {
                let tokens = tokenizer.tokenize(&example.text)?;
                debug!(
                    adapter = tokenizer.name(),
                    index,
                    category = %example.category,
                    tokens = tokens.len(),
                    "Tokenized example"
                );
                Ok(tokens)
            })
            .collect()
    }

    /// Tokenizes the examples with `tokenizer` and writes the formatted lines to
    /// `<out_dir>/<name>.txt`.
    pub fn run_tokenizer(&self, tokenizer: &dyn Tokenizer) -> Result<Report> {
        let token_sequences = self.tokenize_all(tokenizer)?;
        let lines = format_lines(&token_sequences);
        let path = self.out_dir.join(format!("{}.txt", tokenizer.name()));
        write_lines(&path, &lines)?;

        let report = Report {
            adapter: tokenizer.name().to_string(),
            path,
            lines: lines.len(),
            tokens: token_sequences.iter().map(Vec::len).sum(),
        };
        info!(
            adapter = %report.adapter,
            path = %report.path.display(),
            lines = report.lines,
            tokens = report.tokens,
            "Wrote tokenizer output"
        );
        Ok(report)
    }

    /// Runs each configured adapter in turn. Pretrained models are loaded when their adapter's
    /// turn comes and dropped once its file is written. The first error aborts the run.
    pub fn run(&self) -> Result<Vec<Report>> {
        info!(
            examples = self.examples.len(),
            adapters = self.adapters.len(),
            out_dir = %self.out_dir.display(),
            "Starting comparison"
        );
        self.adapters
            .iter()
            .map(|kind| {
                if kind.is_pretrained() {
                    info!(adapter = kind.name(), "Loading pretrained tokenizer");
                }
                let tokenizer = kind.build()?;
                self.run_tokenizer(tokenizer.as_ref())
            })
            .collect()
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::builder().build()
    }
}

/// A consuming builder for `Comparison`.
pub struct ComparisonBuilder {
    examples: ExampleSet,
    out_dir: PathBuf,
    adapters: Vec<AdapterKind>,
}

impl Default for ComparisonBuilder {
    fn default() -> Self {
        ComparisonBuilder::new()
    }
}

impl ComparisonBuilder {
    /// Creates a new `ComparisonBuilder` with the built-in examples, every adapter and
    /// `Tokenized_Outputs` as the output directory.
    pub fn new() -> ComparisonBuilder {
        ComparisonBuilder {
            examples: ExampleSet::builtin(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            adapters: AdapterKind::ALL.to_vec(),
        }
    }

    /// Replaces the example set.
    pub fn examples(mut self, examples: ExampleSet) -> Self {
        self.examples = examples;
        self
    }

    /// Sets the directory output files are written to. Default is `Tokenized_Outputs`.
    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Sets the adapters to run, in order. Default is every adapter in `AdapterKind::ALL`.
    pub fn adapters(mut self, adapters: impl Into<Vec<AdapterKind>>) -> Self {
        self.adapters = adapters.into();
        self
    }

    /// Builds the `Comparison`.
    pub fn build(self) -> Comparison {
        Comparison {
            examples: self.examples,
            out_dir: self.out_dir,
            adapters: self.adapters,
        }
    }
}
