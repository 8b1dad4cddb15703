//! Compares how general-purpose and biomedical tokenizers segment a fixed set of biomedical
//! sentences, writing one `;`-delimited file per tokenizer.

#![warn(missing_docs)]

mod adapter;
mod comparison;
mod error;
mod example_set;
mod format;
mod pretrained;
mod rule_based;
mod tokenizer;
mod word_boundary;
mod writer;

pub use adapter::AdapterKind;
pub use comparison::{Comparison, ComparisonBuilder, Report, DEFAULT_OUT_DIR};
pub use error::{Error, Result};
pub use example_set::{Example, ExampleSet};
pub use format::{format_line, format_lines, DELIMITER};
pub use pretrained::PretrainedTokenizer;
pub use rule_based::RuleBasedTokenizer;
pub use tokenizer::Tokenizer;
pub use word_boundary::WordBoundaryTokenizer;
pub use writer::write_lines;
