//! Error types for a comparison run. Every variant is fatal to the run.

use std::{io, path::PathBuf};

/// Errors raised while loading examples, building adapters, tokenizing or writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The example file could not be read or parsed.
    #[error("Failed to read examples from {path}: {source}")]
    Examples {
        /// Path of the example file.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A pretrained tokenizer could not be downloaded or parsed.
    #[error("Failed to load tokenizer {model}: {reason}")]
    ModelLoad {
        /// Model identifier or local path.
        model: String,
        /// Why loading failed.
        reason: String,
    },

    /// An adapter failed on an example.
    #[error("Tokenizer {adapter} failed: {reason}")]
    Tokenize {
        /// Adapter name.
        adapter: String,
        /// Why tokenization failed.
        reason: String,
    },

    /// An output file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn it_displays_model_load_errors() {
        let error = Error::ModelLoad {
            model: "dmis-lab/biobert-base-cased-v1.2".to_string(),
            reason: "404 Not Found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to load tokenizer dmis-lab/biobert-base-cased-v1.2: 404 Not Found"
        );
    }

    #[test]
    fn it_displays_tokenize_errors() {
        let error = Error::Tokenize {
            adapter: "treebank".to_string(),
            reason: "bad pattern".to_string(),
        };
        assert_eq!(error.to_string(), "Tokenizer treebank failed: bad pattern");
    }

    #[test]
    fn it_keeps_the_io_source_of_write_errors() {
        let error = Error::Write {
            path: PathBuf::from("out/whitespace.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(error.to_string(), "Failed to write out/whitespace.txt: denied");
        assert!(error.source().is_some());
    }
}
