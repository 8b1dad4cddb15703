use std::{
    fmt::{self, Debug},
    path::Path,
};

#[cfg(feature = "pretrained")]
use hf_hub::api::sync::{Api, ApiError};
use tokenizers::{
    models::wordpiece::WordPiece, normalizers::bert::BertNormalizer,
    pre_tokenizers::bert::BertPreTokenizer, Tokenizer as HfTokenizer,
};
#[cfg(feature = "pretrained")]
use tracing::debug;

use crate::{
    error::{Error, Result},
    tokenizer::Tokenizer,
};

/// A pretrained Hugging Face tokenizer. The model is loaded once, when the adapter is created,
/// and reused for every example.
///
/// Tokens are reported as the spans of the input text that the model's sub-word pieces cover,
/// so continuation markers (`##`) and normalization (lowercasing, accent stripping) never show
/// up in the output.
pub struct PretrainedTokenizer {
    name: String,
    model: String,
    tokenizer: HfTokenizer,
}

impl Debug for PretrainedTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PretrainedTokenizer({}, {})", self.name, self.model)
    }
}

fn load_error(model: &str, reason: impl ToString) -> Error {
    Error::ModelLoad {
        model: model.to_string(),
        reason: reason.to_string(),
    }
}

/// Only a 404 means the repository lacks the file. Network, server and cache errors do not.
#[cfg(feature = "pretrained")]
fn is_missing_file(error: &ApiError) -> bool {
    match error {
        ApiError::RequestError(error) => matches!(**error, ureq::Error::Status(404, _)),
        _ => false,
    }
}

impl PretrainedTokenizer {
    /// Loads a serialized Hugging Face tokenizer (`tokenizer.json`).
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let model = path.as_ref().display().to_string();
        let tokenizer = HfTokenizer::from_file(path.as_ref())
            .map_err(|e| load_error(&model, e))?;
        Ok(PretrainedTokenizer {
            name: name.into(),
            model,
            tokenizer,
        })
    }

    /// Assembles a BERT-style WordPiece tokenizer from a `vocab.txt` file, for models published
    /// without a `tokenizer.json`.
    pub fn from_vocab(
        name: impl Into<String>,
        vocab_path: impl AsRef<Path>,
        lowercase: bool,
    ) -> Result<Self> {
        let model = vocab_path.as_ref().display().to_string();
        let wordpiece = WordPiece::from_file(&model)
            .build()
            .map_err(|e| load_error(&model, e))?;
        let mut tokenizer = HfTokenizer::new(wordpiece);
        tokenizer
            .with_normalizer(Some(BertNormalizer::new(true, true, None, lowercase)))
            .with_pre_tokenizer(Some(BertPreTokenizer));
        Ok(PretrainedTokenizer {
            name: name.into(),
            model,
            tokenizer,
        })
    }

    /// Fetches a tokenizer from the Hugging Face Hub, going through the local cache. Uses the
    /// repository's `tokenizer.json` and falls back to its `vocab.txt` only when the repository
    /// has no `tokenizer.json`. Any other download failure is returned.
    #[cfg(feature = "pretrained")]
    pub fn from_hub(name: impl Into<String>, model_id: &str, lowercase: bool) -> Result<Self> {
        let api = Api::new().map_err(|e| load_error(model_id, e))?;
        let repo = api.model(model_id.to_string());

        let mut tokenizer = match repo.get("tokenizer.json") {
            Ok(path) => {
                debug!(model = model_id, path = %path.display(), "Fetched tokenizer.json");
                Self::from_file(name, &path)?
            }
            Err(e) if is_missing_file(&e) => {
                debug!(model = model_id, "No tokenizer.json, falling back to vocab.txt");
                let path = repo
                    .get("vocab.txt")
                    .map_err(|e| load_error(model_id, format!("vocab.txt: {e}")))?;
                debug!(model = model_id, path = %path.display(), "Fetched vocab.txt");
                Self::from_vocab(name, &path, lowercase)?
            }
            Err(e) => return Err(load_error(model_id, format!("tokenizer.json: {e}"))),
        };
        tokenizer.model = model_id.to_string();
        Ok(tokenizer)
    }

    /// The model identifier or file this tokenizer was loaded from.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn tokenize(&self, input_text: &str) -> Result<Vec<String>> {
        let encoding = self
            .tokenizer
            .encode(input_text, false)
            .map_err(|e| Error::Tokenize {
                adapter: self.name.clone(),
                reason: e.to_string(),
            })?;
        self.spans(input_text, encoding.get_offsets())
    }

    /// Slices `input_text` at each byte span. A span that does not fall on char boundaries is an
    /// error rather than a dropped token.
    fn spans(&self, input_text: &str, offsets: &[(usize, usize)]) -> Result<Vec<String>> {
        offsets
            .iter()
            .filter(|(start, end)| start != end)
            .map(|&(start, end)| {
                input_text
                    .get(start..end)
                    .map(str::to_string)
                    .ok_or_else(|| Error::Tokenize {
                        adapter: self.name.clone(),
                        reason: format!("offsets {start}..{end} do not fall on char boundaries"),
                    })
            })
            .collect()
    }
}

impl Tokenizer for PretrainedTokenizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn tokenize(&self, input_text: &str) -> Result<Vec<String>> {
        PretrainedTokenizer::tokenize(self, input_text)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const VOCAB: &[&str] = &[
        "[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "normal", "chest", "x", "-", "ray", ".",
        "pneum", "##onia", "with", "il", "10",
    ];

    fn write_vocab() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.txt");
        fs::write(&path, VOCAB.join("\n")).unwrap();
        (dir, path)
    }

    #[test]
    fn it_reports_spans_of_the_original_text() {
        let (_dir, vocab) = write_vocab();
        let tokenizer = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();

        let tokens = tokenizer.tokenize("Normal chest x-ray.").unwrap();

        assert_eq!(tokens, vec!["Normal", "chest", "x", "-", "ray", "."]);
    }

    #[test]
    fn it_strips_continuation_markers() {
        let (_dir, vocab) = write_vocab();
        let tokenizer = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();

        let tokens = tokenizer.tokenize("with pneumonia").unwrap();

        assert_eq!(tokens, vec!["with", "pneum", "onia"]);
    }

    #[test]
    fn it_keeps_unknown_words_whole() {
        let (_dir, vocab) = write_vocab();
        let tokenizer = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();

        let tokens = tokenizer.tokenize("scarred IL-10").unwrap();

        assert_eq!(tokens, vec!["scarred", "IL", "-", "10"]);
    }

    #[test]
    fn it_does_not_add_special_tokens() {
        let (_dir, vocab) = write_vocab();
        let tokenizer = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();

        assert!(tokenizer.tokenize("").unwrap().is_empty());
    }

    #[test]
    fn it_loads_a_serialized_tokenizer() {
        let (dir, vocab) = write_vocab();
        let assembled = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();
        let path = dir.path().join("tokenizer.json");
        assembled.tokenizer.save(&path, false).unwrap();

        let loaded = PretrainedTokenizer::from_file("test", &path).unwrap();

        assert_eq!(
            loaded.tokenize("Normal chest x-ray.").unwrap(),
            assembled.tokenize("Normal chest x-ray.").unwrap()
        );
        assert_eq!(loaded.model(), path.display().to_string());
    }

    #[test]
    fn it_rejects_spans_inside_a_char() {
        let (_dir, vocab) = write_vocab();
        let tokenizer = PretrainedTokenizer::from_vocab("test", &vocab, true).unwrap();

        let result = tokenizer.spans("étude", &[(0, 1), (1, 6)]);

        assert!(matches!(result, Err(Error::Tokenize { .. })));
        assert_eq!(
            tokenizer.spans("étude", &[(0, 2), (2, 2), (2, 6)]).unwrap(),
            vec!["é", "tude"]
        );
    }

    #[test]
    fn it_fails_on_a_missing_file() {
        let result = PretrainedTokenizer::from_file("test", "non_existent_tokenizer.json");

        assert!(matches!(result, Err(Error::ModelLoad { .. })));
    }

    #[cfg(feature = "pretrained")]
    fn status_error(status: u16) -> ApiError {
        let response = ureq::Response::new(status, "status", "").unwrap();
        ApiError::RequestError(Box::new(ureq::Error::Status(status, response)))
    }

    #[test]
    #[cfg(feature = "pretrained")]
    fn it_falls_back_to_vocab_only_when_the_file_is_missing() {
        assert!(is_missing_file(&status_error(404)));
        assert!(!is_missing_file(&status_error(500)));
        assert!(!is_missing_file(&status_error(401)));
        assert!(!is_missing_file(&ApiError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "cache is read-only"
        ))));
    }

    #[test]
    #[cfg(feature = "pretrained")]
    #[ignore = "downloads bert-base-cased from the Hugging Face Hub"]
    fn it_loads_a_model_from_the_hub() {
        let tokenizer = PretrainedTokenizer::from_hub("bert-base-cased", "bert-base-cased", false)
            .unwrap();

        let tokens = tokenizer.tokenize("Normal chest x-ray.").unwrap();

        assert_eq!(tokens.concat(), "Normalchestx-ray.");
        assert_eq!(tokenizer.model(), "bert-base-cased");
    }
}
