use unicode_segmentation::UnicodeSegmentation;

use crate::{error::Result, tokenizer::Tokenizer};

/// Segments text on Unicode word boundaries (UAX #29). Punctuation becomes its own token, while
/// decimals, thousands separators and apostrophes within words stay attached.
#[derive(Debug, Default, Clone)]
pub struct WordBoundaryTokenizer;

impl WordBoundaryTokenizer {
    /// Creates a new `WordBoundaryTokenizer`.
    pub fn new() -> WordBoundaryTokenizer {
        WordBoundaryTokenizer
    }

    fn split_on_word_boundaries(text: &str) -> impl Iterator<Item = &'_ str> {
        text.split_word_bounds()
            .filter(|s| !s.chars().all(char::is_whitespace))
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn name(&self) -> &str {
        "uax29"
    }

    fn tokenize(&self, input_text: &str) -> Result<Vec<String>> {
        Ok(Self::split_on_word_boundaries(input_text)
            .map(str::to_string)
            .collect())
    }
}
