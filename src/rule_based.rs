use std::fmt::{self, Debug};

use tokenizers::{
    pre_tokenizers::{
        bert::BertPreTokenizer,
        sequence::Sequence,
        split::{Split, SplitPattern},
        whitespace::WhitespaceSplit,
        PreTokenizerWrapper,
    },
    OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer, SplitDelimiterBehavior,
};
use tracing::trace;

use crate::{
    error::{Error, Result},
    tokenizer::Tokenizer,
};

/// A sentence-final period, possibly followed by closing brackets or quotes.
const FINAL_PERIOD: &str = r#"\.(?=[\]\)}>"']*\s*$)"#;

/// Punctuation split off within a whitespace-delimited word: brackets, symbols, double dashes,
/// colons and commas that do not continue a number, and English clitics.
const TREEBANK_PUNCTUATION: &str =
    r#"--|[\[\](){}<>"]|[;@#$%&?!]|[:,](?!\d)|'[sSmMdD]$|'(?:ll|re|ve|LL|RE|VE)$|(?i:n't)$"#;

/// Rule-based adapters, each backed by a Hugging Face `tokenizers` pre-tokenizer.
pub struct RuleBasedTokenizer {
    name: &'static str,
    pre_tokenizer: PreTokenizerWrapper,
}

impl Debug for RuleBasedTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleBasedTokenizer({})", self.name)
    }
}

impl RuleBasedTokenizer {
    /// Splits on whitespace only. Punctuation stays attached to words.
    pub fn whitespace() -> RuleBasedTokenizer {
        RuleBasedTokenizer {
            name: "whitespace",
            pre_tokenizer: WhitespaceSplit.into(),
        }
    }

    /// Penn-Treebank-style splitting. Hyphenated words, decimals, thousands separators and
    /// abbreviations inside the sentence stay whole.
    pub fn treebank() -> Result<RuleBasedTokenizer> {
        let split = |pattern: &str| {
            Split::new(
                SplitPattern::Regex(pattern.to_string()),
                SplitDelimiterBehavior::Isolated,
                false,
            )
            .map_err(|e| Error::ModelLoad {
                model: "treebank".to_string(),
                reason: e.to_string(),
            })
        };
        let pre_tokenizer = Sequence::new(vec![
            split(FINAL_PERIOD)?.into(),
            WhitespaceSplit.into(),
            split(TREEBANK_PUNCTUATION)?.into(),
        ]);
        Ok(RuleBasedTokenizer {
            name: "treebank",
            pre_tokenizer: pre_tokenizer.into(),
        })
    }

    /// Splits on whitespace and isolates every punctuation character, as BERT does before
    /// WordPiece.
    pub fn punctuation() -> RuleBasedTokenizer {
        RuleBasedTokenizer {
            name: "punctuation",
            pre_tokenizer: BertPreTokenizer.into(),
        }
    }

    fn tokenize(&self, input_text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(input_text);
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| Error::Tokenize {
                adapter: self.name.to_string(),
                reason: e.to_string(),
            })?;
        let tokens: Vec<String> = pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .filter_map(|(_, (start, end), _)| input_text.get(start..end))
            .map(str::to_string)
            .collect();
        trace!(adapter = self.name, tokens = tokens.len(), "Pre-tokenized");
        Ok(tokens)
    }
}

impl Tokenizer for RuleBasedTokenizer {
    fn name(&self) -> &str {
        self.name
    }

    fn tokenize(&self, input_text: &str) -> Result<Vec<String>> {
        RuleBasedTokenizer::tokenize(self, input_text)
    }
}
