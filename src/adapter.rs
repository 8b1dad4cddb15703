use crate::{
    error::Result, rule_based::RuleBasedTokenizer, tokenizer::Tokenizer,
    word_boundary::WordBoundaryTokenizer,
};
#[cfg(feature = "pretrained")]
use crate::{error::Error, pretrained::PretrainedTokenizer};

/// The tokenizers compared in a run. This enum is non-exhaustive as the pretrained variants are
/// only available when the `pretrained` feature is enabled.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    /// Whitespace splitting.
    Whitespace,
    /// Penn-Treebank-style punctuation splitting.
    Treebank,
    /// Whitespace plus every punctuation character.
    Punctuation,
    /// Unicode word boundaries (UAX #29).
    Uax29,
    /// General-domain pretrained WordPiece (`bert-base-cased`).
    #[cfg(feature = "pretrained")]
    BertBaseCased,
    /// Biomedical pretrained WordPiece (BioBERT, cased).
    #[cfg(feature = "pretrained")]
    BioBert,
    /// Biomedical pretrained WordPiece (BiomedBERT, uncased).
    #[cfg(feature = "pretrained")]
    BiomedBert,
}

impl AdapterKind {
    /// Every available adapter, in the order a run invokes them.
    #[cfg(feature = "pretrained")]
    pub const ALL: &'static [AdapterKind] = &[
        AdapterKind::Whitespace,
        AdapterKind::Treebank,
        AdapterKind::Punctuation,
        AdapterKind::Uax29,
        AdapterKind::BertBaseCased,
        AdapterKind::BioBert,
        AdapterKind::BiomedBert,
    ];

    /// Every available adapter, in the order a run invokes them.
    #[cfg(not(feature = "pretrained"))]
    pub const ALL: &'static [AdapterKind] = &[
        AdapterKind::Whitespace,
        AdapterKind::Treebank,
        AdapterKind::Punctuation,
        AdapterKind::Uax29,
    ];

    /// The adapter's name, which is also the stem of its output file.
    pub fn name(&self) -> &'static str {
        match self {
            AdapterKind::Whitespace => "whitespace",
            AdapterKind::Treebank => "treebank",
            AdapterKind::Punctuation => "punctuation",
            AdapterKind::Uax29 => "uax29",
            #[cfg(feature = "pretrained")]
            AdapterKind::BertBaseCased => "bert-base-cased",
            #[cfg(feature = "pretrained")]
            AdapterKind::BioBert => "biobert",
            #[cfg(feature = "pretrained")]
            AdapterKind::BiomedBert => "biomedbert",
        }
    }

    /// The output file name, `<name>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name())
    }

    /// The Hugging Face Hub repository and casing of a pretrained adapter.
    #[cfg(feature = "pretrained")]
    fn hub_model(&self) -> Option<(&'static str, bool)> {
        match self {
            AdapterKind::BertBaseCased => Some(("bert-base-cased", false)),
            AdapterKind::BioBert => Some(("dmis-lab/biobert-base-cased-v1.2", false)),
            AdapterKind::BiomedBert => Some((
                "microsoft/BiomedNLP-BiomedBERT-base-uncased-abstract-fulltext",
                true,
            )),
            _ => None,
        }
    }

    #[cfg(feature = "pretrained")]
    fn build_pretrained(&self) -> Result<Box<dyn Tokenizer>> {
        let (model_id, lowercase) = self.hub_model().ok_or_else(|| Error::ModelLoad {
            model: self.name().to_string(),
            reason: "not a pretrained adapter".to_string(),
        })?;
        let tokenizer = PretrainedTokenizer::from_hub(self.name(), model_id, lowercase)?;
        Ok(Box::new(tokenizer))
    }

    /// Builds the adapter. Pretrained adapters download or read their model from the cache here.
    pub fn build(&self) -> Result<Box<dyn Tokenizer>> {
        let tokenizer: Box<dyn Tokenizer> = match self {
            AdapterKind::Whitespace => Box::new(RuleBasedTokenizer::whitespace()),
            AdapterKind::Treebank => Box::new(RuleBasedTokenizer::treebank()?),
            AdapterKind::Punctuation => Box::new(RuleBasedTokenizer::punctuation()),
            AdapterKind::Uax29 => Box::new(WordBoundaryTokenizer::new()),
            #[cfg(feature = "pretrained")]
            AdapterKind::BertBaseCased | AdapterKind::BioBert | AdapterKind::BiomedBert => {
                self.build_pretrained()?
            }
        };
        Ok(tokenizer)
    }

    /// Returns `true` if building this adapter loads a pretrained model.
    pub fn is_pretrained(&self) -> bool {
        !matches!(
            self,
            AdapterKind::Whitespace
                | AdapterKind::Treebank
                | AdapterKind::Punctuation
                | AdapterKind::Uax29
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn it_has_unique_names() {
        let names: HashSet<_> = AdapterKind::ALL.iter().map(AdapterKind::name).collect();

        assert_eq!(names.len(), AdapterKind::ALL.len());
    }

    #[test]
    fn it_names_output_files_after_the_adapter() {
        assert_eq!(AdapterKind::Treebank.file_name(), "treebank.txt");
    }

    #[test]
    fn it_builds_adapters_with_matching_names() {
        for kind in AdapterKind::ALL.iter().filter(|kind| !kind.is_pretrained()) {
            let tokenizer = kind.build().unwrap();
            assert_eq!(tokenizer.name(), kind.name());
        }
    }

    #[test]
    fn it_starts_with_the_rule_based_adapters() {
        assert_eq!(
            &AdapterKind::ALL[..4],
            &[
                AdapterKind::Whitespace,
                AdapterKind::Treebank,
                AdapterKind::Punctuation,
                AdapterKind::Uax29,
            ]
        );
    }

    #[test]
    #[cfg(feature = "pretrained")]
    fn it_marks_hub_adapters_as_pretrained() {
        assert!(AdapterKind::BioBert.is_pretrained());
        assert!(!AdapterKind::Uax29.is_pretrained());
    }
}
