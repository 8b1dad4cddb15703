use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A single example sentence and the category of tokenization difficulty it illustrates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Example {
    /// What makes this example interesting, e.g. "Hyphenated compound words".
    pub category: String,
    /// The sentence to tokenize.
    pub text: String,
}

impl Example {
    /// Creates a new example.
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Example {
        Example {
            category: category.into(),
            text: text.into(),
        }
    }
}

const BUILTIN: [(&str, &str); 24] = [
    ("Hyphenated compound words", "Normal chest x-ray."),
    (
        "Hyphenated compound words",
        "2-year 2-month old female with pneumonia.",
    ),
    (
        "Hyphenated compound words",
        "This may occur through the ability of IL-10 to induce expression of the gene.",
    ),
    (
        "Words with letters/slashes",
        "The maximal effect is observed at the IL-10 concentration of 20 U/ml.",
    ),
    (
        "Words with letters/slashes",
        "These results indicate that within the TCR/CD3 signal transduction pathway both PKC and calcineurin are required for the effective activation of the IKK complex and NF-kappaB in T lymphocytes.",
    ),
    (
        "Words with letters and apostrophes",
        "The false positive rate of our predictor was estimated by the method of D'Haeseleer and Church 1855 and used to compare it to other prediction datasets.",
    ),
    (
        "Words with letters and apostrophes",
        "Small, scarred right kidney, below more than 2 standard deviations in size for patient's age.",
    ),
    (
        "Words with letters and brackets",
        "Of these, Diap1 has been most extensively characterized; it can block cell death caused by the ectopic expression of reaper, hid, and grim (reviewed in [26]).",
    ),
    (
        "Abbreviations in capital letters and acronyms",
        "Mutants in Toll signaling pathway were obtained from Dr. S. Govind: cactE8, cactIIIG, and cactD13 mutations in the cact gene on Chromosome II.",
    ),
    (
        "Abbreviations in capital letters and acronyms",
        "The transcripts were detected in all the CD4- CD8-, CD4+ CD8+, CD4+ CD8-, and CD4- CD8+ cell populations.",
    ),
    (
        "Words with letters and periods",
        "Two stop codons of an iORF (i.e. the inframe and C-terminal stops) can be any combination of canonical stop codons (TAA, TAG, TGA).",
    ),
    (
        "Words with letters and numbers",
        "Selenocysteine and pyrrolysine are the 21st and 22nd amino acids, which are genetically encoded by stop codons.",
    ),
    (
        "Words with numbers and one type of punctuation",
        "A total of 26,003 iORF satisfied the above criteria.",
    ),
    (
        "Words with numbers and one type of punctuation",
        "The patient had prior x-ray on 1/2 which demonstrated no pneumonia.",
    ),
    (
        "Words with numbers and one type of punctuation",
        "Indeed, it has been estimated recently that the current yeast and human protein interaction maps are only 50% and 10% complete, respectively 18.",
    ),
    (
        "Words with numbers and one type of punctuation",
        "The dotted line indicates significance level 0.05 after a correction for multiple testing.",
    ),
    (
        "Words with numbers and one type of punctuation",
        "E-selectin is induced within 1-2 h, peaks at 4-6 h, and gradually returns to basal level by 24 h.",
    ),
    (
        "Numeration",
        "1. Bioactivation of sulphamethoxazole (SMX) to chemically-reactive metabolites and subsequent protein conjugation is thought to be involved in SMX hypersensitivity.",
    ),
    (
        "Hypertext markup",
        "Bcd mRNA transcripts of &lt; or = 2.6kb were selectively expressed in PBL and testis of healthy individuals.",
    ),
    (
        "URLs",
        "Names of all available Trace Databases were taken from a list of databases at http://www.ncbi.nlm.nih.gov/blast/mmtrace.shtml",
    ),
    (
        "DNA sequences",
        "Footprinting analysis revealed that the identical sequence CCGAAACTGAAAAGG, designated E6, was protected by nuclear extracts from B cells, T cells, or HeLa cells.",
    ),
    (
        "Temporal expressions",
        "This was last documented on the Nuclear Cystogram dated 1/2/01.",
    ),
    (
        "Chemical substances",
        "These results reveal a central role for CaMKIV/Gr as a Ca(2+)-regulated activator of gene transcription in T lymphocytes.",
    ),
    (
        "Chemical substances",
        "Expression of a highly specific protein inhibitor for cyclic AMP-dependent protein kinases in interleukin-1 (IL-1)-responsive cells blocked IL-1-induced gene transcription that was driven by the kappa immunoglobulin enhancer or the human immunodeficiency virus long terminal repeat.",
    ),
];

/// An ordered, immutable collection of examples. An example's identity is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSet {
    examples: Vec<Example>,
}

impl ExampleSet {
    /// Creates an example set from the given examples, keeping their order.
    pub fn new(examples: Vec<Example>) -> ExampleSet {
        ExampleSet { examples }
    }

    /// The built-in biomedical examples: hyphenated compounds, slashes, apostrophes, brackets,
    /// acronyms, numbers, markup, URLs, DNA sequences, dates and chemical names.
    pub fn builtin() -> ExampleSet {
        let examples = BUILTIN
            .iter()
            .map(|(category, text)| Example::new(*category, *text))
            .collect();
        ExampleSet { examples }
    }

    /// Loads examples from a CSV file with a `category,text` header.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<ExampleSet> {
        let path = path.as_ref();
        let examples_error = |source| Error::Examples {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(examples_error)?;
        let examples = reader
            .deserialize()
            .collect::<std::result::Result<Vec<Example>, _>>()
            .map_err(examples_error)?;
        Ok(ExampleSet { examples })
    }

    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns `true` if there are no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Iterates over the examples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    /// Iterates over the example sentences in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|example| example.text.as_str())
    }
}

impl Default for ExampleSet {
    fn default() -> Self {
        ExampleSet::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn it_has_the_builtin_examples_in_order() {
        let examples = ExampleSet::builtin();

        assert_eq!(examples.len(), 24);
        assert_eq!(examples.texts().next(), Some("Normal chest x-ray."));
        assert_eq!(
            examples.iter().last().map(|e| e.category.as_str()),
            Some("Chemical substances")
        );
    }

    #[test]
    fn it_has_no_blank_examples() {
        assert!(ExampleSet::builtin()
            .texts()
            .all(|text| !text.trim().is_empty() && !text.contains('\n')));
    }

    #[test]
    fn it_reads_examples_from_a_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category,text").unwrap();
        writeln!(file, "Hyphens,Normal chest x-ray.").unwrap();
        writeln!(file, "Commas,\"A total of 26,003 iORF.\"").unwrap();

        let examples = ExampleSet::from_csv(file.path()).unwrap();

        assert_eq!(
            examples,
            ExampleSet::new(vec![
                Example::new("Hyphens", "Normal chest x-ray."),
                Example::new("Commas", "A total of 26,003 iORF."),
            ])
        );
    }

    #[test]
    fn it_fails_if_the_file_does_not_exist() {
        let result = ExampleSet::from_csv("non_existent_file.csv");

        assert!(matches!(result, Err(Error::Examples { .. })));
    }

    #[test]
    fn it_fails_on_a_malformed_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category,text").unwrap();
        writeln!(file, "only one field").unwrap();

        let result = ExampleSet::from_csv(file.path());

        assert!(matches!(result, Err(Error::Examples { .. })));
    }
}
