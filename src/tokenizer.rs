use crate::error::Result;

/// A tokenizer splits text into a sequence of tokens. Every adapter in this crate implements
/// this trait; implement it yourself to add another tokenizer to a comparison.
pub trait Tokenizer {
    /// A short, stable name. It also names the adapter's output file.
    fn name(&self) -> &str;

    /// Tokenizes the input text. Tokens are substrings of `input_text`, in order.
    fn tokenize(&self, input_text: &str) -> Result<Vec<String>>;
}
