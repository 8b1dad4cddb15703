/// Separates tokens within an output line. Tokens are written verbatim and a `;` from the input
/// text is not escaped. It shows up as a token of its own (`characterized;;;it` from `treebank`)
/// or inside a token (`characterized;;it` from `whitespace`).
pub const DELIMITER: char = ';';

/// Joins tokens with [`DELIMITER`] and terminates the line with `\n`.
pub fn format_line<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut line = String::with_capacity(tokens.iter().map(|t| t.as_ref().len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(token.as_ref());
    }
    line.push('\n');
    line
}

/// Formats one line per token sequence, preserving order.
pub fn format_lines<S: AsRef<str>>(token_sequences: &[Vec<S>]) -> Vec<String> {
    token_sequences
        .iter()
        .map(|tokens| format_line(tokens.as_slice()))
        .collect()
}
