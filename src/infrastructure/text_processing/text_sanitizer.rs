use unicode_normalization::UnicodeNormalization;

/// Flattens one PDF page: NFKC-normalizes (splitting ligatures such as `ﬁ`),
/// then joins the parser's text runs with single spaces. The result never
/// contains a newline, so pages can be joined line by line.
pub fn join_text_runs(raw_page: &str) -> String {
    let normalized: String = raw_page.nfkc().collect();

    normalized
        .lines()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces every whitespace run, newlines and tabs included, with one space
/// and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }

    result
}
