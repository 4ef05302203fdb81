use unicode_normalization::UnicodeNormalization;

/// Lowercases the input and collapses every run of non-alphanumeric characters
/// into a single `-`, trimming separators from both ends.
///
/// Accented letters are folded to their ASCII base (`é` becomes `e`) through
/// NFKD decomposition. Apostrophes and characters with no ASCII form are
/// dropped without introducing a separator.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for ch in input.nfkd() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if (ch.is_ascii() && !is_apostrophe(ch)) || ch.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}')
}

/// Splits a delimited text column into its trimmed, non-empty entries.
pub fn split_delimited(value: Option<&str>, delimiter: char) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(delimiter)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn split_comma(value: Option<&str>) -> Vec<String> {
    split_delimited(value, ',')
}

pub fn split_lines(value: Option<&str>) -> Vec<String> {
    split_delimited(value, '\n')
}
