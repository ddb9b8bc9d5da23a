/// Normalizes extracted document text before skill matching.
///
/// `|`, `:` and `/` become spaces so they cannot glue two tokens into one
/// word boundary run; whitespace runs then collapse to a single space.
pub fn clean_text(text: &str) -> String {
    text.replace(['|', ':', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
