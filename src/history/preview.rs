/// Number of characters kept before the ellipsis
pub const PREVIEW_MAX_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// One-line preview of a code snippet
///
/// Whitespace runs (newlines included) collapse to a single space and the ends are
/// trimmed. Results longer than [`PREVIEW_MAX_CHARS`] characters are cut to exactly that
/// many characters followed by `...`.
///
/// # Examples
///
/// ```
/// use kc_analyzer::history::generate_preview;
///
/// assert_eq!(generate_preview("fn main() {\n    run();\n}"), "fn main() { run(); }");
/// assert_eq!(generate_preview(&"a".repeat(60)).chars().count(), 53);
/// ```
pub fn generate_preview(code: &str) -> String {
    let collapsed = code.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &collapsed[..cut], ELLIPSIS),
        None => collapsed,
    }
}
