//! Terminal output sanitization
//!
//! Saved code and analysis results are arbitrary user input. Anything printed by the CLI
//! passes through [`strip_ansi_codes`] first so a stored snippet cannot clear the screen,
//! move the cursor or recolour later output.

/// Removes ANSI CSI sequences (`ESC [ ... <letter>`) and control characters other than
/// tab, newline and carriage return
///
/// # Examples
///
/// ```
/// use kc_analyzer::utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mprint(1)\x1b[0m"), "print(1)");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_colour_codes_from_code() {
        let code = "\x1b[1;32mdef\x1b[0m quick_sort(arr):";
        assert_eq!(strip_ansi_codes(code), "def quick_sort(arr):");
    }

    #[test]
    fn test_strips_screen_clear() {
        assert_eq!(strip_ansi_codes("\x1b[2J\x1b[Hx = 1"), "x = 1");
    }

    #[test]
    fn test_keeps_code_layout() {
        let code = "if x:\n\treturn y\r\n";
        assert_eq!(strip_ansi_codes(code), code);
    }

    #[test]
    fn test_drops_bell_and_backspace() {
        assert_eq!(strip_ansi_codes("a\x07b\x08c"), "abc");
    }

    #[test]
    fn test_lone_escape_dropped() {
        assert_eq!(strip_ansi_codes("a\x1bb"), "ab");
    }

    #[test]
    fn test_unicode_preserved() {
        assert_eq!(strip_ansi_codes("// 输出: 55 \x1b[31m🚀\x1b[0m"), "// 输出: 55 🚀");
    }

    #[test]
    fn test_unterminated_sequence_consumes_rest() {
        assert_eq!(strip_ansi_codes("ok\x1b[123"), "ok");
    }
}
