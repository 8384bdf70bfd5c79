//! Literal substring replacement with occurrence counting.
//!
//! Patterns are exact character sequences. No wildcard, anchor, or capture
//! semantics: a pattern that looks like an escaped control character is five
//! ordinary characters. Matches are found left to right and never overlap,
//! and replaced text is not rescanned, so a replacement containing its own
//! pattern cannot cascade.

/// Replace every occurrence of `pattern` in `haystack` with `replacement`.
///
/// Returns the transformed text and the number of occurrences replaced.
/// An empty `pattern` matches nowhere: the input comes back unchanged with
/// a count of zero. Rule validation rejects empty patterns before they
/// reach this point.
pub fn replace_counting(haystack: &str, pattern: &str, replacement: &str) -> (String, usize) {
    if pattern.is_empty() {
        return (haystack.to_string(), 0);
    }

    let mut result = String::with_capacity(haystack.len());
    let mut count = 0;
    let mut rest = haystack;
    while let Some(found) = rest.find(pattern) {
        result.push_str(&rest[..found]);
        result.push_str(replacement);
        rest = &rest[found + pattern.len()..];
        count += 1;
    }
    result.push_str(rest);

    (result, count)
}

/// Count occurrences of `pattern` in `haystack` without replacing.
///
/// Matches the non-overlapping semantics of [`replace_counting`].
pub fn count_occurrences(haystack: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    haystack.matches(pattern).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_returns_input_unchanged() {
        let (out, count) = replace_counting("render(items))}\r\n", "))}\\r\r\n", "))}\r\n");
        assert_eq!(out, "render(items))}\r\n");
        assert_eq!(count, 0);
    }

    #[test]
    fn replaces_every_occurrence() {
        let (out, count) = replace_counting("a<b>c<b>d", "<b>", "-");
        assert_eq!(out, "a-c-d");
        assert_eq!(count, 2);
    }

    #[test]
    fn pattern_spanning_a_line_break_matches() {
        // The corrupted sequence ends in a raw CRLF; a line-based scan would
        // never see it whole.
        let (out, count) = replace_counting("render(items))}\\r\r\nnext", "))}\\r\r\n", "))}\r\n");
        assert_eq!(out, "render(items))}\r\nnext");
        assert_eq!(count, 1);
    }

    #[test]
    fn matches_do_not_overlap() {
        let (out, count) = replace_counting("aaa", "aa", "b");
        assert_eq!(out, "ba");
        assert_eq!(count, 1);
    }

    #[test]
    fn replacement_containing_pattern_is_not_rescanned() {
        let (out, count) = replace_counting("aa", "a", "aa");
        assert_eq!(out, "aaaa");
        assert_eq!(count, 2);
    }

    #[test]
    fn empty_replacement_deletes_occurrences() {
        let (out, count) = replace_counting("one\r\ntwo\r\n", "\r", "");
        assert_eq!(out, "one\ntwo\n");
        assert_eq!(count, 2);
    }

    #[test]
    fn empty_pattern_is_a_no_op() {
        let (out, count) = replace_counting("abc", "", "x");
        assert_eq!(out, "abc");
        assert_eq!(count, 0);
        assert_eq!(count_occurrences("abc", ""), 0);
    }

    #[test]
    fn count_agrees_with_replace() {
        let text = "x))}\\r\r\ny))}\\r\r\n";
        assert_eq!(count_occurrences(text, "))}\\r\r\n"), 2);

        let (out, count) = replace_counting(text, "))}\\r\r\n", "))}\r\n");
        assert_eq!(count, 2);
        assert_eq!(count_occurrences(&out, "))}\\r\r\n"), 0);
    }
}
