//! ASCII filtering of raw paragraph text.

/// Keep multi-word paragraphs, marking non-ASCII ones as absent.
///
/// Paragraphs without interior whitespace (titles, lone tokens) are dropped
/// outright. The remaining entries keep their relative order; those
/// containing any character outside ASCII come back as `None` so later
/// stages can skip them.
///
/// ```
/// use topicline_text::ascii::filter_ascii;
///
/// let out = filter_ascii(&["Hello.", "Two words", "Caf\u{e9} au lait"]);
/// assert_eq!(out, vec![Some("Two words"), None]);
/// ```
pub fn filter_ascii<S: AsRef<str>>(paragraphs: &[S]) -> Vec<Option<&str>> {
    let out: Vec<Option<&str>> = paragraphs
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| has_interior_whitespace(p))
        .map(|p| p.is_ascii().then_some(p))
        .collect();
    let rejected = out.iter().filter(|s| s.is_none()).count();
    tracing::trace!(
        paragraphs = paragraphs.len(),
        kept = out.len() - rejected,
        rejected,
        "ascii.filtered"
    );
    out
}

/// Flatten filter output to the sentences that survived.
pub fn surviving<'a>(filtered: &[Option<&'a str>]) -> Vec<&'a str> {
    filtered.iter().flatten().copied().collect()
}

fn has_interior_whitespace(text: &str) -> bool {
    text.trim().contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_words_are_dropped_not_marked() {
        assert!(filter_ascii(&["Hello.", "World.", "   padded   "]).is_empty());
    }

    #[test]
    fn non_ascii_sentences_become_absent_in_place() {
        let input = ["first one", "na\u{ef}ve approach", "last one"];
        assert_eq!(
            filter_ascii(&input),
            vec![Some("first one"), None, Some("last one")]
        );
    }

    #[test]
    fn tabs_and_newlines_count_as_interior_whitespace() {
        assert_eq!(filter_ascii(&["a\tb", "c\nd"]), vec![Some("a\tb"), Some("c\nd")]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let input = [
            "Rust is fast.",
            "Title",
            "\u{201c}Quoted\u{201d} text",
            "Memory safety matters.",
        ];
        let once = surviving(&filter_ascii(&input));
        let twice = surviving(&filter_ascii(&once));
        assert_eq!(once, twice);
        assert_eq!(once, ["Rust is fast.", "Memory safety matters."]);
    }
}
