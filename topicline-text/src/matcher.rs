//! Candidate sentence matching.

use std::collections::HashSet;

use crate::extract::AnnotatedSentence;

/// Distinct sentence texts whose word list shares at least one topic word.
///
/// Identical texts appear once. The returned order follows first
/// occurrence so seeded draws stay reproducible, but callers should treat
/// the result as a set.
pub fn sentences_with_topic_words(
    sentences: &[AnnotatedSentence],
    topic_words: &HashSet<&str>,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let candidates: Vec<String> = sentences
        .iter()
        .filter(|s| s.words.iter().any(|w| topic_words.contains(w.as_str())))
        .filter(|s| seen.insert(s.text.as_str()))
        .map(|s| s.text.clone())
        .collect();
    tracing::debug!(
        sentences = sentences.len(),
        candidates = candidates.len(),
        "matcher.candidates"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str], text: &str) -> AnnotatedSentence {
        AnnotatedSentence::new(words.iter().map(|w| w.to_string()).collect(), text)
    }

    #[test]
    fn every_candidate_shares_a_topic_word() {
        let doc = [
            sentence(&["fox", "jumps"], "one"),
            sentence(&["dog"], "two"),
            sentence(&[], "three"),
            sentence(&["jumps"], "four"),
        ];
        let topic = HashSet::from(["fox", "jumps"]);
        let candidates = sentences_with_topic_words(&doc, &topic);
        assert_eq!(candidates, ["one", "four"]);
        for text in &candidates {
            let entry = doc.iter().find(|s| &s.text == text).unwrap();
            assert!(entry.words.iter().any(|w| topic.contains(w.as_str())));
        }
    }

    #[test]
    fn duplicate_texts_are_collapsed() {
        let doc = [
            sentence(&["rust"], "Rust is neat."),
            sentence(&["rust"], "Rust is neat."),
            sentence(&["rust", "cargo"], "Cargo builds Rust."),
        ];
        let candidates = sentences_with_topic_words(&doc, &HashSet::from(["rust"]));
        assert_eq!(candidates, ["Rust is neat.", "Cargo builds Rust."]);
    }

    #[test]
    fn no_topic_words_means_no_candidates() {
        let doc = [sentence(&["fox"], "one")];
        assert!(sentences_with_topic_words(&doc, &HashSet::new()).is_empty());
    }
}
