//! Document-wide word counts and the repeat filter built on them.

use std::collections::HashMap;

use crate::extract::AnnotatedSentence;

/// Occurrence count of every content word across one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn from_sentences(sentences: &[AnnotatedSentence]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in sentences.iter().flat_map(|s| s.words.iter()) {
            *counts.entry(word.clone()).or_default() += 1;
        }
        Self { counts }
    }

    /// Count for `word`, zero when unseen.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Keep only the words that occur more than once in the whole document.
///
/// Sentences left without words stay in the output so every entry still
/// carries its original text.
pub fn retain_repeated(
    sentences: &[AnnotatedSentence],
    table: &WordFrequencyTable,
) -> Vec<AnnotatedSentence> {
    sentences
        .iter()
        .map(|sentence| {
            let words = sentence
                .words
                .iter()
                .filter(|word| table.count(word) > 1)
                .cloned()
                .collect();
            AnnotatedSentence::new(words, sentence.text.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str], text: &str) -> AnnotatedSentence {
        AnnotatedSentence::new(words.iter().map(|w| w.to_string()).collect(), text)
    }

    #[test]
    fn counts_every_occurrence_across_sentences() {
        let doc = [
            sentence(&["fox", "jumps", "fox"], "s1"),
            sentence(&["fox", "dog"], "s2"),
            sentence(&[], "s3"),
        ];
        let table = WordFrequencyTable::from_sentences(&doc);
        assert_eq!(table.count("fox"), 3);
        assert_eq!(table.count("jumps"), 1);
        assert_eq!(table.count("dog"), 1);
        assert_eq!(table.count("cat"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn singletons_are_removed_but_sentences_kept() {
        let doc = [
            sentence(&["quick", "fox", "jumps"], "The quick fox jumps."),
            sentence(&["fox", "jumps", "lazy", "dog"], "The fox jumps over the lazy dog."),
            sentence(&["Dogs", "bark"], "Dogs bark."),
        ];
        let table = WordFrequencyTable::from_sentences(&doc);
        let repeated = retain_repeated(&doc, &table);
        assert_eq!(repeated.len(), 3);
        assert_eq!(repeated[0].words, ["fox", "jumps"]);
        assert_eq!(repeated[1].words, ["fox", "jumps"]);
        assert!(repeated[2].words.is_empty());
        assert_eq!(repeated[2].text, "Dogs bark.");
    }

    #[test]
    fn empty_document_gives_empty_table() {
        let table = WordFrequencyTable::from_sentences(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
