//! Significance thresholding over a word stream.

use std::collections::{HashMap, HashSet};

use topicline_common::{Result, TopiclineError};

/// A topic word and how often it occurred in the tallied stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicWord {
    pub word: String,
    pub count: usize,
}

/// Topic words, most frequent first, and the threshold that selected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicWords {
    pub threshold: usize,
    pub words: Vec<TopicWord>,
}

impl TopicWords {
    /// The words alone, for membership tests.
    pub fn word_set(&self) -> HashSet<&str> {
        self.words.iter().map(|w| w.word.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Select the words whose count in `words` meets the significance threshold.
///
/// The stream is tallied afresh. Without an override the threshold is half
/// the highest count, floored; an override of `Some(0)` counts as no
/// override. Results are sorted by descending count, ties in order of first
/// occurrence.
///
/// An empty stream has no highest count, so it fails with
/// [`TopiclineError::EmptyCorpus`] unless an override is given.
///
/// ```
/// use topicline_text::topic::topic_words;
///
/// let stream = "a a a a a a a a a a b b b b b c c c c".split(' ');
/// let topic = topic_words(stream, None).unwrap();
/// assert_eq!(topic.threshold, 5);
/// let picked: Vec<_> = topic.words.iter().map(|w| (w.word.as_str(), w.count)).collect();
/// assert_eq!(picked, [("a", 10), ("b", 5)]);
/// ```
pub fn topic_words<'a, I>(words: I, more_than: Option<usize>) -> Result<TopicWords>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        let count = counts.entry(word).or_insert_with(|| {
            first_seen.push(word);
            0
        });
        *count += 1;
    }

    let threshold = match more_than.filter(|&n| n > 0) {
        Some(explicit) => explicit,
        None => counts.values().copied().max().ok_or(TopiclineError::EmptyCorpus)? / 2,
    };

    let mut selected: Vec<TopicWord> = first_seen
        .into_iter()
        .map(|word| TopicWord {
            word: word.to_string(),
            count: counts[word],
        })
        .filter(|w| w.count >= threshold)
        .collect();
    selected.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(
        distinct = counts.len(),
        threshold,
        selected = selected.len(),
        "topic.selected"
    );
    Ok(TopicWords {
        threshold,
        words: selected,
    })
}
