//! Fixed word lists consulted by the content-word extractor.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use topicline_common::{Result, TopiclineError};

/// Lemmas that skew term frequencies without carrying topic information.
pub const DEFAULT_NOISE_WORDS: &[&str] = &[
    "-PRON-", "this", "the", "to", "like", "have", "but", "example",
];

/// Noise lemmas and stop words, fixed for the lifetime of a pipeline.
///
/// Noise words are matched against a token's lemma, stop words against its
/// exact text.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    noise_words: HashSet<String>,
    stop_words: HashSet<String>,
}

impl Lexicon {
    pub fn new<N, S>(noise_words: N, stop_words: S) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            noise_words: noise_words.into_iter().map(Into::into).collect(),
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Default noise words plus the English stop-word list.
    pub fn english() -> Self {
        Self::new(
            DEFAULT_NOISE_WORDS.iter().copied(),
            stop_words_for(LANGUAGE::English),
        )
    }

    /// Default noise words plus the stop-word list for an ISO 639-1 code.
    ///
    /// ```
    /// use topicline_text::Lexicon;
    ///
    /// let lexicon = Lexicon::for_language("en").unwrap();
    /// assert!(lexicon.is_stop_word("the"));
    /// assert!(lexicon.is_noise("-PRON-"));
    /// assert!(Lexicon::for_language("xx").is_err());
    /// ```
    pub fn for_language(code: &str) -> Result<Self> {
        let language = match code.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            other => {
                return Err(TopiclineError::Config(format!(
                    "no stop-word list for language `{other}`"
                )))
            }
        };
        Ok(Self::new(
            DEFAULT_NOISE_WORDS.iter().copied(),
            stop_words_for(language),
        ))
    }

    /// Replace the noise-word list.
    pub fn with_noise_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Add stop words on top of the current list.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn is_noise(&self, lemma: &str) -> bool {
        self.noise_words.contains(lemma)
    }

    pub fn is_stop_word(&self, text: &str) -> bool {
        self.stop_words.contains(text)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

fn stop_words_for(language: LANGUAGE) -> Vec<String> {
    get(language).iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_match_exact_text() {
        let lexicon = Lexicon::new(Vec::<String>::new(), ["the"]);
        assert!(lexicon.is_stop_word("the"));
        assert!(!lexicon.is_stop_word("The"));
    }

    #[test]
    fn english_keeps_default_noise_words() {
        let lexicon = Lexicon::english();
        for word in DEFAULT_NOISE_WORDS {
            assert!(lexicon.is_noise(word), "{word} should be noise");
        }
        assert!(lexicon.stop_word_count() > 100);
    }

    #[test]
    fn noise_words_can_be_replaced_and_stop_words_extended() {
        let lexicon = Lexicon::new(["old"], ["a"])
            .with_noise_words(["new"])
            .with_extra_stop_words(["b"]);
        assert!(!lexicon.is_noise("old"));
        assert!(lexicon.is_noise("new"));
        assert!(lexicon.is_stop_word("a"));
        assert!(lexicon.is_stop_word("b"));
    }
}
