//! Tokenizer capability and a built-in rule-based implementation.
//!
//! The pipeline only depends on the [`Tokenizer`] trait, so any NLP backend
//! that can produce [`Token`] records can be plugged in.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use topicline_common::{Result, TopiclineError};

/// Lemma assigned to every pronoun, mirroring the convention used by
/// statistical taggers.
pub const PRONOUN_LEMMA: &str = "-PRON-";

const SEGMENT_PATTERN: &str = r"\p{L}+|\p{N}+|'\p{L}+|[^\s\p{L}\p{N}]";

const ADPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "as",
    "at", "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "near", "of",
    "off", "on", "onto", "out", "outside", "over", "past", "per", "since", "through",
    "throughout", "till", "toward", "towards", "under", "underneath", "unlike", "until", "up",
    "upon", "via", "with", "within", "without",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "another", "either", "neither",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

/// Coarse part-of-speech classes, modelled on the Universal POS tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adposition,
    Pronoun,
    Determiner,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

/// One token produced by a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub is_alphabetic: bool,
}

/// Splits a sentence into annotated tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, sentence: &str) -> Vec<Token>;
}

/// Regex segmentation plus closed-class word lists.
///
/// Letter runs, digit runs, apostrophe clitics (`'s`, `'t`) and single
/// punctuation marks each become a token. Lemmas are the lowercased text,
/// except pronouns which all share [`PRONOUN_LEMMA`].
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    segmenter: Regex,
    adpositions: HashSet<String>,
    pronouns: HashSet<String>,
    determiners: HashSet<String>,
    conjunctions: HashSet<String>,
}

impl RuleTokenizer {
    /// Build a tokenizer with the built-in English word lists.
    ///
    /// ```
    /// use topicline_text::{PartOfSpeech, RuleTokenizer, Tokenizer};
    ///
    /// let tokenizer = RuleTokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("She sat on it.");
    /// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    /// assert_eq!(texts, ["She", "sat", "on", "it", "."]);
    /// assert_eq!(tokens[0].lemma, "-PRON-");
    /// assert_eq!(tokens[2].part_of_speech, PartOfSpeech::Adposition);
    /// ```
    pub fn new() -> Result<Self> {
        let segmenter = Regex::new(SEGMENT_PATTERN)
            .map_err(|e| TopiclineError::TokenizerUnavailable(e.to_string()))?;
        Ok(Self {
            segmenter,
            adpositions: to_set(ADPOSITIONS),
            pronouns: to_set(PRONOUNS),
            determiners: to_set(DETERMINERS),
            conjunctions: to_set(CONJUNCTIONS),
        })
    }

    /// Register additional adpositions (case-insensitive).
    pub fn with_adpositions<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.adpositions
            .extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Load additional adpositions from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored. An unreadable
    /// file leaves the tokenizer unusable and is reported as
    /// [`TopiclineError::TokenizerUnavailable`].
    pub fn with_adposition_file(self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TopiclineError::TokenizerUnavailable(format!(
                "failed to read lexicon {}: {e}",
                path.display()
            ))
        })?;
        let words: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        tracing::debug!(path = %path.display(), words = words.len(), "tokenizer.lexicon.loaded");
        Ok(self.with_adpositions(words))
    }

    fn classify(&self, text: &str, lower: &str) -> PartOfSpeech {
        if self.pronouns.contains(lower) {
            PartOfSpeech::Pronoun
        } else if self.adpositions.contains(lower) {
            PartOfSpeech::Adposition
        } else if self.determiners.contains(lower) {
            PartOfSpeech::Determiner
        } else if self.conjunctions.contains(lower) {
            PartOfSpeech::Conjunction
        } else if text.chars().all(char::is_numeric) {
            PartOfSpeech::Numeral
        } else if !text.chars().any(char::is_alphanumeric) {
            PartOfSpeech::Punctuation
        } else {
            PartOfSpeech::Other
        }
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        self.segmenter
            .find_iter(sentence)
            .map(|m| {
                let text = m.as_str();
                let lower = text.to_lowercase();
                let part_of_speech = self.classify(text, &lower);
                let lemma = match part_of_speech {
                    PartOfSpeech::Pronoun => PRONOUN_LEMMA.to_string(),
                    _ => lower,
                };
                Token {
                    text: text.to_string(),
                    lemma,
                    part_of_speech,
                    is_alphabetic: text.chars().all(char::is_alphabetic),
                }
            })
            .collect()
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
