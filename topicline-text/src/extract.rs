//! Content-word extraction per sentence.

use crate::lexicon::Lexicon;
use crate::tokenizer::{PartOfSpeech, Token, Tokenizer};

/// Content words of a sentence alongside the untouched sentence text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSentence {
    pub words: Vec<String>,
    pub text: String,
}

impl AnnotatedSentence {
    pub fn new(words: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            words,
            text: text.into(),
        }
    }
}

/// Tokenize every surviving sentence and keep its content words.
///
/// Absent sentences are skipped entirely. A sentence whose tokens are all
/// filtered out is still emitted, with an empty word list.
pub fn extract_content_words(
    sentences: &[Option<&str>],
    tokenizer: &dyn Tokenizer,
    lexicon: &Lexicon,
) -> Vec<AnnotatedSentence> {
    let annotated: Vec<AnnotatedSentence> = sentences
        .iter()
        .flatten()
        .map(|sentence| {
            let words = tokenizer
                .tokenize(sentence)
                .into_iter()
                .filter(|token| is_content_word(token, lexicon))
                .map(|token| token.text)
                .collect();
            AnnotatedSentence::new(words, *sentence)
        })
        .collect();
    tracing::debug!(
        sentences = annotated.len(),
        content_words = annotated.iter().map(|s| s.words.len()).sum::<usize>(),
        "extract.content_words"
    );
    annotated
}

/// Alphabetic, longer than one character, not an adposition, and on
/// neither the noise (lemma) nor stop (text) list.
pub fn is_content_word(token: &Token, lexicon: &Lexicon) -> bool {
    token.is_alphabetic
        && token.part_of_speech != PartOfSpeech::Adposition
        && token.text.chars().count() > 1
        && !lexicon.is_noise(&token.lemma)
        && !lexicon.is_stop_word(&token.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::RuleTokenizer;

    fn token(text: &str, lemma: &str, pos: PartOfSpeech, alpha: bool) -> Token {
        Token {
            text: text.into(),
            lemma: lemma.into(),
            part_of_speech: pos,
            is_alphabetic: alpha,
        }
    }

    /// Whitespace splitter that tags everything `Other`, for exercising the
    /// extractor without the rule tokenizer's word lists.
    struct Whitespace;

    impl Tokenizer for Whitespace {
        fn tokenize(&self, sentence: &str) -> Vec<Token> {
            sentence
                .split_whitespace()
                .map(|w| {
                    token(
                        w,
                        &w.to_lowercase(),
                        PartOfSpeech::Other,
                        w.chars().all(char::is_alphabetic),
                    )
                })
                .collect()
        }
    }

    #[test]
    fn each_filter_rule_rejects_on_its_own() {
        let lexicon = Lexicon::new(["noise"], ["stop"]);
        assert!(is_content_word(&token("fox", "fox", PartOfSpeech::Other, true), &lexicon));
        assert!(!is_content_word(&token("f0x", "f0x", PartOfSpeech::Other, false), &lexicon));
        assert!(!is_content_word(&token("over", "over", PartOfSpeech::Adposition, true), &lexicon));
        assert!(!is_content_word(&token("x", "x", PartOfSpeech::Other, true), &lexicon));
        assert!(!is_content_word(&token("Noise", "noise", PartOfSpeech::Other, true), &lexicon));
        assert!(!is_content_word(&token("stop", "stop", PartOfSpeech::Other, true), &lexicon));
    }

    #[test]
    fn absent_sentences_are_skipped_and_empty_ones_kept() {
        let lexicon = Lexicon::new(Vec::<String>::new(), ["a", "an"]);
        let out = extract_content_words(
            &[Some("quick brown fox"), None, Some("a an")],
            &Whitespace,
            &lexicon,
        );
        assert_eq!(
            out,
            vec![
                AnnotatedSentence::new(vec!["quick".into(), "brown".into(), "fox".into()], "quick brown fox"),
                AnnotatedSentence::new(vec![], "a an"),
            ]
        );
    }

    #[test]
    fn rule_tokenizer_drops_pronouns_punctuation_and_adpositions() {
        let tokenizer = RuleTokenizer::new().unwrap();
        let out = extract_content_words(
            &[Some("They built it with Rust, in 2015.")],
            &tokenizer,
            &Lexicon::new(["-PRON-"], Vec::<String>::new()),
        );
        assert_eq!(out[0].words, ["built", "Rust"]);
        assert_eq!(out[0].text, "They built it with Rust, in 2015.");
    }
}
