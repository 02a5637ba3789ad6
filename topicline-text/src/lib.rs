//! Topic-sentence extraction for web page text.
//!
//! The pipeline runs strictly forward over one document's paragraphs:
//!
//! 1. [`ascii::filter_ascii`] drops non-ASCII and single-word paragraphs
//! 2. [`extract::extract_content_words`] keeps content words per sentence
//! 3. [`frequency::WordFrequencyTable`] counts them document-wide
//! 4. [`frequency::retain_repeated`] keeps words seen more than once
//! 5. [`topic::topic_words`] thresholds the re-tallied distribution
//! 6. [`matcher::sentences_with_topic_words`] collects candidate sentences
//! 7. [`picker::pick_sentence`] draws one candidate at random
//!
//! [`pipeline::Pipeline`] wires the stages together.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use topicline_text::{Lexicon, Pipeline, RuleTokenizer};
//!
//! let paragraphs = [
//!     "The quick fox jumps.",
//!     "The fox jumps over the lazy dog.",
//!     "Dogs bark.",
//! ];
//! let lexicon = Lexicon::new(["the"], ["the", "over"]);
//! let pipeline = Pipeline::new(lexicon, RuleTokenizer::new().unwrap());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let picks = pipeline.run("Foxes", &paragraphs, 3, &mut rng).unwrap();
//! assert_eq!(picks.len(), 3);
//! assert!(picks.iter().all(|p| p.sentence != "Dogs bark."));
//! ```

pub mod ascii;
pub mod extract;
pub mod frequency;
pub mod lexicon;
pub mod matcher;
pub mod picker;
pub mod pipeline;
pub mod tokenizer;
pub mod topic;

pub use extract::AnnotatedSentence;
pub use lexicon::Lexicon;
pub use pipeline::{Analysis, Pipeline};
pub use tokenizer::{PartOfSpeech, RuleTokenizer, Token, Tokenizer};
pub use topic::{TopicWord, TopicWords};
