//! End-to-end sentence picking over one document.

use std::sync::Arc;

use rand::Rng;
use topicline_common::{Result, SelectionResult, TopiclineError};

use crate::ascii::filter_ascii;
use crate::extract::extract_content_words;
use crate::frequency::{retain_repeated, WordFrequencyTable};
use crate::lexicon::Lexicon;
use crate::matcher::sentences_with_topic_words;
use crate::picker::pick_sentence;
use crate::tokenizer::Tokenizer;
use crate::topic::{topic_words, TopicWords};

/// What the analysis stages found in a document, before any draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub topic: TopicWords,
    pub candidates: Vec<String>,
}

/// The configured pipeline. Holds no per-document state, so one instance
/// can process any number of documents.
#[derive(Clone)]
pub struct Pipeline {
    lexicon: Lexicon,
    tokenizer: Arc<dyn Tokenizer>,
    more_than: Option<usize>,
}

impl Pipeline {
    pub fn new<T: Tokenizer + 'static>(lexicon: Lexicon, tokenizer: T) -> Self {
        Self::with_shared_tokenizer(lexicon, Arc::new(tokenizer))
    }

    pub fn with_shared_tokenizer(lexicon: Lexicon, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            lexicon,
            tokenizer,
            more_than: None,
        }
    }

    /// Fix the significance threshold instead of deriving it from the counts.
    pub fn with_more_than(mut self, more_than: Option<usize>) -> Self {
        self.more_than = more_than;
        self
    }

    /// Run every stage up to candidate matching.
    ///
    /// Two tallies are involved: the document-wide table drives the repeat
    /// filter, and the topic threshold is computed from a fresh count of the
    /// repeat-filtered words.
    pub fn analyze<S: AsRef<str>>(&self, paragraphs: &[S]) -> Result<Analysis> {
        let sentences = filter_ascii(paragraphs);
        let annotated = extract_content_words(&sentences, self.tokenizer.as_ref(), &self.lexicon);
        let table = WordFrequencyTable::from_sentences(&annotated);
        let repeated = retain_repeated(&annotated, &table);

        let topic = topic_words(
            repeated
                .iter()
                .flat_map(|s| s.words.iter().map(String::as_str)),
            self.more_than,
        )?;
        let candidates = sentences_with_topic_words(&repeated, &topic.word_set());

        tracing::debug!(
            paragraphs = paragraphs.len(),
            sentences = annotated.len(),
            distinct_words = table.len(),
            topic_words = topic.words.len(),
            threshold = topic.threshold,
            candidates = candidates.len(),
            "pipeline.analyzed"
        );
        Ok(Analysis { topic, candidates })
    }

    /// Candidate sentences for a document; never empty on success.
    pub fn candidates<S: AsRef<str>>(&self, paragraphs: &[S]) -> Result<Vec<String>> {
        let Analysis { candidates, .. } = self.analyze(paragraphs)?;
        if candidates.is_empty() {
            return Err(TopiclineError::NoCandidateSentences);
        }
        Ok(candidates)
    }

    /// Draw `draws` independent selections from the document's candidates.
    pub fn run<S, R>(
        &self,
        title: &str,
        paragraphs: &[S],
        draws: usize,
        rng: &mut R,
    ) -> Result<Vec<SelectionResult>>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let candidates = self.candidates(paragraphs)?;
        (0..draws)
            .map(|_| pick_sentence(title, &candidates, &mut *rng))
            .collect()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("lexicon", &self.lexicon)
            .field("more_than", &self.more_than)
            .finish_non_exhaustive()
    }
}
