//! Random selection of one candidate sentence.

use rand::seq::SliceRandom;
use rand::Rng;
use topicline_common::{Result, SelectionResult, TopiclineError};

/// Pair `title` with a uniformly chosen candidate.
///
/// Fails with [`TopiclineError::NoCandidateSentences`] when `candidates`
/// is empty.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use topicline_text::picker::pick_sentence;
///
/// let candidates = vec!["only one".to_string()];
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = pick_sentence("Title", &candidates, &mut rng).unwrap();
/// assert_eq!(picked.sentence, "only one");
/// ```
pub fn pick_sentence<R>(title: &str, candidates: &[String], rng: &mut R) -> Result<SelectionResult>
where
    R: Rng + ?Sized,
{
    let sentence = candidates
        .choose(rng)
        .ok_or(TopiclineError::NoCandidateSentences)?;
    Ok(SelectionResult::new(title, sentence.as_str()))
}
