use lexi_types::{QuizQuestion, VocabularyEntry};
use rand::Rng;
use rand::seq::SliceRandom;

/// Shown as the correct answer for entries saved without a translation.
pub const NO_TRANSLATION_PLACEHOLDER: &str = "(no translation saved)";

/// A quiz needs at least one distractor, so one saved word is not enough.
pub const MIN_ENTRIES: usize = 2;

const MAX_DISTRACTORS: usize = 3;

/// In-memory state for one run-through of quiz questions. Built from a
/// vocabulary snapshot, discarded once finished.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub score: usize,
    /// Whether the current question has already been graded.
    answered: bool,
}

#[derive(Debug)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub score: usize,
}

impl QuizSession {
    /// Build a session with one question per entry, in random order.
    /// Fewer than `MIN_ENTRIES` entries produce an empty session, which
    /// the caller surfaces as "not enough words".
    pub fn build(entries: &[VocabularyEntry]) -> Self {
        Self::build_with_rng(entries, &mut rand::rng())
    }

    pub fn build_with_rng<R: Rng + ?Sized>(entries: &[VocabularyEntry], rng: &mut R) -> Self {
        let mut questions = Vec::new();

        if entries.len() >= MIN_ENTRIES {
            questions = entries
                .iter()
                .map(|entry| build_question(entry, entries, rng))
                .collect();
            // Quiz order should not follow insertion order.
            questions.shuffle(rng);
        }

        Self {
            questions,
            current_index: 0,
            score: 0,
            answered: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question currently in front of the user, None once finished.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// Grade the selected option against the current question by exact
    /// string match. Each question is graded at most once: repeats return
    /// None until `advance` moves to the next question.
    pub fn record_answer(&mut self, selected: &str) -> Option<AnswerOutcome> {
        if self.answered {
            return None;
        }

        let question = self.questions.get(self.current_index)?;
        let is_correct = selected == question.correct_answer;
        if is_correct {
            self.score += 1;
        }
        self.answered = true;

        Some(AnswerOutcome {
            is_correct,
            correct_answer: question.correct_answer.clone(),
            score: self.score,
        })
    }

    /// Move to the next question; returns true once the session is
    /// finished, after which no further questions are produced.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.questions.len() {
            self.current_index += 1;
            self.answered = false;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }
}

fn build_question<R: Rng + ?Sized>(
    entry: &VocabularyEntry,
    all: &[VocabularyEntry],
    rng: &mut R,
) -> QuizQuestion {
    let correct_answer = answer_text(entry);

    // Duplicate translations across different entries stay in the pool;
    // only options equal to the correct answer are dropped.
    let mut pool: Vec<String> = all
        .iter()
        .filter(|other| other.id != entry.id)
        .map(|other| answer_text(other))
        .filter(|t| t != &correct_answer)
        .collect();
    pool.shuffle(rng);
    pool.truncate(MAX_DISTRACTORS);

    let mut options = pool;
    options.push(correct_answer.clone());
    options.shuffle(rng);

    QuizQuestion {
        word: entry.word.clone(),
        prompt: format!("What does \"{}\" mean?", entry.word),
        correct_answer,
        options,
    }
}

fn answer_text(entry: &VocabularyEntry) -> String {
    if entry.translation.is_empty() {
        NO_TRANSLATION_PLACEHOLDER.to_string()
    } else {
        entry.translation.clone()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn entry(id: i64, word: &str, translation: &str) -> VocabularyEntry {
        VocabularyEntry {
            id,
            word: word.to_string(),
            definition: format!("definition of {word}"),
            phonetic: String::new(),
            translation: translation.to_string(),
        }
    }

    fn sample_entries(n: usize) -> Vec<VocabularyEntry> {
        (0..n)
            .map(|i| entry(i as i64, &format!("word{i}"), &format!("translation{i}")))
            .collect()
    }

    #[test]
    fn too_few_entries_yield_an_empty_session() {
        let mut rng = StdRng::seed_from_u64(1);

        let session = QuizSession::build_with_rng(&[], &mut rng);
        assert!(session.is_empty());

        let session = QuizSession::build_with_rng(&sample_entries(1), &mut rng);
        assert!(session.is_empty());
        assert!(session.is_finished());
    }

    #[test]
    fn one_question_per_entry_with_bounded_options() {
        let entries = sample_entries(6);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let session = QuizSession::build_with_rng(&entries, &mut rng);

            assert_eq!(session.questions.len(), entries.len());
            for question in &session.questions {
                assert!((2..=4).contains(&question.options.len()));
                let hits = question
                    .options
                    .iter()
                    .filter(|o| **o == question.correct_answer)
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }

    #[test]
    fn question_order_is_a_permutation_of_the_entries() {
        let entries = sample_entries(8);
        let mut rng = StdRng::seed_from_u64(3);
        let session = QuizSession::build_with_rng(&entries, &mut rng);

        let mut words: Vec<&str> = session.questions.iter().map(|q| q.word.as_str()).collect();
        words.sort_unstable();
        let mut expected: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(words, expected);
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut rng = StdRng::seed_from_u64(9);
        let original: Vec<u32> = vec![1, 2, 2, 3, 5, 8, 8, 8];

        let mut shuffled = original.clone();
        shuffled.shuffle(&mut rng);

        let mut sorted = shuffled;
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn missing_translation_becomes_the_placeholder() {
        let entries = vec![entry(1, "cat", "gato"), entry(2, "dog", "")];
        let mut rng = StdRng::seed_from_u64(4);
        let session = QuizSession::build_with_rng(&entries, &mut rng);

        let dog = session
            .questions
            .iter()
            .find(|q| q.word == "dog")
            .expect("dog question should exist");
        assert_eq!(dog.correct_answer, NO_TRANSLATION_PLACEHOLDER);
        assert!(dog.options.contains(&NO_TRANSLATION_PLACEHOLDER.to_string()));
    }

    #[test]
    fn two_word_session_pairs_words_with_their_translations() {
        let entries = vec![entry(1, "cat", "gato"), entry(2, "dog", "perro")];
        let mut rng = StdRng::seed_from_u64(5);
        let session = QuizSession::build_with_rng(&entries, &mut rng);

        assert_eq!(session.questions.len(), 2);
        for question in &session.questions {
            assert!(question.options.contains(&"gato".to_string()));
            assert!(question.options.contains(&"perro".to_string()));
            match question.word.as_str() {
                "cat" => assert_eq!(question.correct_answer, "gato"),
                "dog" => assert_eq!(question.correct_answer, "perro"),
                other => panic!("unexpected question word {other}"),
            }
        }
    }

    #[test]
    fn scoring_requires_an_exact_match() {
        let entries = vec![entry(1, "cat", "gato"), entry(2, "dog", "perro")];
        let mut rng = StdRng::seed_from_u64(6);
        let mut session = QuizSession::build_with_rng(&entries, &mut rng);

        let outcome = session.record_answer("definitely wrong").unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.score, 0);

        session.advance();
        let correct = session.current_question().unwrap().correct_answer.clone();
        let outcome = session.record_answer(&correct).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.correct_answer, correct);
    }

    #[test]
    fn each_question_is_graded_at_most_once() {
        let entries = vec![entry(1, "cat", "gato"), entry(2, "dog", "perro")];
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = QuizSession::build_with_rng(&entries, &mut rng);

        let correct = session.current_question().unwrap().correct_answer.clone();
        let outcome = session.record_answer(&correct).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.score, 1);

        // Repeats of the same question are not graded again.
        assert!(session.record_answer(&correct).is_none());
        assert!(session.record_answer(&correct).is_none());
        assert_eq!(session.score, 1);

        // The next question becomes gradable after advancing.
        assert!(!session.advance());
        let correct = session.current_question().unwrap().correct_answer.clone();
        let outcome = session.record_answer(&correct).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.score, 2);
        assert!(session.record_answer(&correct).is_none());

        assert!(session.advance());
        assert!(session.score <= session.questions.len());
    }

    #[test]
    fn advance_terminates_after_the_last_question() {
        let entries = sample_entries(3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = QuizSession::build_with_rng(&entries, &mut rng);

        assert!(!session.advance());
        assert!(!session.advance());
        assert!(session.advance());
        assert!(session.is_finished());
        assert!(session.current_question().is_none());

        // Terminal state is stable.
        assert!(session.advance());
        assert!(session.record_answer("anything").is_none());
    }
}
