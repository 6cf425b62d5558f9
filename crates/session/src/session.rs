use crate::{question::PresentedQuestion, summary::Summary};
use model::Question;
use rand::Rng;

/// Result of a single answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// The question was already answered or the quiz is over. Nothing changed.
    Ignored,
}

/// An in-progress quiz over a fixed list of questions.
///
/// Maintains `score <= current <= questions.len()`, and the session is
/// finished exactly when `current == questions.len()`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Box<[PresentedQuestion]>,
    current: usize,
    score: usize,
}

impl QuizSession {
    /// Normalizes every raw question, fixing each answer order once.
    pub fn new<R: Rng + ?Sized>(raw: Vec<Question>, rng: &mut R) -> Self {
        let questions = raw.into_iter().map(|question| PresentedQuestion::new(question, &mut *rng)).collect();
        Self { questions, current: 0, score: 0 }
    }

    pub fn questions(&self) -> &[PresentedQuestion] {
        &self.questions
    }

    /// The question awaiting an answer, if any.
    pub fn current(&self) -> Option<&PresentedQuestion> {
        self.questions.get(self.current)
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub const fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current == self.questions.len()
    }

    /// Answered count and total, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.current, self.questions.len())
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.score, self.questions.len())
    }

    /// Records `answer` for the question at `index`. Only the current question
    /// accepts an answer, so a repeated submission for the same index is ignored.
    pub fn submit_answer(&mut self, index: usize, answer: &str) -> Outcome {
        if index != self.current {
            return Outcome::Ignored;
        }

        let Some(question) = self.questions.get(index) else {
            return Outcome::Ignored;
        };

        let outcome = if question.is_correct(answer) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.current += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Difficulty, QuestionKind};
    use rand::{rngs::StdRng, SeedableRng};

    fn raw(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question {
                category: String::from("Science &amp; Nature"),
                kind: QuestionKind::Multiple,
                difficulty: Difficulty::Easy,
                question: format!("Question {i}?"),
                correct_answer: format!("right {i}"),
                incorrect_answers: vec![format!("wrong {i}a"), format!("wrong {i}b"), format!("wrong {i}c")],
            })
            .collect()
    }

    fn session(count: usize) -> QuizSession {
        QuizSession::new(raw(count), &mut StdRng::seed_from_u64(11))
    }

    fn assert_invariants(session: &QuizSession) {
        assert!(session.score() <= session.current_index());
        assert!(session.current_index() <= session.total());
        assert_eq!(session.is_finished(), session.current_index() == session.total());
    }

    #[test]
    fn keeps_every_question() {
        let session = session(10);
        assert_eq!(session.total(), 10);
        assert_eq!(session.progress(), (0, 10));
        assert_eq!(session.current().unwrap().category(), "Science & Nature");
        assert_invariants(&session);
    }

    #[test]
    fn scores_correct_answers_and_advances() {
        let mut session = session(3);
        assert_eq!(session.submit_answer(0, "right 0"), Outcome::Correct);
        assert_invariants(&session);
        assert_eq!(session.submit_answer(1, "wrong 1a"), Outcome::Incorrect);
        assert_invariants(&session);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current().unwrap().text(), "Question 2?");
        assert!(!session.is_finished());

        assert_eq!(session.submit_answer(2, "right 2"), Outcome::Correct);
        assert_invariants(&session);
        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.summary(), Summary::new(2, 3));
    }

    #[test]
    fn resubmission_is_a_no_op() {
        let mut session = session(3);
        assert_eq!(session.submit_answer(0, "wrong 0a"), Outcome::Incorrect);
        assert_eq!(session.submit_answer(0, "right 0"), Outcome::Ignored);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 1);
        assert_invariants(&session);
    }

    #[test]
    fn future_questions_cannot_be_answered_early() {
        let mut session = session(3);
        assert_eq!(session.submit_answer(2, "right 2"), Outcome::Ignored);
        assert_eq!(session.progress(), (0, 3));
    }

    #[test]
    fn finished_session_ignores_answers() {
        let mut session = session(1);
        assert_eq!(session.submit_answer(0, "right 0"), Outcome::Correct);
        assert_eq!(session.submit_answer(1, "right 0"), Outcome::Ignored);
        assert_eq!(session.submit_answer(0, "right 0"), Outcome::Ignored);
        assert_eq!(session.score(), 1);
        assert_invariants(&session);
    }

    #[test]
    fn empty_session_is_finished() {
        let mut session = session(0);
        assert!(session.is_finished());
        assert_eq!(session.submit_answer(0, "anything"), Outcome::Ignored);
        assert_eq!(session.summary().percentage(), 0);
        assert_invariants(&session);
    }

    #[test]
    fn answers_do_not_reshuffle_while_answering() {
        let mut session = session(2);
        let before = session.questions()[1].answers().to_vec();
        session.submit_answer(0, "right 0");
        assert_eq!(session.current().unwrap().answers(), before.as_slice());
    }
}
