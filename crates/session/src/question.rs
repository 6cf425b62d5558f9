use model::{Difficulty, Question};
use rand::{seq::SliceRandom, Rng};

/// Decodes the HTML entities the question bank embeds in its text.
pub fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// A decoded question whose answer order has been fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    text: Box<str>,
    category: Box<str>,
    difficulty: Difficulty,
    correct: Box<str>,
    incorrect: Box<[Box<str>]>,
    /// Every answer in display order. Never reshuffled after construction.
    answers: Box<[Box<str>]>,
}

impl PresentedQuestion {
    /// Decodes every text field, then shuffles the decoded answers once.
    pub fn new<R: Rng + ?Sized>(raw: Question, rng: &mut R) -> Self {
        let Question { category, difficulty, question, correct_answer, incorrect_answers, .. } = raw;
        let correct: Box<str> = decode(&correct_answer).into();
        let incorrect: Box<[Box<str>]> = incorrect_answers.iter().map(|answer| decode(answer).into()).collect();

        let mut answers = incorrect.to_vec();
        answers.push(correct.clone());
        answers.shuffle(rng);

        Self {
            text: decode(&question).into(),
            category: decode(&category).into(),
            difficulty,
            correct,
            incorrect,
            answers: answers.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct
    }

    pub fn incorrect_answers(&self) -> &[Box<str>] {
        &self.incorrect
    }

    /// Answer options in the order they must be displayed.
    pub fn answers(&self) -> &[Box<str>] {
        &self.answers
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        *self.correct == *answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::QuestionKind;
    use rand::{rngs::StdRng, SeedableRng};

    fn raw() -> Question {
        Question {
            category: String::from("Entertainment: Japanese Anime &amp; Manga"),
            kind: QuestionKind::Multiple,
            difficulty: Difficulty::Medium,
            question: String::from("Who said &quot;I&#039;ll be back&quot;?"),
            correct_answer: String::from("The Terminator"),
            incorrect_answers: vec![
                String::from("Rock &amp; Roll"),
                String::from("Caf&#233; Owner"),
                String::from("&lt;Nobody&gt;"),
            ],
        }
    }

    fn sorted(answers: &[Box<str>]) -> Vec<&str> {
        let mut answers: Vec<_> = answers.iter().map(|answer| &**answer).collect();
        answers.sort_unstable();
        answers
    }

    #[test]
    fn decodes_every_field() {
        let question = PresentedQuestion::new(raw(), &mut StdRng::seed_from_u64(7));
        assert_eq!(question.text(), "Who said \"I'll be back\"?");
        assert_eq!(question.category(), "Entertainment: Japanese Anime & Manga");
        assert_eq!(question.correct_answer(), "The Terminator");
        assert_eq!(
            sorted(question.incorrect_answers()),
            ["<Nobody>", "Café Owner", "Rock & Roll"]
        );
    }

    #[test]
    fn answers_are_a_permutation_of_the_source() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let question = PresentedQuestion::new(raw(), &mut rng);
            assert_eq!(
                sorted(question.answers()),
                ["<Nobody>", "Café Owner", "Rock & Roll", "The Terminator"]
            );
        }
    }

    #[test]
    fn answer_order_is_stable_across_reads() {
        let question = PresentedQuestion::new(raw(), &mut StdRng::seed_from_u64(3));
        let first = question.answers().to_vec();
        for _ in 0..8 {
            assert_eq!(question.answers(), first.as_slice());
        }
    }

    #[test]
    fn shuffles_the_answer_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let positions: std::collections::HashSet<_> = (0..64)
            .map(|_| {
                let question = PresentedQuestion::new(raw(), &mut rng);
                question.answers().iter().position(|answer| question.is_correct(answer)).unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn compares_against_decoded_answer() {
        let mut raw = raw();
        raw.correct_answer = String::from("Tom &amp; Jerry");
        let question = PresentedQuestion::new(raw, &mut StdRng::seed_from_u64(0));
        assert!(question.is_correct("Tom & Jerry"));
        assert!(!question.is_correct("Tom &amp; Jerry"));
    }
}
