use crate::error::{Error, Result};
use model::{Category, CategoryFilter, Difficulty};
use session::{decode, Phase, PresentedQuestion, QuizMachine, QuizSession};
use std::{fmt::Write, str::FromStr};

pub const HELP: &str = "\
Commands:
  start [amount] [category|any] [difficulty|any]  begin a new quiz
  categories                                      list the available categories
  <number>                                        answer the current question
  restart                                         abandon the quiz and start over
  quit                                            leave";

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Categories,
    Start {
        amount: Option<u8>,
        category: CategoryFilter,
        difficulty: Option<Difficulty>,
    },
    /// Zero-based index into the displayed answers.
    Answer(usize),
    Restart,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(Error::Empty)?;

        if let Ok(choice) = command.parse::<usize>() {
            let choice = choice.checked_sub(1).ok_or(Error::UnknownChoice)?;
            if words.next().is_some() {
                return Err(Error::TooManyArguments);
            }
            return Ok(Self::Answer(choice));
        }

        let parsed = match command.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "categories" => Self::Categories,
            "restart" => Self::Restart,
            "quit" | "exit" => Self::Quit,
            "start" => {
                let amount = words.next().map(|amount| amount.parse().map_err(|_| Error::InvalidAmount)).transpose()?;
                let category = match words.next() {
                    Some(category) => category.parse().map_err(|_| Error::InvalidCategory)?,
                    None => CategoryFilter::Any,
                };
                let difficulty = match words.next() {
                    Some(any) if any.eq_ignore_ascii_case("any") => None,
                    Some(difficulty) => Some(difficulty.parse().map_err(|_| Error::InvalidDifficulty)?),
                    None => None,
                };
                Self::Start { amount, category, difficulty }
            }
            _ => return Err(Error::UnknownCommand),
        };

        if words.next().is_some() {
            return Err(Error::TooManyArguments);
        }
        Ok(parsed)
    }
}

/// Lists the categories with the "any" option first.
pub fn render_categories(categories: &[Category]) -> String {
    let mut text = String::from("  any  Any Category\n");
    for Category { id, name } in categories {
        // Writing into a `String` never fails.
        let _ = writeln!(text, "{id:>5}  {}", decode(name));
    }
    text
}

fn render_question(session: &QuizSession, question: &PresentedQuestion) -> String {
    let (answered, total) = session.progress();
    let mut text = format!(
        "Question {} of {total}\nCategory: {} ({})\n\n{}\n",
        answered + 1,
        question.category(),
        question.difficulty(),
        question.text(),
    );
    for (i, answer) in question.answers().iter().enumerate() {
        let _ = writeln!(text, "  {}) {answer}", i + 1);
    }
    let _ = write!(text, "\nScore: {}", session.score());
    text
}

fn render_summary(session: &QuizSession) -> String {
    let summary = session.summary();
    format!(
        "Quiz Complete!\nYour Final Score: {} / {}\n{}%\n{}\nType `start` for a new quiz.",
        summary.score,
        summary.total,
        summary.percentage(),
        summary.tier(),
    )
}

/// Describes whatever the machine currently shows the user.
pub fn render(machine: &QuizMachine) -> String {
    match machine.phase() {
        Phase::Idle => String::from("Type `start [amount] [category] [difficulty]` to begin or `help` for all commands."),
        Phase::Loading => String::from("Loading quiz questions..."),
        Phase::Ready => match machine.session().and_then(|session| Some((session, session.current()?))) {
            Some((session, question)) => render_question(session, question),
            None => String::from("No question is waiting for an answer."),
        },
        Phase::Finished => machine.session().map(render_summary).unwrap_or_default(),
        Phase::Failed => match machine.failure() {
            Some(err) => format!("Error! {err}\nType `restart` to try a new quiz."),
            None => String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Question, QuestionKind, QuizParameters};

    #[test]
    fn parses_start_with_defaults() {
        assert_eq!(
            "start".parse(),
            Ok(Command::Start { amount: None, category: CategoryFilter::Any, difficulty: None })
        );
        assert_eq!(
            "start 15 any any".parse(),
            Ok(Command::Start { amount: Some(15), category: CategoryFilter::Any, difficulty: None })
        );
        assert_eq!(
            "  START 5 9 Hard ".parse(),
            Ok(Command::Start {
                amount: Some(5),
                category: CategoryFilter::Only(9),
                difficulty: Some(Difficulty::Hard)
            })
        );
    }

    #[test]
    fn rejects_bad_start_arguments() {
        assert_eq!("start ten".parse::<Command>(), Err(Error::InvalidAmount));
        assert_eq!("start 10 science".parse::<Command>(), Err(Error::InvalidCategory));
        assert_eq!("start 10 any expert".parse::<Command>(), Err(Error::InvalidDifficulty));
        assert_eq!("start 10 any easy now".parse::<Command>(), Err(Error::TooManyArguments));
    }

    #[test]
    fn parses_answers_as_one_based() {
        assert_eq!("1".parse(), Ok(Command::Answer(0)));
        assert_eq!("4".parse(), Ok(Command::Answer(3)));
        assert_eq!("0".parse::<Command>(), Err(Error::UnknownChoice));
        assert_eq!("1 extra".parse::<Command>(), Err(Error::TooManyArguments));
        assert_eq!(" 2 ".parse(), Ok(Command::Answer(1)));
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!("restart".parse(), Ok(Command::Restart));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("categories".parse(), Ok(Command::Categories));
        assert_eq!("".parse::<Command>(), Err(Error::Empty));
        assert_eq!("jump".parse::<Command>(), Err(Error::UnknownCommand));
    }

    #[test]
    fn lists_any_category_first() {
        let categories = [Category { id: 31, name: String::from("Anime &amp; Manga") }];
        let text = render_categories(&categories);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("  any  Any Category"));
        assert_eq!(lines.next(), Some("   31  Anime & Manga"));
    }

    #[test]
    fn renders_each_phase() {
        let mut machine: QuizMachine = QuizMachine::default();
        assert!(render(&machine).contains("start"));

        let params = QuizParameters::new(1, CategoryFilter::Any, Some(Difficulty::Easy)).unwrap();
        let ticket = machine.start(params);
        assert_eq!(render(&machine), "Loading quiz questions...");

        let question = Question {
            category: String::from("Geography"),
            kind: QuestionKind::Multiple,
            difficulty: Difficulty::Easy,
            question: String::from("Which is the largest ocean?"),
            correct_answer: String::from("Pacific"),
            incorrect_answers: vec![String::from("Atlantic"), String::from("Indian"), String::from("Arctic")],
        };
        machine.resolve(ticket, Ok(vec![question]));
        let text = render(&machine);
        assert!(text.starts_with("Question 1 of 1\nCategory: Geography (easy)"));
        assert!(text.contains("  4) "));
        assert!(text.ends_with("Score: 0"));

        machine.submit_answer(0, "Pacific");
        let text = render(&machine);
        assert!(text.contains("Your Final Score: 1 / 1\n100%"));
        assert!(text.contains("trivia master"));

        let ticket = machine.start(params);
        machine.resolve(ticket, Err(api::Error::RateLimited));
        assert!(render(&machine).starts_with("Error! The question bank is busy."));
    }
}
