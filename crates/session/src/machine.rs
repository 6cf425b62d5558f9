use crate::session::{Outcome, QuizSession};
use model::{Question, QuizParameters};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Identifies one fetch. Only the ticket of the most recent fetch is honored
/// when results come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Coarse state tag for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to pick quiz parameters.
    Idle,
    Loading,
    Ready,
    Finished,
    Failed,
}

enum State {
    Idle,
    Loading(QuizParameters),
    Ready(QuizSession),
    Finished(QuizSession),
    Failed(api::Error),
}

/// Owns the quiz lifecycle. Fetching happens outside the machine: the host
/// calls [`QuizMachine::start`], runs the fetch, and hands the result to
/// [`QuizMachine::resolve`] together with the ticket it was given.
pub struct QuizMachine<R = StdRng> {
    state: State,
    generation: u64,
    rng: R,
}

impl Default for QuizMachine {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> QuizMachine<R> {
    pub fn new(rng: R) -> Self {
        Self { state: State::Idle, generation: 0, rng }
    }

    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Loading(_) => Phase::Loading,
            State::Ready(_) => Phase::Ready,
            State::Finished(_) => Phase::Finished,
            State::Failed(_) => Phase::Failed,
        }
    }

    /// The active or finished session.
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            State::Ready(session) | State::Finished(session) => Some(session),
            _ => None,
        }
    }

    /// Parameters of the fetch in flight.
    pub fn pending(&self) -> Option<&QuizParameters> {
        if let State::Loading(params) = &self.state {
            Some(params)
        } else {
            None
        }
    }

    pub fn failure(&self) -> Option<api::Error> {
        if let State::Failed(err) = self.state {
            Some(err)
        } else {
            None
        }
    }

    /// Begins loading a new quiz. Any fetch still in flight is superseded and
    /// its result will be discarded.
    pub fn start(&mut self, params: QuizParameters) -> Ticket {
        self.generation += 1;
        self.state = State::Loading(params);
        log::debug!("Starting fetch #{} for {} questions.", self.generation, params.amount);
        Ticket(self.generation)
    }

    /// Applies the outcome of a fetch. Returns `false` if the ticket is stale
    /// or no fetch is pending, in which case nothing changes.
    pub fn resolve(&mut self, ticket: Ticket, result: api::Result<Vec<Question>>) -> bool {
        if ticket.0 != self.generation || !matches!(self.state, State::Loading(_)) {
            log::debug!("Discarding stale response for fetch #{}.", ticket.0);
            return false;
        }

        self.state = match result {
            Ok(questions) => {
                let session = QuizSession::new(questions, &mut self.rng);
                if session.is_finished() {
                    State::Finished(session)
                } else {
                    State::Ready(session)
                }
            }
            Err(err) => {
                log::error!("Quiz could not be loaded: {err}");
                State::Failed(err)
            }
        };
        true
    }

    /// Answers the question at `index`. Outside the ready state this is a no-op.
    pub fn submit_answer(&mut self, index: usize, answer: &str) -> Outcome {
        let State::Ready(session) = &mut self.state else {
            return Outcome::Ignored;
        };

        let outcome = session.submit_answer(index, answer);
        if session.is_finished() {
            if let State::Ready(session) = core::mem::replace(&mut self.state, State::Idle) {
                log::info!("Quiz finished with {} of {} correct.", session.score(), session.total());
                self.state = State::Finished(session);
            }
        }
        outcome
    }

    /// Discards the current session and invalidates any fetch in flight.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.state = State::Idle;
    }
}
