mod machine;
mod question;
mod session;
mod summary;

pub use machine::{Phase, QuizMachine, Ticket};
pub use question::{decode, PresentedQuestion};
pub use session::{Outcome, QuizSession};
pub use summary::{Summary, Tier};
