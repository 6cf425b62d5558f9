mod config;
mod console;
mod error;

use api::{HyperTransport, QuestionSource};
use config::Config;
use console::Command;
use model::{Category, QuizParameters};
use session::{Outcome, QuizMachine};
use std::sync::Arc;
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    runtime::Builder,
    sync::mpsc,
};

type Source = Arc<QuestionSource<HyperTransport>>;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_env()?;

    // Everything runs on one thread; fetches only suspend, they never block input.
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let transport = HyperTransport::new()?;
    let source: Source = Arc::new(QuestionSource::new(transport, &config.api_url)?);
    log::info!("Using question bank at {}.", config.api_url);

    let mut machine: QuizMachine = QuizMachine::default();
    let mut categories = Vec::new();
    let mut categories_loading = true;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let (category_tx, mut category_rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(io::stdin()).lines();

    println!("The Ultimate Trivia Quiz!\n");
    spawn_category_fetch(&source, &category_tx);
    println!("{}", console::render(&machine));

    loop {
        tokio::select! {
            Some((ticket, result)) = rx.recv() => {
                if machine.resolve(ticket, result) {
                    println!("{}", console::render(&machine));
                }
            }
            Some(result) = category_rx.recv() => {
                categories_loading = false;
                match result {
                    Ok(fetched) => categories = fetched,
                    Err(err) => println!("Error loading categories: {err} Type `categories` to try again."),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => println!("{}", console::HELP),
                    Command::Categories => {
                        if !categories.is_empty() {
                            print!("{}", console::render_categories(&categories));
                        } else if categories_loading {
                            println!("Categories are still loading.");
                        } else {
                            categories_loading = true;
                            spawn_category_fetch(&source, &category_tx);
                            println!("Loading categories. Type `categories` again in a moment.");
                        }
                    }
                    Command::Restart => {
                        machine.restart();
                        println!("{}", console::render(&machine));
                    }
                    Command::Start { amount, category, difficulty } => {
                        let amount = amount.unwrap_or(config.amount);
                        let Some(params) = QuizParameters::new(amount, category, difficulty) else {
                            println!("{}", error::Error::InvalidAmount);
                            continue;
                        };

                        let ticket = machine.start(params);
                        let source = Arc::clone(&source);
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let result = source.fetch_questions(&params).await;
                            // The receiver outlives every fetch, so this cannot fail.
                            let _ = tx.send((ticket, result));
                        });
                        println!("{}", console::render(&machine));
                    }
                    Command::Answer(choice) => {
                        answer(&mut machine, choice);
                        println!("{}", console::render(&machine));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Runs the category request in the background so input stays responsive.
fn spawn_category_fetch(source: &Source, tx: &mpsc::UnboundedSender<api::Result<Vec<Category>>>) {
    let source = Arc::clone(source);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source.fetch_categories().await;
        let _ = tx.send(result);
    });
}

fn answer(machine: &mut QuizMachine, choice: usize) {
    let Some(session) = machine.session() else {
        println!("No question is waiting for an answer.");
        return;
    };
    let index = session.current_index();
    let Some(question) = session.current() else {
        println!("The quiz is already over.");
        return;
    };
    let Some(selected) = question.answers().get(choice).map(|answer| answer.to_string()) else {
        println!("{}", error::Error::UnknownChoice);
        return;
    };
    let correct = question.correct_answer().to_owned();

    match machine.submit_answer(index, &selected) {
        Outcome::Correct => println!("Correct!\n"),
        Outcome::Incorrect => println!("Wrong! The answer was {correct}.\n"),
        Outcome::Ignored => {}
    }
}
