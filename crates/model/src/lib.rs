#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod params;
pub mod quiz;

pub use params::{CategoryFilter, QuizParameters};
pub use quiz::{Category, CategoryList, Difficulty, Question, QuestionBatch, QuestionKind};
