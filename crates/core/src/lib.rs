#![forbid(unsafe_code)]

pub mod answer;
pub mod error;
pub mod model;
pub mod queue;

pub use answer::{AnswerVerdict, check_answer, normalize_answer};
pub use error::ModelError;
pub use queue::PracticeQueue;
