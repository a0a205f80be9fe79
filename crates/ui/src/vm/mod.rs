pub mod controller;
mod home_vm;
mod practice_vm;
mod time_fmt;
mod word_vm;

pub use home_vm::{AnswerStatus, HomeVm, Sequence, Ticket, Tickets};
pub use practice_vm::{PracticeCardVm, map_practice_card};
pub use time_fmt::format_datetime;
pub use word_vm::{WordRowVm, map_word_rows};
