use caligula_core::PracticeQueue;
use caligula_core::model::{PracticeItem, Tense, User, Word};
use services::GenerationTrace;

use crate::views::ViewError;

/// Where the active item is in its answer cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnswerStatus {
    #[default]
    Idle,
    Correct,
    Incorrect,
}

/// Identifies one request of a given kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out tickets; only the most recent one is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    current: u64,
}

impl Sequence {
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// The latest ticket, without issuing a new one.
    #[must_use]
    pub fn current(&self) -> Ticket {
        Ticket(self.current)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current == ticket.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tickets {
    pub words: Sequence,
    pub batch: Sequence,
    /// Advanced on logout; fences replies that outlive the session.
    pub session: Sequence,
}

/// Everything the home page shows.
///
/// Only the controller functions mutate it, and only between awaits.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeVm {
    pub user: Option<User>,
    pub words: Vec<Word>,
    pub queue: PracticeQueue,
    pub input: String,
    pub status: AnswerStatus,
    pub selected_tenses: Vec<Tense>,
    pub loading_words: bool,
    pub loading_batch: bool,
    pub adding_words: bool,
    pub resetting: bool,
    pub confirm_reset: bool,
    /// Words reported by the last successful add; `Some` shows the modal.
    pub new_words: Option<Vec<String>>,
    pub error: Option<ViewError>,
    pub trace: Option<GenerationTrace>,
    pub tickets: Tickets,
}

impl Default for HomeVm {
    fn default() -> Self {
        Self {
            user: None,
            words: Vec::new(),
            queue: PracticeQueue::new(),
            input: String::new(),
            status: AnswerStatus::Idle,
            selected_tenses: vec![Tense::Presente],
            loading_words: false,
            loading_batch: false,
            adding_words: false,
            resetting: false,
            confirm_reset: false,
            new_words: None,
            error: None,
            trace: None,
            tickets: Tickets::default(),
        }
    }
}

impl HomeVm {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&PracticeItem> {
        self.queue.head()
    }

    /// No active item: the tense filters and start button are shown.
    #[must_use]
    pub fn is_configuring(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.status != AnswerStatus::Idle
    }

    #[must_use]
    pub fn has_tense(&self, tense: Tense) -> bool {
        self.selected_tenses.contains(&tense)
    }

    /// Back to the logged-out page. Outstanding tickets are invalidated so
    /// late replies for the old session are dropped.
    pub fn clear_session(&mut self) {
        let mut tickets = self.tickets;
        tickets.words.issue();
        tickets.batch.issue();
        tickets.session.issue();
        *self = Self {
            tickets,
            ..Self::default()
        };
    }
}
