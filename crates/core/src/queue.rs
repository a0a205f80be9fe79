use std::collections::VecDeque;

use crate::model::PracticeItem;

/// FIFO of practice items. The head is the item currently being answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeQueue {
    items: VecDeque<PracticeItem>,
}

impl PracticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops whatever was queued and installs a new batch.
    pub fn replace(&mut self, items: impl IntoIterator<Item = PracticeItem>) {
        self.items = items.into_iter().collect();
    }

    #[must_use]
    pub fn head(&self) -> Option<&PracticeItem> {
        self.items.front()
    }

    /// Removes the head and returns it.
    pub fn advance(&mut self) -> Option<PracticeItem> {
        self.items.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<PracticeItem> for PracticeQueue {
    fn from_iter<T: IntoIterator<Item = PracticeItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
