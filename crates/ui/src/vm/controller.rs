//! User actions on the home page.
//!
//! Each action reads and writes `HomeVm` through a `VmCell` in short
//! synchronous sections and never holds the state across an await. Replies to
//! `load_words` and to batch acquisition carry a ticket; a reply whose ticket
//! is no longer current is dropped. The other backend actions hold the session
//! ticket, so nothing lands on the page after logout.

use std::cell::RefCell;

use dioxus::prelude::*;

use caligula_core::check_answer;
use caligula_core::model::{PracticeItem, PracticeSpec, Tense, pair_sentences};
use services::{
    ApiError, AuthService, GenerateRequest, GenerationTrace, PracticeApi, ensure_seed_words,
};

use crate::views::{NO_NEW_WORDS, NO_TENSE_SELECTED, ViewError};
use crate::vm::{AnswerStatus, HomeVm};

/// Shared access to the page state.
pub trait VmCell {
    fn update<R>(&self, f: impl FnOnce(&mut HomeVm) -> R) -> R;
    fn read_with<R>(&self, f: impl FnOnce(&HomeVm) -> R) -> R;
}

impl VmCell for Signal<HomeVm> {
    fn update<R>(&self, f: impl FnOnce(&mut HomeVm) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&HomeVm) -> R) -> R {
        self.with_peek(f)
    }
}

impl VmCell for RefCell<HomeVm> {
    fn update<R>(&self, f: impl FnOnce(&mut HomeVm) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&HomeVm) -> R) -> R {
        f(&self.borrow())
    }
}

/// Startup: pick up a persisted session and load its words.
pub async fn restore(vm: &impl VmCell, api: &dyn PracticeApi, auth: &AuthService) {
    let user = auth.restore().await;
    let logged_in = user.is_some();
    vm.update(|state| state.user = user);
    if logged_in {
        load_words(vm, api).await;
    }
}

/// Dev-login, seed an empty word list, then load it.
pub async fn login(vm: &impl VmCell, api: &dyn PracticeApi, auth: &AuthService, username: &str) {
    vm.update(|state| state.error = None);
    match auth.login(username).await {
        Ok(user) => {
            vm.update(|state| state.user = Some(user));
            if let Err(err) = ensure_seed_words(api).await {
                tracing::warn!(error = %err, "seeding words failed");
            }
            load_words(vm, api).await;
        }
        Err(err) => {
            tracing::warn!(username, error = %err, "login failed");
            vm.update(|state| state.error = Some(ViewError::from(err)));
        }
    }
}

pub async fn logout(vm: &impl VmCell, auth: &AuthService) {
    if let Err(err) = auth.logout().await {
        tracing::warn!(error = %err, "failed to clear stored session");
    }
    vm.update(HomeVm::clear_session);
}

/// Replace the cached word list.
pub async fn load_words(vm: &impl VmCell, api: &dyn PracticeApi) {
    let ticket = vm.update(|state| {
        state.loading_words = true;
        state.tickets.words.issue()
    });
    let result = api.list_words().await;
    vm.update(|state| {
        if !state.tickets.words.is_current(ticket) {
            tracing::debug!("dropping stale word list");
            return;
        }
        state.loading_words = false;
        match result {
            Ok(words) => state.words = words,
            Err(err) => state.error = Some(ViewError::from(err)),
        }
    });
}

struct Batch {
    items: Vec<PracticeItem>,
    trace: GenerationTrace,
}

/// Fetch specs for the selected tenses, generate their sentences and replace
/// the queue. Failures leave the queue as it was.
pub async fn fetch_next_batch(vm: &impl VmCell, api: &dyn PracticeApi) {
    let tenses = vm.read_with(|state| state.selected_tenses.clone());
    if tenses.is_empty() {
        vm.update(|state| state.error = Some(ViewError::Validation(NO_TENSE_SELECTED)));
        return;
    }

    let ticket = vm.update(|state| {
        state.error = None;
        state.loading_batch = true;
        state.tickets.batch.issue()
    });
    let result = acquire_batch(api, &tenses).await;
    vm.update(|state| {
        if !state.tickets.batch.is_current(ticket) {
            tracing::debug!("dropping stale batch");
            return;
        }
        state.loading_batch = false;
        match result {
            Ok(batch) => install_batch(state, batch),
            Err(err) => {
                state.trace = None;
                state.error = Some(ViewError::from(err));
            }
        }
    });
}

async fn acquire_batch(api: &dyn PracticeApi, tenses: &[Tense]) -> Result<Batch, ApiError> {
    let specs = api.batch_specs(tenses).await?;
    let request = GenerateRequest::Batch {
        specs: specs.clone(),
    };
    let response = api.generate(&request).await?;
    let pairing = pair_sentences(&specs, response.sentences());
    for id in &pairing.unmatched {
        tracing::warn!(spec_id = %id, "generated sentence has no matching spec");
    }
    tracing::info!(items = pairing.items.len(), "batch ready");
    Ok(Batch {
        items: pairing.items,
        trace: response.trace(),
    })
}

/// Single-item flow: one spec from `next-spec`, one sentence for it.
pub async fn practice_one(vm: &impl VmCell, api: &dyn PracticeApi) {
    let ticket = vm.update(|state| {
        state.error = None;
        state.loading_batch = true;
        state.tickets.batch.issue()
    });
    let result = acquire_one(api).await;
    vm.update(|state| {
        if !state.tickets.batch.is_current(ticket) {
            tracing::debug!("dropping stale single item");
            return;
        }
        state.loading_batch = false;
        match result {
            Ok(batch) => install_batch(state, batch),
            Err(err) => {
                state.trace = None;
                state.error = Some(ViewError::from(err));
            }
        }
    });
}

async fn acquire_one(api: &dyn PracticeApi) -> Result<Batch, ApiError> {
    let spec: PracticeSpec = api.next_spec().await?;
    let request = GenerateRequest::Single { spec: spec.clone() };
    let response = api.generate(&request).await?;
    let items = response
        .single_sentence()
        .map(|(it, en)| PracticeItem::new(spec, it, en))
        .into_iter()
        .collect();
    Ok(Batch {
        items,
        trace: response.trace(),
    })
}

fn install_batch(state: &mut HomeVm, batch: Batch) {
    state.queue.replace(batch.items);
    state.trace = Some(batch.trace);
    state.status = AnswerStatus::Idle;
    state.input.clear();
}

/// Enter / the check button.
///
/// While idle this grades the input, reports the outcome and refreshes the
/// word list. After grading it moves on to the next item.
pub async fn submit(vm: &impl VmCell, api: &dyn PracticeApi) {
    let graded = vm.update(|state| match state.status {
        AnswerStatus::Idle => {
            let session = state.tickets.session.current();
            let item = state.queue.head()?;
            let verdict = check_answer(&state.input, &item.it);
            let spec = item.spec.clone();
            state.status = if verdict.is_correct() {
                AnswerStatus::Correct
            } else {
                AnswerStatus::Incorrect
            };
            Some((session, spec, verdict.is_correct()))
        }
        AnswerStatus::Correct | AnswerStatus::Incorrect => {
            state.queue.advance();
            state.input.clear();
            state.status = AnswerStatus::Idle;
            None
        }
    });

    let Some((session, spec, correct)) = graded else {
        return;
    };
    let result = api.score(&spec.id, spec.tense, correct).await;
    let current = vm.update(|state| {
        if !state.tickets.session.is_current(session) {
            tracing::debug!("dropping score reply from an ended session");
            return false;
        }
        if let Err(err) = result {
            tracing::warn!(spec_id = %spec.id, error = %err, "score request failed");
            state.error = Some(ViewError::from(err));
        }
        true
    });
    if current {
        load_words(vm, api).await;
    }
}

/// Ask the backend to add fresh words to the list.
pub async fn add_words(vm: &impl VmCell, api: &dyn PracticeApi) {
    let session = vm.update(|state| {
        if state.adding_words {
            return None;
        }
        state.adding_words = true;
        state.error = None;
        Some(state.tickets.session.current())
    });
    let Some(session) = session else {
        return;
    };

    let result = api.add_new_words().await;
    let added_any = vm.update(|state| {
        if !state.tickets.session.is_current(session) {
            tracing::debug!("dropping new words from an ended session");
            return false;
        }
        state.adding_words = false;
        match result {
            Ok(response) => {
                let words = response.into_new_words();
                if words.is_empty() {
                    state.error = Some(ViewError::Empty(NO_NEW_WORDS));
                    false
                } else {
                    state.new_words = Some(words);
                    true
                }
            }
            Err(err) => {
                state.error = Some(ViewError::from(err));
                false
            }
        }
    });
    if added_any {
        load_words(vm, api).await;
    }
}

/// Open the reset confirmation.
pub fn request_reset_stats(vm: &impl VmCell) {
    vm.update(|state| state.confirm_reset = true);
}

/// Close the reset confirmation. Only a confirmed reset talks to the backend.
pub async fn resolve_reset_stats(vm: &impl VmCell, api: &dyn PracticeApi, confirmed: bool) {
    let session = vm.update(|state| {
        state.confirm_reset = false;
        if confirmed {
            state.resetting = true;
            state.error = None;
        }
        state.tickets.session.current()
    });
    if !confirmed {
        return;
    }

    let result = api.reset_stats().await;
    let current = vm.update(|state| {
        if !state.tickets.session.is_current(session) {
            tracing::debug!("dropping reset reply from an ended session");
            return false;
        }
        state.resetting = false;
        if let Err(err) = result {
            state.error = Some(ViewError::from(err));
        }
        true
    });
    if current {
        load_words(vm, api).await;
    }
}

pub fn toggle_tense(vm: &impl VmCell, tense: Tense) {
    vm.update(|state| {
        if let Some(pos) = state.selected_tenses.iter().position(|t| *t == tense) {
            state.selected_tenses.remove(pos);
        } else {
            state.selected_tenses.push(tense);
            state.selected_tenses.sort();
        }
    });
}

pub fn dismiss_new_words(vm: &impl VmCell) {
    vm.update(|state| state.new_words = None);
}

/// Typing is ignored once the answer has been graded.
pub fn set_input(vm: &impl VmCell, value: String) {
    vm.update(|state| {
        if !state.input_locked() {
            state.input = value;
        }
    });
}
