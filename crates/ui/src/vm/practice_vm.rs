use crate::vm::{AnswerStatus, HomeVm};

/// What the practice card shows for the queue head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeCardVm {
    pub prompt: String,
    pub cue: String,
    pub remaining_label: String,
    pub feedback: Option<String>,
    pub action_label: &'static str,
    pub locked: bool,
}

/// `None` while configuring a batch.
#[must_use]
pub fn map_practice_card(vm: &HomeVm) -> Option<PracticeCardVm> {
    let item = vm.current_item()?;
    let spec = &item.spec;

    let mut cue = vec![spec.lemma.clone()];
    if let Some(person) = spec.person {
        cue.push(person.pronoun().to_string());
    }
    if let Some(tense) = spec.tense {
        cue.push(tense.label().to_string());
    }

    let feedback = match vm.status {
        AnswerStatus::Idle => None,
        AnswerStatus::Correct => Some("Correct!".to_string()),
        AnswerStatus::Incorrect => Some(format!("Expected: {}", item.it)),
    };
    let remaining = vm.queue.len();
    let remaining_label = if remaining == 1 {
        "Last item".to_string()
    } else {
        format!("{remaining} left")
    };

    Some(PracticeCardVm {
        prompt: item.en.clone(),
        cue: cue.join(" · "),
        remaining_label,
        feedback,
        action_label: if vm.input_locked() { "Next" } else { "Check" },
        locked: vm.input_locked(),
    })
}
