use dioxus::prelude::*;

use caligula_core::model::Tense;

use crate::context::AppContext;
use crate::vm::{AnswerStatus, HomeVm, controller, map_practice_card};

#[component]
pub fn PracticeSection(vm: Signal<HomeVm>) -> Element {
    let ctx = use_context::<AppContext>();

    let submit_api = ctx.api();
    let submit = use_callback(move |()| {
        let api = submit_api.clone();
        spawn(async move {
            controller::submit(&vm, api.as_ref()).await;
        });
    });
    let batch_api = ctx.api();
    let start_batch = use_callback(move |()| {
        let api = batch_api.clone();
        spawn(async move {
            controller::fetch_next_batch(&vm, api.as_ref()).await;
        });
    });
    let single_api = ctx.api();
    let start_single = use_callback(move |()| {
        let api = single_api.clone();
        spawn(async move {
            controller::practice_one(&vm, api.as_ref()).await;
        });
    });

    let (card, input, status, loading, selected) = {
        let state = vm.read();
        (
            map_practice_card(&state),
            state.input.clone(),
            state.status,
            state.loading_batch,
            state.selected_tenses.clone(),
        )
    };

    let Some(card) = card else {
        return rsx! {
            section { class: "practice practice--config",
                h2 { class: "section-title", "Practice" }
                div { class: "tense-filters",
                    for tense in Tense::ALL {
                        label { key: "{tense.as_str()}", class: "tense-filter",
                            input {
                                r#type: "checkbox",
                                checked: selected.contains(&tense),
                                onchange: move |_| controller::toggle_tense(&vm, tense),
                            }
                            " {tense.label()}"
                        }
                    }
                }
                div { class: "section-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| start_batch.call(()),
                        if loading { "Loading..." } else { "Start practice" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| start_single.call(()),
                        "Single prompt (dev)"
                    }
                }
            }
        };
    };

    let feedback_class = match status {
        AnswerStatus::Correct => "practice-feedback practice-feedback--correct",
        AnswerStatus::Incorrect => "practice-feedback practice-feedback--incorrect",
        AnswerStatus::Idle => "practice-feedback",
    };

    rsx! {
        section { class: "practice practice--active",
            div { class: "section-header",
                h2 { class: "section-title", "Practice" }
                span { class: "practice-remaining", "{card.remaining_label}" }
            }
            p { class: "practice-cue", "{card.cue}" }
            p { class: "practice-prompt", "{card.prompt}" }
            input {
                class: "practice-input",
                r#type: "text",
                placeholder: "Type the Italian sentence",
                autofocus: true,
                value: "{input}",
                readonly: card.locked,
                oninput: move |evt: FormEvent| controller::set_input(&vm, evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit.call(());
                    }
                },
            }
            if let Some(feedback) = card.feedback.as_ref() {
                p { class: "{feedback_class}", "{feedback}" }
            }
            div { class: "section-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| submit.call(()),
                    "{card.action_label}"
                }
            }
        }
    }
}

/// Collapsible view of what the backend sent to the model and got back.
#[component]
pub fn TracePanel(vm: Signal<HomeVm>) -> Element {
    let trace = vm.read().trace.clone().unwrap_or_default();
    let sent = if trace.sent.is_empty() { "-".to_string() } else { trace.sent };
    let received = if trace.received.is_empty() {
        "-".to_string()
    } else {
        trace.received
    };

    rsx! {
        details { class: "trace-panel",
            summary { "Generation trace (dev)" }
            div { class: "trace-grid",
                div { class: "trace-box",
                    div { class: "trace-label", "Request we sent" }
                    pre { class: "trace-body", "{sent}" }
                }
                div { class: "trace-box",
                    div { class: "trace-label", "Response we got" }
                    pre { class: "trace-body", "{received}" }
                }
            }
        }
    }
}
