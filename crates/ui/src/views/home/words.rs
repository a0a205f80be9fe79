use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{HomeVm, controller, map_word_rows};

#[component]
pub fn WordsSection(vm: Signal<HomeVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let (rows, loading, adding, resetting) = {
        let state = vm.read();
        (
            map_word_rows(&state.words),
            state.loading_words,
            state.adding_words,
            state.resetting,
        )
    };

    let refresh_api = ctx.api();
    let refresh = move |_: MouseEvent| {
        let api = refresh_api.clone();
        spawn(async move {
            controller::load_words(&vm, api.as_ref()).await;
        });
    };
    let add_api = ctx.api();
    let add = move |_: MouseEvent| {
        let api = add_api.clone();
        spawn(async move {
            controller::add_words(&vm, api.as_ref()).await;
        });
    };

    rsx! {
        section { class: "words",
            div { class: "section-header",
                h2 { class: "section-title", "Your Words" }
                div { class: "section-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: loading,
                        onclick: refresh,
                        "Refresh"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: adding,
                        onclick: add,
                        if adding { "Adding..." } else { "Add new words" }
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        disabled: resetting,
                        onclick: move |_| controller::request_reset_stats(&vm),
                        if resetting { "Resetting..." } else { "Reset stats" }
                    }
                }
            }
            ul { class: "word-list",
                if rows.is_empty() {
                    li { class: "word-empty", "No words yet." }
                }
                for row in rows {
                    li { key: "{row.id}", class: "word-row",
                        div { class: "word-main",
                            span { class: "word-text", "{row.text}" }
                            span { class: "word-pos", " ({row.pos_label})" }
                            div { class: "word-stats", "{row.totals_label}" }
                            if !row.tense_labels.is_empty() {
                                div { class: "word-tenses",
                                    for label in row.tense_labels.iter() {
                                        span { class: "word-tense", "{label}" }
                                    }
                                }
                            }
                        }
                        div { class: "word-created", "{row.created_label}" }
                    }
                }
            }
        }
    }
}
