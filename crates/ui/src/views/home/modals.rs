use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{HomeVm, controller};

#[component]
pub fn NewWordsModal(vm: Signal<HomeVm>) -> Element {
    let Some(words) = vm.read().new_words.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| controller::dismiss_new_words(&vm),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "New words added" }
                ul { class: "modal-list",
                    for word in words {
                        li { key: "{word}", "{word}" }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| controller::dismiss_new_words(&vm),
                        "OK"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResetStatsModal(vm: Signal<HomeVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();
    let resolve = use_callback(move |confirmed: bool| {
        let api = api.clone();
        spawn(async move {
            controller::resolve_reset_stats(&vm, api.as_ref(), confirmed).await;
        });
    });
    if !vm.read().confirm_reset {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| resolve.call(false),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Reset all stats?" }
                p { class: "modal-body", "Hit and miss counts for every word go back to zero." }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resolve.call(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| resolve.call(true),
                        "Reset"
                    }
                }
            }
        }
    }
}
