use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::HomeVm;
use crate::vm::controller;

mod modals;
mod practice;
mod words;

use modals::{NewWordsModal, ResetStatsModal};
use practice::{PracticeSection, TracePanel};
use words::WordsSection;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(HomeVm::default);

    let restore_api = ctx.api();
    let restore_auth = ctx.auth();
    use_future(move || {
        let api = restore_api.clone();
        let auth = restore_auth.clone();
        async move {
            controller::restore(&vm, api.as_ref(), &auth).await;
        }
    });

    let (error, username) = {
        let state = vm.read();
        (
            state.error.clone(),
            state.user.as_ref().map(|user| user.username.clone()),
        )
    };

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h1 { class: "view-title", "Caligula" }
                SessionBar { vm, username: username.clone() }
            }
            if let Some(err) = error {
                div {
                    class: if err.is_hint() { "view-hint" } else { "view-error" },
                    "{err.message()}"
                }
            }
            if username.is_none() {
                p { class: "view-subtitle",
                    "Choose a user to log in (dev mode, no password). The session is kept between launches."
                }
            } else {
                WordsSection { vm }
                PracticeSection { vm }
                TracePanel { vm }
            }
            NewWordsModal { vm }
            ResetStatsModal { vm }
        }
    }
}

#[component]
fn SessionBar(vm: Signal<HomeVm>, username: Option<String>) -> Element {
    let ctx = use_context::<AppContext>();

    if let Some(username) = username {
        let auth = ctx.auth();
        let logout = move |_: MouseEvent| {
            let auth = auth.clone();
            spawn(async move {
                controller::logout(&vm, &auth).await;
            });
        };
        return rsx! {
            div { class: "session-bar",
                span { class: "session-user", "Logged in as " b { "{username}" } }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: logout,
                    "Logout"
                }
            }
        };
    }

    let login_buttons = ctx.dev_users().iter().map(|name| {
        let label = name.clone();
        let name = name.clone();
        let api = ctx.api();
        let auth = ctx.auth();
        rsx! {
            button {
                key: "{label}",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let api = api.clone();
                    let auth = auth.clone();
                    let name = name.clone();
                    spawn(async move {
                        controller::login(&vm, api.as_ref(), &auth, &name).await;
                    });
                },
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "session-bar", {login_buttons} }
    }
}
