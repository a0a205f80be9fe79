use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AuthService, PracticeApi};
use storage::AuthStore;

use crate::context::{UiApp, build_app_context};
use crate::test_support::{FakeApi, auth_service};
use crate::views::HomeView;

#[derive(Clone)]
struct TestApp {
    api: Arc<FakeApi>,
    auth: Arc<AuthService>,
}

impl UiApp for TestApp {
    fn api(&self) -> Arc<dyn PracticeApi> {
        self.api.clone()
    }

    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn dev_users(&self) -> Vec<String> {
        vec!["zack".to_string(), "mary".to_string()]
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HomeHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { HomeView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeApi>,
    pub store: AuthStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Builds the home page over `api`. Seed the store before `rebuild` to start
/// logged in.
pub fn setup_view_harness(api: FakeApi) -> ViewHarness {
    let api = Arc::new(api);
    let (auth, store) = auth_service(Arc::clone(&api));
    let app = Arc::new(TestApp {
        api: Arc::clone(&api),
        auth: Arc::new(auth),
    });
    let dom = VirtualDom::new_with_props(HomeHarness, ViewHarnessProps { app });
    ViewHarness { dom, api, store }
}
