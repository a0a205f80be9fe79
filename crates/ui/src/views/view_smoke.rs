use caligula_core::model::{User, UserId};

use super::test_harness::setup_view_harness;
use crate::test_support::{Call, FakeApi, word};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_offers_dev_logins() {
    let mut harness = setup_view_harness(FakeApi::default());
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Caligula"), "missing title in {html}");
    assert!(html.contains("zack"), "missing zack login in {html}");
    assert!(html.contains("mary"), "missing mary login in {html}");
    assert!(html.contains("Choose a user"), "missing login hint in {html}");
    assert!(harness.api.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_restores_session_and_lists_words() {
    let api = FakeApi::default();
    api.set_words(vec![word(1, "andare"), word(2, "fare")]);
    let mut harness = setup_view_harness(api);
    harness
        .store
        .set_auth("tok", &User::new(UserId::new(1), "zack"))
        .await
        .expect("store session");

    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("Logged in as"), "missing session bar in {html}");
    assert!(html.contains("Your Words"), "missing word list in {html}");
    assert!(html.contains("andare"), "missing word in {html}");
    assert!(html.contains("Start practice"), "missing config state in {html}");
    assert!(html.contains("Passato prossimo"), "missing tense filter in {html}");
    assert_eq!(harness.api.calls(), vec![Call::ListWords]);
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_word_list() {
    let mut harness = setup_view_harness(FakeApi::default());
    harness
        .store
        .set_auth("tok", &User::new(UserId::new(2), "mary"))
        .await
        .expect("store session");

    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("No words yet."), "missing empty state in {html}");
    assert!(html.contains("Generation trace"), "missing trace panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_load_error() {
    let api = FakeApi::default();
    api.fail_on(Call::ListWords);
    let mut harness = setup_view_harness(api);
    harness
        .store
        .set_auth("tok", &User::new(UserId::new(1), "zack"))
        .await
        .expect("store session");

    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(html.contains("boom"), "missing error in {html}");
}
