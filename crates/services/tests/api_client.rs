//! HTTP behavior of `ApiClient` against a mock backend.

use caligula_core::model::{PartOfSpeech, Person, SpecId, Tense, WordId};
use serde_json::json;
use services::{ApiClient, ApiConfig, ApiError, GenerateRequest, PracticeApi, TokenHandle};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    let handle = TokenHandle::new();
    handle.set(token.map(ToString::to_string));
    ApiClient::new(
        &ApiConfig::default().with_base_url(format!("{}/api/", server.uri())),
        handle,
    )
}

#[tokio::test]
async fn list_words_sends_bearer_token_and_maps_entries() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/words/"))
        .and(header("authorization", "Bearer tok-1"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 11,
                "word": {"id": 5, "text": "andare", "pos": "verb",
                         "created_at": "2024-05-01T10:00:00Z"},
                "stats": {"presente": {"hits": 1, "misses": 0}}
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let words = client_for(&server, Some("tok-1")).list_words().await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].id, WordId::new(5));
    assert_eq!(words[0].text, "andare");
    assert_eq!(words[0].part_of_speech, PartOfSpeech::Verb);
}

#[tokio::test]
async fn requests_without_token_carry_no_authorization() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/words/"))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let words = client_for(&server, None).list_words().await.unwrap();
    assert!(words.is_empty());
}

#[tokio::test]
async fn error_detail_becomes_the_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/practice/batch-specs/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "no words yet"})))
        .mount(&server)
        .await;

    let err = client_for(&server, Some("tok"))
        .batch_specs(&[Tense::Presente])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no words yet");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn error_without_detail_falls_back_to_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/words/reset-stats/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, Some("tok"))
        .reset_stats()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Http { .. }));
    assert_eq!(err.to_string(), "HTTP 502");
}

#[tokio::test]
async fn batch_specs_passes_tenses_as_comma_list() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/practice/batch-specs/"))
        .and(query_param("tenses", "presente,passato_prossimo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 3, "lemma": "fare", "pos": "verb", "person": "2p", "tense": "passato_prossimo"},
            {"id": 8, "lemma": "casa", "pos": "noun"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let specs = client_for(&server, Some("tok"))
        .batch_specs(&[Tense::Presente, Tense::PassatoProssimo])
        .await
        .unwrap();
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].id, SpecId::number(3));
    assert_eq!(specs[0].person, Some(Person::SecondPlural));
    assert_eq!(specs[0].tense, Some(Tense::PassatoProssimo));
    assert_eq!(specs[1].tense, None);
}

#[tokio::test]
async fn generate_posts_specs_and_reads_sentences() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let spec = json!({"id": 3, "lemma": "fare", "pos": "verb", "person": "1s", "tense": "presente"});
    Mock::given(method("POST"))
        .and(path("/api/llm/generate/"))
        .and(body_json(json!({"specs": [spec.clone()]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sent": {"model": "m", "messages": []},
            "response": "{...}",
            "json": {"sentences": [{"id": 3, "it": "Io faccio", "en": "I do"}]},
            "usage": {"total_tokens": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerateRequest::Batch {
        specs: vec![serde_json::from_value(spec).unwrap()],
    };
    let response = client_for(&server, Some("tok"))
        .generate(&request)
        .await
        .unwrap();
    let sentences = response.sentences();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].it, "Io faccio");
    assert!(response.trace().sent.contains("\"model\""));
    assert!(response.trace().received.contains("total_tokens"));
}

#[tokio::test]
async fn post_json_tolerates_empty_success_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/words/add-new/"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let response = client_for(&server, Some("tok"))
        .add_new_words()
        .await
        .unwrap();
    assert!(response.into_new_words().is_empty());
}

#[tokio::test]
async fn score_posts_tense_and_outcome_to_word_path() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/words/42/score/"))
        .and(body_json(json!({"tense": "futuro", "correct": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, Some("tok"))
        .score(&SpecId::number(42), Some(Tense::Futuro), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn dev_login_is_sent_without_authorization() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/dev-login/"))
        .and(body_json(json!({"username": "zack"})))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "new-token",
            "refresh": "r",
            "user": {"id": 1, "username": "zack"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server, Some("stale-token"))
        .dev_login("zack")
        .await
        .unwrap();
    assert_eq!(response.access.as_deref(), Some("new-token"));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let listener = match std::net::TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener,
        Err(_) => {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
    };
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(
        &ApiConfig::default().with_base_url(format!("http://{addr}/api")),
        TokenHandle::new(),
    );
    let err = client.list_words().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_success_body_on_get_is_a_decode_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/practice/next-spec/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server, Some("tok"))
        .next_spec()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}
