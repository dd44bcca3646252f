use groq_provider::{ChatMessage, ChatModel, Error, GroqProvider};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging()
{   let _ = env_logger::builder().is_test(true).try_init();
}

fn provider_for(api_base: &str) -> GroqProvider
{   GroqProvider::builder()
      .model_id("llama-3.1-8b-instant")
      .api_key("test-key")
      .api_base(api_base)
      .build()
      .expect("provider should build")
}

fn hello_body() -> serde_json::Value
{   serde_json::json!({"choices":[{"message":{"content":"hello"}}]})
}

async fn mount_ok(server: &MockServer)
{   Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .and(header("authorization", "Bearer test-key"))
      .and(header("content-type", "application/json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(hello_body()))
      .expect(1)
      .mount(server)
      .await;
}

/// Body of the single request the mock server saw
async fn sent_body(server: &MockServer) -> serde_json::Value
{   let requests = server.received_requests().await
      .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "exactly one outbound request");
    serde_json::from_slice(&requests[0].body).expect("json body")
}

#[tokio::test]
async fn test_generate_returns_single_generation()
{   init_logging();
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let provider = provider_for(&server.uri());
    let result = provider
      .generate(&[ChatMessage::human("Say hello")], None)
      .await
      .expect("generate should succeed");

    assert_eq!(result.generations.len(), 1);
    assert_eq!(result.generations[0].text(), "hello");
}

#[tokio::test]
async fn test_generate_sends_translated_payload()
{   init_logging();
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let provider = provider_for(&server.uri());
    let messages = vec![
      ChatMessage::system("be brief")
    , ChatMessage::human("hi")
    , ChatMessage::ai("hello")
    , ChatMessage::human("again")
    ];
    provider.generate(&messages, None).await.unwrap();

    let body = sent_body(&server).await;
    assert_eq!(body["model"], "llama-3.1-8b-instant");
    assert_eq!(body["max_tokens"], 4096);
    assert_eq!(
      body["messages"],
      serde_json::json!([
        {"role": "system", "content": "be brief"},
        {"role": "user", "content": "hi"},
        {"role": "assistant", "content": "hello"},
        {"role": "user", "content": "again"}
      ])
    );
    assert!(body.get("stop").is_none());
}

#[tokio::test]
async fn test_generate_forwards_stop_sequences()
{   init_logging();
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let provider = provider_for(&server.uri());
    let stop = vec!["Observation:".to_string(), "\n\n".to_string()];
    provider
      .generate(&[ChatMessage::human("hi")], Some(stop.as_slice()))
      .await
      .unwrap();

    let body = sent_body(&server).await;
    assert_eq!(body["stop"], serde_json::json!(["Observation:", "\n\n"]));
}

#[tokio::test]
async fn test_empty_stop_is_not_sent()
{   init_logging();
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let provider = provider_for(&server.uri());
    let stop: Vec<String> = vec![];
    provider
      .generate(&[ChatMessage::human("hi")], Some(stop.as_slice()))
      .await
      .unwrap();

    assert!(sent_body(&server).await.get("stop").is_none());
}

#[tokio::test]
async fn test_unauthorized_is_a_request_error()
{   init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .respond_with(
        ResponseTemplate::new(401)
          .set_body_string(r#"{"error":{"message":"Invalid API Key"}}"#)
      )
      .expect(1)
      .mount(&server)
      .await;

    let err = provider_for(&server.uri())
      .generate(&[ChatMessage::human("hi")], None)
      .await
      .unwrap_err();

    assert_eq!(err.status(), Some(401));
    match err
    {   Error::Request { body, .. } => {
          assert!(body.contains("Invalid API Key"));
        }
      , other => panic!("expected request error, got {:?}", other)
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried()
{   init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
      .expect(1)
      .mount(&server)
      .await;

    let err = provider_for(&server.uri())
      .generate(&[ChatMessage::human("hi")], None)
      .await
      .unwrap_err();

    assert_eq!(
      err,
      Error::Request { status: 500, body: "boom".to_string() }
    );
}

#[tokio::test]
async fn test_malformed_response_is_a_parse_error()
{   init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(serde_json::json!({"choices":[{"text":"hello"}]}))
      )
      .mount(&server)
      .await;

    let err = provider_for(&server.uri())
      .generate(&[ChatMessage::human("hi")], None)
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_choices_is_reported()
{   init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(
        ResponseTemplate::new(200)
          .set_body_json(serde_json::json!({"choices":[]}))
      )
      .mount(&server)
      .await;

    let err = provider_for(&server.uri())
      .generate(&[ChatMessage::human("hi")], None)
      .await
      .unwrap_err();
    assert_eq!(err, Error::NoChoicesInResponse);
}

#[test]
fn test_connection_refused_is_a_transport_error()
{   init_logging();
    let provider = provider_for("http://127.0.0.1:1");
    let err = tokio_test::block_on(
      provider.generate(&[ChatMessage::human("hi")], None)
    ).unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
}

#[test]
fn test_generate_blocking_outside_runtime()
{   init_logging();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
      let server = MockServer::start().await;
      mount_ok(&server).await;
      server
    });

    let provider = provider_for(&server.uri());
    let result = provider
      .generate_blocking(&[ChatMessage::human("hi")], None)
      .expect("blocking generate should succeed");
    assert_eq!(result.text(), Some("hello"));
}

#[tokio::test]
async fn test_generate_blocking_inside_runtime_is_refused()
{   let provider = provider_for("http://127.0.0.1:1");
    let err = provider
      .generate_blocking(&[ChatMessage::human("hi")], None)
      .unwrap_err();
    assert!(matches!(err, Error::Other(_)));
}

#[test]
fn test_llm_type()
{   let provider = provider_for("http://127.0.0.1:1");
    assert_eq!(provider.llm_type(), "groq-chat");
    assert_eq!(provider.chat_model().llm_type(), "groq-chat");
}

#[tokio::test]
#[ignore]
async fn test_groq_live_generate()
{   init_logging();
    if std::env::var("GROQ_API_KEY").is_err()
    {   println!("Skipping: GROQ_API_KEY not set");
        return;
    }

    let provider = GroqProvider::builder()
      .model_id("llama-3.1-8b-instant")
      .max_tokens(64)
      .build()
      .expect("provider should build");

    match provider
      .generate(&[ChatMessage::human("Say hello")], None)
      .await
    {   Ok(result) => {
          println!("Response: {:?}", result.text());
          assert_eq!(result.generations.len(), 1);
        }
      , Err(e) => {
          println!("API Error: {}", e);
        }
    }
}
