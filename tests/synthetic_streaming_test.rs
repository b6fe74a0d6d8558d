//! End-to-end tests for the synthetic streaming path.

use std::time::Duration;

use futures_util::StreamExt;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use laas_adapter::prelude::*;

fn response_with_content(content: &str) -> serde_json::Value {
    json!({
        "id": "laas-chat-456",
        "created": 1_714_000_000,
        "choices": [{
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop",
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 15, "total_tokens": 25 },
    })
}

async fn streaming_client(mock_server: &MockServer) -> LaasClient {
    LaasClient::builder()
        .project_code("test-project")
        .api_key("test-api-key")
        .preset_hash("test-hash")
        .base_url(mock_server.uri())
        .chunk_pace(Duration::ZERO)
        .build()
        .unwrap()
}

async fn collect_chunks(client: &LaasClient, request: ChatRequest) -> Vec<StreamChunk> {
    let mut stream = client.chat_stream(request).await.unwrap();
    let mut chunks = Vec::new();
    while let Some(chunk) = stream.next().await {
        chunks.push(chunk.unwrap());
    }
    chunks
}

#[tokio::test]
async fn short_reply_streams_per_character() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_with_content("Hello")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = streaming_client(&mock_server).await;
    let chunks = collect_chunks(&client, ChatRequest::new(vec![ChatMessage::user("hi")])).await;

    assert_eq!(chunks.len(), 6);
    let texts: Vec<&str> = chunks[..5].iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["H", "e", "l", "l", "o"]);

    let terminal = &chunks[5];
    assert!(terminal.is_finished);
    assert!(terminal.text.is_empty());
    assert_eq!(terminal.finish_reason, Some(FinishReason::Stop));
    assert_eq!(terminal.usage, Some(Usage::new(10, 15, 25)));
}

#[tokio::test]
async fn fragments_reconstruct_the_full_reply() {
    let content = "Streaming here is synthetic: the upstream reply arrives in one \
                   piece and is re-emitted as ordered fragments for the caller.";
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_with_content(content)))
        .mount(&mock_server)
        .await;

    let client = streaming_client(&mock_server).await;
    let chunks = collect_chunks(&client, ChatRequest::new(vec![ChatMessage::user("hi")])).await;

    let rebuilt: String = chunks
        .iter()
        .filter(|c| !c.is_finished)
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(rebuilt, content);

    // Exactly one terminal chunk, emitted last.
    assert_eq!(chunks.iter().filter(|c| c.is_finished).count(), 1);
    assert!(chunks.last().unwrap().is_finished);

    // Non-terminal chunks never carry usage or a finish reason.
    for chunk in chunks.iter().filter(|c| !c.is_finished) {
        assert_eq!(chunk.index, 0);
        assert!(chunk.finish_reason.is_none());
        assert!(chunk.usage.is_none());
    }
}

#[tokio::test]
async fn empty_reply_yields_only_the_terminal_chunk() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_with_content("")))
        .mount(&mock_server)
        .await;

    let client = streaming_client(&mock_server).await;
    let chunks = collect_chunks(&client, ChatRequest::new(vec![ChatMessage::user("hi")])).await;

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].is_finished);
    assert!(chunks[0].text.is_empty());
    assert_eq!(chunks[0].usage, Some(Usage::new(10, 15, 25)));
}

#[tokio::test]
async fn upstream_failure_produces_no_fragments() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = streaming_client(&mock_server).await;
    let err = client
        .chat_stream(ChatRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .err()
        .unwrap();

    match err {
        LaasError::Api { code, message } => {
            assert_eq!(code, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn stream_path_validates_before_calling_upstream() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_with_content("hi")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = streaming_client(&mock_server).await;

    let bad_role = ChatMessage {
        role: MessageRole::Other("tool".to_string()),
        content: MessageContent::Text("x".to_string()),
        tool_calls: None,
    };
    let err = client
        .chat_stream(ChatRequest::new(vec![bad_role]))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, LaasError::InvalidRole { .. }));

    let mut with_tools = ChatMessage::user("hi");
    with_tools.tool_calls = Some(json!([{ "id": "call_1" }]));
    let err = client
        .chat_stream(ChatRequest::new(vec![with_tools]))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, LaasError::ToolCallsUnsupported));
}
