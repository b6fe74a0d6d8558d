//! Unit tests for validation and wire transforms.

use serde_json::json;

use crate::error::LaasError;
use crate::types::{
    ChatMessage, ChatRequest, ContentPart, FinishReason, MessageRole, Usage,
};

use super::client::validate_request_messages;
use super::transformers::{build_request_body, transform_messages, transform_response};

fn with_role(role: &str) -> ChatMessage {
    ChatMessage {
        role: MessageRole::Other(role.to_string()),
        content: crate::types::MessageContent::Text("x".to_string()),
        tool_calls: None,
    }
}

#[test]
fn valid_roles_pass_validation() {
    let messages = vec![
        ChatMessage::system("be helpful"),
        ChatMessage::user("hi"),
        ChatMessage::assistant("hello"),
        ChatMessage::user("more"),
    ];
    assert!(validate_request_messages(&messages).is_ok());
}

#[test]
fn first_invalid_role_is_reported() {
    let messages = vec![
        ChatMessage::user("ok"),
        with_role("tool"),
        with_role("function"),
    ];
    let err = validate_request_messages(&messages).unwrap_err();
    match err {
        LaasError::InvalidRole { role, index } => {
            assert_eq!(role, "tool");
            assert_eq!(index, 1);
        }
        other => panic!("expected InvalidRole, got {other:?}"),
    }
}

#[test]
fn tool_calls_are_rejected_even_with_valid_roles() {
    let mut message = ChatMessage::assistant("");
    message.tool_calls = Some(json!([{ "id": "call_1", "function": { "name": "f" } }]));
    let err = validate_request_messages(&[ChatMessage::user("hi"), message]).unwrap_err();
    assert!(matches!(err, LaasError::ToolCallsUnsupported));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn role_error_wins_when_both_checks_would_fail() {
    let mut message = with_role("function");
    message.tool_calls = Some(json!([]));
    let err = validate_request_messages(&[message]).unwrap_err();
    assert!(matches!(err, LaasError::InvalidRole { .. }));
}

#[test]
fn string_content_becomes_a_single_text_part() {
    let wire = transform_messages(&[ChatMessage::user("Hello")]);
    assert_eq!(
        wire,
        vec![json!({
            "role": "user",
            "content": [{ "type": "text", "text": "Hello" }],
        })]
    );
}

#[test]
fn content_parts_map_per_variant() {
    let message = ChatMessage::with_parts(
        MessageRole::User,
        vec![
            ContentPart::text("look at this"),
            ContentPart::image_url("https://example.com/cat.png"),
            ContentPart::document_url("https://example.com/doc.pdf"),
            ContentPart::Unknown(json!({ "type": "video_url", "video_url": { "url": "v" } })),
        ],
    );
    let wire = transform_messages(&[message]);
    assert_eq!(
        wire[0]["content"],
        json!([
            { "type": "text", "text": "look at this" },
            { "type": "image_url", "image_url": { "url": "https://example.com/cat.png" } },
            { "type": "document", "document_url": { "url": "https://example.com/doc.pdf" } },
            { "type": "video_url", "video_url": { "url": "v" } },
        ])
    );
}

#[test]
fn request_body_flattens_params_and_strips_reserved_keys() {
    let request = ChatRequest::new(vec![ChatMessage::user("hi")])
        .with_param("temperature", json!(0.5))
        .with_param("max_tokens", json!(128))
        .with_param("model", json!("should-be-dropped"))
        .with_param("messages", json!([]))
        .with_param("stream", json!(true));

    let body = build_request_body(Some("preset-1"), &request);
    assert_eq!(body["temperature"], json!(0.5));
    assert_eq!(body["max_tokens"], json!(128));
    assert_eq!(body["hash"], json!("preset-1"));
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["model"], json!(null));
    assert_eq!(body["stream"], json!(null));
}

#[test]
fn missing_preset_hash_is_sent_as_null() {
    let request = ChatRequest::new(vec![ChatMessage::user("hi")]);
    let body = build_request_body(None, &request);
    assert!(body["hash"].is_null());
    assert!(body.get("hash").is_some());
}

#[test]
fn response_transform_extracts_first_choice_and_usage() {
    let raw = json!({
        "id": "resp-1",
        "created": 1_700_000_000,
        "choices": [{
            "message": { "role": "assistant", "content": "Hi there!" },
            "finish_reason": "length",
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 },
    });
    let response = transform_response(raw, "laas/gpt-preset").unwrap();

    assert_eq!(response.id.as_deref(), Some("resp-1"));
    assert_eq!(response.object, "chat.completion");
    assert_eq!(response.model.as_deref(), Some("laas/gpt-preset"));
    assert_eq!(response.content_text(), Some("Hi there!"));
    // The upstream's own finish_reason is discarded.
    assert_eq!(response.finish_reason, Some(FinishReason::Stop));
    assert_eq!(response.usage, Some(Usage::new(12, 4, 16)));
    assert!(response.created.is_some());
}

#[test]
fn response_without_choices_is_malformed() {
    let err = transform_response(json!({ "choices": [] }), "m").unwrap_err();
    assert!(matches!(err, LaasError::MalformedResponse(_)));
    assert_eq!(err.status_code(), 500);

    let err = transform_response(json!({ "choices": [{ "message": {} }] }), "m").unwrap_err();
    assert!(matches!(err, LaasError::MalformedResponse(_)));
}

#[test]
fn absent_usage_defaults_to_zero() {
    let raw = json!({
        "choices": [{ "message": { "role": "assistant", "content": "ok" } }],
    });
    let response = transform_response(raw, "m").unwrap();
    assert_eq!(response.usage, Some(Usage::default()));
    assert!(response.id.is_none());
    assert!(response.created.is_none());
}
