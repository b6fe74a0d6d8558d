//! Request/response transformation between the unified types and the LaaS
//! wire format. Pure functions, no I/O.

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::error::LaasError;
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, FinishReason, MessageContent, Usage,
};

use super::types::LaasChatResponse;

/// Keys stripped from passthrough parameters; they are either adapter-level
/// concerns or set explicitly by the body builder.
const RESERVED_PARAM_KEYS: [&str; 3] = ["model", "messages", "stream"];

/// Map messages to the LaaS wire shape.
///
/// Plain-string content becomes a single text part; part lists map
/// per-variant, unknown parts passing through unchanged.
pub(crate) fn transform_messages(messages: &[ChatMessage]) -> Vec<Value> {
    messages.iter().map(transform_message).collect()
}

fn transform_message(message: &ChatMessage) -> Value {
    let content = match &message.content {
        MessageContent::Text(text) => Value::Array(vec![serde_json::json!({
            "type": "text",
            "text": text,
        })]),
        MessageContent::Parts(parts) => {
            Value::Array(parts.iter().map(|part| part.to_wire()).collect())
        }
    };
    serde_json::json!({
        "role": message.role.as_str(),
        "content": content,
    })
}

/// Build the upstream request body: flattened passthrough params, the preset
/// hash (`null` when unset) and the transformed messages.
pub(crate) fn build_request_body(preset_hash: Option<&str>, request: &ChatRequest) -> Value {
    let mut body = Map::new();
    for (key, value) in &request.params {
        if RESERVED_PARAM_KEYS.contains(&key.as_str()) {
            continue;
        }
        body.insert(key.clone(), value.clone());
    }
    body.insert(
        "hash".to_string(),
        preset_hash.map_or(Value::Null, |hash| Value::String(hash.to_string())),
    );
    body.insert(
        "messages".to_string(),
        Value::Array(transform_messages(&request.messages)),
    );
    Value::Object(body)
}

/// Map the upstream reply into the normalized response shape.
///
/// The upstream's own finish_reason, if any, is discarded: this adapter
/// always reports `stop`. Absent usage counters default to zero.
pub(crate) fn transform_response(raw: Value, model: &str) -> Result<ChatResponse, LaasError> {
    let response: LaasChatResponse =
        serde_json::from_value(raw).map_err(|e| LaasError::MalformedResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LaasError::MalformedResponse("no choices in response".to_string()))?;

    let usage = response.usage.unwrap_or_default();

    let mut normalized = ChatResponse::new(MessageContent::Text(choice.message.content));
    normalized.id = response.id;
    normalized.created = response
        .created
        .and_then(|secs| DateTime::from_timestamp(secs, 0));
    normalized.model = Some(model.to_string());
    normalized.finish_reason = Some(FinishReason::Stop);
    normalized.usage = Some(Usage::new(
        usage.prompt_tokens.unwrap_or(0),
        usage.completion_tokens.unwrap_or(0),
        usage.total_tokens.unwrap_or(0),
    ));
    Ok(normalized)
}
