//! Conversions between message histories and DynamoDB attribute values.
//!
//! `History` is a list whose elements are maps:
//!
//! ```text
//! { "type": S("human" | "ai" | "system"), "data": M { "content": S(...) } }
//! ```

use crate::store::record::StoredMessage;
use aws_sdk_dynamodb::types::AttributeValue;
use convo_domain::Message;
use std::collections::HashMap;

pub fn encode_history(messages: &[Message]) -> AttributeValue {
    AttributeValue::L(messages.iter().map(encode_message).collect())
}

fn encode_message(message: &Message) -> AttributeValue {
    let record = StoredMessage::from(message);
    let data = HashMap::from([(
        "content".to_string(),
        AttributeValue::S(record.data.content),
    )]);
    AttributeValue::M(HashMap::from([
        ("type".to_string(), AttributeValue::S(record.kind)),
        ("data".to_string(), AttributeValue::M(data)),
    ]))
}

pub fn decode_history(value: &AttributeValue) -> Result<Vec<Message>, String> {
    let elements = value
        .as_l()
        .map_err(|_| "History is not a list".to_string())?;
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            decode_message(element).map_err(|reason| format!("History[{}]: {}", index, reason))
        })
        .collect()
}

fn decode_message(value: &AttributeValue) -> Result<Message, String> {
    let map = value.as_m().map_err(|_| "element is not a map".to_string())?;
    let kind = map
        .get("type")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| "missing string 'type'".to_string())?;
    let content = map
        .get("data")
        .and_then(|v| v.as_m().ok())
        .and_then(|data| data.get("content"))
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| "missing string 'data.content'".to_string())?;

    StoredMessage::new(kind.as_str(), content.as_str()).into_message()
}
