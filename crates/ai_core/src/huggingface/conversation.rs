//! Conversational text generation

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use super::HuggingFaceClient;
use crate::error::InferenceError;

#[derive(Debug, Serialize)]
struct ConversationRequest<'a> {
    inputs: &'a str,
}

/// Pull `generated_text` out of either a list or a single object response
fn generated_text(value: &Value) -> Option<String> {
    let item = match value {
        Value::Array(items) => items.first()?,
        Value::Object(_) => value,
        _ => return None,
    };
    item.get("generated_text")?.as_str().map(ToString::to_string)
}

impl HuggingFaceClient {
    /// Generate a conversational reply
    ///
    /// Returns `Ok(None)` when the server answered successfully but in a
    /// shape without generated text.
    #[instrument(skip(self, message), fields(model = %self.config().chat_model))]
    pub async fn converse(&self, message: &str) -> Result<Option<String>, InferenceError> {
        let value: Value = self
            .post_json(&self.config().chat_model, &ConversationRequest { inputs: message })
            .await?;
        Ok(generated_text(&value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_list_response() {
        let value = json!([{"generated_text": "Hi there"}]);
        assert_eq!(generated_text(&value), Some("Hi there".to_string()));
    }

    #[test]
    fn reads_object_response() {
        let value = json!({"generated_text": "Hello"});
        assert_eq!(generated_text(&value), Some("Hello".to_string()));
    }

    #[test]
    fn unexpected_shapes_yield_none() {
        assert_eq!(generated_text(&json!([])), None);
        assert_eq!(generated_text(&json!([{"text": "x"}])), None);
        assert_eq!(generated_text(&json!("plain")), None);
        assert_eq!(generated_text(&json!([{"generated_text": 5}])), None);
    }
}
