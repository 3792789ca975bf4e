// src/models/chat.rs
use serde::{Deserialize, Serialize};

/// A single role/content turn. History entries are relayed to the
/// completion API exactly as the client sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Option<Vec<ChatMessage>>,
    pub tenant_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl ChatRequest {
    /// Builds the outbound message list: prior history in order, then the
    /// current message as the final user turn.
    pub fn into_messages(self) -> Vec<ChatMessage> {
        let mut messages = self.history.unwrap_or_default();
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: self.message,
        });
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_history_becomes_single_user_turn() {
        let request = ChatRequest {
            message: "מה שיעור המכס על נעליים?".to_string(),
            history: None,
            tenant_id: None,
        };

        let messages = request.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, "מה שיעור המכס על נעליים?");
    }

    #[test]
    fn history_order_is_preserved_and_message_comes_last() {
        let request = ChatRequest {
            message: "and purchase tax?".to_string(),
            history: Some(vec![
                ChatMessage {
                    role: "user".to_string(),
                    content: "classify leather shoes".to_string(),
                },
                ChatMessage {
                    role: "assistant".to_string(),
                    content: "HS 6403.99".to_string(),
                },
            ]),
            tenant_id: Some("tenant-7".to_string()),
        };

        let messages = request.into_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "classify leather shoes");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[2].role, "user");
        assert_eq!(messages[2].content, "and purchase tax?");
    }

    #[test]
    fn absent_tenant_id_is_omitted_from_response_json() {
        let response = ChatResponse {
            response: "ok".to_string(),
            tenant_id: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("tenant_id").is_none());

        let response = ChatResponse {
            response: "ok".to_string(),
            tenant_id: Some("tenant-7".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["tenant_id"], "tenant-7");
    }
}
