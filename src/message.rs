use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Status code an operation must report for the response to count as success.
pub const STATUS_OK: u16 = 200;

/// A message delivered by the queue.
///
/// Carries the queue-assigned identifier, the receipt handle needed to delete
/// the message, and the raw body. Bodies are opaque to this crate; payload
/// (de)serialization belongs to the consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique identifier for the message (UUID v7 format for time-ordering)
    pub id: Uuid,
    /// Handle presented back to the queue when deleting this delivery
    pub receipt_handle: String,
    /// The message content/body as a string
    pub body: String,
}

impl Message {
    /// Creates a message with a fresh UUID v7 identifier and an empty receipt
    /// handle, as the queue would before first delivery.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            receipt_handle: String::new(),
            body: body.into(),
        }
    }
}

/// Implemented by every operation response so the retry loop can read the
/// transport status uniformly.
pub trait QueueResponse {
    fn status_code(&self) -> u16;

    fn is_success(&self) -> bool {
        self.status_code() == STATUS_OK
    }
}

/// Parameters for a receive call. Passed through unchanged on every attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiveMessageRequest {
    pub queue_url: String,
    pub max_number_of_messages: u32,
    pub wait_time_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiveMessageResponse {
    pub status_code: u16,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteMessageRequest {
    pub queue_url: String,
    pub receipt_handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteMessageResponse {
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetQueueUrlRequest {
    pub queue_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetQueueUrlResponse {
    pub status_code: u16,
    pub queue_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetQueueAttributesRequest {
    pub queue_url: String,
    pub attribute_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetQueueAttributesResponse {
    pub status_code: u16,
    pub attributes: HashMap<String, String>,
}

impl QueueResponse for ReceiveMessageResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl QueueResponse for DeleteMessageResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl QueueResponse for GetQueueUrlResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl QueueResponse for GetQueueAttributesResponse {
    fn status_code(&self) -> u16 {
        self.status_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let message = Message::new("Test message");

        assert_eq!(message.body, "Test message");
        assert!(message.receipt_handle.is_empty());
        assert!(!message.id.to_string().is_empty());
    }

    #[test]
    fn test_response_success_predicate() {
        let ok = DeleteMessageResponse { status_code: 200 };
        assert!(ok.is_success());

        let bad = DeleteMessageResponse { status_code: 503 };
        assert!(!bad.is_success());

        // Only exactly 200 counts, not the whole 2xx range
        let partial = DeleteMessageResponse { status_code: 204 };
        assert!(!partial.is_success());
    }

    #[test]
    fn test_receive_response_status_is_independent_of_payload() {
        let response = ReceiveMessageResponse {
            status_code: 500,
            messages: vec![Message::new("still delivered")],
        };

        // The payload-tolerant rule lives in the provider, not here
        assert!(!response.is_success());
        assert_eq!(response.status_code(), 500);
    }

    #[test]
    fn test_message_serialization_round_trip() {
        let message = Message {
            id: Uuid::now_v7(),
            receipt_handle: "rh-1".to_string(),
            body: "payload".to_string(),
        };

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"receipt_handle\":\"rh-1\""));
        assert!(json.contains("\"body\":\"payload\""));

        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, message);
    }

    #[test]
    fn test_receive_response_deserialization() {
        let json = r#"{
            "status_code": 200,
            "messages": [
                {
                    "id": "0198fbd8-344e-7b70-841f-3fbd4b371e4c",
                    "receipt_handle": "rh-42",
                    "body": "hello"
                }
            ]
        }"#;

        let response: ReceiveMessageResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0].body, "hello");
        assert_eq!(response.messages[0].receipt_handle, "rh-42");
    }

    #[test]
    fn test_get_queue_attributes_response_deserialization() {
        let json = r#"{
            "status_code": 200,
            "attributes": {
                "ApproximateNumberOfMessages": "12",
                "VisibilityTimeout": "30"
            }
        }"#;

        let response: GetQueueAttributesResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.attributes.get("ApproximateNumberOfMessages"),
            Some(&"12".to_string())
        );
    }

    #[test]
    fn test_malformed_response_deserialization() {
        let missing_field = r#"{"messages": []}"#;
        assert!(serde_json::from_str::<ReceiveMessageResponse>(missing_field).is_err());

        let bad_uuid = r#"{
            "status_code": 200,
            "messages": [{"id": "not-a-uuid", "receipt_handle": "", "body": ""}]
        }"#;
        assert!(serde_json::from_str::<ReceiveMessageResponse>(bad_uuid).is_err());
    }
}
