//! Contact-form message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::MessageId;
use super::status::MessageStatus;

/// A message submitted through the public contact form.
///
/// Messages are never persisted; the API echoes the assembled record back
/// to the caller and forgets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_wire_shape() {
        let message = ContactMessage {
            id: MessageId::new(1),
            name: "John Doe".to_owned(),
            email: "john.doe@email.com".to_owned(),
            subject: "Product Availability Inquiry".to_owned(),
            message: "Do you have Paracetamol 500mg in stock?".to_owned(),
            timestamp: "2025-01-15T08:30:00Z".parse().unwrap(),
            status: MessageStatus::Unread,
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["status"], "unread");
        assert_eq!(json["timestamp"], "2025-01-15T08:30:00Z");
        assert_eq!(json["subject"], "Product Availability Inquiry");
    }
}
