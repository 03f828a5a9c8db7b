//! Dashboard notification record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::NotificationId;
use super::status::{NotificationKind, NotificationPriority};

/// A topbar notification: an inbound message, a new order, or a stock
/// alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub priority: NotificationPriority,
}
