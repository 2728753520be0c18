//! GraphQL types for notifications.

use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use uuid::Uuid;

use super::models::Notification;

/// GraphQL type for a notification
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An in-app notification")]
pub struct NotificationData {
    pub id: Uuid,
    pub kind: String,
    pub body: String,
    pub booking_request_id: Option<Uuid>,
    pub conversation_id: Option<Uuid>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationData {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.into_uuid(),
            kind: notification.kind,
            body: notification.body,
            booking_request_id: notification.booking_request_id.map(|id| id.into_uuid()),
            conversation_id: notification.conversation_id.map(|id| id.into_uuid()),
            read_at: notification.read_at,
            created_at: notification.created_at,
        }
    }
}
