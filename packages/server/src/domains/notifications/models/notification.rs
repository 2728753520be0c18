use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{BookingRequestId, ConversationId, NotificationId, ProfileId};

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BookingRequest,
    BookingResponse,
    NewMessage,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::BookingRequest => "booking_request",
            NotificationKind::BookingResponse => "booking_response",
            NotificationKind::NewMessage => "new_message",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Notification - an in-app alert for a profile
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: ProfileId,
    pub kind: String,
    pub body: String,
    pub booking_request_id: Option<BookingRequestId>,
    pub conversation_id: Option<ConversationId>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Record a notification for a recipient
    pub async fn record(
        recipient_id: ProfileId,
        kind: NotificationKind,
        body: String,
        booking_request_id: Option<BookingRequestId>,
        conversation_id: Option<ConversationId>,
        pool: &PgPool,
    ) -> Result<Self> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (id, recipient_id, kind, body, booking_request_id, conversation_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(NotificationId::new())
        .bind(recipient_id)
        .bind(kind.as_str())
        .bind(body)
        .bind(booking_request_id)
        .bind(conversation_id)
        .fetch_one(pool)
        .await?;
        Ok(notification)
    }

    /// Notifications for a recipient, newest first
    pub async fn find_by_recipient(
        recipient_id: ProfileId,
        only_unread: bool,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let notifications = if only_unread {
            sqlx::query_as::<_, Notification>(
                "SELECT * FROM notifications
                 WHERE recipient_id = $1 AND read_at IS NULL
                 ORDER BY created_at DESC",
            )
            .bind(recipient_id)
            .fetch_all(pool)
            .await?
        } else {
            sqlx::query_as::<_, Notification>(
                "SELECT * FROM notifications WHERE recipient_id = $1 ORDER BY created_at DESC",
            )
            .bind(recipient_id)
            .fetch_all(pool)
            .await?
        };
        Ok(notifications)
    }

    /// Mark one notification as read. Scoped to the recipient so a profile
    /// cannot read someone else's notification.
    pub async fn mark_read(
        id: NotificationId,
        recipient_id: ProfileId,
        pool: &PgPool,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = NOW()
             WHERE id = $1 AND recipient_id = $2 AND read_at IS NULL",
        )
        .bind(id)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread notification for a recipient as read
    pub async fn mark_all_read(recipient_id: ProfileId, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = NOW()
             WHERE recipient_id = $1 AND read_at IS NULL",
        )
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count of unread notifications for a recipient
    pub async fn unread_count(recipient_id: ProfileId, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND read_at IS NULL",
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [
            NotificationKind::BookingRequest,
            NotificationKind::BookingResponse,
            NotificationKind::NewMessage,
        ] {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
