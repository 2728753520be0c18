use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ConversationId, MessageId, ProfileId};

/// Message - one entry in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: ProfileId,
    pub body: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Append a message to a conversation
    pub async fn create(
        conversation_id: ConversationId,
        sender_id: ProfileId,
        body: String,
        pool: &PgPool,
    ) -> Result<Self> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, conversation_id, sender_id, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(MessageId::new())
        .bind(conversation_id)
        .bind(sender_id)
        .bind(body)
        .fetch_one(pool)
        .await?;
        Ok(message)
    }

    /// All messages in a conversation, chronological
    pub async fn find_by_conversation(
        conversation_id: ConversationId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE conversation_id = $1 ORDER BY created_at",
        )
        .bind(conversation_id)
        .fetch_all(pool)
        .await?;
        Ok(messages)
    }

    /// Mark every message in a conversation sent by the other side as read
    pub async fn mark_read(
        conversation_id: ConversationId,
        reader_id: ProfileId,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET read_at = NOW()
            WHERE conversation_id = $1 AND sender_id <> $2 AND read_at IS NULL
            "#,
        )
        .bind(conversation_id)
        .bind(reader_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count unread messages addressed to a profile across all of its
    /// conversations
    pub async fn unread_count(profile_id: ProfileId, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM messages m
            INNER JOIN conversations c ON c.id = m.conversation_id
            WHERE (c.organizer_id = $1 OR c.vendor_owner_id = $1)
              AND m.sender_id <> $1
              AND m.read_at IS NULL
            "#,
        )
        .bind(profile_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
