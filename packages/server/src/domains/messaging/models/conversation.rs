use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ConversationId, ProfileId, VendorId};

/// Conversation - one thread per organizer/vendor pair
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: ConversationId,
    pub organizer_id: ProfileId,
    pub vendor_owner_id: ProfileId,
    pub vendor_id: VendorId,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// Find conversation by ID
    pub async fn find_by_id(id: ConversationId, pool: &PgPool) -> Result<Option<Self>> {
        let conversation =
            sqlx::query_as::<_, Conversation>("SELECT * FROM conversations WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(conversation)
    }

    /// Find the organizer/vendor conversation, creating it if missing
    pub async fn find_or_create(
        organizer_id: ProfileId,
        vendor_owner_id: ProfileId,
        vendor_id: VendorId,
        pool: &PgPool,
    ) -> Result<Self> {
        if let Some(existing) = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations WHERE organizer_id = $1 AND vendor_id = $2",
        )
        .bind(organizer_id)
        .bind(vendor_id)
        .fetch_optional(pool)
        .await?
        {
            return Ok(existing);
        }

        let conversation = sqlx::query_as::<_, Conversation>(
            r#"
            INSERT INTO conversations (id, organizer_id, vendor_owner_id, vendor_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (organizer_id, vendor_id) DO UPDATE SET vendor_id = EXCLUDED.vendor_id
            RETURNING *
            "#,
        )
        .bind(ConversationId::new())
        .bind(organizer_id)
        .bind(vendor_owner_id)
        .bind(vendor_id)
        .fetch_one(pool)
        .await?;
        Ok(conversation)
    }

    /// Find all conversations a profile participates in, newest first
    pub async fn find_for_profile(profile_id: ProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        let conversations = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations
             WHERE organizer_id = $1 OR vendor_owner_id = $1
             ORDER BY created_at DESC",
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;
        Ok(conversations)
    }

    /// Whether a profile participates in this conversation
    pub fn has_participant(&self, profile_id: ProfileId) -> bool {
        self.organizer_id == profile_id || self.vendor_owner_id == profile_id
    }

    /// The other participant in this conversation, from a profile's point
    /// of view
    pub fn counterparty(&self, profile_id: ProfileId) -> ProfileId {
        if self.organizer_id == profile_id {
            self.vendor_owner_id
        } else {
            self.organizer_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(organizer: ProfileId, owner: ProfileId) -> Conversation {
        Conversation {
            id: ConversationId::new(),
            organizer_id: organizer,
            vendor_owner_id: owner,
            vendor_id: VendorId::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn participant_check() {
        let organizer = ProfileId::new();
        let owner = ProfileId::new();
        let convo = conversation(organizer, owner);

        assert!(convo.has_participant(organizer));
        assert!(convo.has_participant(owner));
        assert!(!convo.has_participant(ProfileId::new()));
    }

    #[test]
    fn counterparty_is_the_other_side() {
        let organizer = ProfileId::new();
        let owner = ProfileId::new();
        let convo = conversation(organizer, owner);

        assert_eq!(convo.counterparty(organizer), owner);
        assert_eq!(convo.counterparty(owner), organizer);
    }
}
