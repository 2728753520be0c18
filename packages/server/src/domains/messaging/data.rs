//! GraphQL types for conversations and messages.

use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use uuid::Uuid;

use super::models::{Conversation, Message};

/// GraphQL type for a conversation
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A message thread between an organizer and a vendor owner")]
pub struct ConversationData {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub vendor_owner_id: Uuid,
    pub vendor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationData {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.into_uuid(),
            organizer_id: conversation.organizer_id.into_uuid(),
            vendor_owner_id: conversation.vendor_owner_id.into_uuid(),
            vendor_id: conversation.vendor_id.into_uuid(),
            created_at: conversation.created_at,
        }
    }
}

/// GraphQL type for a message
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A single message within a conversation")]
pub struct MessageData {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub body: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageData {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into_uuid(),
            conversation_id: message.conversation_id.into_uuid(),
            sender_id: message.sender_id.into_uuid(),
            body: message.body,
            read_at: message.read_at,
            created_at: message.created_at,
        }
    }
}
