// Conversations and messages between organizers and vendor owners

pub mod data;
pub mod models;

pub use data::{ConversationData, MessageData};
pub use models::{Conversation, Message};
