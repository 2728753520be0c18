// In-app notifications for booking and messaging activity

pub mod data;
pub mod models;

pub use data::NotificationData;
pub use models::{Notification, NotificationKind};
