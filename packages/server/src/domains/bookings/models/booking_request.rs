use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{BookingRequestId, ProfileId, VendorId};

/// BookingRequest - an organizer's request to book a vendor for an event
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BookingRequest {
    pub id: BookingRequestId,
    pub organizer_id: ProfileId,
    pub vendor_id: VendorId,

    pub event_date: NaiveDate,
    pub message: Option<String>,
    pub offered_price: Option<i32>,

    pub status: String, // 'pending', 'accepted', 'declined', 'cancelled'
    pub responded_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking request lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Declined,
    Cancelled,
}

impl BookingStatus {
    /// Whether a transition to `next` is allowed. Only pending requests can
    /// move; accepted, declined, and cancelled are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (
                BookingStatus::Pending,
                BookingStatus::Accepted | BookingStatus::Declined | BookingStatus::Cancelled
            )
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Accepted => write!(f, "accepted"),
            BookingStatus::Declined => write!(f, "declined"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "accepted" => Ok(BookingStatus::Accepted),
            "declined" => Ok(BookingStatus::Declined),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(anyhow::anyhow!("Invalid booking status: {}", s)),
        }
    }
}

impl BookingRequest {
    /// Find booking request by ID
    pub async fn find_by_id(id: BookingRequestId, pool: &PgPool) -> Result<Option<Self>> {
        let booking =
            sqlx::query_as::<_, BookingRequest>("SELECT * FROM booking_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(booking)
    }

    /// Find booking requests submitted by an organizer, newest first
    pub async fn find_by_organizer(organizer_id: ProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        let bookings = sqlx::query_as::<_, BookingRequest>(
            "SELECT * FROM booking_requests
             WHERE organizer_id = $1
             ORDER BY created_at DESC",
        )
        .bind(organizer_id)
        .fetch_all(pool)
        .await?;
        Ok(bookings)
    }

    /// Find booking requests addressed to any vendor owned by a profile,
    /// newest first
    pub async fn find_for_vendor_owner(owner_id: ProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        let bookings = sqlx::query_as::<_, BookingRequest>(
            r#"
            SELECT b.*
            FROM booking_requests b
            INNER JOIN vendors v ON v.id = b.vendor_id
            WHERE v.owner_profile_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
        Ok(bookings)
    }

    /// Create a new booking request in pending status
    pub async fn create(
        organizer_id: ProfileId,
        vendor_id: VendorId,
        event_date: NaiveDate,
        message: Option<String>,
        offered_price: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        let booking = sqlx::query_as::<_, BookingRequest>(
            r#"
            INSERT INTO booking_requests (id, organizer_id, vendor_id, event_date, message, offered_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(BookingRequestId::new())
        .bind(organizer_id)
        .bind(vendor_id)
        .bind(event_date)
        .bind(message)
        .bind(offered_price)
        .fetch_one(pool)
        .await?;
        Ok(booking)
    }

    /// Move a pending request to a new status, stamping responded_at.
    ///
    /// The WHERE clause guards the transition at the database too, so a
    /// concurrent response cannot double-apply.
    pub async fn transition(
        id: BookingRequestId,
        next: BookingStatus,
        pool: &PgPool,
    ) -> Result<Self> {
        let booking = sqlx::query_as::<_, BookingRequest>(
            r#"
            UPDATE booking_requests
            SET status = $2, responded_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(next.to_string())
        .fetch_optional(pool)
        .await?;

        booking.ok_or_else(|| anyhow::anyhow!("Booking request {} is not pending", id))
    }

    /// Parsed status of this request
    pub fn parsed_status(&self) -> Result<BookingStatus> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_move_to_any_terminal_state() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Accepted));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Declined));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn terminal_states_cannot_move() {
        for terminal in [
            BookingStatus::Accepted,
            BookingStatus::Declined,
            BookingStatus::Cancelled,
        ] {
            for next in [
                BookingStatus::Pending,
                BookingStatus::Accepted,
                BookingStatus::Declined,
                BookingStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Accepted,
            BookingStatus::Declined,
            BookingStatus::Cancelled,
        ] {
            let parsed: BookingStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("rejected".parse::<BookingStatus>().is_err());
    }
}
