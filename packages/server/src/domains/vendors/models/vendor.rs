use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CityId, ProfileId, TagId, VendorId};

/// Vendor - an artist or venue listing discoverable by organizers
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vendor {
    pub id: VendorId,
    pub owner_profile_id: ProfileId,

    pub kind: String, // 'artist', 'venue'
    pub name: String,
    pub description: Option<String>,

    pub city_id: Option<CityId>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub rating_avg: Option<f64>,

    pub status: String, // 'active', 'hidden'

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vendor visibility status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Active,
    Hidden,
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorStatus::Active => write!(f, "active"),
            VendorStatus::Hidden => write!(f, "hidden"),
        }
    }
}

impl std::str::FromStr for VendorStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(VendorStatus::Active),
            "hidden" => Ok(VendorStatus::Hidden),
            _ => Err(anyhow::anyhow!("Invalid vendor status: {}", s)),
        }
    }
}

impl Vendor {
    /// Find vendor by ID
    pub async fn find_by_id(id: VendorId, pool: &PgPool) -> Result<Option<Self>> {
        let vendor = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(vendor)
    }

    /// Find all vendors owned by a profile
    pub async fn find_by_owner(owner: ProfileId, pool: &PgPool) -> Result<Vec<Self>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM vendors WHERE owner_profile_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(pool)
        .await?;
        Ok(vendors)
    }

    /// Create a new vendor listing
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        owner_profile_id: ProfileId,
        kind: &str,
        name: String,
        description: Option<String>,
        city_id: Option<CityId>,
        base_price: Option<i32>,
        capacity: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (id, owner_profile_id, kind, name, description, city_id, base_price, capacity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(VendorId::new())
        .bind(owner_profile_id)
        .bind(kind)
        .bind(name)
        .bind(description)
        .bind(city_id)
        .bind(base_price)
        .bind(capacity)
        .fetch_one(pool)
        .await?;
        Ok(vendor)
    }

    /// Update vendor content; absent fields keep their current value
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        id: VendorId,
        name: Option<String>,
        description: Option<String>,
        city_id: Option<CityId>,
        base_price: Option<i32>,
        capacity: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                city_id = COALESCE($4, city_id),
                base_price = COALESCE($5, base_price),
                capacity = COALESCE($6, capacity),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(city_id)
        .bind(base_price)
        .bind(capacity)
        .fetch_one(pool)
        .await?;
        Ok(vendor)
    }

    /// Update vendor visibility status
    pub async fn set_status(id: VendorId, status: VendorStatus, pool: &PgPool) -> Result<Self> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_one(pool)
        .await?;
        Ok(vendor)
    }

    /// Replace the vendor's tag assignments in one transaction
    pub async fn replace_tags(id: VendorId, tag_ids: &[TagId], pool: &PgPool) -> Result<()> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM vendor_tags WHERE vendor_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO vendor_tags (vendor_id, tag_id)
            SELECT $1, tag_id FROM UNNEST($2::uuid[]) AS t(tag_id)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(tag_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Ensure the given profile owns this vendor
    pub fn ensure_owned_by(&self, profile_id: ProfileId) -> Result<()> {
        if self.owner_profile_id != profile_id {
            anyhow::bail!("Vendor {} is not owned by profile {}", self.id, profile_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in [VendorStatus::Active, VendorStatus::Hidden] {
            let parsed: VendorStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("deleted".parse::<VendorStatus>().is_err());
    }

    #[test]
    fn ownership_check() {
        let owner = ProfileId::new();
        let vendor = Vendor {
            id: VendorId::new(),
            owner_profile_id: owner,
            kind: "artist".to_string(),
            name: "The Midnight Quartet".to_string(),
            description: None,
            city_id: None,
            base_price: Some(400),
            capacity: None,
            rating_avg: None,
            status: "active".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(vendor.ensure_owned_by(owner).is_ok());
        assert!(vendor.ensure_owned_by(ProfileId::new()).is_err());
    }
}
