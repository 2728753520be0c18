use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ProfileId, VendorId};
use crate::domains::vendors::Vendor;

/// Favorite - a vendor saved by a profile
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub profile_id: ProfileId,
    pub vendor_id: VendorId,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Save a vendor for a profile. Saving an already-saved vendor is a
    /// no-op.
    pub async fn add(profile_id: ProfileId, vendor_id: VendorId, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO favorites (profile_id, vendor_id)
            VALUES ($1, $2)
            ON CONFLICT (profile_id, vendor_id) DO NOTHING
            "#,
        )
        .bind(profile_id)
        .bind(vendor_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a saved vendor. Returns whether anything was deleted.
    pub async fn remove(profile_id: ProfileId, vendor_id: VendorId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE profile_id = $1 AND vendor_id = $2")
            .bind(profile_id)
            .bind(vendor_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The saved vendors themselves, most recently saved first. Ordering
    /// follows the save time, not the vendors' own creation time.
    pub async fn find_vendors(profile_id: ProfileId, pool: &PgPool) -> Result<Vec<Vendor>> {
        let vendors = sqlx::query_as::<_, Vendor>(
            r#"
            SELECT v.*
            FROM vendors v
            INNER JOIN favorites f ON f.vendor_id = v.id
            WHERE f.profile_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(profile_id)
        .fetch_all(pool)
        .await?;
        Ok(vendors)
    }

    /// Whether a profile has saved a given vendor
    pub async fn is_favorite(
        profile_id: ProfileId,
        vendor_id: VendorId,
        pool: &PgPool,
    ) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE profile_id = $1 AND vendor_id = $2)",
        )
        .bind(profile_id)
        .bind(vendor_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
