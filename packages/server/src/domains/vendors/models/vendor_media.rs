use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{MediaId, VendorId};

/// A media row attached to a vendor listing. At most one row per vendor is
/// flagged primary; discovery surfaces that row's URL.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VendorMedia {
    pub id: MediaId,
    pub vendor_id: VendorId,
    pub url: String,
    pub is_primary: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl VendorMedia {
    /// Find all media for a vendor, primary first
    pub async fn find_by_vendor(vendor_id: VendorId, pool: &PgPool) -> Result<Vec<Self>> {
        let media = sqlx::query_as::<_, VendorMedia>(
            "SELECT * FROM vendor_media
             WHERE vendor_id = $1
             ORDER BY is_primary DESC, sort_order, created_at",
        )
        .bind(vendor_id)
        .fetch_all(pool)
        .await?;
        Ok(media)
    }

    /// URL of the media row flagged primary, if any
    pub async fn primary_url(vendor_id: VendorId, pool: &PgPool) -> Result<Option<String>> {
        let url = sqlx::query_scalar::<_, String>(
            "SELECT url FROM vendor_media WHERE vendor_id = $1 AND is_primary LIMIT 1",
        )
        .bind(vendor_id)
        .fetch_optional(pool)
        .await?;
        Ok(url)
    }

    /// Attach a media URL to a vendor. Adding a primary row clears any
    /// previous primary in the same transaction, keeping the at-most-one
    /// invariant.
    pub async fn add(
        vendor_id: VendorId,
        url: String,
        is_primary: bool,
        sort_order: i32,
        pool: &PgPool,
    ) -> Result<Self> {
        let mut tx = pool.begin().await?;

        if is_primary {
            sqlx::query("UPDATE vendor_media SET is_primary = FALSE WHERE vendor_id = $1")
                .bind(vendor_id)
                .execute(&mut *tx)
                .await?;
        }

        let media = sqlx::query_as::<_, VendorMedia>(
            r#"
            INSERT INTO vendor_media (id, vendor_id, url, is_primary, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(MediaId::new())
        .bind(vendor_id)
        .bind(url)
        .bind(is_primary)
        .bind(sort_order)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(media)
    }

    /// Flag one media row as primary, clearing any previous primary
    pub async fn set_primary(id: MediaId, vendor_id: VendorId, pool: &PgPool) -> Result<()> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE vendor_media SET is_primary = FALSE WHERE vendor_id = $1")
            .bind(vendor_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE vendor_media SET is_primary = TRUE WHERE id = $1 AND vendor_id = $2")
            .bind(id)
            .bind(vendor_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
