use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{TagId, VendorId};

/// Tag - a genre, venue type, or amenity name attached to vendors
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: TagId,
    pub kind: String, // 'genre', 'venue_type', 'amenity'
    pub name: String,
}

/// Tag kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Genre,
    VenueType,
    Amenity,
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagKind::Genre => write!(f, "genre"),
            TagKind::VenueType => write!(f, "venue_type"),
            TagKind::Amenity => write!(f, "amenity"),
        }
    }
}

impl std::str::FromStr for TagKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "genre" => Ok(TagKind::Genre),
            "venue_type" => Ok(TagKind::VenueType),
            "amenity" => Ok(TagKind::Amenity),
            _ => Err(anyhow::anyhow!("Invalid tag kind: {}", s)),
        }
    }
}

impl Tag {
    /// Find all tags of a kind, alphabetically
    pub async fn find_by_kind(kind: TagKind, pool: &PgPool) -> Result<Vec<Self>> {
        let tags =
            sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE kind = $1 ORDER BY name")
                .bind(kind.to_string())
                .fetch_all(pool)
                .await?;
        Ok(tags)
    }

    /// Find all tags, alphabetically by kind then name
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY kind, name")
            .fetch_all(pool)
            .await?;
        Ok(tags)
    }

    /// Find the tags assigned to a vendor
    pub async fn find_for_vendor(vendor_id: VendorId, pool: &PgPool) -> Result<Vec<Self>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.*
            FROM tags t
            INNER JOIN vendor_tags vt ON vt.tag_id = t.id
            WHERE vt.vendor_id = $1
            ORDER BY t.kind, t.name
            "#,
        )
        .bind(vendor_id)
        .fetch_all(pool)
        .await?;
        Ok(tags)
    }

    /// Get a tag by kind and name, creating it if missing
    pub async fn get_or_create(kind: TagKind, name: &str, pool: &PgPool) -> Result<Self> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (id, kind, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (kind, name) DO UPDATE SET name = EXCLUDED.name
            RETURNING *
            "#,
        )
        .bind(TagId::new())
        .bind(kind.to_string())
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        for kind in [TagKind::Genre, TagKind::VenueType, TagKind::Amenity] {
            let parsed: TagKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("flavor".parse::<TagKind>().is_err());
    }
}
