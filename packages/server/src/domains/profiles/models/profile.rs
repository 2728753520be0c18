use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::ProfileId;

/// Profile - a marketplace account (organizer or vendor owner)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: ProfileId,
    pub display_name: String,
    pub email: String,
    pub role: String, // 'organizer', 'vendor'
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account role: organizers book vendors; vendors own listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    #[default]
    Organizer,
    Vendor,
}

impl std::fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileRole::Organizer => write!(f, "organizer"),
            ProfileRole::Vendor => write!(f, "vendor"),
        }
    }
}

impl std::str::FromStr for ProfileRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "organizer" => Ok(ProfileRole::Organizer),
            "vendor" => Ok(ProfileRole::Vendor),
            _ => Err(anyhow::anyhow!("Invalid profile role: {}", s)),
        }
    }
}

impl Profile {
    /// Find profile by ID
    pub async fn find_by_id(id: ProfileId, pool: &PgPool) -> Result<Option<Self>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Find profile by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Create a new profile
    pub async fn create(
        display_name: String,
        email: String,
        role: ProfileRole,
        pool: &PgPool,
    ) -> Result<Self> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, display_name, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(ProfileId::new())
        .bind(display_name)
        .bind(email)
        .bind(role.to_string())
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }

    /// Update profile fields; absent fields keep their current value
    pub async fn update(
        id: ProfileId,
        display_name: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET
                display_name = COALESCE($2, display_name),
                bio = COALESCE($3, bio),
                avatar_url = COALESCE($4, avatar_url),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(display_name)
        .bind(bio)
        .bind(avatar_url)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for role in [ProfileRole::Organizer, ProfileRole::Vendor] {
            let parsed: ProfileRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("admin".parse::<ProfileRole>().is_err());
        assert!("".parse::<ProfileRole>().is_err());
    }

    #[test]
    fn default_role_is_organizer() {
        assert_eq!(ProfileRole::default(), ProfileRole::Organizer);
    }
}
