use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::CityId;

/// City lookup row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub region: Option<String>,
}

impl City {
    /// Find city by ID
    pub async fn find_by_id(id: CityId, pool: &PgPool) -> Result<Option<Self>> {
        let city = sqlx::query_as::<_, City>("SELECT * FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(city)
    }

    /// All cities, alphabetically
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let cities = sqlx::query_as::<_, City>("SELECT * FROM cities ORDER BY name")
            .fetch_all(pool)
            .await?;
        Ok(cities)
    }
}
