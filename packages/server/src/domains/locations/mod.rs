// Cities lookup

pub mod models;

pub use models::City;

use juniper::GraphQLObject;
use uuid::Uuid;

/// GraphQL type for a city
#[derive(Debug, Clone, GraphQLObject)]
pub struct CityData {
    pub id: Uuid,
    pub name: String,
    pub region: Option<String>,
}

impl From<City> for CityData {
    fn from(city: City) -> Self {
        Self {
            id: city.id.into_uuid(),
            name: city.name,
            region: city.region,
        }
    }
}
