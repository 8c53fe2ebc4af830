use crate::entities::{people, planet};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePersonRequest {
    #[schema(example = "Luke Skywalker")]
    pub name: Option<String>,
    #[schema(example = "male")]
    pub gender: Option<String>,
    #[schema(example = 172.0)]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub height: Option<f64>,
}

impl From<people::Model> for PersonResponse {
    fn from(person: people::Model) -> Self {
        PersonResponse {
            id: person.id,
            name: person.name,
            gender: person.gender,
            height: person.height,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlanetRequest {
    #[schema(example = "Tatooine")]
    pub name: Option<String>,
    #[schema(example = "arid")]
    pub climate: Option<String>,
    #[schema(example = "desert")]
    pub terrain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(planet: planet::Model) -> Self {
        PlanetResponse {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
        }
    }
}
