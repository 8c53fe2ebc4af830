use super::{PersonResponse, PlanetResponse};
use crate::entities::favorite;
use crate::errors::ApiError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a favorite points at. A row always targets exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FavoriteTarget {
    Planet(i32),
    Person(i32),
}

impl FavoriteTarget {
    pub fn id(&self) -> i32 {
        match *self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => id,
        }
    }

    /// Column holding this kind of target on the favorites table.
    pub fn column(&self) -> favorite::Column {
        match self {
            FavoriteTarget::Planet(_) => favorite::Column::PlanetId,
            FavoriteTarget::Person(_) => favorite::Column::PeopleId,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FavoriteTarget::Planet(_) => "Planet",
            FavoriteTarget::Person(_) => "Person",
        }
    }

    pub fn into_active_model(self, user_id: i32) -> favorite::ActiveModel {
        let (planet_id, people_id) = match self {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Person(id) => (None, Some(id)),
        };
        favorite::ActiveModel {
            user_id: sea_orm::Set(user_id),
            planet_id: sea_orm::Set(planet_id),
            people_id: sea_orm::Set(people_id),
            ..Default::default()
        }
    }
}

impl TryFrom<&favorite::Model> for FavoriteTarget {
    type Error = ApiError;

    fn try_from(row: &favorite::Model) -> Result<Self, Self::Error> {
        match (row.planet_id, row.people_id) {
            (Some(id), None) => Ok(FavoriteTarget::Planet(id)),
            (None, Some(id)) => Ok(FavoriteTarget::Person(id)),
            _ => Err(ApiError::Internal(format!(
                "Favorite {} must reference exactly one planet or person",
                row.id
            ))),
        }
    }
}

/// Nested target of a serialized favorite; `null` when the reference dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum FavoriteTargetResponse {
    #[serde(rename = "planet")]
    Planet(Option<PlanetResponse>),
    #[serde(rename = "people")]
    People(Option<PersonResponse>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    #[serde(flatten)]
    pub target: FavoriteTargetResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCreatedResponse {
    pub message: String,
    pub favorite: FavoriteResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesResponse {
    pub planets: Vec<PlanetResponse>,
    pub people: Vec<PersonResponse>,
}
