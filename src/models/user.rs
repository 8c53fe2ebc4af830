use super::FavoriteResponse;
use crate::entities::user;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "han")]
    pub username: Option<String>,
    /// Planet ids to attach; unknown ids are skipped.
    #[serde(default)]
    pub favorite_planets: Vec<i32>,
    /// Person ids to attach; unknown ids are skipped.
    #[serde(default)]
    pub favorite_people: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub favorites: Vec<FavoriteResponse>,
}

impl UserResponse {
    pub fn new(user: user::Model, favorites: Vec<FavoriteResponse>) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            favorites,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HelloResponse {
    pub msg: String,
}
