use crate::db::DbPool;
use crate::errors::{ApiError, ApiResult};
use crate::models::{FavoriteCreatedResponse, FavoriteTarget, MessageResponse};
use crate::services::favorites;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;

/// `user_id` stays a string at the extractor so a missing or malformed value
/// gets the JSON error body instead of actix's plain-text query error.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User the favorites belong to.
    #[param(value_type = i32, example = 1)]
    pub user_id: Option<String>,
}

impl UserIdQuery {
    fn require_user_id(&self) -> ApiResult<i32> {
        let raw = self
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::bad_request("User ID is required"))?;
        raw.parse().map_err(|_| ApiError::bad_request("Invalid user ID"))
    }
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    params(UserIdQuery),
    responses(
        (status = 200, description = "Favorite planets and people", body = UserFavoritesResponse),
        (status = 400, description = "Missing or invalid user_id"),
        (status = 404, description = "User not found")
    ),
    tag = "favorites"
)]
pub async fn list_user_favorites(
    query: web::Query<UserIdQuery>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let user_id = query.require_user_id()?;
    let body = favorites::list_user_favorites(pool.get_ref(), user_id).await?;
    Ok(HttpResponse::Ok().json(body))
}

async fn add(
    pool: &DbPool,
    query: &UserIdQuery,
    target: FavoriteTarget,
) -> ActixResult<HttpResponse> {
    let user_id = query.require_user_id()?;
    let favorite = favorites::add_favorite(pool, user_id, target).await?;
    Ok(HttpResponse::Created().json(FavoriteCreatedResponse {
        message: format!("{} added to favorites", target.label()),
        favorite,
    }))
}

async fn remove(
    pool: &DbPool,
    query: &UserIdQuery,
    target: FavoriteTarget,
) -> ActixResult<HttpResponse> {
    let user_id = query.require_user_id()?;
    favorites::remove_favorite(pool, user_id, target).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "{} removed from favorites",
        target.label()
    ))))
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoriteCreatedResponse),
        (status = 400, description = "Missing user_id or planet already in favorites"),
        (status = 404, description = "User or planet not found")
    ),
    tag = "favorites"
)]
pub async fn add_favorite_planet(
    path: web::Path<i32>,
    query: web::Query<UserIdQuery>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    add(pool.get_ref(), &query, FavoriteTarget::Planet(path.into_inner())).await
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
        UserIdQuery
    ),
    responses(
        (status = 201, description = "Person added to favorites", body = FavoriteCreatedResponse),
        (status = 400, description = "Missing user_id or person already in favorites"),
        (status = 404, description = "User or person not found")
    ),
    tag = "favorites"
)]
pub async fn add_favorite_person(
    path: web::Path<i32>,
    query: web::Query<UserIdQuery>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    add(pool.get_ref(), &query, FavoriteTarget::Person(path.into_inner())).await
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageResponse),
        (status = 400, description = "Missing user_id"),
        (status = 404, description = "Planet not in favorites")
    ),
    tag = "favorites"
)]
pub async fn remove_favorite_planet(
    path: web::Path<i32>,
    query: web::Query<UserIdQuery>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    remove(pool.get_ref(), &query, FavoriteTarget::Planet(path.into_inner())).await
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
        UserIdQuery
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageResponse),
        (status = 400, description = "Missing user_id"),
        (status = 404, description = "Person not in favorites")
    ),
    tag = "favorites"
)]
pub async fn remove_favorite_person(
    path: web::Path<i32>,
    query: web::Query<UserIdQuery>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    remove(pool.get_ref(), &query, FavoriteTarget::Person(path.into_inner())).await
}
