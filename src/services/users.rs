use crate::db::DbPool;
use crate::entities::user;
use crate::errors::{ApiError, ApiResult};
use crate::models::{non_empty, CreateUserRequest, UserResponse};
use crate::services::favorites::{attach_favorites, favorites_for_users};
use sea_orm::{EntityTrait, QueryOrder};

/// Creates a user, then attaches whichever requested favorites exist.
///
/// The user row is committed before any favorite is looked up, so it survives
/// even when every requested id is unknown.
pub async fn create_user_with_favorites(
    db: &DbPool,
    req: CreateUserRequest,
) -> ApiResult<UserResponse> {
    let username = non_empty(req.username)
        .ok_or_else(|| ApiError::bad_request("Missing required field: username"))?;

    let new_user = user::ActiveModel {
        username: sea_orm::Set(username),
        ..Default::default()
    };
    let user = user::Entity::insert(new_user)
        .exec_with_returning(db)
        .await
        .map_err(|e| ApiError::or_duplicate(e, "Username already exists"))?;

    let attached = attach_favorites(
        db,
        user.id,
        &req.favorite_planets,
        &req.favorite_people,
    )
    .await?;
    log::info!(
        "Created user {} ({}) with {} favorites",
        user.id,
        user.username,
        attached
    );

    let favorites = favorites_for_users(db, &[user.id])
        .await?
        .remove(&user.id)
        .unwrap_or_default();
    Ok(UserResponse::new(user, favorites))
}

pub async fn list_users(db: &DbPool) -> ApiResult<Vec<UserResponse>> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    let mut favorites = favorites_for_users(db, &ids).await?;

    Ok(users
        .into_iter()
        .map(|u| {
            let user_favorites = favorites.remove(&u.id).unwrap_or_default();
            UserResponse::new(u, user_favorites)
        })
        .collect())
}
