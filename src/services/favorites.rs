use crate::db::DbPool;
use crate::entities::{favorite, people, planet, user};
use crate::errors::{ApiError, ApiResult};
use crate::models::{
    FavoriteResponse, FavoriteTarget, FavoriteTargetResponse, PersonResponse, PlanetResponse,
    UserFavoritesResponse,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, TransactionTrait};
use std::collections::{BTreeSet, HashMap};

/// Links `user_id` to `target`, rejecting a second link to the same target.
///
/// The existence checks and the insert share one transaction; the unique
/// indexes on the favorites table catch a concurrent insert that slips past
/// the check.
pub async fn add_favorite(
    db: &DbPool,
    user_id: i32,
    target: FavoriteTarget,
) -> ApiResult<FavoriteResponse> {
    let txn = db.begin().await?;

    if user::Entity::find_by_id(user_id).one(&txn).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }
    let nested = resolve_target(&txn, target)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{} not found", target.label())))?;

    let duplicate = || format!("{} already in favorites", target.label());

    let existing = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(target.column().eq(target.id()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Duplicate(duplicate()));
    }

    let row = favorite::Entity::insert(target.into_active_model(user_id))
        .exec_with_returning(&txn)
        .await
        .map_err(|e| ApiError::or_duplicate(e, duplicate()))?;
    txn.commit().await?;

    log::info!(
        "User {} added {} {} to favorites",
        user_id,
        target.label().to_lowercase(),
        target.id()
    );

    Ok(FavoriteResponse {
        id: row.id,
        user_id: row.user_id,
        target: nested,
    })
}

pub async fn remove_favorite(db: &DbPool, user_id: i32, target: FavoriteTarget) -> ApiResult<()> {
    let result = favorite::Entity::delete_many()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(target.column().eq(target.id()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found(format!(
            "{} not in favorites",
            target.label()
        )));
    }

    log::info!(
        "User {} removed {} {} from favorites",
        user_id,
        target.label().to_lowercase(),
        target.id()
    );
    Ok(())
}

/// Planets and people a user has favorited. Dangling targets are left out.
pub async fn list_user_favorites(db: &DbPool, user_id: i32) -> ApiResult<UserFavoritesResponse> {
    if user::Entity::find_by_id(user_id).one(db).await?.is_none() {
        return Err(ApiError::not_found("User not found"));
    }

    let mut response = UserFavoritesResponse {
        planets: Vec::new(),
        people: Vec::new(),
    };
    for favorite in favorites_for_users(db, &[user_id])
        .await?
        .remove(&user_id)
        .unwrap_or_default()
    {
        match favorite.target {
            FavoriteTargetResponse::Planet(Some(planet)) => response.planets.push(planet),
            FavoriteTargetResponse::People(Some(person)) => response.people.push(person),
            _ => {}
        }
    }

    Ok(response)
}

/// Loads the serialized favorites of every user in `user_ids`, keyed by user id
/// and ordered by favorite id. Targets come from a LEFT JOIN, so a dangling
/// reference shows up as `None`.
pub async fn favorites_for_users<C: ConnectionTrait>(
    db: &C,
    user_ids: &[i32],
) -> ApiResult<HashMap<i32, Vec<FavoriteResponse>>> {
    let mut by_user: HashMap<i32, Vec<FavoriteResponse>> = HashMap::new();
    if user_ids.is_empty() {
        return Ok(by_user);
    }

    let planet_rows = favorite::Entity::find()
        .filter(favorite::Column::UserId.is_in(user_ids.iter().copied()))
        .filter(favorite::Column::PlanetId.is_not_null())
        .find_also_related(planet::Entity)
        .all(db)
        .await?;
    let people_rows = favorite::Entity::find()
        .filter(favorite::Column::UserId.is_in(user_ids.iter().copied()))
        .filter(favorite::Column::PeopleId.is_not_null())
        .find_also_related(people::Entity)
        .all(db)
        .await?;

    let planets = planet_rows.into_iter().map(|(row, planet)| {
        (
            row,
            FavoriteTargetResponse::Planet(planet.map(PlanetResponse::from)),
        )
    });
    let people = people_rows.into_iter().map(|(row, person)| {
        (
            row,
            FavoriteTargetResponse::People(person.map(PersonResponse::from)),
        )
    });

    for (row, target) in planets.chain(people) {
        FavoriteTarget::try_from(&row)?;
        by_user.entry(row.user_id).or_default().push(FavoriteResponse {
            id: row.id,
            user_id: row.user_id,
            target,
        });
    }
    for favorites in by_user.values_mut() {
        favorites.sort_by_key(|f| f.id);
    }

    Ok(by_user)
}

/// Attaches every listed planet and person that exists to `user_id`.
///
/// Unknown ids are skipped without error and repeated ids are attached once.
/// Returns the number of favorites created.
pub async fn attach_favorites(
    db: &DbPool,
    user_id: i32,
    planet_ids: &[i32],
    people_ids: &[i32],
) -> ApiResult<usize> {
    let targets: BTreeSet<FavoriteTarget> = planet_ids
        .iter()
        .map(|&id| FavoriteTarget::Planet(id))
        .chain(people_ids.iter().map(|&id| FavoriteTarget::Person(id)))
        .collect();

    let txn = db.begin().await?;
    let mut attached = 0;
    for target in targets {
        if resolve_target(&txn, target).await?.is_none() {
            log::debug!(
                "Skipping unknown {} {} for user {}",
                target.label().to_lowercase(),
                target.id(),
                user_id
            );
            continue;
        }
        favorite::Entity::insert(target.into_active_model(user_id))
            .exec(&txn)
            .await?;
        attached += 1;
    }
    txn.commit().await?;

    Ok(attached)
}

async fn resolve_target<C: ConnectionTrait>(
    db: &C,
    target: FavoriteTarget,
) -> Result<Option<FavoriteTargetResponse>, DbErr> {
    Ok(match target {
        FavoriteTarget::Planet(id) => planet::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|p| FavoriteTargetResponse::Planet(Some(p.into()))),
        FavoriteTarget::Person(id) => people::Entity::find_by_id(id)
            .one(db)
            .await?
            .map(|p| FavoriteTargetResponse::People(Some(p.into()))),
    })
}
