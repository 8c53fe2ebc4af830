use crate::db::DbPool;
use crate::entities::planet;
use crate::errors::ApiError;
use crate::models::{non_empty, CreatePlanetRequest, PlanetResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "List of planets", body = Vec<PlanetResponse>)
    ),
    tag = "planets"
)]
pub async fn list_planets(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let planets = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

    let body: Vec<PlanetResponse> = planets.into_iter().map(PlanetResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet details", body = PlanetResponse),
        (status = 404, description = "Planet not found")
    ),
    tag = "planets"
)]
pub async fn get_planet(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let planet = planet::Entity::find_by_id(path.into_inner())
        .one(pool.get_ref())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("Planet not found"))?;

    Ok(HttpResponse::Ok().json(PlanetResponse::from(planet)))
}

#[utoipa::path(
    post,
    path = "/planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created", body = PlanetResponse),
        (status = 400, description = "Missing required fields")
    ),
    tag = "planets"
)]
pub async fn create_planet(
    req: web::Json<CreatePlanetRequest>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let (name, climate, terrain) = match (
        non_empty(req.name),
        non_empty(req.climate),
        non_empty(req.terrain),
    ) {
        (Some(name), Some(climate), Some(terrain)) => (name, climate, terrain),
        _ => {
            return Err(
                ApiError::bad_request("Missing required fields: name, climate or terrain").into(),
            )
        }
    };

    let new_planet = planet::ActiveModel {
        name: sea_orm::Set(name),
        climate: sea_orm::Set(Some(climate)),
        terrain: sea_orm::Set(Some(terrain)),
        ..Default::default()
    };

    let planet = planet::Entity::insert(new_planet)
        .exec_with_returning(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

    log::info!("Created planet {} ({})", planet.id, planet.name);
    Ok(HttpResponse::Created().json(PlanetResponse::from(planet)))
}
