use crate::db::DbPool;
use crate::entities::people;
use crate::errors::ApiError;
use crate::models::{non_empty, CreatePersonRequest, PersonResponse};
use actix_web::{web, HttpResponse, Result as ActixResult};
use sea_orm::{EntityTrait, QueryOrder};

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "List of people", body = Vec<PersonResponse>)
    ),
    tag = "people"
)]
pub async fn list_people(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let people = people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

    let body: Vec<PersonResponse> = people.into_iter().map(PersonResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person details", body = PersonResponse),
        (status = 404, description = "Person not found")
    ),
    tag = "people"
)]
pub async fn get_person(
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let person = people::Entity::find_by_id(path.into_inner())
        .one(pool.get_ref())
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("Person not found"))?;

    Ok(HttpResponse::Ok().json(PersonResponse::from(person)))
}

#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created", body = PersonResponse),
        (status = 400, description = "Missing required field")
    ),
    tag = "people"
)]
pub async fn create_person(
    req: web::Json<CreatePersonRequest>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();
    let name =
        non_empty(req.name).ok_or_else(|| ApiError::bad_request("Missing required field: name"))?;

    let new_person = people::ActiveModel {
        name: sea_orm::Set(name),
        gender: sea_orm::Set(non_empty(req.gender)),
        height: sea_orm::Set(req.height),
        ..Default::default()
    };

    let person = people::Entity::insert(new_person)
        .exec_with_returning(pool.get_ref())
        .await
        .map_err(ApiError::from)?;

    log::info!("Created person {} ({})", person.id, person.name);
    Ok(HttpResponse::Created().json(PersonResponse::from(person)))
}
