use crate::db::DbPool;
use crate::models::{CreateUserRequest, HelloResponse};
use crate::services::users::{create_user_with_favorites, list_users as load_users};
use actix_web::{web, HttpResponse, Result as ActixResult};

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Static greeting", body = HelloResponse)
    ),
    tag = "users"
)]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(HelloResponse {
        msg: "Hello, this is your GET /user response ".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; unknown favorite ids are skipped", body = UserResponse),
        (status = 400, description = "Missing username or username taken")
    ),
    tag = "users"
)]
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    pool: web::Data<DbPool>,
) -> ActixResult<HttpResponse> {
    let user = create_user_with_favorites(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users with their favorites", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_users(pool: web::Data<DbPool>) -> ActixResult<HttpResponse> {
    let users = load_users(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}
