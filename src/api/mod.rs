pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

use crate::errors::ApiError;
use crate::models::{
    CreatePersonRequest, CreatePlanetRequest, CreateUserRequest, FavoriteCreatedResponse,
    FavoriteResponse, FavoriteTargetResponse, HelloResponse, MessageResponse, PersonResponse,
    PlanetResponse, UserFavoritesResponse, UserResponse,
};
use actix_web::{middleware::NormalizePath, web};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // User endpoints
        users::hello,
        users::create_user,
        users::list_users,
        // People endpoints
        people::list_people,
        people::get_person,
        people::create_person,
        // Planet endpoints
        planets::list_planets,
        planets::get_planet,
        planets::create_planet,
        // Favorite endpoints
        favorites::list_user_favorites,
        favorites::add_favorite_planet,
        favorites::add_favorite_person,
        favorites::remove_favorite_planet,
        favorites::remove_favorite_person,
    ),
    components(schemas(
        CreateUserRequest,
        UserResponse,
        HelloResponse,
        CreatePersonRequest,
        PersonResponse,
        CreatePlanetRequest,
        PlanetResponse,
        FavoriteResponse,
        FavoriteTargetResponse,
        FavoriteCreatedResponse,
        UserFavoritesResponse,
        MessageResponse,
    )),
    tags(
        (name = "users", description = "User endpoints"),
        (name = "people", description = "People catalog endpoints"),
        (name = "planets", description = "Planet catalog endpoints"),
        (name = "favorites", description = "User favorite endpoints"),
    )
)]
pub struct ApiDoc;

/// Registers every route on an actix `App` or scope.
///
/// Routes sit in an empty-prefix scope that trims trailing slashes, so
/// `/planets/` and `/planets` resolve alike without touching the Swagger UI
/// mount, which needs its trailing slash.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("")
            .wrap(NormalizePath::trim())
            .service(
                web::resource("/user")
                    .route(web::get().to(users::hello))
                    .route(web::post().to(users::create_user)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list_users))
                    .route("/favorites", web::get().to(favorites::list_user_favorites)),
            )
            .service(
                web::scope("/people")
                    .route("", web::get().to(people::list_people))
                    .route("", web::post().to(people::create_person))
                    .route("/{people_id}", web::get().to(people::get_person)),
            )
            .service(
                web::scope("/planets")
                    .route("", web::get().to(planets::list_planets))
                    .route("", web::post().to(planets::create_planet))
                    .route("/{planet_id}", web::get().to(planets::get_planet)),
            )
            .service(
                web::scope("/favorite")
                    .route(
                        "/planet/{planet_id}",
                        web::post().to(favorites::add_favorite_planet),
                    )
                    .route(
                        "/planet/{planet_id}",
                        web::delete().to(favorites::remove_favorite_planet),
                    )
                    .route(
                        "/people/{people_id}",
                        web::post().to(favorites::add_favorite_person),
                    )
                    .route(
                        "/people/{people_id}",
                        web::delete().to(favorites::remove_favorite_person),
                    ),
            ),
    );
}

/// Malformed or missing JSON bodies get the same JSON error shape as every
/// other client error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        ApiError::bad_request("No input data provided").into()
    })
}
