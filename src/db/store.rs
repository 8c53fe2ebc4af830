use crate::config::Config;
use crate::entities::{favorite, people, planet, user};
use sea_orm::sea_query::{Expr, Index, IndexCreateStatement};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    init_schema(&db).await?;

    Ok(db)
}

/// Creates every table and index that does not exist yet.
pub async fn init_schema(db: &DbPool) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, planet::Entity).await?;
    create_table(db, people::Entity).await?;

    let backend = db.get_database_backend();
    let mut favorites = Schema::new(backend).create_table_from_entity(favorite::Entity);
    // exactly one target per row
    favorites.if_not_exists().check(
        Expr::col(favorite::Column::PlanetId)
            .is_not_null()
            .and(Expr::col(favorite::Column::PeopleId).is_null())
            .or(Expr::col(favorite::Column::PlanetId)
                .is_null()
                .and(Expr::col(favorite::Column::PeopleId).is_not_null())),
    );
    db.execute(backend.build(&favorites)).await?;

    for index in favorite_indexes() {
        db.execute(backend.build(&index)).await?;
    }

    log::info!("Database schema ready ({:?})", backend);
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DbPool, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

fn favorite_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("uq_favorites_user_planet")
            .table(favorite::Entity)
            .col(favorite::Column::UserId)
            .col(favorite::Column::PlanetId)
            .unique()
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("uq_favorites_user_people")
            .table(favorite::Entity)
            .col(favorite::Column::UserId)
            .col(favorite::Column::PeopleId)
            .unique()
            .to_owned(),
    ]
}
