use log::{LevelFilter, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};

/// Creates a database connection
///
/// The dialect follows the URL scheme: `postgres://` or `sqlite://`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(options).await?;
    info!("Connected to {:?} database", db.get_database_backend());

    Ok(db)
}

/// Creates a database connection and brings the schema up to date
pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = create_connection(database_url).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("Migrations completed successfully");

    Ok(db)
}
