pub mod entities;
pub mod repositories;

pub use repositories::SeaOrmUserStore;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./fotovault.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./fotovault.db?mode=rwc".to_string(),
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let db = Database::connect(&config.url).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Create missing tables. Safe to run on every start.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(entities::User);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;

    Ok(())
}
