use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::entity::{department, employee};

#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_connections: u32,
}

/// Owns the pooled store connection shared by every repository.
#[derive(Clone, Debug)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(config.max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        create_schema(&db).await?;
        info!("database schema ready");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

/// Creates the `department` and `employee` tables when they do not exist yet.
///
/// Departments come first so the employee foreign key can reference them.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema
            .create_table_from_entity(department::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(employee::Entity)
            .if_not_exists()
            .to_owned(),
    ];
    for statement in statements {
        db.execute(backend.build(&statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    create_schema(&db).await.expect("schema should be created");
    db
}
