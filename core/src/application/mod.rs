use sea_orm::DbErr;

use crate::{
    domain::common::{StaffingConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        department::PostgresDepartmentRepository,
        employee::PostgresEmployeeRepository,
    },
};

pub type StaffingService = Service<PostgresDepartmentRepository, PostgresEmployeeRepository>;

/// Connects to the store, bootstraps the schema and wires the repositories.
pub async fn create_service(config: StaffingConfig) -> Result<StaffingService, DbErr> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.connection_url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    Ok(Service::new(
        PostgresDepartmentRepository::new(postgres.get_db()),
        PostgresEmployeeRepository::new(postgres.get_db()),
    ))
}
