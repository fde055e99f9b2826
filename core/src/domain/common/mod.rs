use crate::domain::listing::EntityKind;

pub mod entities;
pub mod services;

pub fn updated_message(entity: EntityKind, id: i32) -> String {
    format!(
        "{} with {} id {} updated successfully.",
        entity.title(),
        entity.label(),
        id
    )
}

pub fn deleted_message(entity: EntityKind, id: i32) -> String {
    format!(
        "{} with {} id {} deleted successfully.",
        entity.title(),
        entity.label(),
        id
    )
}

#[derive(Clone, Debug)]
pub struct StaffingConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    /// Full connection string; takes precedence over the discrete fields when set.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
        }
    }
}
