use clap::{Args as ClapArgs, Parser};
use staffing_core::domain::common::{DatabaseConfig, StaffingConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "staffing-api", version, about = "Department and employee records over HTTP")]
pub struct Args {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Shared secret expected in the `x-api-key` header.
    #[arg(long, env = "API_KEY")]
    pub api_key: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "staffing")]
    pub name: String,

    /// Full connection string; overrides the discrete database flags.
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub url: Option<String>,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        id = "server_host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server_port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 5000
    )]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/v1")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for StaffingConfig {
    fn from(args: Args) -> Self {
        StaffingConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
                url: args.database.url,
                max_connections: args.database.max_connections,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["staffing-api", "--api-key", "secret"]);

        assert_eq!(args.server.root_path, "/v1");
        assert_eq!(args.server.port, 5000);
        assert_eq!(args.database.max_connections, 10);
        assert!(!args.log.json);
    }

    #[test]
    fn test_into_config() {
        let args = Args::parse_from([
            "staffing-api",
            "--api-key",
            "secret",
            "--database-url",
            "sqlite::memory:",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = StaffingConfig::from(args);
        assert_eq!(config.database.connection_url(), "sqlite::memory:");
    }

    #[test]
    fn test_database_and_server_flags_stay_apart() {
        let args = Args::parse_from([
            "staffing-api",
            "--api-key",
            "secret",
            "--database-host",
            "a",
            "--server-host",
            "b",
            "--database-port",
            "6543",
            "--server-port",
            "8080",
        ]);

        assert_eq!(args.database.host, "a");
        assert_eq!(args.server.host, "b");
        assert_eq!(args.database.port, 6543);
        assert_eq!(args.server.port, 8080);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }
}
