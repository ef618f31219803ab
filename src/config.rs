use crate::error::{BadEnvVarSnafu, ParseEnvNumberSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::{str::FromStr, sync::Arc};

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_config: Arc<ServerConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_config: Arc::new(ServerConfig::new()?),
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_config(&self) -> Arc<ServerConfig> {
        self.server_config.clone()
    }
}

fn get_env_var(name: &'static str) -> RosterResult<String> {
    var(name).context(BadEnvVarSnafu { name })
}

fn get_env_number_or<T: FromStr<Err = std::num::ParseIntError>>(
    name: &'static str,
    default: T,
) -> RosterResult<T> {
    match var(name) {
        Ok(raw) => raw.parse().context(ParseEnvNumberSnafu { name }),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    path: String,
    port: u16,
    database: String,
}

impl DbConfig {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            user: get_env_var("DB_USER")?,
            password: SecretString::from(get_env_var("DB_PASSWORD")?),
            path: get_env_var("DB_PATH")?,
            port: get_env_var("DB_PORT")?
                .parse()
                .context(ParseEnvNumberSnafu { name: "DB_PORT" })?,
            database: get_env_var("DB_NAME")?,
        })
    }

    pub fn get_db_path(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.path,
            self.port,
            self.database
        )
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub const DEFAULT_BIND_ADDRESS: &'static str = "127.0.0.1:9090";
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 15;
    pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

    pub fn new() -> RosterResult<Self> {
        let bind_address = match var("ROSTER_SERVER_IP") {
            Ok(address) => address,
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => {
                Self::DEFAULT_BIND_ADDRESS.to_string()
            }
            Err(source) => {
                return Err(source).context(BadEnvVarSnafu {
                    name: "ROSTER_SERVER_IP",
                });
            }
        };

        Ok(Self {
            bind_address,
            max_connections: get_env_number_or(
                "DB_MAX_CONNECTIONS",
                Self::DEFAULT_MAX_CONNECTIONS,
            )?,
            max_body_bytes: get_env_number_or(
                "ROSTER_MAX_BODY_BYTES",
                Self::DEFAULT_MAX_BODY_BYTES,
            )?,
        })
    }
}
