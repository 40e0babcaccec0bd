use std::env;
use std::net::{IpAddr, SocketAddr};

const ENV_STAGE: &str = "WORKSHOP_ENV";
const ENV_HOST: &str = "WORKSHOP_HOST";
const ENV_PORT: &str = "WORKSHOP_PORT";
const ENV_LOG: &str = "WORKSHOP_LOG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4000;

/// Deployment stage the order service runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the order service, read from the environment
/// (a local `.env` file is honored in development).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var(ENV_STAGE)
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let server = ServerConfig {
            host: env_or(ENV_HOST, DEFAULT_HOST),
            port: match env::var(ENV_PORT) {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort)?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let telemetry = TelemetryConfig {
            log_level: env_or(ENV_LOG, "info"),
        };

        Ok(Self {
            environment,
            server,
            telemetry,
        })
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// HTTP listener binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host
                .parse()
                .map_err(|source| ConfigError::InvalidHost { source })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WORKSHOP_PORT must be a valid u16")]
    InvalidPort,
    #[error("WORKSHOP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
}
