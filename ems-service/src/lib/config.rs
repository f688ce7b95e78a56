use std::env;

use auth::AccessPolicy;
use auth::Exposure;
use auth::Role;
use auth::RouteRule;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use http::Method;
use serde::Deserialize;

use crate::inbound::http::access::default_access_policy;

const MIN_JWT_SECRET_BYTES: usize = 32;
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL URL; the in-memory store is used when absent
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Route access overrides. An empty list keeps the built-in table.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SecurityConfig {
    #[serde(default)]
    pub rules: Vec<RouteRuleConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouteRuleConfig {
    pub pattern: String,
    #[serde(default)]
    pub methods: Vec<String>,
    pub exposure: ExposureKind,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExposureKind {
    Public,
    Authenticated,
    Roles,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BootstrapConfig {
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                MIN_JWT_SECRET_BYTES
            )));
        }
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }

        self.security.access_policy().map(|_| ())
    }
}

impl SecurityConfig {
    /// Build the access policy, falling back to the built-in table.
    pub fn access_policy(&self) -> Result<AccessPolicy, ConfigError> {
        if self.rules.is_empty() {
            return default_access_policy().map_err(|e| ConfigError::Message(e.to_string()));
        }

        self.rules
            .iter()
            .map(RouteRuleConfig::to_rule)
            .collect::<Result<Vec<_>, _>>()
            .map(AccessPolicy::new)
    }
}

impl RouteRuleConfig {
    fn to_rule(&self) -> Result<RouteRule, ConfigError> {
        let exposure = match self.exposure {
            ExposureKind::Public => Exposure::Public,
            ExposureKind::Authenticated => Exposure::Authenticated,
            ExposureKind::Roles => {
                let roles = self
                    .roles
                    .iter()
                    .map(|role| role.parse::<Role>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| ConfigError::Message(e.to_string()))?;
                if roles.is_empty() {
                    return Err(ConfigError::Message(format!(
                        "rule {} requires at least one role",
                        self.pattern
                    )));
                }
                Exposure::Roles(roles)
            }
        };

        let rule = RouteRule::new(&self.pattern, exposure)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        if self.methods.is_empty() {
            return Ok(rule);
        }

        let methods = self
            .methods
            .iter()
            .map(|method| Method::from_bytes(method.to_ascii_uppercase().as_bytes()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(rule.with_methods(methods))
    }
}
