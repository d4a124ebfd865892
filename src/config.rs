/*
 * Responsibility
 * - 環境変数の読み込み (JWT_SECRET, PORT, leeway, issuer/audience)
 * - 設定値のバリデーション (不足なら起動失敗)
 * - secret にデフォルト値は持たせない
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Secrets shorter than this are accepted but logged at startup.
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    // HS256 shared secret. Never printed.
    pub jwt_secret: String,
    pub jwt_leeway_seconds: u64,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_leeway_seconds", &self.jwt_leeway_seconds)
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_audience", &self.jwt_audience)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        let jwt_leeway_seconds = match lookup("JWT_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("JWT_LEEWAY_SECONDS"))?,
            None => 0,
        };

        let jwt_issuer = non_empty(lookup("JWT_ISSUER"));
        let jwt_audience = non_empty(lookup("JWT_AUDIENCE"));

        Ok(Self {
            addr,
            app_env,
            jwt_secret,
            jwt_leeway_seconds,
            jwt_issuer,
            jwt_audience,
        })
    }

    pub fn has_weak_secret(&self) -> bool {
        self.jwt_secret.len() < RECOMMENDED_SECRET_BYTES
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_secret_is_a_startup_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn blank_secret_is_rejected() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("JWT_SECRET"));
    }

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let config = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.jwt_leeway_seconds, 0);
        assert!(config.jwt_issuer.is_none());
        assert!(config.jwt_audience.is_none());
        assert!(config.has_weak_secret());
    }

    #[test]
    fn explicit_values_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
            ("PORT", "9001"),
            ("APP_ENV", "PROD"),
            ("JWT_LEEWAY_SECONDS", "30"),
            ("JWT_ISSUER", "https://issuer.example.com"),
            ("JWT_AUDIENCE", " "),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 9001);
        assert!(config.app_env.is_production());
        assert_eq!(config.jwt_leeway_seconds, 30);
        assert_eq!(
            config.jwt_issuer.as_deref(),
            Some("https://issuer.example.com")
        );
        assert!(config.jwt_audience.is_none());
        assert!(!config.has_weak_secret());
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let err =
            Config::from_lookup(lookup(&[("JWT_SECRET", "x"), ("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));

        let err = Config::from_lookup(lookup(&[
            ("JWT_SECRET", "x"),
            ("JWT_LEEWAY_SECONDS", "-1"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("JWT_LEEWAY_SECONDS"));
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = Config::from_lookup(lookup(&[("JWT_SECRET", "do-not-print")])).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("do-not-print"));
        assert!(rendered.contains("<redacted>"));
    }
}
