//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file. Everything has a default except the response table path.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;
use crate::responder::ResponseTable;

pub const DEFAULT_RATE_LIMIT: usize = 20;
pub const DEFAULT_RATE_WINDOW_SECS: u64 = 60;
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// SQLite connection string for chat history
    pub database_url: String,
    /// Optional JSON response table replacing the built-in catalog
    pub responses_path: Option<PathBuf>,
    /// Messages allowed per user within `rate_window`
    pub rate_limit: usize,
    pub rate_window: Duration,
    /// Default page size for history queries
    pub history_limit: i64,
    pub log_format: LogFormat,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            responses_path: None,
            rate_limit: DEFAULT_RATE_LIMIT,
            rate_window: Duration::from_secs(DEFAULT_RATE_WINDOW_SECS),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_format: LogFormat::default(),
        }
    }
}

fn default_database_url() -> String {
    format!(
        "sqlite://{}",
        PortablePathManager::default_db_path().to_string_lossy()
    )
}

/// Reads `key` and parses it, returning `None` when unset or blank.
fn parse_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(_) => Ok(None),
    }
}

impl ChatConfig {
    /// Loads `.env` (if present) and then the process environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is normal
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Builds the config from the current environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let rate_limit = parse_var::<usize>("CHAT_RATE_LIMIT")?.unwrap_or(defaults.rate_limit);
        if rate_limit == 0 {
            return Err(AppError::Config("CHAT_RATE_LIMIT must be at least 1".into()));
        }

        let rate_window_secs =
            parse_var::<u64>("CHAT_RATE_WINDOW_SECS")?.unwrap_or(defaults.rate_window.as_secs());
        if rate_window_secs == 0 {
            return Err(AppError::Config(
                "CHAT_RATE_WINDOW_SECS must be at least 1".into(),
            ));
        }

        let history_limit =
            parse_var::<i64>("CHAT_HISTORY_LIMIT")?.unwrap_or(defaults.history_limit);
        if history_limit <= 0 {
            return Err(AppError::Config(
                "CHAT_HISTORY_LIMIT must be positive".into(),
            ));
        }

        Ok(Self {
            database_url: parse_var::<String>("CHAT_DATABASE_URL")?
                .unwrap_or(defaults.database_url),
            responses_path: parse_var::<PathBuf>("CHAT_RESPONSES_PATH")?,
            rate_limit,
            rate_window: Duration::from_secs(rate_window_secs),
            history_limit,
            log_format: parse_var::<LogFormat>("CHAT_LOG_FORMAT")?
                .unwrap_or(defaults.log_format),
        })
    }

    /// Loads the response table once; the built-in catalog unless a path is set.
    pub fn response_table(&self) -> Result<Arc<ResponseTable>, AppError> {
        let table = match &self.responses_path {
            Some(path) => ResponseTable::load(path)?,
            None => ResponseTable::builtin(),
        };
        Ok(Arc::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Category;
    use std::io::Write;

    const VARS: [&str; 6] = [
        "CHAT_DATABASE_URL",
        "CHAT_RESPONSES_PATH",
        "CHAT_RATE_LIMIT",
        "CHAT_RATE_WINDOW_SECS",
        "CHAT_HISTORY_LIMIT",
        "CHAT_LOG_FORMAT",
    ];

    /// Every config variable unset except `overrides`.
    fn env_with(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter()
            .map(|key| {
                let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars(env_with(&[]), || {
            let config = ChatConfig::from_env().unwrap();
            assert_eq!(config.rate_limit, DEFAULT_RATE_LIMIT);
            assert_eq!(config.rate_window, Duration::from_secs(60));
            assert_eq!(config.history_limit, 50);
            assert_eq!(config.log_format, LogFormat::Pretty);
            assert!(config.responses_path.is_none());
            assert!(config.database_url.starts_with("sqlite://"));
        });
    }

    #[test]
    fn test_overrides() {
        let vars = env_with(&[
            ("CHAT_DATABASE_URL", "sqlite::memory:"),
            ("CHAT_RATE_LIMIT", "3"),
            ("CHAT_RATE_WINDOW_SECS", "10"),
            ("CHAT_HISTORY_LIMIT", "5"),
            ("CHAT_LOG_FORMAT", "JSON"),
        ]);
        temp_env::with_vars(vars, || {
            let config = ChatConfig::from_env().unwrap();
            assert_eq!(config.database_url, "sqlite::memory:");
            assert_eq!(config.rate_limit, 3);
            assert_eq!(config.rate_window, Duration::from_secs(10));
            assert_eq!(config.history_limit, 5);
            assert_eq!(config.log_format, LogFormat::Json);
        });
    }

    #[test]
    fn test_malformed_number_is_config_error() {
        let vars = env_with(&[("CHAT_RATE_LIMIT", "lots")]);
        temp_env::with_vars(vars, || {
            let err = ChatConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(msg) if msg.contains("CHAT_RATE_LIMIT")));
        });
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let vars = env_with(&[("CHAT_RATE_LIMIT", "0")]);
        temp_env::with_vars(vars, || {
            assert!(matches!(ChatConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_zero_rate_window_rejected() {
        let vars = env_with(&[("CHAT_RATE_WINDOW_SECS", "0")]);
        temp_env::with_vars(vars, || {
            let err = ChatConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(msg) if msg.contains("CHAT_RATE_WINDOW_SECS")));
        });
    }

    #[test]
    fn test_response_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"rules":[{{"category":"greeting","keywords":["ahoy"],"responses":["Ahoy!"]}}],"fallback":["?"]}}"#
        )
        .unwrap();

        let config = ChatConfig {
            responses_path: Some(file.path().to_path_buf()),
            ..ChatConfig::default()
        };
        let table = config.response_table().unwrap();
        assert_eq!(table.resolve("ahoy there"), Category::Greeting);
        assert_eq!(table.resolve("hello"), Category::Fallback);
    }

    #[test]
    fn test_builtin_table_without_path() {
        let table = ChatConfig::default().response_table().unwrap();
        assert_eq!(table.priority_order().first(), Some(&Category::Pricing));
    }
}
