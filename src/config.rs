//! Process configuration loaded from the environment (and `.env`).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPLATE_PATH: &str = "template.txt";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Settings for the chat-completion endpoint.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// No timeout is applied when unset; the request runs until the service answers.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub template_path: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let timeout = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                    name: "OPENAI_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            completion: CompletionConfig {
                api_key,
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout,
            },
            template_path: get("TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingVar("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let result = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")]));
        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
        assert_eq!(config.completion.timeout, None);
        assert_eq!(config.template_path, PathBuf::from("template.txt"));
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_BASE_URL", "http://localhost:1234/v1/"),
            ("OPENAI_TIMEOUT_SECS", "30"),
            ("TEMPLATE_PATH", "/etc/judgment/template.txt"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.completion.base_url, "http://localhost:1234/v1");
        assert_eq!(config.completion.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.template_path, PathBuf::from("/etc/judgment/template.txt"));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "eighty"),
        ]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidVar {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-secret-123")])).unwrap();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("CompletionConfig"));
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("sk-secret-123"));
    }
}
