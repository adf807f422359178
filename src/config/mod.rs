use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{NewsError, NewsResult};
use crate::sources::google_news::DEFAULT_BASE_URL;

pub const DEFAULT_PLACEHOLDER_PATH: &str = "./Meta/no_image.png";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub placeholder_path: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
    pub feed_base_url: String,
    pub summary_sentences: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder_path: PathBuf::from(DEFAULT_PLACEHOLDER_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("innews/{}", env!("CARGO_PKG_VERSION")),
            feed_base_url: DEFAULT_BASE_URL.to_string(),
            summary_sentences: crate::enrich::summarizer::DEFAULT_SENTENCES,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> NewsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("INNEWS_PLACEHOLDER_PATH") {
            config.placeholder_path = PathBuf::from(path);
        }

        if let Some(secs) = parse_positive::<u64>(&lookup, "INNEWS_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(user_agent) = lookup("INNEWS_USER_AGENT").filter(|s| !s.trim().is_empty()) {
            config.user_agent = user_agent;
        }

        if let Some(base_url) = lookup("INNEWS_FEED_BASE_URL") {
            url::Url::parse(&base_url).map_err(|e| {
                NewsError::Config(format!("INNEWS_FEED_BASE_URL is not a valid URL: {}", e))
            })?;
            config.feed_base_url = base_url;
        }

        if let Some(sentences) = parse_positive::<usize>(&lookup, "INNEWS_SUMMARY_SENTENCES")? {
            config.summary_sentences = sentences;
        }

        Ok(config)
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> NewsResult<Option<T>>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(NewsError::Config(format!(
            "{} must be a positive integer, got '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.placeholder_path, PathBuf::from("./Meta/no_image.png"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.feed_base_url, "https://news.google.com");
        assert_eq!(config.summary_sentences, 5);
        assert!(config.user_agent.starts_with("innews/"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("INNEWS_PLACEHOLDER_PATH", "/srv/assets/none.png"),
            ("INNEWS_TIMEOUT_SECS", "3"),
            ("INNEWS_FEED_BASE_URL", "http://localhost:9000"),
            ("INNEWS_SUMMARY_SENTENCES", "2"),
        ]))
        .unwrap();

        assert_eq!(config.placeholder_path, PathBuf::from("/srv/assets/none.png"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.feed_base_url, "http://localhost:9000");
        assert_eq!(config.summary_sentences, 2);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_lookup(lookup(&[("INNEWS_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("INNEWS_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(Config::from_lookup(lookup(&[("INNEWS_FEED_BASE_URL", "news")])).is_err());
    }
}
