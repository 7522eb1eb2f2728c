//! Application configuration
//!
//! Read once at startup from the environment; a `.env` file is honored in
//! development via dotenvy.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `QUICKMART_DATA_DIR` | Session store directory override | app data dir |
//! | `QUICKMART_LANGUAGE` | Default UI language tag | `en` |
//! | `QUICKMART_PRINT_TIMEOUT_SECS` | Receipt load wait bound | `15` |

use std::path::PathBuf;
use std::time::Duration;

use shared::i18n::Language;

const DEFAULT_PRINT_TIMEOUT_SECS: u64 = 15;

/// Startup configuration for the shell
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Override for the session data directory
    pub data_dir: Option<PathBuf>,
    /// Language used when a command does not pass one
    pub default_language: Language,
    /// Bound on the receipt document load wait
    pub print_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            data_dir: std::env::var("QUICKMART_DATA_DIR").ok().map(PathBuf::from),
            default_language: std::env::var("QUICKMART_LANGUAGE")
                .map(|tag| Language::from_tag(&tag))
                .unwrap_or_default(),
            print_timeout: parse_timeout(std::env::var("QUICKMART_PRINT_TIMEOUT_SECS").ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_language: Language::En,
            print_timeout: Duration::from_secs(DEFAULT_PRINT_TIMEOUT_SECS),
        }
    }
}

fn parse_timeout(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_PRINT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
