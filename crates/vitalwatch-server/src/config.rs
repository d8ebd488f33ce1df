//! Server configuration from the process environment plus an optional
//! `KEY=VALUE` file.
//!
//! The file only seeds keys the process environment does not already set.
//! Nothing is written back into the process environment; lookups go through
//! [`EnvSource`] instead.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use jiff::SignedDuration;
use tracing::{info, warn};

use vitalwatch_chat::config::{ChatConfig, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL};

pub const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_RATE_LIMIT_WINDOW_MS: i64 = 5 * 60 * 1000;
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5500,http://127.0.0.1:5500";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Names the file seeding the environment.
pub const ENV_FILE_VAR: &str = "VITALWATCH_ENV_FILE";

/// Parse one line of an env file.
///
/// Blank lines, `#` comments and lines without a key before `=` yield
/// `None`. One pair of matching surrounding quotes is stripped from the value.
pub fn parse_env_line(line: &str) -> Option<(String, String)> {
    let cleaned = line.trim();
    if cleaned.is_empty() || cleaned.starts_with('#') {
        return None;
    }
    let (key, value) = cleaned.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    let mut value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            value = &value[1..value.len() - 1];
            break;
        }
    }
    Some((key.to_string(), value.to_string()))
}

/// Read an env file. A missing file is an empty map.
pub fn load_env_file(path: &Path) -> io::Result<HashMap<String, String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(e),
    };
    Ok(content.lines().filter_map(parse_env_line).collect())
}

/// Merged view of file values overlaid by the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// File values first, then every process variable on top.
    pub fn load(env_file: &Path) -> Self {
        let mut vars = match load_env_file(env_file) {
            Ok(vars) => {
                if !vars.is_empty() {
                    info!(path = %env_file.display(), keys = vars.len(), "loaded env file");
                }
                vars
            }
            Err(e) => {
                warn!(path = %env_file.display(), error = %e, "could not read env file");
                HashMap::new()
            }
        };
        vars.extend(std::env::vars());
        Self { vars }
    }

    /// Value for `key`; blank values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            None => default,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(key, value = raw, "invalid configuration value, using default");
                default
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Static files are served from below this directory.
    pub root: PathBuf,
    pub chat: ChatConfig,
    pub rate_limit_window: SignedDuration,
    pub rate_limit_max_requests: u32,
    pub allowed_origins: Vec<String>,
    /// Optional PNG drawn as the report-card watermark.
    pub logo_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_source(&EnvSource::default())
    }
}

impl ServerConfig {
    /// Load `VITALWATCH_ENV_FILE` (default `.env`) and the process environment.
    pub fn from_env() -> Self {
        let env_file = std::env::var(ENV_FILE_VAR).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
        Self::from_source(&EnvSource::load(Path::new(&env_file)))
    }

    pub fn from_source(env: &EnvSource) -> Self {
        let window_ms = env.parse_or("CHAT_RATE_LIMIT_WINDOW_MS", DEFAULT_RATE_LIMIT_WINDOW_MS);
        let window_ms = if window_ms > 0 {
            window_ms
        } else {
            warn!(window_ms, "rate limit window must be positive, using default");
            DEFAULT_RATE_LIMIT_WINDOW_MS
        };

        let allowed_origins = env
            .get("ALLOWED_ORIGINS")
            .unwrap_or(DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            port: env.parse_or("PORT", DEFAULT_PORT),
            root: env
                .get("VITALWATCH_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            chat: ChatConfig {
                openai_api_key: env.get("OPENAI_API_KEY").map(str::to_string),
                openai_model: env
                    .get("OPENAI_MODEL")
                    .unwrap_or(DEFAULT_OPENAI_MODEL)
                    .to_string(),
                gemini_api_key: env.get("GEMINI_API_KEY").map(str::to_string),
                gemini_model: env
                    .get("GEMINI_MODEL")
                    .unwrap_or(DEFAULT_GEMINI_MODEL)
                    .to_string(),
            },
            rate_limit_window: SignedDuration::from_millis(window_ms),
            rate_limit_max_requests: env
                .parse_or("CHAT_RATE_LIMIT_MAX_REQUESTS", DEFAULT_RATE_LIMIT_MAX_REQUESTS),
            allowed_origins,
            logo_path: env.get("VITALWATCH_LOGO").map(PathBuf::from),
        }
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        let origin = origin.trim();
        self.allowed_origins.iter().any(|o| o == origin)
    }
}
