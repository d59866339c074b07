//! Server settings read from the environment.
//!
//! Settings come from an optional `config/server.*` file overlaid with
//! `SALARY_ENGINE_*` variables. A `.env` file in the working directory is
//! loaded into the environment first.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Prefix of the server variables.
pub const ENV_PREFIX: &str = "SALARY_ENGINE";

/// Prefix of the Notion lead store variables.
pub const NOTION_ENV_PREFIX: &str = "NOTION";

/// Default Notion API root.
pub const NOTION_API_URL: &str = "https://api.notion.com";

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Salary guide directory; the builtin guide is used when unset.
    pub guide_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            guide_dir: None,
        }
    }
}

impl ServerConfig {
    /// Loads `.env`, then reads `SALARY_ENGINE_HOST`, `SALARY_ENGINE_PORT`
    /// and `SALARY_ENGINE_GUIDE_DIR`.
    pub fn from_env() -> EngineResult<Self> {
        dotenvy::dotenv().ok();
        from_environment(ENV_PREFIX, None)
    }

    /// Loads the given env file into the environment, then reads the settings.
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        load_env_file(path.as_ref())?;
        from_environment(ENV_PREFIX, None)
    }

    /// Reads the settings from the given variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        from_environment(ENV_PREFIX, Some(collect_vars(vars)))
    }

    /// Returns the `host:port` bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Credentials for the Notion-backed lead store.
#[derive(Clone, PartialEq, Eq)]
pub struct NotionConfig {
    /// Integration token.
    pub api_key: String,
    /// Database holding one page per lead.
    pub database_id: String,
    /// API root; overridden in tests.
    pub base_url: String,
}

impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct NotionVars {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    database_id: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
}

impl NotionConfig {
    /// Creates settings against the public Notion API.
    pub fn new(api_key: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            database_id: database_id.into(),
            base_url: NOTION_API_URL.to_string(),
        }
    }

    /// Points the store at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads `NOTION_API_KEY` and `NOTION_DATABASE_ID` (and optionally
    /// `NOTION_BASE_URL`) from the environment.
    ///
    /// Returns `None` unless both the key and the database id are set.
    pub fn from_env() -> EngineResult<Option<Self>> {
        dotenvy::dotenv().ok();
        Self::from_notion_vars(from_environment(NOTION_ENV_PREFIX, None)?)
    }

    /// Reads the settings from the given variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> EngineResult<Option<Self>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_notion_vars(from_environment(
            NOTION_ENV_PREFIX,
            Some(collect_vars(vars)),
        )?)
    }

    fn from_notion_vars(vars: NotionVars) -> EngineResult<Option<Self>> {
        let (Some(api_key), Some(database_id)) = (vars.api_key, vars.database_id) else {
            return Ok(None);
        };
        let config = Self::new(api_key.trim(), database_id.trim());
        Ok(Some(match vars.base_url {
            Some(base_url) => config.with_base_url(base_url.trim()),
            None => config,
        }))
    }
}

fn collect_vars<I, K, V>(vars: I) -> config::Map<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

fn load_env_file(path: &Path) -> EngineResult<()> {
    if !path.exists() {
        return Err(EngineError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }
    dotenvy::from_path(path).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn from_environment<T: DeserializeOwned>(
    prefix: &str,
    vars: Option<config::Map<String, String>>,
) -> EngineResult<T> {
    config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(
            config::Environment::with_prefix(prefix)
                .ignore_empty(true)
                .source(vars),
        )
        .build()
        .and_then(|cfg| cfg.try_deserialize())
        .map_err(|e| EngineError::ConfigParseError {
            path: format!("{}_*", prefix),
            message: e.to_string(),
        })
}
