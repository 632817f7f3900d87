use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub supabase: Option<SupabaseConfig>,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(alias = "apikey", rename = "api_key")]
    #[serde(default)]
    pub api_key: String,
    #[serde(alias = "baseurl", rename = "base_url")]
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_tmdb_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    pub url: String,
    #[serde(alias = "anonkey", rename = "anon_key")]
    pub anon_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    #[serde(default = "default_supported_languages")]
    pub supported: Vec<String>,
    #[serde(default = "default_fallback_language")]
    pub fallback: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported: default_supported_languages(),
            fallback: default_fallback_language(),
        }
    }
}

/// Named caching tiers. Each value is a complete `Cache-Control` directive.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_detail")]
    pub detail: String,
    #[serde(default = "default_cache_list")]
    pub list: String,
    #[serde(default = "default_cache_search")]
    pub search: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            detail: default_cache_detail(),
            list: default_cache_list(),
            search: default_cache_search(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheClass {
    Detail,
    List,
    Search,
}

impl CacheConfig {
    pub fn directive(&self, class: CacheClass) -> &str {
        match class {
            CacheClass::Detail => &self.detail,
            CacheClass::List => &self.list,
            CacheClass::Search => &self.search,
        }
    }
}

fn default_port() -> String {
    "3000".to_string()
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_supported_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_fallback_language() -> String {
    "en".to_string()
}

fn default_cache_detail() -> String {
    "max-age=3600, s-maxage=86400, stale-while-revalidate=86400".to_string()
}

fn default_cache_list() -> String {
    "max-age=300, s-maxage=3600, stale-while-revalidate=3600".to_string()
}

fn default_cache_search() -> String {
    "max-age=60, s-maxage=300, stale-while-revalidate=300".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let mut config = Self::from_yaml(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        if config.tmdb.api_key.is_empty() {
            if let Ok(key) = std::env::var("TMDB_API_KEY") {
                config.tmdb.api_key = key;
            }
        }
        config.validate()?;

        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tmdb.api_key.is_empty() {
            return Err(ConfigError::Missing("tmdb.api_key"));
        }
        if self.i18n.supported.is_empty() {
            return Err(ConfigError::Missing("i18n.supported"));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Missing required setting {0}")]
    Missing(&'static str),
}
