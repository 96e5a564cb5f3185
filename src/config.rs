use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::roster::field::{self, DetailField};
use crate::source::Endpoint;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "field::default_field_keys")]
    pub detail_fields: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_endpoint() -> String {
    "py4e".to_string()
}
fn default_theme() -> String {
    "rebel-purple".to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}
fn default_log_file() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("holonet")
        .join("holonet.log")
        .to_string_lossy()
        .to_string()
}

/// Settings given on the command line. Any that are set replace the value
/// read from the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub detail_fields: Option<Vec<String>>,
    pub theme: Option<String>,
    pub locale: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            detail_fields: field::default_field_keys(),
            theme: default_theme(),
            locale: default_locale(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("holonet")
            .join("config.toml")
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from_name(&self.endpoint)
    }

    pub fn detail_fields(&self) -> Vec<DetailField> {
        field::parse_field_list(&self.detail_fields)
    }

    /// A zero timeout would fail every request, so it is floored at one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log_file)
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(fields) = overrides.detail_fields {
            self.detail_fields = fields;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(timeout) = overrides.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
    }

    /// Reset `locale` to English when it names a locale we don't ship.
    pub fn normalize_locale<S: AsRef<str>>(&mut self, available: &[S]) {
        // Accept the common underscore spelling.
        let candidate = self.locale.replace('_', "-");
        match available
            .iter()
            .map(|loc| loc.as_ref())
            .find(|loc| loc.eq_ignore_ascii_case(&candidate))
        {
            Some(loc) => self.locale = loc.to_string(),
            None => self.locale = default_locale(),
        }
    }
}
