//! Site settings, layered from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. `portfolio.toml` in the working directory, or an explicit file
//! 3. `CONTACT_ENDPOINT`
//! 4. `PORTFOLIO__*` environment variables
//! 5. Command-line overrides

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "portfolio.toml";
pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const ENV_PREFIX: &str = "PORTFOLIO";
pub const ENDPOINT_ALIAS_VAR: &str = "CONTACT_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteSettings {
    /// Absolute http(s) URL receiving contact submissions, if any.
    #[serde(default)]
    pub contact_endpoint: Option<String>,
    pub assets_dir: PathBuf,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            contact_endpoint: None,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl SiteSettings {
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint.as_deref()
    }

    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(relative.trim_start_matches('/'))
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Source(#[from] ConfigError),
    #[error("invalid contact endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

#[derive(Debug, Clone)]
enum SettingsFile {
    None,
    Optional(PathBuf),
    Required(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SettingsLoader {
    file: SettingsFile,
    environment: Option<HashMap<String, String>>,
    endpoint_override: Option<String>,
    assets_dir_override: Option<PathBuf>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Reads `portfolio.toml` from the working directory when present, and the
    /// process environment.
    pub fn new() -> Self {
        Self {
            file: SettingsFile::Optional(PathBuf::from(DEFAULT_SETTINGS_FILE)),
            environment: None,
            endpoint_override: None,
            assets_dir_override: None,
        }
    }

    /// Uses `path` instead of the default file; it must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = SettingsFile::Required(path.as_ref().to_path_buf());
        self
    }

    pub fn without_file(mut self) -> Self {
        self.file = SettingsFile::None;
        self
    }

    /// Replaces the process environment with `vars`.
    pub fn with_environment(mut self, vars: HashMap<String, String>) -> Self {
        self.environment = Some(vars);
        self
    }

    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        self.endpoint_override = endpoint;
        self
    }

    pub fn with_assets_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        self.assets_dir_override = dir;
        self
    }

    pub fn load(&self) -> Result<SiteSettings, SettingsError> {
        let mut builder = Config::builder().set_default("assets_dir", DEFAULT_ASSETS_DIR)?;

        match &self.file {
            SettingsFile::None => {}
            SettingsFile::Optional(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
            SettingsFile::Required(path) => {
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
        }

        if let Some(alias) = self.alias_endpoint() {
            builder = builder.add_source(
                Environment::default()
                    .source(Some(HashMap::from([(ENDPOINT_ALIAS_VAR.to_string(), alias)])))
                    .ignore_empty(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .ignore_empty(true)
                .source(self.environment.clone()),
        );

        if let Some(endpoint) = self.endpoint_override.as_deref().filter(|e| !e.trim().is_empty()) {
            builder = builder.set_override("contact_endpoint", endpoint)?;
        }
        if let Some(dir) = &self.assets_dir_override {
            builder = builder.set_override("assets_dir", dir.to_string_lossy().into_owned())?;
        }

        let mut settings: SiteSettings = builder.build()?.try_deserialize()?;
        settings.contact_endpoint = normalize_endpoint(settings.contact_endpoint)?;
        tracing::debug!(
            contact_endpoint = settings.contact_endpoint.as_deref().unwrap_or("<none>"),
            assets_dir = %settings.assets_dir.display(),
            "settings loaded"
        );
        Ok(settings)
    }

    fn alias_endpoint(&self) -> Option<String> {
        match &self.environment {
            Some(vars) => vars.get(ENDPOINT_ALIAS_VAR).cloned(),
            None => std::env::var(ENDPOINT_ALIAS_VAR).ok(),
        }
    }
}

/// Trims the endpoint, drops blank values, and rejects anything that is not an
/// absolute http(s) URL with a host.
pub fn normalize_endpoint(raw: Option<String>) -> Result<Option<String>, SettingsError> {
    let Some(value) = raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let invalid = |reason: String| SettingsError::InvalidEndpoint {
        value: value.clone(),
        reason,
    };

    let url = Url::parse(&value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(Some(value))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
