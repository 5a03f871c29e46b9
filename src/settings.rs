//! Runtime settings resolved once at startup.
//!
//! The configuration directory and the publish endpoint are looked up here and
//! then passed explicitly to the components that need them; nothing else reads
//! the home directory or the environment.
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::error::AxypeError;

/// Directory name created under the user's home directory.
pub const CONFIG_DIR_NAME: &str = ".axype";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "AXYPE_CONFIG_DIR";

/// Environment variable overriding the publish endpoint.
pub const API_URL_ENV: &str = "AXYPE_API_URL";

/// Endpoint that receives paste sources.
pub const DEFAULT_API_URL: &str = "https://axype.darkceius.dev/api/setSource";

/// Source file published when `publish` is given no path.
pub const DEFAULT_PUBLISH_PATH: &str = "output/server.luau";

/// Settings shared by the credential and publish commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the `secret` credential file.
    pub config_dir: PathBuf,
    /// URL the publish request is POSTed to.
    pub api_url: String,
}

impl Settings {
    /// Resolve settings from CLI flags, then environment variables, then defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::NoHomeDirectory`] if no configuration directory was
    /// given and the home directory cannot be determined.
    pub fn resolve(global: &GlobalOpts) -> Result<Self, AxypeError> {
        Self::resolve_with(global, |key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Resolution with injectable environment lookup and home directory.
    ///
    /// Empty environment values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::NoHomeDirectory`] when every source is absent.
    pub fn resolve_with(
        global: &GlobalOpts,
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self, AxypeError> {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let config_dir = match (&global.config_dir, lookup(CONFIG_DIR_ENV)) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => PathBuf::from(dir),
            (None, None) => home
                .map(|h| h.join(CONFIG_DIR_NAME))
                .ok_or(AxypeError::NoHomeDirectory)?,
        };

        let api_url = global
            .api_url
            .clone()
            .or_else(|| lookup(API_URL_ENV))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            config_dir,
            api_url,
        })
    }
}
