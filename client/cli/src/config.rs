use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use zosfiles::{Protocol, Session};

const DEFAULT_PORT: u16 = 443;

/// Connection settings, read from `config.toml` and overridden by
/// `ZOSMF_*` environment variables and command line flags, in that order.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<Protocol>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub base_path: Option<String>,
    pub reject_unauthorized: Option<bool>,
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "zowe", "zfiles")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or the default location. A missing file is an empty config.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(host) = var("ZOSMF_HOST") {
            self.host = Some(host);
        }
        if let Some(port) = var("ZOSMF_PORT") {
            self.port = Some(
                port.parse()
                    .map_err(|_| anyhow::anyhow!("ZOSMF_PORT is not a valid port: {}", port))?,
            );
        }
        if let Some(protocol) = var("ZOSMF_PROTOCOL") {
            self.protocol = Some(protocol.parse().map_err(|e: String| anyhow::anyhow!(e))?);
        }
        if let Some(user) = var("ZOSMF_USER") {
            self.user = Some(user);
        }
        if let Some(password) = var("ZOSMF_PASSWORD") {
            self.password = Some(password);
        }
        if let Some(base_path) = var("ZOSMF_BASE_PATH") {
            self.base_path = Some(base_path);
        }
        if let Some(reject) = var("ZOSMF_REJECT_UNAUTHORIZED") {
            self.reject_unauthorized = Some(reject.parse().map_err(|_| {
                anyhow::anyhow!("ZOSMF_REJECT_UNAUTHORIZED must be true or false: {}", reject)
            })?);
        }
        Ok(())
    }

    pub fn to_session(&self) -> anyhow::Result<Session> {
        let host = self
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| anyhow::anyhow!("No z/OSMF host configured. Set --host or ZOSMF_HOST"))?;

        let mut session = Session::new(host, self.port.unwrap_or(DEFAULT_PORT))
            .with_protocol(self.protocol.unwrap_or_default())
            .with_reject_unauthorized(self.reject_unauthorized.unwrap_or(true));
        if let Some(user) = &self.user {
            session = session.with_basic_auth(user, self.password.clone().unwrap_or_default());
        }
        if let Some(base_path) = &self.base_path {
            session = session.with_base_path(base_path);
        }
        Ok(session)
    }
}
