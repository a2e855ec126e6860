use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::HostError;

/// Host settings: defaults, then optional `ecosync.toml`, then `ECOSYNC_*`
/// variables, then CLI flags.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    pub dist: PathBuf,
    pub bind: String,
    pub request_timeout_secs: u64,
}

/// Shared by every handler
#[derive(Debug, Clone)]
pub struct HostState {
    pub dist: PathBuf,
    pub index: PathBuf,
    pub bind: String,
    pub request_timeout: Duration,
}

impl HostConfig {
    pub fn load() -> Result<Self, HostError> {
        let config = Config::builder()
            .set_default("dist", "workspace/frontend/dist")?
            .set_default("bind", "0.0.0.0:3000")?
            .set_default("request_timeout_secs", 30)?
            .add_source(File::with_name("ecosync").required(false))
            .add_source(Environment::with_prefix("ECOSYNC"))
            .build()?;

        let loaded: HostConfig = config.try_deserialize()?;
        tracing::debug!(?loaded, "Loaded host configuration");
        Ok(loaded)
    }

    pub fn with_overrides(mut self, dist: Option<String>, bind: Option<String>) -> Self {
        if let Some(dist) = dist {
            self.dist = PathBuf::from(dist);
        }
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }

    pub fn index_file(&self) -> Result<PathBuf, HostError> {
        if !self.dist.is_dir() {
            return Err(HostError::MissingBundle(self.dist.clone()));
        }
        let index = self.dist.join("index.html");
        if !index.is_file() {
            return Err(HostError::MissingIndex(self.dist.clone()));
        }
        Ok(index)
    }

    pub fn into_state(self) -> Result<HostState, HostError> {
        let index = self.index_file()?;
        Ok(HostState {
            dist: self.dist,
            index,
            bind: self.bind,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dist: PathBuf) -> HostConfig {
        HostConfig {
            dist,
            bind: "127.0.0.1:0".to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let config = config_for(PathBuf::from("a")).with_overrides(Some("b".to_string()), None);
        assert_eq!(config.dist, PathBuf::from("b"));
        assert_eq!(config.bind, "127.0.0.1:0");

        let config = config.with_overrides(None, Some("0.0.0.0:9000".to_string()));
        assert_eq!(config.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_missing_bundle_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = config_for(missing).index_file().unwrap_err();
        assert!(matches!(err, HostError::MissingBundle(_)));
    }

    #[test]
    fn test_bundle_without_index_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = config_for(dir.path().to_path_buf()).into_state().unwrap_err();
        assert!(matches!(err, HostError::MissingIndex(_)));
    }

    #[test]
    fn test_state_from_valid_bundle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let state = config_for(dir.path().to_path_buf()).into_state().unwrap();
        assert_eq!(state.index, dir.path().join("index.html"));
        assert_eq!(state.request_timeout, Duration::from_secs(5));
    }
}
