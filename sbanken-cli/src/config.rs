use anyhow::{Context, Result};
use sbanken_client::ApiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_sbanken_home, sbanken_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

pub fn config_path() -> Result<PathBuf> {
    Ok(sbanken_home()?.join("config.toml"))
}

/// `path` if given, else `~/.sbanken/config.toml`.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => config_path(),
    }
}

/// Load config from `path`, or `~/.sbanken/config.toml`. A missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = resolve_path(path)?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<()> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => ensure_sbanken_home()?.join("config.toml"),
    };
    if let Some(dir) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write a default config to `path` (or the home default) unless one exists.
/// Returns the path and whether it was written.
pub fn init_config(path: Option<&Path>) -> Result<(PathBuf, bool)> {
    let p = resolve_path(path)?;
    if p.exists() {
        return Ok((p, false));
    }
    save_config(&Config::default(), Some(&p))?;
    Ok((p, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_api_section() {
        let cfg = parse_config(
            r#"
[api]
api_base = "http://localhost:9000/api/v1"
timeout_secs = 3
"#,
        )
        .unwrap();

        assert_eq!(cfg.api.api_base, "http://localhost:9000/api/v1");
        assert_eq!(cfg.api.timeout_secs, 3);
        assert_eq!(cfg.api.identity_url, ApiConfig::default().identity_url);
    }

    #[test]
    fn test_init_and_load_share_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested").join("custom.toml");

        let (written, created) = init_config(Some(&p)).unwrap();
        assert_eq!(written, p);
        assert!(created);
        assert!(p.exists());
        assert_eq!(load_config(Some(&p)).unwrap(), Config::default());

        // existing file is left alone
        fs::write(&p, "[api]\ntimeout_secs = 42\n").unwrap();
        let (_, created) = init_config(Some(&p)).unwrap();
        assert!(!created);
        assert_eq!(load_config(Some(&p)).unwrap().api.timeout_secs, 42);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }
}
