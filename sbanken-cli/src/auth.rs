use anyhow::{Context, Result, bail};
use sbanken_client::Credentials;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::sbanken_home;

pub fn credentials_path() -> Result<PathBuf> {
    Ok(sbanken_home()?.join("credentials.json"))
}

/// Read `{"apikey": ..., "secret": ...}` from `path`, or `~/.sbanken/credentials.json`.
pub fn load_credentials(path: Option<&Path>) -> Result<Credentials> {
    let p = match path {
        Some(p) => p.to_path_buf(),
        None => credentials_path()?,
    };
    if !p.exists() {
        bail!(
            "credentials not found: {} (pass --credentials <file>)",
            p.display()
        );
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_credentials(&s).with_context(|| format!("parse {}", p.display()))
}

fn parse_credentials(s: &str) -> Result<Credentials> {
    let cred: Credentials = serde_json::from_str(s)?;
    if cred.apikey.is_empty() || cred.secret.is_empty() {
        bail!("credentials need both apikey and secret");
    }
    Ok(cred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        let cred = parse_credentials(r#"{"apikey": "abc", "secret": "s3cret"}"#).unwrap();
        assert_eq!(cred.apikey, "abc");
        assert_eq!(cred.secret, "s3cret");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let err = parse_credentials(r#"{"apikey": "abc"}"#).unwrap_err();
        assert!(err.to_string().contains("apikey and secret"));
    }
}
