//! Client configuration file
//!
//! The configuration is a small JSON document:
//!
//! ```json
//! {
//!     "untron_core_address": "0x...",
//!     "zksync_rpc": "https://sepolia.era.zksync.dev",
//!     "private_key": "0x..."
//! }
//! ```
//!
//! It is loaded once at startup and passed explicitly to everything that
//! needs it. `untron_core_address` is the only field this crate ever writes
//! back, after a successful deployment.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Deserializer};
use tracing::info;
use url::Url;

use crate::error::{Error, Result};

/// Default configuration file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Runtime configuration for talking to a deployed UntronCore
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Address of the UntronCore proxy (absent before the first deployment)
    #[serde(default, deserialize_with = "empty_as_none")]
    pub untron_core_address: Option<Address>,
    /// zkSync JSON-RPC endpoint
    #[serde(default, deserialize_with = "empty_as_none")]
    pub zksync_rpc: Option<Url>,
    /// Hex-encoded signer key
    #[serde(default, deserialize_with = "empty_as_none")]
    pub private_key: Option<String>,
}

impl Config {
    /// Reads the configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigIo {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| Error::ConfigParse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses configuration JSON
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Sets `untron_core_address` in the file at `path`
    ///
    /// The file is re-read as a raw JSON document and only that key is
    /// replaced. Overrides applied to a loaded `Config` never reach the disk.
    pub fn write_core_address(path: impl AsRef<Path>, address: Address) -> Result<()> {
        let path = path.as_ref();
        let io_error = |reason: String| Error::ConfigIo {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| io_error(e.to_string()))?;
        let mut document: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        document.insert(
            "untron_core_address".to_string(),
            serde_json::Value::String(address.to_checksum(None)),
        );

        let content = serde_json::to_string_pretty(&document).map_err(|e| io_error(e.to_string()))?;
        fs::write(path, content + "\n").map_err(|e| io_error(e.to_string()))?;
        info!(path = %path.display(), %address, "config written");
        Ok(())
    }

    /// Replaces the RPC endpoint when an override is given
    pub fn with_rpc_url(mut self, rpc_url: Option<Url>) -> Self {
        if rpc_url.is_some() {
            self.zksync_rpc = rpc_url;
        }
        self
    }

    /// Returns the RPC endpoint or a missing-field error
    pub fn rpc_url(&self) -> Result<&Url> {
        self.zksync_rpc
            .as_ref()
            .ok_or(Error::MissingConfig { field: "zksync_rpc" })
    }

    /// Returns the UntronCore address or a missing-field error
    pub fn core_address(&self) -> Result<Address> {
        self.untron_core_address.ok_or(Error::MissingConfig {
            field: "untron_core_address",
        })
    }

    /// Returns the signer key or a missing-field error
    pub fn private_key(&self) -> Result<&str> {
        self.private_key
            .as_deref()
            .ok_or(Error::MissingConfig { field: "private_key" })
    }
}

/// Treats a missing, `null` or blank string as `None`
fn empty_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const SAMPLE: &str = r#"{
        "untron_core_address": "0x5fbdb2315678afecb367f032d93f642f64180aa3",
        "zksync_rpc": "http://127.0.0.1:8011",
        "private_key": "0x7726827caac94a7f9e1b160f7ea819f172f7b6f9d2a97f992c38edeab82d4110"
    }"#;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(SAMPLE).unwrap();

        assert_eq!(
            config.core_address().unwrap(),
            address!("0x5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://127.0.0.1:8011/");
        assert!(config.private_key().unwrap().starts_with("0x7726"));
    }

    #[test]
    fn test_blank_address_is_missing() {
        let config = Config::parse(
            r#"{ "untron_core_address": "", "zksync_rpc": "http://localhost:3050" }"#,
        )
        .unwrap();

        assert!(config.untron_core_address.is_none());
        assert!(matches!(
            config.core_address(),
            Err(Error::MissingConfig {
                field: "untron_core_address"
            })
        ));
        assert!(matches!(
            config.private_key(),
            Err(Error::MissingConfig { field: "private_key" })
        ));
    }

    #[test]
    fn test_malformed_address_is_rejected() {
        let result = Config::parse(r#"{ "untron_core_address": "0x1234" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rpc_override() {
        let config = Config::parse(SAMPLE)
            .unwrap()
            .with_rpc_url(Some("http://localhost:3050".parse().unwrap()));
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://localhost:3050/");

        let config = Config::parse(SAMPLE).unwrap().with_rpc_url(None);
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://127.0.0.1:8011/");
    }

    #[test]
    fn test_write_core_address_keeps_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "untron_core_address": "", "zksync_rpc": "http://localhost:3050", "private_key": "", "note": "keep me" }"#,
        )
        .unwrap();

        // an override on the loaded value must not leak into the file
        let config = Config::load(&path)
            .unwrap()
            .with_rpc_url(Some("http://override:8011".parse().unwrap()));
        assert_eq!(config.rpc_url().unwrap().as_str(), "http://override:8011/");

        let proxy = address!("0x1111111111111111111111111111111111111111");
        Config::write_core_address(&path, proxy).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["untron_core_address"], proxy.to_checksum(None));
        assert_eq!(raw["zksync_rpc"], "http://localhost:3050");
        assert_eq!(raw["private_key"], "");
        assert_eq!(raw["note"], "keep me");
        assert_eq!(raw.as_object().unwrap().len(), 4);

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.untron_core_address, Some(proxy));
    }

    #[test]
    fn test_write_core_address_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::write_core_address(dir.path().join("absent.json"), Address::ZERO);
        assert!(matches!(result, Err(Error::ConfigIo { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::ConfigIo { .. })));
    }
}
