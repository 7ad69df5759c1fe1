use alloy::signers::local::PrivateKeySigner;
use color_eyre::eyre::{eyre, Result};
use untron_rs::Config;

use crate::cli::WalletArgs;

pub fn create_signer(args: &WalletArgs, config: &Config) -> Result<PrivateKeySigner> {
    // Priority: interactive > private_key flag > config
    if args.interactive {
        let key = rpassword::prompt_password("Enter private key: ")?;
        parse_private_key(&key)
    } else if let Some(private_key) = &args.private_key {
        parse_private_key(private_key)
    } else if let Some(private_key) = &config.private_key {
        parse_private_key(private_key)
    } else {
        Err(eyre!(
            "No wallet specified. Set private_key in the config, or use --private-key or --interactive"
        ))
    }
}

fn parse_private_key(key: &str) -> Result<PrivateKeySigner> {
    let key = key.trim();
    // Strip 0x prefix if present
    let key = key.strip_prefix("0x").unwrap_or(key);

    key.parse::<PrivateKeySigner>()
        .map_err(|e| eyre!(untron_rs::Error::InvalidPrivateKey(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x7726827caac94a7f9e1b160f7ea819f172f7b6f9d2a97f992c38edeab82d4110";

    fn wallet(private_key: Option<&str>) -> WalletArgs {
        WalletArgs {
            private_key: private_key.map(str::to_string),
            interactive: false,
        }
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            private_key: Some("0x01".to_string()),
            ..Default::default()
        };
        let signer = create_signer(&wallet(Some(KEY)), &config).unwrap();
        let expected: PrivateKeySigner = KEY.trim_start_matches("0x").parse().unwrap();
        assert_eq!(signer.address(), expected.address());
    }

    #[test]
    fn test_falls_back_to_config() {
        let config = Config {
            private_key: Some(KEY.to_string()),
            ..Default::default()
        };
        assert!(create_signer(&wallet(None), &config).is_ok());
    }

    #[test]
    fn test_no_key_anywhere() {
        assert!(create_signer(&wallet(None), &Config::default()).is_err());
    }

    #[test]
    fn test_invalid_key() {
        assert!(create_signer(&wallet(Some("0xnothex")), &Config::default()).is_err());
    }
}
