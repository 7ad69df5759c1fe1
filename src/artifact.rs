//! Compiled contract artifacts (`zkout/` JSON files)

use std::fs;
use std::path::{Path, PathBuf};

use alloy::json_abi::JsonAbi;
use alloy::primitives::{Bytes, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::normalize::parse_hex_bytes;

/// Default artifact root, relative to the working directory
pub const DEFAULT_ARTIFACTS_DIR: &str = "../contracts/zkout";

/// The contracts this client knows how to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    UntronCore,
    Erc1967Proxy,
    MockUsdt,
}

impl ContractKind {
    /// Path of the artifact relative to the artifact root
    pub fn relative_path(self) -> &'static str {
        match self {
            ContractKind::UntronCore => "UntronCore.sol/UntronCore.json",
            ContractKind::Erc1967Proxy => "ERC1967Proxy.sol/ERC1967Proxy.json",
            ContractKind::MockUsdt => "UntronCore.t.sol/MockUSDT.json",
        }
    }

    /// Artifact file name, used in user-facing messages
    pub fn file_name(self) -> &'static str {
        match self {
            ContractKind::UntronCore => "UntronCore.json",
            ContractKind::Erc1967Proxy => "ERC1967Proxy.json",
            ContractKind::MockUsdt => "MockUSDT.json",
        }
    }
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
struct RawBytecode {
    object: String,
}

/// ABI and bytecode of one compiled contract
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parses an artifact document
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let raw: RawArtifact = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let bytecode = parse_hex_bytes(&raw.bytecode.object).map_err(|e| e.to_string())?;
        Ok(Self {
            abi: raw.abi,
            bytecode,
        })
    }

    /// Reads an artifact file
    pub fn load(path: &Path, name: &str) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ArtifactNotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::ArtifactMalformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let artifact = Self::from_json(&content).map_err(|reason| Error::ArtifactMalformed {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!(
            path = %path.display(),
            functions = artifact.abi.functions.len(),
            bytecode_len = artifact.bytecode.len(),
            "artifact loaded"
        );
        Ok(artifact)
    }

    /// Returns true if the ABI declares `name` with the given selector.
    ///
    /// Logs a warning when it does not, so a stale artifact is noticed before
    /// the call is sent with the compiled-in binding.
    pub fn check_method(&self, name: &str, selector: Selector) -> bool {
        let declared = self
            .abi
            .function(name)
            .is_some_and(|overloads| overloads.iter().any(|f| f.selector() == selector));
        if !declared {
            warn!(method = name, %selector, "artifact ABI does not declare this method");
        }
        declared
    }
}

/// Locates artifacts beneath a root directory
#[derive(Debug, Clone)]
pub struct Artifacts {
    root: PathBuf,
}

impl Default for Artifacts {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACTS_DIR)
    }
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of a contract's artifact
    pub fn path(&self, kind: ContractKind) -> PathBuf {
        self.root.join(kind.relative_path())
    }

    /// Loads a contract's artifact; a missing file is `Error::ArtifactNotFound`
    pub fn load(&self, kind: ContractKind) -> Result<ContractArtifact> {
        ContractArtifact::load(&self.path(kind), kind.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::IUntronCore;
    use alloy::sol_types::SolCall;

    const ARTIFACT: &str = r#"{
        "abi": [
            {
                "type": "function",
                "name": "blockId",
                "inputs": [],
                "outputs": [{ "name": "", "type": "bytes32", "internalType": "bytes32" }],
                "stateMutability": "view"
            }
        ],
        "bytecode": { "object": "0x0000000000000000000000000000000000000000000000000000000000000001" }
    }"#;

    #[test]
    fn test_parse_artifact() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.bytecode.len(), 32);
        assert_eq!(artifact.bytecode[31], 1);
        assert!(artifact.abi.function("blockId").is_some());
    }

    #[test]
    fn test_bytecode_without_prefix() {
        let content = ARTIFACT.replace("\"0x00", "\"00");
        let artifact = ContractArtifact::from_json(&content).unwrap();
        assert_eq!(artifact.bytecode.len(), 32);
    }

    #[test]
    fn test_check_method() {
        let artifact = ContractArtifact::from_json(ARTIFACT).unwrap();
        assert!(artifact.check_method("blockId", IUntronCore::blockIdCall::SELECTOR.into()));
        assert!(!artifact.check_method("stateHash", IUntronCore::stateHashCall::SELECTOR.into()));
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::new(dir.path());

        match artifacts.load(ContractKind::UntronCore) {
            Err(Error::ArtifactNotFound { name, path }) => {
                assert_eq!(name, "UntronCore.json");
                assert!(path.ends_with("UntronCore.sol/UntronCore.json"));
            }
            other => panic!("expected ArtifactNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::new(dir.path());
        let path = artifacts.path(ContractKind::MockUsdt);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, ARTIFACT).unwrap();

        let artifact = artifacts.load(ContractKind::MockUsdt).unwrap();
        assert_eq!(artifact.bytecode.len(), 32);
    }

    #[test]
    fn test_malformed_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::new(dir.path());
        let path = artifacts.path(ContractKind::Erc1967Proxy);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{ "abi": [] }"#).unwrap();

        assert!(matches!(
            artifacts.load(ContractKind::Erc1967Proxy),
            Err(Error::ArtifactMalformed { .. })
        ));
    }
}
