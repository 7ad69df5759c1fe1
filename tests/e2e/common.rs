//! Common test utilities for E2E tests
//!
//! The tests run against a local zkSync node (`anvil-zksync` or
//! `era_test_node`). Set `ZKSYNC_RPC_URL` to enable them; deployment tests
//! additionally need compiled artifacts under `UNTRON_ARTIFACTS`.

use alloy::network::AnyNetwork;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use untron_rs::{Artifacts, ContractKind, Submitter, DEFAULT_ARTIFACTS_DIR};

/// First rich account of the local zkSync node
const DEFAULT_PRIVATE_KEY: &str = "7726827caac94a7f9e1b160f7ea819f172f7b6f9d2a97f992c38edeab82d4110";

/// Macro to skip tests when ZKSYNC_RPC_URL is not set
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        if std::env::var("ZKSYNC_RPC_URL").is_err() {
            eprintln!("Skipping test: ZKSYNC_RPC_URL not set");
            return;
        }
    };
}

/// Macro to skip tests when the compiled contracts are not available
#[macro_export]
macro_rules! skip_if_no_artifacts {
    ($harness:expr) => {
        if !$harness.has_artifacts() {
            eprintln!("Skipping test: contract artifacts not found");
            return;
        }
    };
}

pub type TestProvider = DynProvider<AnyNetwork>;

/// Test harness holding a provider and a funded signer
pub struct TestHarness {
    pub provider: TestProvider,
    pub signer: PrivateKeySigner,
    pub artifacts: Artifacts,
}

impl TestHarness {
    /// Connects to ZKSYNC_RPC_URL
    ///
    /// Optional environment variables:
    /// - `ZKSYNC_PRIVATE_KEY`: signer key (default: the node's first rich account)
    /// - `UNTRON_ARTIFACTS`: artifact root (default: `../contracts/zkout`)
    pub fn new() -> Self {
        let rpc_url = std::env::var("ZKSYNC_RPC_URL").expect("ZKSYNC_RPC_URL must be set");
        let key = std::env::var("ZKSYNC_PRIVATE_KEY").unwrap_or_else(|_| DEFAULT_PRIVATE_KEY.to_string());
        let signer: PrivateKeySigner = key
            .trim_start_matches("0x")
            .parse()
            .expect("invalid ZKSYNC_PRIVATE_KEY");
        let artifacts =
            Artifacts::new(std::env::var("UNTRON_ARTIFACTS").unwrap_or_else(|_| DEFAULT_ARTIFACTS_DIR.to_string()));

        let provider = ProviderBuilder::new()
            .network::<AnyNetwork>()
            .connect_http(rpc_url.parse().expect("invalid ZKSYNC_RPC_URL"))
            .erased();

        Self {
            provider,
            signer,
            artifacts,
        }
    }

    /// Returns the signer address
    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    /// True when every artifact the deployment flows need is present
    pub fn has_artifacts(&self) -> bool {
        [ContractKind::UntronCore, ContractKind::Erc1967Proxy, ContractKind::MockUsdt]
            .into_iter()
            .all(|kind| self.artifacts.path(kind).exists())
    }

    /// Submitter for the harness signer
    pub async fn submitter(&self) -> Submitter<TestProvider> {
        Submitter::connect(self.provider.clone(), self.signer.clone())
            .await
            .expect("Failed to connect submitter")
    }

    /// Current confirmed nonce of the signer
    pub async fn nonce(&self) -> u64 {
        self.provider
            .get_transaction_count(self.signer_address())
            .await
            .expect("Failed to get nonce")
    }
}
