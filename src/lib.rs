//! # untron-rs
//!
//! A Rust client for the UntronCore contract on zkSync.
//!
//! ## Features
//!
//! - zkSync EIP-712 transactions signed locally and broadcast raw
//! - Contract creation through the zkSync ContractDeployer (`create`/`create2`)
//! - Typed reads of UntronCore state
//! - Normalization of command-line strings into contract arguments
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use untron_rs::{Config, Submitter, UntronCore, TransferIntent};
//! use alloy::network::AnyNetwork;
//! use alloy::providers::ProviderBuilder;
//!
//! let config = Config::load("config.json")?;
//! let provider = ProviderBuilder::new()
//!     .network::<AnyNetwork>()
//!     .connect_http(config.rpc_url()?.clone());
//!
//! let core = UntronCore::new(config.core_address()?, provider.clone());
//! println!("blockId: {}", core.block_id().await?);
//!
//! let submitter = Submitter::connect(provider, signer).await?;
//! let transfer = TransferIntent::new(recipient, "1").build()?;
//! let submitted = core
//!     .create_order(&submitter, provider_addr, receiver, size, rate, transfer)
//!     .await?;
//! println!("{}", submitted.tx_hash());
//! ```

pub mod artifact;
pub mod client;
pub mod config;
pub mod contracts;
pub mod deploy;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod zksync;

// Re-export main types at crate root
pub use artifact::{Artifacts, ContractArtifact, ContractKind, DEFAULT_ARTIFACTS_DIR};
pub use client::{CoreVariables, ProviderSettings, UntronCore};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use contracts::{IContractDeployer, IMockUSDT, IUntronCore, Transfer, CONTRACT_DEPLOYER_ADDRESS};
pub use deploy::{deploy_mock_usdt, deploy_untron_core, mint_mock_usdt, proxy_constructor_input, CoreDeployment, Deployment};
pub use error::{Error, Result};
pub use normalize::TransferIntent;
pub use pipeline::{BuiltTransaction, PreparedTransaction, ReceiptPolicy, Submission, Submitted, Submitter};
pub use types::{FulfillerTotal, OrderDetails, ProviderDetails, TransferDetails};

// Re-export alloy types that are commonly used
pub use alloy::network::AnyNetwork;
pub use alloy::primitives::{Address, Bytes, B256, U256};
pub use alloy::providers::Provider;
