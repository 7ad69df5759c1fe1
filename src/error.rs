//! Error types for untron-rs

use std::path::PathBuf;

use alloy::primitives::TxHash;
use thiserror::Error;

/// Result type alias for untron-rs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the UntronCore contract
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read or write the configuration file
    #[error("Config file {}: {reason}", .path.display())]
    ConfigIo { path: PathBuf, reason: String },

    /// Configuration file is not valid JSON or has wrongly typed fields
    #[error("Invalid config file {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// A configuration field needed by the operation is absent
    #[error("Missing config field `{field}`")]
    MissingConfig { field: &'static str },

    /// Contract artifact file is absent
    #[error("Artifact file '{name}' not found at {}", .path.display())]
    ArtifactNotFound { name: String, path: PathBuf },

    /// Contract artifact exists but cannot be used
    #[error("Malformed artifact {}: {reason}", .path.display())]
    ArtifactMalformed { path: PathBuf, reason: String },

    /// Address string is not a 20-byte hex value
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    /// Integer string is not a base-10 unsigned number
    #[error("Invalid integer '{input}': {reason}")]
    InvalidInteger { input: String, reason: String },

    /// Hex string has odd length or non-hex characters
    #[error("Invalid hex '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Hex value does not fit into a bytes32 slot
    #[error("Invalid bytes32 '{input}': expected 32 bytes, got {len}")]
    InvalidBytes32 { input: String, len: usize },

    /// Private key could not be parsed
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Failed to connect to the RPC provider
    #[error("Provider error: {0}")]
    Provider(String),

    /// Failed to fetch data from the blockchain
    #[error("Failed to fetch {what}: {reason}")]
    Fetch { what: &'static str, reason: String },

    /// Gas estimation failed
    #[error("Gas estimation failed: {0}")]
    GasEstimation(String),

    /// Signature generation failed
    #[error("Failed to sign: {0}")]
    Signing(String),

    /// Bytecode cannot be deployed on zkSync
    #[error("Invalid bytecode: {0}")]
    InvalidBytecode(String),

    /// Broadcasting the signed transaction failed
    #[error("Failed to send transaction: {0}")]
    Broadcast(String),

    /// No receipt appeared within the polling window
    #[error("Transaction {tx_hash} was not confirmed within {timeout_secs}s")]
    ReceiptTimeout { tx_hash: TxHash, timeout_secs: u64 },

    /// Transaction was mined with a failed status
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// Deployment receipt carries no contract address
    #[error("Receipt for {0} has no contract address")]
    NoContractAddress(TxHash),
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>> for Error {
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::contract::Error> for Error {
    fn from(err: alloy::contract::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}
