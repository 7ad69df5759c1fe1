//! Conversion of command-line strings into on-chain values
//!
//! Every function here is pure: no I/O, deterministic output.

use alloy::primitives::{Address, Bytes, B256, U256};

use crate::contracts::Transfer;
use crate::error::{Error, Result};

/// Strips a leading `0x`/`0X` marker if present
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Parses a hex address in any letter case
pub fn parse_address(input: &str) -> Result<Address> {
    let invalid = |reason: String| Error::InvalidAddress {
        input: input.to_string(),
        reason,
    };

    let raw = hex::decode(strip_hex_prefix(input.trim())).map_err(|e| invalid(e.to_string()))?;
    if raw.len() != 20 {
        return Err(invalid(format!("expected 20 bytes, got {}", raw.len())));
    }
    Ok(Address::from_slice(&raw))
}

/// Parses a hex address and returns its EIP-55 checksummed form
pub fn to_checksum_address(input: &str) -> Result<String> {
    Ok(parse_address(input)?.to_checksum(None))
}

/// Parses a list of addresses, failing on the first malformed entry
pub fn parse_addresses(inputs: &[String]) -> Result<Vec<Address>> {
    inputs.iter().map(|a| parse_address(a)).collect()
}

/// Parses a base-10 unsigned integer
pub fn parse_uint(input: &str) -> Result<U256> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInteger {
            input: input.to_string(),
            reason: "expected base-10 digits".to_string(),
        });
    }
    U256::from_str_radix(digits, 10).map_err(|e| Error::InvalidInteger {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Decodes hex with or without the `0x` marker; empty input is empty bytes
pub fn parse_hex_bytes(input: &str) -> Result<Bytes> {
    hex::decode(strip_hex_prefix(input.trim()))
        .map(Bytes::from)
        .map_err(|e| Error::InvalidHex {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Prefixes `0x` to an identifier given as bare hex; no other validation
pub fn normalize_order_id(input: &str) -> String {
    if input.starts_with("0x") {
        input.to_string()
    } else {
        format!("0x{input}")
    }
}

/// Decodes a bytes32 value (order id, block id, hashes, verification key)
///
/// Input must decode to exactly 32 bytes. Short values are rejected with
/// `Error::InvalidBytes32`; they are never right-padded with zeros, even
/// though a lenient bytes32 encoder would accept them.
pub fn parse_bytes32(input: &str) -> Result<B256> {
    let normalized = normalize_order_id(input.trim());
    let raw = parse_hex_bytes(&normalized)?;
    if raw.len() != 32 {
        return Err(Error::InvalidBytes32 {
            input: input.to_string(),
            len: raw.len(),
        });
    }
    Ok(B256::from_slice(&raw))
}

/// Parses a list of bytes32 identifiers
pub fn parse_order_ids(inputs: &[String]) -> Result<Vec<B256>> {
    inputs.iter().map(|id| parse_bytes32(id)).collect()
}

/// Destination parameters attached to an order, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferIntent {
    /// Address receiving the funds on the destination chain
    pub recipient: String,
    /// Destination chain identifier
    pub chain_id: String,
    /// Across bridge fee
    pub across_fee: String,
    pub do_swap: bool,
    /// Token to swap into; the zero address when omitted
    pub out_token: Option<String>,
    pub min_output_per_usdt: String,
    pub fixed_output: bool,
    /// Raw swap payload in hex
    pub swap_data: String,
}

impl TransferIntent {
    /// Intent with every optional field at its default
    pub fn new(recipient: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            chain_id: chain_id.into(),
            across_fee: "0".to_string(),
            do_swap: false,
            out_token: None,
            min_output_per_usdt: "0".to_string(),
            fixed_output: false,
            swap_data: String::new(),
        }
    }

    /// Normalizes every field into the contract's `Transfer` struct
    pub fn build(&self) -> Result<Transfer> {
        let out_token = match self.out_token.as_deref() {
            Some(token) if !token.trim().is_empty() => parse_address(token)?,
            _ => Address::ZERO,
        };

        Ok(Transfer {
            recipient: parse_address(&self.recipient)?,
            chainId: parse_uint(&self.chain_id)?,
            acrossFee: parse_uint(&self.across_fee)?,
            doSwap: self.do_swap,
            outToken: out_token,
            minOutputPerUSDT: parse_uint(&self.min_output_per_usdt)?,
            fixedOutput: self.fixed_output,
            swapData: parse_hex_bytes(&self.swap_data)?,
        })
    }
}
