//! zkSync EIP-712 transactions (type `0x71`)
//!
//! A transaction is built unsigned with a zero gas limit, backfilled from
//! `eth_estimateGas`, signed over its typed-data hash and finally serialized
//! into the RLP envelope accepted by `eth_sendRawTransaction`.

use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::rlp::{Encodable, Header};
use alloy::signers::Signer;
use alloy::sol_types::{eip712_domain, Eip712Domain, SolStruct};
use serde::Serialize;

use super::bytecode::hash_bytecode;
use crate::error::Result;

/// Transaction type byte of zkSync EIP-712 transactions
pub const EIP712_TX_TYPE: u8 = 0x71;

/// Default pubdata price limit attached to every transaction
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;

mod typed {
    alloy::sol! {
        struct Transaction {
            uint256 txType;
            uint256 from;
            uint256 to;
            uint256 gasLimit;
            uint256 gasPerPubdataByteLimit;
            uint256 maxFeePerGas;
            uint256 maxPriorityFeePerGas;
            uint256 paymaster;
            uint256 nonce;
            uint256 value;
            bytes data;
            bytes32[] factoryDeps;
            bytes paymasterInput;
        }
    }
}

/// Typed-data domain for a zkSync chain
pub fn domain(chain_id: u64) -> Eip712Domain {
    eip712_domain! {
        name: "zkSync",
        version: "2",
        chain_id: chain_id,
    }
}

fn address_word(address: Address) -> U256 {
    U256::from_be_slice(address.as_slice())
}

/// Unsigned zkSync transaction
///
/// Value transfers, paymasters and priority fees are never used by this
/// client and are fixed to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Transaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub from: Address,
    pub to: Address,
    /// Zero until filled from gas estimation
    pub gas_limit: U256,
    /// Used as `maxFeePerGas`
    pub gas_price: u128,
    pub gas_per_pubdata: U256,
    pub data: Bytes,
    /// Raw bytecodes published alongside the transaction
    pub factory_deps: Vec<Bytes>,
}

impl Eip712Transaction {
    /// Creates a call transaction with a zero gas limit placeholder
    pub fn new(chain_id: u64, nonce: u64, from: Address, to: Address, gas_price: u128, data: Bytes) -> Self {
        Self {
            chain_id,
            nonce,
            from,
            to,
            gas_limit: U256::ZERO,
            gas_price,
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            data,
            factory_deps: Vec::new(),
        }
    }

    /// Attaches bytecodes to publish with the transaction
    pub fn with_factory_deps(mut self, factory_deps: Vec<Bytes>) -> Self {
        self.factory_deps = factory_deps;
        self
    }

    /// Sets the gas limit
    pub fn with_gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Versioned hashes of the factory dependencies
    pub fn factory_dep_hashes(&self) -> Result<Vec<B256>> {
        self.factory_deps.iter().map(|dep| hash_bytecode(dep)).collect()
    }

    /// Computes the EIP-712 hash the sender signs
    pub fn signing_hash(&self) -> Result<B256> {
        let typed = typed::Transaction {
            txType: U256::from(EIP712_TX_TYPE),
            from: address_word(self.from),
            to: address_word(self.to),
            gasLimit: self.gas_limit,
            gasPerPubdataByteLimit: self.gas_per_pubdata,
            maxFeePerGas: U256::from(self.gas_price),
            maxPriorityFeePerGas: U256::ZERO,
            paymaster: U256::ZERO,
            nonce: U256::from(self.nonce),
            value: U256::ZERO,
            data: self.data.clone(),
            factoryDeps: self.factory_dep_hashes()?,
            paymasterInput: Bytes::new(),
        };
        Ok(typed.eip712_signing_hash(&domain(self.chain_id)))
    }

    /// Signs the typed-data hash
    pub async fn sign<S: Signer + Sync>(self, signer: &S) -> Result<SignedEip712Transaction> {
        let hash = self.signing_hash()?;
        let signature = signer.sign_hash(&hash).await?;
        Ok(SignedEip712Transaction {
            tx: self,
            signature,
        })
    }

    /// Request body for `eth_estimateGas`
    pub fn estimate_request(&self) -> EstimateGasRequest {
        EstimateGasRequest {
            from: self.from,
            to: self.to,
            gas_price: U256::from(self.gas_price),
            max_priority_fee_per_gas: U256::ZERO,
            value: U256::ZERO,
            data: self.data.clone(),
            transaction_type: U256::from(EIP712_TX_TYPE),
            eip712_meta: Eip712Meta {
                gas_per_pubdata: self.gas_per_pubdata,
                factory_deps: self.factory_deps.iter().map(|dep| dep.to_vec()).collect(),
            },
        }
    }
}

/// zkSync-flavored call request for gas estimation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateGasRequest {
    pub from: Address,
    pub to: Address,
    pub gas_price: U256,
    pub max_priority_fee_per_gas: U256,
    pub value: U256,
    pub data: Bytes,
    #[serde(rename = "type")]
    pub transaction_type: U256,
    pub eip712_meta: Eip712Meta,
}

/// zkSync-specific part of a call request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Meta {
    pub gas_per_pubdata: U256,
    /// Raw bytecodes, serialized as arrays of byte values
    pub factory_deps: Vec<Vec<u8>>,
}

/// A transaction together with the sender's signature
#[derive(Debug, Clone)]
pub struct SignedEip712Transaction {
    pub tx: Eip712Transaction,
    pub signature: Signature,
}

impl SignedEip712Transaction {
    /// Serializes into `0x71 || rlp([...16 fields])`
    pub fn encoded(&self) -> Bytes {
        let tx = &self.tx;
        let y_parity = u8::from(self.signature.v());

        let mut payload = Vec::new();
        tx.nonce.encode(&mut payload);
        U256::ZERO.encode(&mut payload); // maxPriorityFeePerGas
        tx.gas_price.encode(&mut payload);
        tx.gas_limit.encode(&mut payload);
        tx.to.encode(&mut payload);
        U256::ZERO.encode(&mut payload); // value
        tx.data.encode(&mut payload);
        y_parity.encode(&mut payload);
        self.signature.r().encode(&mut payload);
        self.signature.s().encode(&mut payload);
        tx.chain_id.encode(&mut payload);
        tx.from.encode(&mut payload);
        tx.gas_per_pubdata.encode(&mut payload);
        tx.factory_deps.encode(&mut payload);
        Bytes::new().encode(&mut payload); // customSignature
        Vec::<Bytes>::new().encode(&mut payload); // paymasterParams

        let mut out = Vec::with_capacity(payload.len() + 10);
        out.push(EIP712_TX_TYPE);
        Header {
            list: true,
            payload_length: payload.len(),
        }
        .encode(&mut out);
        out.extend_from_slice(&payload);
        Bytes::from(out)
    }
}
