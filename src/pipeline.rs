//! Transaction pipeline
//!
//! Every write goes through the same sequence: pending nonce, gas price,
//! unsigned transaction with a zero gas limit, gas estimation, EIP-712
//! signature, raw broadcast, receipt polling. The steps run strictly in that
//! order and any failure ends the submission.

use std::time::Duration;

use alloy::network::primitives::ReceiptResponse;
use alloy::network::{AnyNetwork, AnyTransactionReceipt};
use alloy::primitives::{Address, Bytes, TxHash, B256, U256};
use alloy::providers::Provider;
use alloy::signers::local::PrivateKeySigner;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::contracts::CONTRACT_DEPLOYER_ADDRESS;
use crate::error::{Error, Result};
use crate::zksync::{
    compute_create2_address, encode_create, encode_create2, hash_bytecode, Eip712Transaction,
    SignedEip712Transaction,
};

/// How long and how often to poll for a receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolicy {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for ReceiptPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(500),
            timeout: Duration::from_secs(240),
        }
    }
}

/// What a transaction does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Call an existing contract
    Call { to: Address, data: Bytes },
    /// Deploy a contract through the ContractDeployer.
    ///
    /// `salted` selects `create2` with a fresh random salt instead of
    /// `create`.
    Create {
        bytecode: Bytes,
        input: Bytes,
        salted: bool,
    },
}

impl Submission {
    pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
        Submission::Call {
            to,
            data: data.into(),
        }
    }

    pub fn create(bytecode: Bytes, input: Bytes) -> Self {
        Submission::Create {
            bytecode,
            input,
            salted: false,
        }
    }

    pub fn create2(bytecode: Bytes, input: Bytes) -> Self {
        Submission::Create {
            bytecode,
            input,
            salted: true,
        }
    }
}

/// Unsigned transaction produced by [`Submitter::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTransaction {
    pub tx: Eip712Transaction,
    /// Creation salt, for `create2` deployments
    pub salt: Option<B256>,
    /// Address a `create2` deployment will land on
    pub expected_address: Option<Address>,
}

/// Signed transaction ready for broadcast
#[derive(Debug, Clone)]
pub struct PreparedTransaction {
    pub signed: SignedEip712Transaction,
    pub expected_address: Option<Address>,
}

/// Outcome of a submission that reached a receipt
#[derive(Debug, Clone)]
pub struct Submitted {
    pub receipt: AnyTransactionReceipt,
    pub expected_address: Option<Address>,
}

impl Submitted {
    pub fn tx_hash(&self) -> TxHash {
        self.receipt.transaction_hash()
    }

    pub fn success(&self) -> bool {
        self.receipt.status()
    }

    /// Returns `Error::Reverted` for a failed receipt
    pub fn ensure_success(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(Error::Reverted(self.tx_hash()))
        }
    }

    /// Address of the deployed contract
    ///
    /// Warns when it differs from the locally predicted `create2` address.
    pub fn contract_address(&self) -> Result<Address> {
        let deployed = self
            .receipt
            .contract_address()
            .ok_or(Error::NoContractAddress(self.tx_hash()))?;

        if let Some(expected) = self.expected_address {
            if expected != deployed {
                warn!(%expected, %deployed, "deployed address differs from the predicted one");
            }
        }
        Ok(deployed)
    }
}

/// Builds, signs and submits zkSync transactions for a single signer
pub struct Submitter<P> {
    provider: P,
    signer: PrivateKeySigner,
    chain_id: u64,
    receipt_policy: ReceiptPolicy,
}

impl<P> Submitter<P>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    /// Creates a submitter for a known chain
    pub fn new(provider: P, signer: PrivateKeySigner, chain_id: u64) -> Self {
        Self {
            provider,
            signer,
            chain_id,
            receipt_policy: ReceiptPolicy::default(),
        }
    }

    /// Creates a submitter, reading the chain id from the node
    pub async fn connect(provider: P, signer: PrivateKeySigner) -> Result<Self> {
        let chain_id = provider.get_chain_id().await.map_err(|e| Error::Fetch {
            what: "chain id",
            reason: e.to_string(),
        })?;
        debug!(chain_id, signer = %signer.address(), "connected");
        Ok(Self::new(provider, signer, chain_id))
    }

    /// Overrides the receipt polling policy
    pub fn with_receipt_policy(mut self, policy: ReceiptPolicy) -> Self {
        self.receipt_policy = policy;
        self
    }

    /// The signer's address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Nonce of the signer including pending transactions
    pub async fn nonce(&self) -> Result<u64> {
        self.provider
            .get_transaction_count(self.address())
            .pending()
            .await
            .map_err(|e| Error::Fetch {
                what: "nonce",
                reason: e.to_string(),
            })
    }

    /// Current network gas price
    pub async fn gas_price(&self) -> Result<u128> {
        self.provider.get_gas_price().await.map_err(|e| Error::Fetch {
            what: "gas price",
            reason: e.to_string(),
        })
    }

    /// Builds the unsigned transaction with a zero gas limit.
    ///
    /// Deterministic for calls and `create`; `create2` draws a fresh salt.
    pub fn build(&self, nonce: u64, gas_price: u128, submission: &Submission) -> Result<BuiltTransaction> {
        let from = self.address();

        let (to, data, factory_deps, salt, expected_address) = match submission {
            Submission::Call { to, data } => (*to, data.clone(), Vec::new(), None, None),
            Submission::Create {
                bytecode,
                input,
                salted,
            } => {
                let bytecode_hash = hash_bytecode(bytecode)?;
                if *salted {
                    let salt = B256::from(rand::random::<[u8; 32]>());
                    let expected = compute_create2_address(from, salt, bytecode_hash, input);
                    (
                        CONTRACT_DEPLOYER_ADDRESS,
                        encode_create2(salt, bytecode_hash, input.clone()),
                        vec![bytecode.clone()],
                        Some(salt),
                        Some(expected),
                    )
                } else {
                    (
                        CONTRACT_DEPLOYER_ADDRESS,
                        encode_create(bytecode_hash, input.clone()),
                        vec![bytecode.clone()],
                        None,
                        None,
                    )
                }
            }
        };

        let tx = Eip712Transaction::new(self.chain_id, nonce, from, to, gas_price, data)
            .with_factory_deps(factory_deps);

        Ok(BuiltTransaction {
            tx,
            salt,
            expected_address,
        })
    }

    /// Asks the node how much gas the transaction needs
    pub async fn estimate_gas(&self, tx: &Eip712Transaction) -> Result<U256> {
        self.provider
            .raw_request::<_, U256>("eth_estimateGas".into(), (tx.estimate_request(),))
            .await
            .map_err(|e| Error::GasEstimation(e.to_string()))
    }

    /// Sends an encoded transaction and returns its hash
    pub async fn broadcast(&self, signed: &SignedEip712Transaction) -> Result<TxHash> {
        let pending = self
            .provider
            .send_raw_transaction(&signed.encoded())
            .await
            .map_err(|e| Error::Broadcast(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    /// Polls for a receipt until it appears or the policy's timeout passes
    ///
    /// The timeout bounds the whole wait, including a request the node never
    /// answers.
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<AnyTransactionReceipt> {
        let poll = async {
            loop {
                let receipt = self
                    .provider
                    .get_transaction_receipt(tx_hash)
                    .await
                    .map_err(|e| Error::Fetch {
                        what: "receipt",
                        reason: e.to_string(),
                    })?;
                if let Some(receipt) = receipt {
                    return Ok::<_, Error>(receipt);
                }
                sleep(self.receipt_policy.poll_interval).await;
            }
        };

        timeout(self.receipt_policy.timeout, poll)
            .await
            .map_err(|_| Error::ReceiptTimeout {
                tx_hash,
                timeout_secs: self.receipt_policy.timeout.as_secs(),
            })?
    }

    /// Fetches nonce and gas price, then builds, estimates and signs
    pub async fn prepare(&self, submission: &Submission) -> Result<PreparedTransaction> {
        let nonce = self.nonce().await?;
        let gas_price = self.gas_price().await?;
        debug!(nonce, gas_price, "fetched nonce and gas price");

        let built = self.build(nonce, gas_price, submission)?;
        if let Some(salt) = built.salt {
            debug!(%salt, expected = ?built.expected_address, "create2 salt drawn");
        }

        let gas_limit = self.estimate_gas(&built.tx).await?;
        debug!(%gas_limit, "gas estimated");

        let signed = built.tx.with_gas_limit(gas_limit).sign(&self.signer).await?;
        Ok(PreparedTransaction {
            signed,
            expected_address: built.expected_address,
        })
    }

    /// Runs the full pipeline for one transaction
    pub async fn submit(&self, submission: Submission) -> Result<Submitted> {
        let prepared = self.prepare(&submission).await?;
        let tx_hash = self.broadcast(&prepared.signed).await?;
        info!(%tx_hash, nonce = prepared.signed.tx.nonce, "transaction sent");

        let receipt = self.wait_for_receipt(tx_hash).await?;
        info!(
            %tx_hash,
            status = receipt.status(),
            block = ?receipt.block_number(),
            gas_used = receipt.gas_used(),
            "transaction mined"
        );

        Ok(Submitted {
            receipt,
            expected_address: prepared.expected_address,
        })
    }
}
