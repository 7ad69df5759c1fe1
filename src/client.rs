//! UntronCore contract client

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::artifact::ContractArtifact;
use crate::contracts::{IUntronCore, Transfer};
use crate::error::{Error, Result};
use crate::pipeline::{Submission, Submitted, Submitter};
use crate::types::{FulfillerTotal, OrderDetails, ProviderDetails};

/// Parameters of `setProvider`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub liquidity: U256,
    pub rate: U256,
    pub min_order_size: U256,
    pub min_deposit: U256,
    pub receivers: Vec<Address>,
}

/// Parameters of `setCoreVariables`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreVariables {
    pub block_id: B256,
    pub action_chain_tip: B256,
    pub latest_executed_action: B256,
    pub state_hash: B256,
    pub max_order_size: U256,
    pub required_collateral: U256,
}

/// Handle to a deployed UntronCore
///
/// Reads go straight to the node; writes are encoded here and handed to a
/// [`Submitter`].
pub struct UntronCore<P> {
    address: Address,
    provider: P,
    artifact: Option<ContractArtifact>,
}

impl<P> UntronCore<P>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            address,
            provider,
            artifact: None,
        }
    }

    /// Checks every call against the artifact's ABI before it is made
    pub fn with_artifact(mut self, artifact: ContractArtifact) -> Self {
        self.artifact = Some(artifact);
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn check<C: SolCall>(&self) {
        if let Some(artifact) = &self.artifact {
            let name = C::SIGNATURE.split('(').next().unwrap_or(C::SIGNATURE);
            artifact.check_method(name, C::SELECTOR.into());
        }
    }

    /// Encodes a call and runs it through the pipeline
    pub async fn send<C: SolCall>(&self, submitter: &Submitter<P>, call: C) -> Result<Submitted> {
        self.check::<C>();
        debug!(method = C::SIGNATURE, contract = %self.address, "submitting");
        submitter
            .submit(Submission::call(self.address, Bytes::from(call.abi_encode())))
            .await
    }

    fn contract(&self) -> IUntronCore::IUntronCoreInstance<&P, AnyNetwork> {
        IUntronCore::new(self.address, &self.provider)
    }

    // Writes

    pub async fn create_order(
        &self,
        submitter: &Submitter<P>,
        provider: Address,
        receiver: Address,
        size: U256,
        rate: U256,
        transfer: Transfer,
    ) -> Result<Submitted> {
        let call = IUntronCore::createOrderCall {
            provider,
            receiver,
            size,
            rate,
            transfer,
        };
        self.send(submitter, call).await
    }

    pub async fn set_provider(&self, submitter: &Submitter<P>, settings: ProviderSettings) -> Result<Submitted> {
        let call = IUntronCore::setProviderCall {
            liquidity: settings.liquidity,
            rate: settings.rate,
            minOrderSize: settings.min_order_size,
            minDeposit: settings.min_deposit,
            receivers: settings.receivers,
        };
        self.send(submitter, call).await
    }

    pub async fn change_order(&self, submitter: &Submitter<P>, order_id: B256, transfer: Transfer) -> Result<Submitted> {
        self.send(submitter, IUntronCore::changeOrderCall { orderId: order_id, transfer })
            .await
    }

    pub async fn stop_order(&self, submitter: &Submitter<P>, order_id: B256) -> Result<Submitted> {
        self.send(submitter, IUntronCore::stopOrderCall { orderId: order_id })
            .await
    }

    pub async fn fulfill(&self, submitter: &Submitter<P>, order_ids: Vec<B256>, total: U256) -> Result<Submitted> {
        self.send(
            submitter,
            IUntronCore::fulfillCall {
                _orderIds: order_ids,
                total,
            },
        )
        .await
    }

    pub async fn close_orders(&self, submitter: &Submitter<P>, proof: Bytes, public_values: Bytes) -> Result<Submitted> {
        self.send(
            submitter,
            IUntronCore::closeOrdersCall {
                proof,
                publicValues: public_values,
            },
        )
        .await
    }

    pub async fn set_zk_variables(
        &self,
        submitter: &Submitter<P>,
        trusted_relayer: Address,
        verifier: Address,
        vkey: B256,
    ) -> Result<Submitted> {
        let call = IUntronCore::setZKVariablesCall {
            trustedRelayer: trusted_relayer,
            verifier,
            vkey,
        };
        self.send(submitter, call).await
    }

    pub async fn set_transfers_variables(
        &self,
        submitter: &Submitter<P>,
        usdt: Address,
        spoke_pool: Address,
        swapper: Address,
    ) -> Result<Submitted> {
        let call = IUntronCore::setTransfersVariablesCall {
            usdt,
            spokePool: spoke_pool,
            swapper,
        };
        self.send(submitter, call).await
    }

    pub async fn set_fees_variables(&self, submitter: &Submitter<P>, relayer_fee: U256, fee_point: U256) -> Result<Submitted> {
        let call = IUntronCore::setFeesVariablesCall {
            relayerFee: relayer_fee,
            feePoint: fee_point,
        };
        self.send(submitter, call).await
    }

    pub async fn set_core_variables(&self, submitter: &Submitter<P>, vars: CoreVariables) -> Result<Submitted> {
        let call = IUntronCore::setCoreVariablesCall {
            blockId: vars.block_id,
            actionChainTip: vars.action_chain_tip,
            latestExecutedAction: vars.latest_executed_action,
            stateHash: vars.state_hash,
            maxOrderSize: vars.max_order_size,
            requiredCollateral: vars.required_collateral,
        };
        self.send(submitter, call).await
    }

    // Reads

    pub async fn providers(&self, provider: Address) -> Result<ProviderDetails> {
        self.check::<IUntronCore::providersCall>();
        let ret = self
            .contract()
            .providers(provider)
            .call()
            .await
            .map_err(|e| fetch_error("providers", e))?;
        Ok(ret.into())
    }

    /// Id of the order currently occupying the receiver, zero when free
    pub async fn is_receiver_busy(&self, receiver: Address) -> Result<B256> {
        self.check::<IUntronCore::isReceiverBusyCall>();
        self.contract()
            .isReceiverBusy(receiver)
            .call()
            .await
            .map_err(|e| fetch_error("isReceiverBusy", e))
    }

    pub async fn receiver_owners(&self, receiver: Address) -> Result<Address> {
        self.check::<IUntronCore::receiverOwnersCall>();
        self.contract()
            .receiverOwners(receiver)
            .call()
            .await
            .map_err(|e| fetch_error("receiverOwners", e))
    }

    pub async fn orders(&self, order_id: B256) -> Result<OrderDetails> {
        self.check::<IUntronCore::ordersCall>();
        let ret = self
            .contract()
            .orders(order_id)
            .call()
            .await
            .map_err(|e| fetch_error("orders", e))?;
        Ok(ret.into())
    }

    pub async fn block_id(&self) -> Result<B256> {
        self.check::<IUntronCore::blockIdCall>();
        self.contract()
            .blockId()
            .call()
            .await
            .map_err(|e| fetch_error("blockId", e))
    }

    pub async fn action_chain_tip(&self) -> Result<B256> {
        self.check::<IUntronCore::actionChainTipCall>();
        self.contract()
            .actionChainTip()
            .call()
            .await
            .map_err(|e| fetch_error("actionChainTip", e))
    }

    pub async fn latest_executed_action(&self) -> Result<B256> {
        self.check::<IUntronCore::latestExecutedActionCall>();
        self.contract()
            .latestExecutedAction()
            .call()
            .await
            .map_err(|e| fetch_error("latestExecutedAction", e))
    }

    pub async fn state_hash(&self) -> Result<B256> {
        self.check::<IUntronCore::stateHashCall>();
        self.contract()
            .stateHash()
            .call()
            .await
            .map_err(|e| fetch_error("stateHash", e))
    }

    pub async fn max_order_size(&self) -> Result<U256> {
        self.check::<IUntronCore::maxOrderSizeCall>();
        self.contract()
            .maxOrderSize()
            .call()
            .await
            .map_err(|e| fetch_error("maxOrderSize", e))
    }

    pub async fn required_collateral(&self) -> Result<U256> {
        self.check::<IUntronCore::requiredCollateralCall>();
        self.contract()
            .requiredCollateral()
            .call()
            .await
            .map_err(|e| fetch_error("requiredCollateral", e))
    }

    pub async fn calculate_fulfiller_total(&self, order_ids: Vec<B256>) -> Result<FulfillerTotal> {
        self.check::<IUntronCore::calculateFulfillerTotalCall>();
        let ret = self
            .contract()
            .calculateFulfillerTotal(order_ids)
            .call()
            .await
            .map_err(|e| fetch_error("calculateFulfillerTotal", e))?;
        Ok(ret.into())
    }
}

fn fetch_error(what: &'static str, err: alloy::contract::Error) -> Error {
    Error::Fetch {
        what,
        reason: err.to_string(),
    }
}
