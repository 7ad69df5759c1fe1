//! Deployment flows for UntronCore and the devnet token

use alloy::network::AnyNetwork;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::Provider;
use alloy::sol_types::{SolCall, SolValue};
use tracing::info;

use crate::artifact::ContractArtifact;
use crate::contracts::{IMockUSDT, IUntronCore, MOCK_USDT_MINT_AMOUNT};
use crate::error::Result;
use crate::pipeline::{Submission, Submitted, Submitter};

/// A contract created by one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub tx_hash: TxHash,
}

/// UntronCore implementation and the proxy in front of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreDeployment {
    pub implementation: Deployment,
    pub proxy: Deployment,
}

/// Constructor input of ERC1967Proxy: the implementation and an
/// `initialize()` call run on it through the proxy
pub fn proxy_constructor_input(implementation: Address) -> Bytes {
    let init = Bytes::from(IUntronCore::initializeCall {}.abi_encode());
    (implementation, init).abi_encode_params().into()
}

async fn create<P>(submitter: &Submitter<P>, submission: Submission) -> Result<Deployment>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    let submitted = submitter.submit(submission).await?.ensure_success()?;
    Ok(Deployment {
        address: submitted.contract_address()?,
        tx_hash: submitted.tx_hash(),
    })
}

/// Deploys the UntronCore implementation, then an initializing proxy
///
/// The implementation goes through `create`; the proxy through `create2`
/// with a random salt.
pub async fn deploy_untron_core<P>(
    submitter: &Submitter<P>,
    core: &ContractArtifact,
    proxy: &ContractArtifact,
) -> Result<CoreDeployment>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    let implementation = create(submitter, Submission::create(core.bytecode.clone(), Bytes::new())).await?;
    info!(address = %implementation.address, "UntronCore implementation deployed");

    let input = proxy_constructor_input(implementation.address);
    let proxy = create(submitter, Submission::create2(proxy.bytecode.clone(), input)).await?;
    info!(address = %proxy.address, "UntronCore proxy deployed");

    Ok(CoreDeployment {
        implementation,
        proxy,
    })
}

/// Deploys the devnet USDT token
pub async fn deploy_mock_usdt<P>(submitter: &Submitter<P>, token: &ContractArtifact) -> Result<Deployment>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    let deployment = create(submitter, Submission::create(token.bytecode.clone(), Bytes::new())).await?;
    info!(address = %deployment.address, "MockUSDT deployed");
    Ok(deployment)
}

/// Mints 1000 tokens (6 decimals) of a MockUSDT to the signer
pub async fn mint_mock_usdt<P>(submitter: &Submitter<P>, token: Address) -> Result<Submitted>
where
    P: Provider<AnyNetwork> + Clone + 'static,
{
    let call = IMockUSDT::mintCall {
        to: submitter.address(),
        amount: U256::from(MOCK_USDT_MINT_AMOUNT),
    };
    submitter
        .submit(Submission::call(token, Bytes::from(call.abi_encode())))
        .await
}
