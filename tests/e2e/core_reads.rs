//! UntronCore view call E2E tests

use alloy::primitives::{Address, B256, U256};

use crate::common::{TestHarness, TestProvider};
use crate::{skip_if_no_artifacts, skip_if_no_rpc};
use untron_rs::{deploy_untron_core, ContractKind, UntronCore};

async fn fresh_core(harness: &TestHarness) -> UntronCore<TestProvider> {
    let core = harness.artifacts.load(ContractKind::UntronCore).unwrap();
    let proxy = harness.artifacts.load(ContractKind::Erc1967Proxy).unwrap();
    let submitter = harness.submitter().await;
    let deployment = deploy_untron_core(&submitter, &core, &proxy).await.unwrap();
    UntronCore::new(deployment.proxy.address, harness.provider.clone()).with_artifact(core)
}

/// Test unknown keys read back as zero values
#[tokio::test(flavor = "multi_thread")]
async fn test_reads_on_fresh_deployment() {
    skip_if_no_rpc!();
    let harness = TestHarness::new();
    skip_if_no_artifacts!(harness);

    let core = fresh_core(&harness).await;
    let stranger = Address::repeat_byte(0x42);

    let details = core.providers(stranger).await.unwrap();
    assert_eq!(details.liquidity, U256::ZERO);

    assert_eq!(core.receiver_owners(stranger).await.unwrap(), Address::ZERO);
    assert_eq!(core.is_receiver_busy(stranger).await.unwrap(), B256::ZERO);

    let order = core.orders(B256::repeat_byte(0x01)).await.unwrap();
    assert!(order.is_empty());
}

/// Test the six parameterless views all answer
#[tokio::test(flavor = "multi_thread")]
async fn test_core_variables_are_readable() {
    skip_if_no_rpc!();
    let harness = TestHarness::new();
    skip_if_no_artifacts!(harness);

    let core = fresh_core(&harness).await;

    core.block_id().await.unwrap();
    core.action_chain_tip().await.unwrap();
    core.latest_executed_action().await.unwrap();
    core.state_hash().await.unwrap();
    core.max_order_size().await.unwrap();
    core.required_collateral().await.unwrap();
}
