//! Deployment E2E tests

use alloy::primitives::U256;
use alloy::providers::Provider;

use crate::common::TestHarness;
use crate::{skip_if_no_artifacts, skip_if_no_rpc};
use untron_rs::contracts::MOCK_USDT_MINT_AMOUNT;
use untron_rs::{deploy_mock_usdt, deploy_untron_core, mint_mock_usdt, ContractKind, IMockUSDT, UntronCore};

/// Test deploying UntronCore behind its proxy
#[tokio::test(flavor = "multi_thread")]
async fn test_deploy_untron_core() {
    skip_if_no_rpc!();
    let harness = TestHarness::new();
    skip_if_no_artifacts!(harness);

    let core = harness.artifacts.load(ContractKind::UntronCore).unwrap();
    let proxy = harness.artifacts.load(ContractKind::Erc1967Proxy).unwrap();
    let submitter = harness.submitter().await;

    let deployment = deploy_untron_core(&submitter, &core, &proxy)
        .await
        .expect("deployment failed");

    assert_ne!(deployment.implementation.address, deployment.proxy.address);
    for address in [deployment.implementation.address, deployment.proxy.address] {
        let code = harness.provider.get_code_at(address).await.unwrap();
        assert!(!code.is_empty(), "no code at {address}");
    }

    // the proxy is usable right away
    let client = UntronCore::new(deployment.proxy.address, harness.provider.clone());
    client.state_hash().await.expect("proxy view call failed");
}

/// Test deploying and minting the devnet token
#[tokio::test(flavor = "multi_thread")]
async fn test_deploy_and_mint_mock_usdt() {
    skip_if_no_rpc!();
    let harness = TestHarness::new();
    skip_if_no_artifacts!(harness);

    let artifact = harness.artifacts.load(ContractKind::MockUsdt).unwrap();
    let submitter = harness.submitter().await;

    let token = deploy_mock_usdt(&submitter, &artifact).await.unwrap();
    let usdt = IMockUSDT::new(token.address, &harness.provider);
    let before = usdt.balanceOf(harness.signer_address()).call().await.unwrap();

    let submitted = mint_mock_usdt(&submitter, token.address).await.unwrap();
    assert!(submitted.success());

    let after = usdt.balanceOf(harness.signer_address()).call().await.unwrap();
    assert_eq!(after - before, U256::from(MOCK_USDT_MINT_AMOUNT));
}
