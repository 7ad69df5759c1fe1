//! Transaction pipeline E2E tests

use alloy::primitives::{Bytes, U256};
use alloy::providers::Provider;

use crate::common::TestHarness;
use crate::skip_if_no_rpc;
use untron_rs::zksync::Eip712Transaction;
use untron_rs::Submission;

/// Test connect() picks up the node's chain id
#[tokio::test(flavor = "multi_thread")]
async fn test_submitter_connect_detects_chain() {
    skip_if_no_rpc!();

    let harness = TestHarness::new();
    let submitter = harness.submitter().await;

    let chain_id = harness.provider.get_chain_id().await.unwrap();
    assert_eq!(submitter.chain_id(), chain_id);
    assert_eq!(submitter.address(), harness.signer_address());
}

/// Test the node accepts our estimate request shape
#[tokio::test(flavor = "multi_thread")]
async fn test_estimate_gas_for_plain_call() {
    skip_if_no_rpc!();

    let harness = TestHarness::new();
    let submitter = harness.submitter().await;

    let nonce = submitter.nonce().await.unwrap();
    let gas_price = submitter.gas_price().await.unwrap();
    let tx = Eip712Transaction::new(
        submitter.chain_id(),
        nonce,
        submitter.address(),
        submitter.address(),
        gas_price,
        Bytes::new(),
    );

    let gas = submitter.estimate_gas(&tx).await.expect("estimation failed");
    assert!(gas > U256::ZERO);
}

/// Test a full submit advances the nonce and yields a successful receipt
#[tokio::test(flavor = "multi_thread")]
async fn test_submit_self_call() {
    skip_if_no_rpc!();

    let harness = TestHarness::new();
    let submitter = harness.submitter().await;
    let nonce_before = harness.nonce().await;

    let submitted = submitter
        .submit(Submission::call(harness.signer_address(), Bytes::new()))
        .await
        .expect("submission failed");

    assert!(submitted.success());
    assert!(submitted.expected_address.is_none());
    assert_eq!(harness.nonce().await, nonce_before + 1);

    let submitted = submitted.ensure_success().unwrap();
    let fetched = harness
        .provider
        .get_transaction_receipt(submitted.tx_hash())
        .await
        .unwrap();
    assert!(fetched.is_some());
}
