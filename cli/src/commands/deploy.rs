use alloy::sol_types::SolCall;
use color_eyre::eyre::Result;
use untron_rs::contracts::MOCK_USDT_MINT_AMOUNT;
use untron_rs::normalize::parse_address;
use untron_rs::{deploy_mock_usdt, deploy_untron_core, mint_mock_usdt, Config, ContractKind, IMockUSDT};

use super::write::finish;
use super::Context;
use crate::cli::{MintMockUsdtArgs, SignerArgs};
use crate::output::{CoreDeploymentOutput, DeploymentOutput};

/// MockUSDT uses 6 decimals
const MOCK_USDT_DECIMALS: u64 = 1_000_000;

pub async fn deploy(ctx: &Context, args: SignerArgs) -> Result<()> {
    let core_artifact = ctx.artifacts.load(ContractKind::UntronCore)?;
    let proxy_artifact = ctx.artifacts.load(ContractKind::Erc1967Proxy)?;

    let provider = ctx.provider()?;
    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let deployment = deploy_untron_core(&submitter, &core_artifact, &proxy_artifact).await?;

    Config::write_core_address(&ctx.config_path, deployment.proxy.address)?;

    CoreDeploymentOutput {
        implementation: deployment.implementation.address,
        implementation_tx: deployment.implementation.tx_hash,
        proxy: deployment.proxy.address,
        proxy_tx: deployment.proxy.tx_hash,
        config: ctx.config_path.clone(),
    }
    .print(ctx.json);
    Ok(())
}

pub async fn deploy_mock(ctx: &Context, args: SignerArgs) -> Result<()> {
    let artifact = ctx.artifacts.load(ContractKind::MockUsdt)?;

    let provider = ctx.provider()?;
    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let deployment = deploy_mock_usdt(&submitter, &artifact).await?;

    DeploymentOutput {
        contract: "mock USDT",
        address: deployment.address,
        tx_hash: deployment.tx_hash,
    }
    .print(ctx.json);
    Ok(())
}

pub async fn mint_mock(ctx: &Context, args: MintMockUsdtArgs) -> Result<()> {
    let artifact = ctx.artifacts.load(ContractKind::MockUsdt)?;
    artifact.check_method("mint", IMockUSDT::mintCall::SELECTOR.into());

    let token = parse_address(&args.address)?;

    let provider = ctx.provider()?;
    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let recipient = submitter.address();
    let submitted = mint_mock_usdt(&submitter, token).await?;

    if !ctx.json && submitted.success() {
        println!(
            "Minted {} USDT to {}",
            MOCK_USDT_MINT_AMOUNT / MOCK_USDT_DECIMALS,
            recipient
        );
    }
    finish(ctx, "Mint transaction confirmed.", submitted)
}
