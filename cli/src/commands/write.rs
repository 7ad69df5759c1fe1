use color_eyre::eyre::Result;
use untron_rs::normalize::{parse_address, parse_addresses, parse_bytes32, parse_hex_bytes, parse_order_ids, parse_uint};
use untron_rs::{CoreVariables, ProviderSettings, Submitted};

use super::Context;
use crate::cli::{
    ChangeOrderArgs, CloseOrdersArgs, CreateOrderArgs, FulfillArgs, SetCoreVariablesArgs, SetFeesVariablesArgs,
    SetProviderArgs, SetTransfersVariablesArgs, SetZkVariablesArgs, StopOrderArgs,
};
use crate::output::ReceiptOutput;

/// Prints the receipt, then fails if the transaction reverted
pub fn finish(ctx: &Context, label: &str, submitted: Submitted) -> Result<()> {
    ReceiptOutput {
        label,
        receipt: &submitted.receipt,
    }
    .print(ctx.json);
    submitted.ensure_success()?;
    Ok(())
}

pub async fn create_order(ctx: &Context, args: CreateOrderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let order_provider = parse_address(&args.provider)?;
    let receiver = parse_address(&args.receiver)?;
    let size = parse_uint(&args.size)?;
    let rate = parse_uint(&args.rate)?;
    let transfer = args.transfer.intent().build()?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core
        .create_order(&submitter, order_provider, receiver, size, rate, transfer)
        .await?;
    finish(ctx, "Order created.", submitted)
}

pub async fn set_provider(ctx: &Context, args: SetProviderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let settings = ProviderSettings {
        liquidity: parse_uint(&args.liquidity)?,
        rate: parse_uint(&args.rate)?,
        min_order_size: parse_uint(&args.min_order_size)?,
        min_deposit: parse_uint(&args.min_deposit)?,
        receivers: parse_addresses(&args.receivers)?,
    };

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.set_provider(&submitter, settings).await?;
    finish(ctx, "Provider set.", submitted)
}

pub async fn change_order(ctx: &Context, args: ChangeOrderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let order_id = parse_bytes32(&args.order_id)?;
    let transfer = args.transfer.intent().build()?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.change_order(&submitter, order_id, transfer).await?;
    finish(ctx, "Order changed.", submitted)
}

pub async fn stop_order(ctx: &Context, args: StopOrderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let order_id = parse_bytes32(&args.order_id)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.stop_order(&submitter, order_id).await?;
    finish(ctx, "Order stopped.", submitted)
}

pub async fn fulfill(ctx: &Context, args: FulfillArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let order_ids = parse_order_ids(&args.order_ids)?;
    let total = parse_uint(&args.total)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.fulfill(&submitter, order_ids, total).await?;
    finish(ctx, "Orders fulfilled.", submitted)
}

pub async fn close_orders(ctx: &Context, args: CloseOrdersArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let proof = parse_hex_bytes(&args.proof)?;
    let public_values = parse_hex_bytes(&args.public_values)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.close_orders(&submitter, proof, public_values).await?;
    finish(ctx, "Orders closed.", submitted)
}

pub async fn set_zk_variables(ctx: &Context, args: SetZkVariablesArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let trusted_relayer = parse_address(&args.trusted_relayer)?;
    let verifier = parse_address(&args.verifier)?;
    let vkey = parse_bytes32(&args.vkey)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core
        .set_zk_variables(&submitter, trusted_relayer, verifier, vkey)
        .await?;
    finish(ctx, "ZK variables set.", submitted)
}

pub async fn set_transfers_variables(ctx: &Context, args: SetTransfersVariablesArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let usdt = parse_address(&args.usdt)?;
    let spoke_pool = parse_address(&args.spoke_pool)?;
    let swapper = parse_address(&args.swapper)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core
        .set_transfers_variables(&submitter, usdt, spoke_pool, swapper)
        .await?;
    finish(ctx, "Transfers variables set.", submitted)
}

pub async fn set_fees_variables(ctx: &Context, args: SetFeesVariablesArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let relayer_fee = parse_uint(&args.relayer_fee)?;
    let fee_point = parse_uint(&args.fee_point)?;

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core
        .set_fees_variables(&submitter, relayer_fee, fee_point)
        .await?;
    finish(ctx, "Fees variables set.", submitted)
}

pub async fn set_core_variables(ctx: &Context, args: SetCoreVariablesArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider.clone())?;

    let vars = CoreVariables {
        block_id: parse_bytes32(&args.block_id)?,
        action_chain_tip: parse_bytes32(&args.action_chain_tip)?,
        latest_executed_action: parse_bytes32(&args.latest_executed_action)?,
        state_hash: parse_bytes32(&args.state_hash)?,
        max_order_size: parse_uint(&args.max_order_size)?,
        required_collateral: parse_uint(&args.required_collateral)?,
    };

    let submitter = ctx.submitter(provider, &args.wallet).await?;
    let submitted = core.set_core_variables(&submitter, vars).await?;
    finish(ctx, "Core variables set.", submitted)
}
