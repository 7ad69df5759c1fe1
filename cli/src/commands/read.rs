use color_eyre::eyre::Result;
use untron_rs::normalize::{parse_address, parse_bytes32, parse_order_ids};

use super::Context;
use crate::cli::{OrderArgs, OrderIdsArgs, ProviderArgs, ReceiverArgs};
use crate::output::{print_fulfiller_total, print_order_details, print_provider_details, ValueOutput};

/// Parameterless views on UntronCore
#[derive(Debug, Clone, Copy)]
pub enum CoreValue {
    BlockId,
    ActionChainTip,
    LatestExecutedAction,
    StateHash,
    MaxOrderSize,
    RequiredCollateral,
}

impl CoreValue {
    fn label(self) -> &'static str {
        match self {
            CoreValue::BlockId => "Current block ID",
            CoreValue::ActionChainTip => "Current action chain tip",
            CoreValue::LatestExecutedAction => "Latest executed action",
            CoreValue::StateHash => "Current state hash",
            CoreValue::MaxOrderSize => "Maximum order size",
            CoreValue::RequiredCollateral => "Required collateral",
        }
    }

    fn key(self) -> &'static str {
        match self {
            CoreValue::BlockId => "blockId",
            CoreValue::ActionChainTip => "actionChainTip",
            CoreValue::LatestExecutedAction => "latestExecutedAction",
            CoreValue::StateHash => "stateHash",
            CoreValue::MaxOrderSize => "maxOrderSize",
            CoreValue::RequiredCollateral => "requiredCollateral",
        }
    }
}

pub async fn value(ctx: &Context, which: CoreValue) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let value = match which {
        CoreValue::BlockId => core.block_id().await?.to_string(),
        CoreValue::ActionChainTip => core.action_chain_tip().await?.to_string(),
        CoreValue::LatestExecutedAction => core.latest_executed_action().await?.to_string(),
        CoreValue::StateHash => core.state_hash().await?.to_string(),
        CoreValue::MaxOrderSize => core.max_order_size().await?.to_string(),
        CoreValue::RequiredCollateral => core.required_collateral().await?.to_string(),
    };

    ValueOutput::new(which.label(), which.key(), value).print(ctx.json);
    Ok(())
}

pub async fn providers(ctx: &Context, args: ProviderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let details = core.providers(parse_address(&args.provider)?).await?;
    print_provider_details(&details, ctx.json);
    Ok(())
}

pub async fn is_receiver_busy(ctx: &Context, args: ReceiverArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let busy = core.is_receiver_busy(parse_address(&args.receiver)?).await?;
    ValueOutput::new("Is receiver busy", "isReceiverBusy", busy).print(ctx.json);
    Ok(())
}

pub async fn receiver_owners(ctx: &Context, args: ReceiverArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let owner = core.receiver_owners(parse_address(&args.receiver)?).await?;
    ValueOutput::new("Receiver owner", "receiverOwner", owner).print(ctx.json);
    Ok(())
}

pub async fn orders(ctx: &Context, args: OrderArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let order = core.orders(parse_bytes32(&args.order_id)?).await?;
    print_order_details(&order, ctx.json);
    Ok(())
}

pub async fn calculate_fulfiller_total(ctx: &Context, args: OrderIdsArgs) -> Result<()> {
    let provider = ctx.provider()?;
    let core = ctx.core(provider)?;

    let total = core
        .calculate_fulfiller_total(parse_order_ids(&args.order_ids)?)
        .await?;
    print_fulfiller_total(&total, ctx.json);
    Ok(())
}
