// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]
#![allow(clippy::expect_used, reason = "CLI can expect for user-facing errors")]

mod cli;
mod commands;
mod output;
mod wallet;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use commands::read::CoreValue;
use commands::{deploy, read, write, Context};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("untron={level}").parse()?)
        .add_directive(format!("untron_rs={level}").parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::load(&cli)?;

    match cli.command {
        Commands::Deploy(args) => deploy::deploy(&ctx, args).await,
        Commands::DeployMockUsdt(args) => deploy::deploy_mock(&ctx, args).await,
        Commands::MintMockUsdt(args) => deploy::mint_mock(&ctx, args).await,

        Commands::CreateOrder(args) => write::create_order(&ctx, args).await,
        Commands::SetProvider(args) => write::set_provider(&ctx, args).await,
        Commands::ChangeOrder(args) => write::change_order(&ctx, args).await,
        Commands::StopOrder(args) => write::stop_order(&ctx, args).await,
        Commands::Fulfill(args) => write::fulfill(&ctx, args).await,
        Commands::CloseOrders(args) => write::close_orders(&ctx, args).await,
        Commands::SetZkVariables(args) => write::set_zk_variables(&ctx, args).await,
        Commands::SetTransfersVariables(args) => write::set_transfers_variables(&ctx, args).await,
        Commands::SetFeesVariables(args) => write::set_fees_variables(&ctx, args).await,
        Commands::SetCoreVariables(args) => write::set_core_variables(&ctx, args).await,

        Commands::Providers(args) => read::providers(&ctx, args).await,
        Commands::IsReceiverBusy(args) => read::is_receiver_busy(&ctx, args).await,
        Commands::ReceiverOwners(args) => read::receiver_owners(&ctx, args).await,
        Commands::Orders(args) => read::orders(&ctx, args).await,
        Commands::BlockId => read::value(&ctx, CoreValue::BlockId).await,
        Commands::ActionChainTip => read::value(&ctx, CoreValue::ActionChainTip).await,
        Commands::LatestExecutedAction => read::value(&ctx, CoreValue::LatestExecutedAction).await,
        Commands::StateHash => read::value(&ctx, CoreValue::StateHash).await,
        Commands::MaxOrderSize => read::value(&ctx, CoreValue::MaxOrderSize).await,
        Commands::RequiredCollateral => read::value(&ctx, CoreValue::RequiredCollateral).await,
        Commands::CalculateFulfillerTotal(args) => read::calculate_fulfiller_total(&ctx, args).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match run(cli).await {
        Err(err) if matches!(err.downcast_ref::<untron_rs::Error>(), Some(untron_rs::Error::ArtifactNotFound { .. })) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        result => result,
    }
}
