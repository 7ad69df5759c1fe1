use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use untron_rs::{TransferIntent, DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIG_PATH};
use url::Url;

#[derive(Parser)]
#[command(name = "untron")]
#[command(about = "CLI for the UntronCore contract on zkSync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the JSON config file
    #[arg(long, global = true, env = "UNTRON_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// zkSync RPC endpoint, overrides `zksync_rpc` from the config
    #[arg(long, global = true, env = "ZKSYNC_RPC")]
    pub rpc_url: Option<Url>,

    /// Directory holding the compiled contract artifacts
    #[arg(long, global = true, env = "UNTRON_ARTIFACTS", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy UntronCore behind an ERC1967 proxy and record it in the config
    #[command(name = "deploy")]
    Deploy(SignerArgs),

    /// Deploy a MockUSDT token
    #[command(name = "deployMockUSDT")]
    DeployMockUsdt(SignerArgs),

    /// Mint 1000 MockUSDT to the signer
    #[command(name = "mintMockUSDT")]
    MintMockUsdt(MintMockUsdtArgs),

    /// Create a new order (WRITE FUNCTION)
    #[command(name = "createOrder")]
    CreateOrder(CreateOrderArgs),

    /// Set provider details (WRITE FUNCTION)
    #[command(name = "setProvider")]
    SetProvider(SetProviderArgs),

    /// Change transfer details of an order (WRITE FUNCTION)
    #[command(name = "changeOrder")]
    ChangeOrder(ChangeOrderArgs),

    /// Stop an existing order (WRITE FUNCTION)
    #[command(name = "stopOrder")]
    StopOrder(StopOrderArgs),

    /// Fulfill orders by sending their ask in advance (WRITE FUNCTION)
    #[command(name = "fulfill")]
    Fulfill(FulfillArgs),

    /// Close orders and send funds (WRITE FUNCTION)
    #[command(name = "closeOrders")]
    CloseOrders(CloseOrdersArgs),

    /// Set ZK variables (WRITE FUNCTION)
    #[command(name = "setZKVariables")]
    SetZkVariables(SetZkVariablesArgs),

    /// Set transfers variables (WRITE FUNCTION)
    #[command(name = "setTransfersVariables")]
    SetTransfersVariables(SetTransfersVariablesArgs),

    /// Set fees variables (WRITE FUNCTION)
    #[command(name = "setFeesVariables")]
    SetFeesVariables(SetFeesVariablesArgs),

    /// Set core variables (WRITE FUNCTION)
    #[command(name = "setCoreVariables")]
    SetCoreVariables(SetCoreVariablesArgs),

    /// Get provider details
    #[command(name = "providers")]
    Providers(ProviderArgs),

    /// Check if a receiver is busy
    #[command(name = "isReceiverBusy")]
    IsReceiverBusy(ReceiverArgs),

    /// Get the owner of a receiver
    #[command(name = "receiverOwners")]
    ReceiverOwners(ReceiverArgs),

    /// Get order details
    #[command(name = "orders")]
    Orders(OrderArgs),

    /// Get the current block ID
    #[command(name = "blockId")]
    BlockId,

    /// Get the current action chain tip
    #[command(name = "actionChainTip")]
    ActionChainTip,

    /// Get the latest executed action
    #[command(name = "latestExecutedAction")]
    LatestExecutedAction,

    /// Get the current state hash
    #[command(name = "stateHash")]
    StateHash,

    /// Get the maximum order size
    #[command(name = "maxOrderSize")]
    MaxOrderSize,

    /// Get the required collateral
    #[command(name = "requiredCollateral")]
    RequiredCollateral,

    /// Calculate the fulfiller's total expense and income
    #[command(name = "calculateFulfillerTotal")]
    CalculateFulfillerTotal(OrderIdsArgs),
}

#[derive(Parser, Clone)]
pub struct SignerArgs {
    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct MintMockUsdtArgs {
    /// MockUSDT contract address
    #[arg(long)]
    pub address: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

/// Destination of an order
#[derive(Parser, Clone)]
pub struct TransferArgs {
    /// Transfer recipient
    #[arg(long)]
    pub recipient: String,

    /// Transfer chain ID
    #[arg(long = "chainId")]
    pub chain_id: String,

    /// Across bridge fee
    #[arg(long = "acrossFee", default_value = "0")]
    pub across_fee: String,

    /// Perform swap
    #[arg(long = "doSwap")]
    pub do_swap: bool,

    /// Output token address
    #[arg(long = "outToken")]
    pub out_token: Option<String>,

    /// Min output per USDT
    #[arg(long = "minOutputPerUSDT", default_value = "0")]
    pub min_output_per_usdt: String,

    /// Fixed output amount
    #[arg(long = "fixedOutput")]
    pub fixed_output: bool,

    /// Swap data in hex
    #[arg(long = "swapData", default_value = "")]
    pub swap_data: String,
}

impl TransferArgs {
    pub fn intent(&self) -> TransferIntent {
        TransferIntent {
            recipient: self.recipient.clone(),
            chain_id: self.chain_id.clone(),
            across_fee: self.across_fee.clone(),
            do_swap: self.do_swap,
            out_token: self.out_token.clone(),
            min_output_per_usdt: self.min_output_per_usdt.clone(),
            fixed_output: self.fixed_output,
            swap_data: self.swap_data.clone(),
        }
    }
}

#[derive(Parser, Clone)]
pub struct CreateOrderArgs {
    /// Provider address
    #[arg(long)]
    pub provider: String,

    /// Receiver address
    #[arg(long)]
    pub receiver: String,

    /// Order size
    #[arg(long)]
    pub size: String,

    /// Order rate
    #[arg(long)]
    pub rate: String,

    #[command(flatten)]
    pub transfer: TransferArgs,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct SetProviderArgs {
    /// Liquidity amount
    #[arg(long)]
    pub liquidity: String,

    /// Rate
    #[arg(long)]
    pub rate: String,

    /// Minimum order size
    #[arg(long = "minOrderSize")]
    pub min_order_size: String,

    /// Minimum deposit
    #[arg(long = "minDeposit")]
    pub min_deposit: String,

    /// Receiver addresses
    #[arg(long, num_args = 1.., required = true)]
    pub receivers: Vec<String>,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct ChangeOrderArgs {
    /// Order ID
    #[arg(long = "orderId")]
    pub order_id: String,

    #[command(flatten)]
    pub transfer: TransferArgs,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct StopOrderArgs {
    /// Order ID
    #[arg(long = "orderId")]
    pub order_id: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct FulfillArgs {
    /// List of order IDs
    #[arg(long = "orderIds", num_args = 1.., required = true)]
    pub order_ids: Vec<String>,

    /// Total amount of USDT L2 to transfer
    #[arg(long)]
    pub total: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct CloseOrdersArgs {
    /// ZK proof in hex
    #[arg(long)]
    pub proof: String,

    /// Public values in hex
    #[arg(long = "publicValues")]
    pub public_values: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct SetZkVariablesArgs {
    /// Trusted relayer address
    #[arg(long = "trustedRelayer")]
    pub trusted_relayer: String,

    /// Verifier contract address
    #[arg(long)]
    pub verifier: String,

    /// Verification key (bytes32)
    #[arg(long)]
    pub vkey: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct SetTransfersVariablesArgs {
    /// USDT token address
    #[arg(long)]
    pub usdt: String,

    /// SpokePool contract address
    #[arg(long = "spokePool")]
    pub spoke_pool: String,

    /// Swapper contract address
    #[arg(long)]
    pub swapper: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct SetFeesVariablesArgs {
    /// Relayer fee (in percents)
    #[arg(long = "relayerFee")]
    pub relayer_fee: String,

    /// Fee point
    #[arg(long = "feePoint")]
    pub fee_point: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct SetCoreVariablesArgs {
    /// Block ID (bytes32)
    #[arg(long = "blockId")]
    pub block_id: String,

    /// Action chain tip (bytes32)
    #[arg(long = "actionChainTip")]
    pub action_chain_tip: String,

    /// Latest executed action (bytes32)
    #[arg(long = "latestExecutedAction")]
    pub latest_executed_action: String,

    /// State hash (bytes32)
    #[arg(long = "stateHash")]
    pub state_hash: String,

    /// Max order size (uint256)
    #[arg(long = "maxOrderSize")]
    pub max_order_size: String,

    /// Required collateral (uint256)
    #[arg(long = "requiredCollateral")]
    pub required_collateral: String,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct ProviderArgs {
    /// Provider address
    #[arg(long)]
    pub provider: String,
}

#[derive(Parser, Clone)]
pub struct ReceiverArgs {
    /// Receiver address
    #[arg(long)]
    pub receiver: String,
}

#[derive(Parser, Clone)]
pub struct OrderArgs {
    /// Order ID
    #[arg(long = "orderId")]
    pub order_id: String,
}

#[derive(Parser, Clone)]
pub struct OrderIdsArgs {
    /// List of order IDs
    #[arg(long = "orderIds", num_args = 1.., required = true)]
    pub order_ids: Vec<String>,
}

#[derive(Parser, Clone)]
pub struct WalletArgs {
    /// Raw private key, overrides `private_key` from the config
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: Option<String>,

    /// Prompt for private key interactively
    #[arg(short, long)]
    pub interactive: bool,
}
