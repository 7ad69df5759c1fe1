use std::path::PathBuf;

use alloy::network::primitives::ReceiptResponse;
use alloy::network::AnyTransactionReceipt;
use alloy::primitives::{Address, TxHash};
use serde::Serialize;
use untron_rs::{FulfillerTotal, OrderDetails, ProviderDetails};

/// Receipt of a write command
pub struct ReceiptOutput<'a> {
    pub label: &'a str,
    pub receipt: &'a AnyTransactionReceipt,
}

impl ReceiptOutput<'_> {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self.receipt).unwrap());
        } else {
            let status = if self.receipt.status() { "success" } else { "reverted" };
            println!("{}", self.label);
            println!("  Tx Hash: {}", self.receipt.transaction_hash());
            println!("  Status: {}", status);
            if let Some(block) = self.receipt.block_number() {
                println!("  Block: {}", block);
            }
            println!("  Gas Used: {}", self.receipt.gas_used());
            println!("  Receipt: {}", serde_json::to_string(self.receipt).unwrap());
        }
    }
}

#[derive(Serialize)]
pub struct CoreDeploymentOutput {
    pub implementation: Address,
    pub implementation_tx: TxHash,
    pub proxy: Address,
    pub proxy_tx: TxHash,
    pub config: PathBuf,
}

impl CoreDeploymentOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("UntronCore implementation deployed at {}", self.implementation);
            println!("  Tx Hash: {}", self.implementation_tx);
            println!("UntronCore proxy deployed at {}", self.proxy);
            println!("  Tx Hash: {}", self.proxy_tx);
            println!("Config updated: {}", self.config.display());
        }
    }
}

#[derive(Serialize)]
pub struct DeploymentOutput {
    pub contract: &'static str,
    pub address: Address,
    pub tx_hash: TxHash,
}

impl DeploymentOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Deployed {} at {}", self.contract, self.address);
            println!("  Tx Hash: {}", self.tx_hash);
        }
    }
}

/// Single value returned by a view call
pub struct ValueOutput {
    pub label: &'static str,
    pub key: &'static str,
    pub value: String,
}

impl ValueOutput {
    pub fn new(label: &'static str, key: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            key,
            value: value.to_string(),
        }
    }

    /// JSON form: `{ "<key>": "<value>" }`
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert(self.key.to_string(), self.value.clone().into());
        serde_json::Value::Object(object)
    }

    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(&self.to_json()).unwrap());
        } else {
            println!("{}: {}", self.label, self.value);
        }
    }
}

pub fn print_provider_details(details: &ProviderDetails, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(details).unwrap());
    } else {
        println!("Provider details:");
        println!("  Liquidity: {}", details.liquidity);
        println!("  Rate: {}", details.rate);
        println!("  Min Order Size: {}", details.min_order_size);
        println!("  Min Deposit: {}", details.min_deposit);
    }
}

pub fn print_order_details(order: &OrderDetails, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(order).unwrap());
    } else {
        println!("Order details:");
        if order.is_empty() {
            println!("  (no such order)");
        }
        println!("  Timestamp: {}", order.timestamp);
        println!("  Creator: {}", order.creator);
        println!("  Provider: {}", order.provider);
        println!("  Receiver: {}", order.receiver);
        println!("  Size: {}", order.size);
        println!("  Rate: {}", order.rate);
        println!("  Min Deposit: {}", order.min_deposit);
        println!("  Transfer:");
        println!("    Recipient: {}", order.transfer.recipient);
        println!("    Chain ID: {}", order.transfer.chain_id);
        println!("    Across Fee: {}", order.transfer.across_fee);
        println!("    Do Swap: {}", order.transfer.do_swap);
        println!("    Out Token: {}", order.transfer.out_token);
        println!("    Min Output Per USDT: {}", order.transfer.min_output_per_usdt);
        println!("    Fixed Output: {}", order.transfer.fixed_output);
        println!("    Swap Data: {}", order.transfer.swap_data);
    }
}

pub fn print_fulfiller_total(total: &FulfillerTotal, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(total).unwrap());
    } else {
        println!(
            "Fulfiller total - Expense: {}, Profit: {}",
            total.total_expense, total.total_profit
        );
    }
}
