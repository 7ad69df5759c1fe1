//! Typed results of UntronCore view calls

use alloy::primitives::{Address, Bytes, U256};
use serde::{Serialize, Serializer};

use crate::contracts::{IUntronCore, Transfer};

/// Serializes integers in base 10, the way they are entered on the command line
fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

/// Liquidity provider settings returned by `providers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDetails {
    #[serde(serialize_with = "decimal")]
    pub liquidity: U256,
    #[serde(serialize_with = "decimal")]
    pub rate: U256,
    #[serde(serialize_with = "decimal")]
    pub min_order_size: U256,
    #[serde(serialize_with = "decimal")]
    pub min_deposit: U256,
}

impl From<IUntronCore::providersReturn> for ProviderDetails {
    fn from(ret: IUntronCore::providersReturn) -> Self {
        Self {
            liquidity: ret.liquidity,
            rate: ret.rate,
            min_order_size: ret.minOrderSize,
            min_deposit: ret.minDeposit,
        }
    }
}

/// Destination parameters stored with an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetails {
    pub recipient: Address,
    #[serde(serialize_with = "decimal")]
    pub chain_id: U256,
    #[serde(serialize_with = "decimal")]
    pub across_fee: U256,
    pub do_swap: bool,
    pub out_token: Address,
    #[serde(rename = "minOutputPerUSDT", serialize_with = "decimal")]
    pub min_output_per_usdt: U256,
    pub fixed_output: bool,
    pub swap_data: Bytes,
}

impl From<Transfer> for TransferDetails {
    fn from(transfer: Transfer) -> Self {
        Self {
            recipient: transfer.recipient,
            chain_id: transfer.chainId,
            across_fee: transfer.acrossFee,
            do_swap: transfer.doSwap,
            out_token: transfer.outToken,
            min_output_per_usdt: transfer.minOutputPerUSDT,
            fixed_output: transfer.fixedOutput,
            swap_data: transfer.swapData,
        }
    }
}

/// An order as stored by the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(serialize_with = "decimal")]
    pub timestamp: U256,
    pub creator: Address,
    pub provider: Address,
    pub receiver: Address,
    #[serde(serialize_with = "decimal")]
    pub size: U256,
    #[serde(serialize_with = "decimal")]
    pub rate: U256,
    #[serde(serialize_with = "decimal")]
    pub min_deposit: U256,
    pub transfer: TransferDetails,
}

impl OrderDetails {
    /// Unknown order ids read back as an all-zero record
    pub fn is_empty(&self) -> bool {
        self.creator == Address::ZERO && self.timestamp.is_zero()
    }
}

impl From<IUntronCore::ordersReturn> for OrderDetails {
    fn from(ret: IUntronCore::ordersReturn) -> Self {
        Self {
            timestamp: ret.timestamp,
            creator: ret.creator,
            provider: ret.provider,
            receiver: ret.receiver,
            size: ret.size,
            rate: ret.rate,
            min_deposit: ret.minDeposit,
            transfer: ret.transfer.into(),
        }
    }
}

/// Amounts a fulfiller pays and earns for a set of orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillerTotal {
    #[serde(serialize_with = "decimal")]
    pub total_expense: U256,
    #[serde(serialize_with = "decimal")]
    pub total_profit: U256,
}

impl From<IUntronCore::calculateFulfillerTotalReturn> for FulfillerTotal {
    fn from(ret: IUntronCore::calculateFulfillerTotalReturn) -> Self {
        Self {
            total_expense: ret.totalExpense,
            total_profit: ret.totalProfit,
        }
    }
}
