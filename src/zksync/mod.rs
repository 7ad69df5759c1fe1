//! zkSync-specific transaction format and contract creation helpers

mod bytecode;
mod eip712;

pub use bytecode::{
    compute_create2_address, encode_create, encode_create2, hash_bytecode, validate_bytecode,
    BYTECODE_HASH_VERSION, MAX_BYTECODE_LEN_WORDS,
};
pub use eip712::{
    domain, Eip712Meta, Eip712Transaction, EstimateGasRequest, SignedEip712Transaction,
    DEFAULT_GAS_PER_PUBDATA_LIMIT, EIP712_TX_TYPE,
};
