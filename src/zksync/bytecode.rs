//! zkSync contract creation: bytecode hashing, deployer calldata and
//! CREATE2 address derivation
//!
//! On zkSync every contract is created through the ContractDeployer system
//! contract. The bytecode itself travels as a factory dependency and the
//! deployer call only references it by its versioned hash.

use alloy::primitives::{keccak256, Address, Bytes, B256};
use alloy::sol_types::SolCall;
use sha2::{Digest, Sha256};

use crate::contracts::IContractDeployer;
use crate::error::{Error, Result};

/// Largest bytecode accepted by the deployer, in 32-byte words
pub const MAX_BYTECODE_LEN_WORDS: usize = (1 << 16) - 1;

/// Version marker stored in the first byte of an EraVM bytecode hash
pub const BYTECODE_HASH_VERSION: u8 = 1;

/// Checks that a bytecode has a shape the deployer accepts
pub fn validate_bytecode(bytecode: &[u8]) -> Result<()> {
    if bytecode.len() % 32 != 0 {
        return Err(Error::InvalidBytecode(format!(
            "length {} is not divisible by 32",
            bytecode.len()
        )));
    }

    let words = bytecode.len() / 32;
    if words > MAX_BYTECODE_LEN_WORDS {
        return Err(Error::InvalidBytecode(format!(
            "{words} words, at most {MAX_BYTECODE_LEN_WORDS} allowed"
        )));
    }
    if words % 2 == 0 {
        return Err(Error::InvalidBytecode(format!(
            "even number of 32-byte words ({words})"
        )));
    }
    Ok(())
}

/// Computes the versioned bytecode hash
///
/// ```text
/// hash = sha256(bytecode)
/// hash[0] = 1, hash[1] = 0, hash[2..4] = length in words (big endian)
/// ```
pub fn hash_bytecode(bytecode: &[u8]) -> Result<B256> {
    validate_bytecode(bytecode)?;

    let digest = Sha256::digest(bytecode);
    let words = (bytecode.len() / 32) as u16;

    let mut hash = [0u8; 32];
    hash.copy_from_slice(digest.as_slice());
    hash[0] = BYTECODE_HASH_VERSION;
    hash[1] = 0;
    hash[2..4].copy_from_slice(&words.to_be_bytes());

    Ok(B256::from(hash))
}

/// Encodes `ContractDeployer.create` with a zero salt
pub fn encode_create(bytecode_hash: B256, input: Bytes) -> Bytes {
    IContractDeployer::createCall {
        _salt: B256::ZERO,
        _bytecodeHash: bytecode_hash,
        _input: input,
    }
    .abi_encode()
    .into()
}

/// Encodes `ContractDeployer.create2`
pub fn encode_create2(salt: B256, bytecode_hash: B256, input: Bytes) -> Bytes {
    IContractDeployer::create2Call {
        _salt: salt,
        _bytecodeHash: bytecode_hash,
        _input: input,
    }
    .abi_encode()
    .into()
}

/// Computes the address `create2` will deploy to
///
/// ```text
/// address = keccak256(
///     keccak256("zksyncCreate2") ++ pad32(sender) ++ salt ++ bytecodeHash ++ keccak256(input)
/// )[12:]
/// ```
pub fn compute_create2_address(sender: Address, salt: B256, bytecode_hash: B256, input: &[u8]) -> Address {
    let prefix = keccak256("zksyncCreate2");

    let mut preimage = Vec::with_capacity(32 * 5);
    preimage.extend_from_slice(prefix.as_slice());

    let mut sender_padded = [0u8; 32];
    sender_padded[12..].copy_from_slice(sender.as_slice());
    preimage.extend_from_slice(&sender_padded);

    preimage.extend_from_slice(salt.as_slice());
    preimage.extend_from_slice(bytecode_hash.as_slice());
    preimage.extend_from_slice(keccak256(input).as_slice());

    let hash = keccak256(&preimage);
    Address::from_slice(&hash[12..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    #[test]
    fn test_hash_layout() {
        let bytecode = vec![0u8; 32 * 3];
        let hash = hash_bytecode(&bytecode).unwrap();

        let digest = Sha256::digest(&bytecode);
        assert_eq!(hash[0], 1);
        assert_eq!(hash[1], 0);
        assert_eq!(&hash[2..4], &[0, 3]);
        assert_eq!(&hash[4..], &digest[4..]);
    }

    #[test]
    fn test_rejects_unaligned_bytecode() {
        assert!(matches!(hash_bytecode(&[0u8; 33]), Err(Error::InvalidBytecode(_))));
    }

    #[test]
    fn test_rejects_even_word_count() {
        assert!(matches!(hash_bytecode(&[0u8; 64]), Err(Error::InvalidBytecode(_))));
        assert!(matches!(hash_bytecode(&[]), Err(Error::InvalidBytecode(_))));
    }

    #[test]
    fn test_rejects_oversized_bytecode() {
        let bytecode = vec![0u8; (MAX_BYTECODE_LEN_WORDS + 2) * 32];
        assert!(matches!(validate_bytecode(&bytecode), Err(Error::InvalidBytecode(_))));
    }

    #[test]
    fn test_create_uses_zero_salt() {
        let hash = b256!("0x0100000311111111111111111111111111111111111111111111111111111111");
        let data = encode_create(hash, Bytes::new());

        assert_eq!(&data[..4], &IContractDeployer::createCall::SELECTOR);
        assert_eq!(&data[4..36], B256::ZERO.as_slice());
        assert_eq!(&data[36..68], hash.as_slice());
    }

    #[test]
    fn test_create2_carries_salt() {
        let salt = b256!("0x2222222222222222222222222222222222222222222222222222222222222222");
        let hash = b256!("0x0100000311111111111111111111111111111111111111111111111111111111");
        let data = encode_create2(salt, hash, Bytes::from(vec![0xaa]));

        assert_eq!(&data[..4], &IContractDeployer::create2Call::SELECTOR);
        assert_eq!(&data[4..36], salt.as_slice());
    }

    #[test]
    fn test_create2_address_matches_manual_derivation() {
        let sender = address!("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");
        let salt = B256::ZERO;
        let hash = b256!("0x0100000311111111111111111111111111111111111111111111111111111111");

        let mut preimage = keccak256("zksyncCreate2").to_vec();
        preimage.extend_from_slice(&[0u8; 12]);
        preimage.extend_from_slice(sender.as_slice());
        preimage.extend_from_slice(salt.as_slice());
        preimage.extend_from_slice(hash.as_slice());
        preimage.extend_from_slice(keccak256([]).as_slice());
        let expected = Address::from_slice(&keccak256(&preimage)[12..]);

        assert_eq!(compute_create2_address(sender, salt, hash, &[]), expected);
    }

    #[test]
    fn test_create2_address_depends_on_salt_and_input() {
        let sender = address!("0x36615Cf349d7F6344891B1e7CA7C72883F5dc049");
        let hash = b256!("0x0100000311111111111111111111111111111111111111111111111111111111");
        let salt_a = B256::ZERO;
        let salt_b = B256::with_last_byte(1);

        let a = compute_create2_address(sender, salt_a, hash, &[]);
        assert_eq!(a, compute_create2_address(sender, salt_a, hash, &[]));
        assert_ne!(a, compute_create2_address(sender, salt_b, hash, &[]));
        assert_ne!(a, compute_create2_address(sender, salt_a, hash, &[1]));
    }
}
