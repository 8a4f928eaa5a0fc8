//! Pool identity: the immutable key and its canonical hash.

use alloy::primitives::{keccak256, Address, B256};

/// Canonical pool identifier: keccak256 of the ABI-encoded [`PoolKey`].
pub type PoolId = B256;

/// Immutable identity of a pool.
///
/// Field order matches the on-chain struct; the hash in [`PoolKey::id`]
/// depends on it. Created once per pool and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolKey {
    /// Lower-sorted asset of the pair.
    pub currency0: Address,
    /// Higher-sorted asset of the pair.
    pub currency1: Address,
    /// Swap fee in hundredths of a bip (uint24 on-chain).
    pub fee: u32,
    /// Tick granularity (int24 on-chain).
    pub tick_spacing: i32,
    /// Hook/extension contract, zero when unused.
    pub hooks: Address,
}

impl PoolKey {
    /// Derives the canonical pool id: keccak256 over the ABI encoding of
    /// the five fields, each padded to one 32-byte word in declaration
    /// order, with `tick_spacing` sign-extended across its word.
    ///
    /// Deterministic and pure — equal keys always produce equal ids, which
    /// makes the id usable both as the on-chain state lookup argument and
    /// as a cache key.
    pub fn id(&self) -> PoolId {
        let mut words = [0u8; 160];
        words[12..32].copy_from_slice(self.currency0.as_slice());
        words[44..64].copy_from_slice(self.currency1.as_slice());
        words[92..96].copy_from_slice(&self.fee.to_be_bytes());
        if self.tick_spacing < 0 {
            // int24 negative values carry 0xff through the full word.
            words[96..124].fill(0xFF);
        }
        words[124..128].copy_from_slice(&self.tick_spacing.to_be_bytes());
        words[140..160].copy_from_slice(self.hooks.as_slice());
        keccak256(words)
    }
}
