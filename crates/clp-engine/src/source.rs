//! Read seam between the engine and the chain-data provider.

use clp_math::PoolId;
use eyre::Result;

use crate::types::PoolSnapshot;

/// Source of pool price state, keyed by pool id.
///
/// The single external read the enrichment pass depends on. Retry and
/// backoff belong to the implementation's caller, not here — a failure
/// propagates unchanged so the caller can tell a transient provider error
/// from a math error.
#[allow(async_fn_in_trait)]
pub trait PoolStateSource {
    /// Reads the current price state for `pool_id`.
    ///
    /// # Errors
    /// Whatever the underlying provider surfaces; the engine never
    /// swallows or retries it.
    async fn pool_state(&self, pool_id: PoolId) -> Result<PoolSnapshot>;
}
