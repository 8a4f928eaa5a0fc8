//! Pool price state reads through the state-view lens.

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use eyre::{Context, Result};

use clp_engine::{PoolSnapshot, PoolStateSource};
use clp_math::PoolId;

use crate::bindings::IStateView;

/// [`PoolStateSource`] over the state-view contract's `getSlot0`.
///
/// Only the first two slot0 fields — √price and tick — are consumed; the
/// fee fields are not part of the valuation model.
pub struct StateViewSource<P: Provider> {
    view: IStateView::IStateViewInstance<(), P>,
}

impl<P: Provider> StateViewSource<P> {
    /// Creates a source over an already-connected provider.
    pub const fn new(state_view: Address, provider: P) -> Self {
        Self {
            view: IStateView::new(state_view, provider),
        }
    }
}

impl<P: Provider> PoolStateSource for StateViewSource<P> {
    #[tracing::instrument(skip(self), fields(%pool_id))]
    async fn pool_state(&self, pool_id: PoolId) -> Result<PoolSnapshot> {
        let slot0 = self
            .view
            .getSlot0(pool_id)
            .call()
            .await
            .wrap_err_with(|| format!("getSlot0 failed for pool {pool_id}"))?;

        Ok(PoolSnapshot {
            sqrt_price_x96: slot0.sqrtPriceX96.to::<U256>(),
            tick: slot0.tick.as_i32(),
        })
    }
}
