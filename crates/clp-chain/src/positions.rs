//! Throttled position descriptor reads from the position manager.

use std::future::IntoFuture;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use eyre::{Context, Result};
use futures::future;
use indicatif::{ProgressBar, ProgressStyle};

use clp_engine::PositionDescriptor;
use clp_math::decode_position_info;

use crate::bindings::IPositionManager;

/// Client-side backpressure policy for multi-position fetching.
///
/// The inter-request delay throttles this client against RPC provider
/// rate limits. It is a policy, not a performance knob: removing it
/// trades provider bans for latency, so replace it only with an
/// equivalent throttle.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    /// Pause between consecutive position fetches.
    pub inter_request_delay: Duration,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            inter_request_delay: Duration::from_millis(150),
        }
    }
}

/// Reads position descriptors from the position manager contract.
pub struct PositionReader<P: Provider> {
    manager: IPositionManager::IPositionManagerInstance<(), P>,
    policy: FetchPolicy,
}

impl<P: Provider> PositionReader<P> {
    /// Creates a reader over an already-connected provider.
    pub const fn new(manager: Address, provider: P, policy: FetchPolicy) -> Self {
        Self {
            manager: IPositionManager::new(manager, provider),
            policy,
        }
    }

    /// Reads one position: the pool key + packed info word and the
    /// current liquidity, joined concurrently, then decoded.
    ///
    /// # Errors
    /// Returns error if either contract read fails; failures are
    /// propagated with context, never retried here.
    #[tracing::instrument(skip(self), fields(%token_id))]
    pub async fn fetch_one(&self, token_id: U256) -> Result<PositionDescriptor> {
        let (pool_and_info, liquidity) = future::try_join(
            self.manager.getPoolAndPositionInfo(token_id).call().into_future(),
            self.manager.getPositionLiquidity(token_id).call().into_future(),
        )
        .await
        .wrap_err_with(|| format!("position read failed for token {token_id}"))?;

        let info = decode_position_info(pool_and_info.info);
        tracing::debug!(
            tick_lower = info.tick_lower,
            tick_upper = info.tick_upper,
            liquidity = liquidity.liquidity,
            "decoded position"
        );

        Ok(PositionDescriptor {
            token_id,
            tick_lower: info.tick_lower,
            tick_upper: info.tick_upper,
            liquidity: liquidity.liquidity,
            pool_key: pool_and_info.poolKey.into(),
        })
    }

    /// Reads many positions sequentially, pausing
    /// [`FetchPolicy::inter_request_delay`] between tokens.
    ///
    /// Output order matches input order. The loop is deliberately not
    /// parallelized — see [`FetchPolicy`].
    ///
    /// # Errors
    /// Fails on the first read error, leaving retry policy to the caller.
    #[tracing::instrument(skip_all, fields(tokens = token_ids.len()))]
    pub async fn fetch_many(&self, token_ids: &[U256]) -> Result<Vec<PositionDescriptor>> {
        let pb = ProgressBar::new(token_ids.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} positions")
                .wrap_err("failed to create progress style")?,
        );

        let mut descriptors = Vec::with_capacity(token_ids.len());
        for (i, token_id) in token_ids.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.policy.inter_request_delay).await;
            }
            descriptors.push(self.fetch_one(*token_id).await?);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_150ms() {
        assert_eq!(
            FetchPolicy::default().inter_request_delay,
            Duration::from_millis(150)
        );
    }
}
