//! Batch enrichment: descriptors in, enriched positions out, one
//! pool-state read per distinct pool.

use std::collections::HashMap;

use eyre::Result;
use tracing::debug;

use clp_math::{amounts_for_liquidity, classify, sqrt_ratio_at_tick, PoolId};

use crate::source::PoolStateSource;
use crate::types::{EnrichedPosition, PoolSnapshot, PositionDescriptor, UsdQuote};
use crate::valuation::value_usd;

/// Enriches descriptors in order, one output per input.
///
/// Pool state is read lazily — once per distinct pool id — and cached in
/// a map scoped to this call. The cache never outlives the call, so a
/// later batch always observes fresh prices. Reads are sequential; the
/// deduplication already removes the dominant cost for the common case of
/// many positions in one pool.
///
/// # Errors
/// Propagates state-read failures unchanged, and kernel errors for
/// descriptors whose tick bounds are outside the protocol's domain.
#[tracing::instrument(skip_all, fields(positions = descriptors.len()))]
pub async fn enrich_many<S: PoolStateSource>(
    source: &S,
    descriptors: &[PositionDescriptor],
    quote: &UsdQuote,
) -> Result<Vec<EnrichedPosition>> {
    let mut pool_states: HashMap<PoolId, PoolSnapshot> = HashMap::new();
    let mut enriched = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let pool_id = descriptor.pool_key.id();
        let state = match pool_states.get(&pool_id) {
            Some(state) => *state,
            None => {
                let state = source.pool_state(pool_id).await?;
                debug!(%pool_id, tick = state.tick, "fetched pool state");
                pool_states.insert(pool_id, state);
                state
            }
        };
        enriched.push(enrich_one(descriptor, &state, quote)?);
    }

    Ok(enriched)
}

/// Enriches a single descriptor against an already-read pool snapshot.
///
/// # Errors
/// Kernel errors for out-of-domain tick bounds; conversion errors from
/// the full-precision amount math.
pub fn enrich_one(
    descriptor: &PositionDescriptor,
    state: &PoolSnapshot,
    quote: &UsdQuote,
) -> Result<EnrichedPosition> {
    let sqrt_lower = sqrt_ratio_at_tick(descriptor.tick_lower)?;
    let sqrt_upper = sqrt_ratio_at_tick(descriptor.tick_upper)?;
    let (amount0, amount1) = amounts_for_liquidity(
        state.sqrt_price_x96,
        sqrt_lower,
        sqrt_upper,
        descriptor.liquidity,
    )?;
    let range_status = classify(state.tick, descriptor.tick_lower, descriptor.tick_upper);

    Ok(EnrichedPosition {
        descriptor: *descriptor,
        amount0,
        amount1,
        range_status,
        current_tick: state.tick,
        sqrt_price_x96: state.sqrt_price_x96,
        value_usd: value_usd(amount0, amount1, quote),
    })
}
