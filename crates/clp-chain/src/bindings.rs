//! Typed contract bindings for the protocol's read surface.
//!
//! Only the three views the valuation engine consumes are bound; the
//! manager's write surface is out of scope.

use alloy::sol;

sol! {
    /// On-chain pool identity, as returned by the position manager.
    #[derive(Debug)]
    struct PoolKey {
        address currency0;
        address currency1;
        uint24 fee;
        int24 tickSpacing;
        address hooks;
    }

    #[sol(rpc)]
    interface IPositionManager {
        function getPoolAndPositionInfo(uint256 tokenId)
            external
            view
            returns (PoolKey memory poolKey, uint256 info);

        function getPositionLiquidity(uint256 tokenId)
            external
            view
            returns (uint128 liquidity);
    }

    #[sol(rpc)]
    interface IStateView {
        function getSlot0(bytes32 poolId)
            external
            view
            returns (uint160 sqrtPriceX96, int24 tick, uint24 protocolFee, uint24 lpFee);
    }
}

impl From<PoolKey> for clp_math::PoolKey {
    fn from(key: PoolKey) -> Self {
        Self {
            currency0: key.currency0,
            currency1: key.currency1,
            fee: key.fee.to::<u32>(),
            tick_spacing: key.tickSpacing.as_i32(),
            hooks: key.hooks,
        }
    }
}
