//! clp-engine: batch position valuation over the clp-math kernel.
//!
//! Takes position descriptors plus a pool-state read source and produces
//! enriched positions: current token amounts, range status and an optional
//! USD value. The engine performs no writes, no persistence and no
//! formatting; USD prices are plain caller inputs, and the only external
//! effect is the one pool-state read per distinct pool inside a batch.

pub mod enrich;
pub mod source;
pub mod types;
pub mod valuation;

pub use enrich::{enrich_many, enrich_one};
pub use source::PoolStateSource;
pub use types::{EnrichedPosition, PoolSnapshot, PositionDescriptor, UsdQuote};
