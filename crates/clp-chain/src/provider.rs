//! HTTP provider construction with a connectivity check.

use alloy::network::Ethereum;
use alloy::providers::fillers::FillProvider;
use alloy::providers::{Provider, ProviderBuilder};
use eyre::{Context, Result};

/// Concrete provider type produced by [`connect`]: the default fill stack
/// over an HTTP transport.
pub type HttpProvider = FillProvider<
    alloy::providers::fillers::JoinFill<
        alloy::providers::Identity,
        alloy::providers::fillers::JoinFill<
            alloy::providers::fillers::GasFiller,
            alloy::providers::fillers::JoinFill<
                alloy::providers::fillers::BlobGasFiller,
                alloy::providers::fillers::JoinFill<
                    alloy::providers::fillers::NonceFiller,
                    alloy::providers::fillers::ChainIdFiller,
                >,
            >,
        >,
    >,
    alloy::providers::RootProvider<Ethereum>,
>;

/// Builds an HTTP provider and verifies connectivity via `eth_blockNumber`.
///
/// # Errors
/// Returns error if the URL is malformed or the connectivity probe fails.
#[tracing::instrument(skip_all, fields(rpc_url = %rpc_url))]
pub async fn connect(rpc_url: &str) -> Result<HttpProvider> {
    let provider =
        ProviderBuilder::new().on_http(rpc_url.parse().wrap_err("invalid RPC URL format")?);

    let latest_block = provider
        .get_block_number()
        .await
        .wrap_err("failed to test RPC connectivity with eth_blockNumber")?;

    tracing::info!(latest_block, "RPC connection successful");

    Ok(provider)
}
