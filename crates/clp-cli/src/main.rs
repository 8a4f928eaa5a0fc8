//! Operator CLI for the concentrated-liquidity position valuation engine.
//!
//! Reads positions from the position manager, values them against live
//! pool state, and renders the result as a table or JSON. Also exposes
//! the small decode/inspect helpers that are useful when debugging the
//! packed on-chain formats by hand.

use alloy::primitives::{Address, U256};
use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Context, Result};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use clp_chain::{connect, FetchPolicy, PositionReader, StateViewSource};
use clp_engine::{enrich_many, EnrichedPosition, PoolStateSource, UsdQuote};
use clp_math::{decode_position_info, PoolKey};

mod price;
mod spot;

/// Position manager deployment on Base mainnet.
const DEFAULT_POSITION_MANAGER: &str = "0x7C5f5A4bBd8fD63184577525326123B519429bDc";
/// State-view lens deployment on Base mainnet.
const DEFAULT_STATE_VIEW: &str = "0xA3c0c9b65baD0b08107Aa264b0f3dB444b867A71";

#[derive(Debug, Clone)]
struct AppContext {
    rpc_url: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "clp-value")]
#[command(about = "Concentrated-liquidity position valuation toolkit")]
#[command(version)]
struct Cli {
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// RPC endpoint; falls back to the CLP_RPC_URL environment variable.
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch, enrich and value a list of position token ids.
    Value(ValueArgs),
    /// Decode a packed position-info word into its fields.
    Decode(DecodeArgs),
    /// Compute a pool id from its key fields and read its price state.
    Slot0(Slot0Args),
}

#[derive(Args, Debug)]
struct ValueArgs {
    /// Position token ids (decimal or 0x-hex). Repeatable.
    #[arg(long = "token-id", required = true)]
    token_ids: Vec<String>,

    /// Position manager contract address.
    #[arg(long, default_value = DEFAULT_POSITION_MANAGER)]
    manager: Address,

    /// State-view contract address.
    #[arg(long, default_value = DEFAULT_STATE_VIEW)]
    state_view: Address,

    /// Pause between consecutive position reads, in milliseconds.
    #[arg(long, default_value_t = 150)]
    request_delay_ms: u64,

    /// USD price of one whole unit of currency0.
    #[arg(long)]
    usd0: Option<f64>,

    /// USD price of one whole unit of currency1.
    #[arg(long)]
    usd1: Option<f64>,

    /// Spot symbol to price currency0 from when --usd0 is not given
    /// (e.g. ETHUSDT).
    #[arg(long)]
    spot0: Option<String>,

    /// Spot symbol to price currency1 from when --usd1 is not given.
    #[arg(long)]
    spot1: Option<String>,

    /// Decimals of currency0.
    #[arg(long, default_value_t = 18)]
    decimals0: u8,

    /// Decimals of currency1.
    #[arg(long, default_value_t = 18)]
    decimals1: u8,

    /// Output format: table (default) or json.
    #[arg(long, default_value = "table")]
    output: String,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Packed position-info word (decimal or 0x-hex).
    #[arg(long)]
    info: String,
}

#[derive(Args, Debug)]
struct Slot0Args {
    #[arg(long)]
    currency0: Address,

    #[arg(long)]
    currency1: Address,

    /// Fee in hundredths of a bip.
    #[arg(long)]
    fee: u32,

    #[arg(long)]
    tick_spacing: i32,

    /// Hook contract; zero when the pool has none.
    #[arg(long, default_value = "0x0000000000000000000000000000000000000000")]
    hooks: Address,

    /// State-view contract address.
    #[arg(long, default_value = DEFAULT_STATE_VIEW)]
    state_view: Address,

    /// Decimals of currency0, for the rendered price.
    #[arg(long, default_value_t = 18)]
    decimals0: u8,

    /// Decimals of currency1.
    #[arg(long, default_value_t = 18)]
    decimals1: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let ctx = AppContext {
        rpc_url: cli.rpc_url.or_else(|| std::env::var("CLP_RPC_URL").ok()),
    };

    match cli.command {
        Commands::Value(args) => handle_value(&ctx, args).await,
        Commands::Decode(args) => handle_decode(args),
        Commands::Slot0(args) => handle_slot0(&ctx, args).await,
    }
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .wrap_err("failed to initialize tracing filter")?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn require_rpc_url(ctx: &AppContext) -> Result<&str> {
    ctx.rpc_url
        .as_deref()
        .ok_or_else(|| eyre!("CLP_RPC_URL or --rpc-url is required for chain reads"))
}

/// Parses a decimal or 0x-prefixed hex string into a U256.
fn parse_u256(raw: &str) -> Result<U256> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x") {
        U256::from_str_radix(hex, 16)
    } else {
        U256::from_str_radix(raw, 10)
    };
    parsed.wrap_err_with(|| format!("invalid 256-bit integer: {raw}"))
}

async fn resolve_usd(
    flag: Option<f64>,
    spot_symbol: Option<&str>,
    side: &str,
) -> Result<Option<f64>> {
    if let Some(price) = flag {
        return Ok(Some(price));
    }
    match spot_symbol {
        Some(symbol) => {
            let price = spot::fetch_spot_usd(symbol)
                .await
                .wrap_err_with(|| format!("spot lookup for {side} failed"))?;
            info!(symbol, price, side, "resolved spot USD price");
            Ok(Some(price))
        }
        None => Ok(None),
    }
}

async fn handle_value(ctx: &AppContext, args: ValueArgs) -> Result<()> {
    let rpc_url = require_rpc_url(ctx)?;

    let token_ids = args
        .token_ids
        .iter()
        .map(|raw| parse_u256(raw))
        .collect::<Result<Vec<_>>>()?;

    let quote = UsdQuote {
        usd0: resolve_usd(args.usd0, args.spot0.as_deref(), "currency0").await?,
        usd1: resolve_usd(args.usd1, args.spot1.as_deref(), "currency1").await?,
        decimals0: args.decimals0,
        decimals1: args.decimals1,
    };

    let provider = connect(rpc_url).await?;
    let reader = PositionReader::new(
        args.manager,
        provider.clone(),
        FetchPolicy {
            inter_request_delay: Duration::from_millis(args.request_delay_ms),
        },
    );

    let descriptors = reader
        .fetch_many(&token_ids)
        .await
        .wrap_err("failed to fetch position descriptors")?;

    let source = StateViewSource::new(args.state_view, provider);
    let enriched = enrich_many(&source, &descriptors, &quote)
        .await
        .wrap_err("failed to enrich positions")?;

    match args.output.as_str() {
        "json" => print_json(&enriched)?,
        _ => print_table(&enriched),
    }
    Ok(())
}

fn handle_decode(args: DecodeArgs) -> Result<()> {
    let fields = decode_position_info(parse_u256(&args.info)?);
    println!("tickLower:     {}", fields.tick_lower);
    println!("tickUpper:     {}", fields.tick_upper);
    println!("hasSubscriber: {}", fields.has_subscriber);
    Ok(())
}

async fn handle_slot0(ctx: &AppContext, args: Slot0Args) -> Result<()> {
    let rpc_url = require_rpc_url(ctx)?;

    let key = PoolKey {
        currency0: args.currency0,
        currency1: args.currency1,
        fee: args.fee,
        tick_spacing: args.tick_spacing,
        hooks: args.hooks,
    };
    let pool_id = key.id();

    let provider = connect(rpc_url).await?;
    let source = StateViewSource::new(args.state_view, provider);
    let state = source.pool_state(pool_id).await?;

    println!("poolId:       {pool_id}");
    println!("sqrtPriceX96: {}", state.sqrt_price_x96);
    println!("tick:         {}", state.tick);
    println!(
        "price:        {}",
        price::display_price(state.sqrt_price_x96, args.decimals0, args.decimals1)
    );
    Ok(())
}

fn print_table(enriched: &[EnrichedPosition]) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY).set_header([
        "token id", "range", "status", "liquidity", "amount0", "amount1", "value (USD)",
    ]);

    let mut total_usd = 0.0f64;
    let mut any_usd = false;
    for position in enriched {
        let value = match position.value_usd {
            Some(value) => {
                any_usd = true;
                total_usd += value;
                format!("{value:.2}")
            }
            None => "-".to_string(),
        };
        table.add_row([
            position.descriptor.token_id.to_string(),
            format!(
                "[{}, {}]",
                position.descriptor.tick_lower, position.descriptor.tick_upper
            ),
            position.range_status.as_str().to_string(),
            position.descriptor.liquidity.to_string(),
            position.amount0.to_string(),
            position.amount1.to_string(),
            value,
        ]);
    }

    println!("{table}");
    if any_usd {
        println!("total: {total_usd:.2} USD");
    }
}

/// JSON row with big integers rendered as decimal text, so consumers are
/// not forced into 64-bit number parsing.
#[derive(Serialize)]
struct PositionRow {
    token_id: String,
    pool_id: String,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: String,
    amount0: String,
    amount1: String,
    range_status: &'static str,
    current_tick: i32,
    sqrt_price_x96: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_usd: Option<f64>,
}

#[derive(Serialize)]
struct ValuationReport {
    valued_at: String,
    positions: Vec<PositionRow>,
}

fn print_json(enriched: &[EnrichedPosition]) -> Result<()> {
    let report = ValuationReport {
        valued_at: Utc::now().to_rfc3339(),
        positions: enriched
            .iter()
            .map(|position| PositionRow {
                token_id: position.descriptor.token_id.to_string(),
                pool_id: position.descriptor.pool_key.id().to_string(),
                tick_lower: position.descriptor.tick_lower,
                tick_upper: position.descriptor.tick_upper,
                liquidity: position.descriptor.liquidity.to_string(),
                amount0: position.amount0.to_string(),
                amount1: position.amount1.to_string(),
                range_status: position.range_status.as_str(),
                current_tick: position.current_tick,
                sqrt_price_x96: position.sqrt_price_x96.to_string(),
                value_usd: position.value_usd,
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).wrap_err("failed to serialize report")?
    );
    Ok(())
}
