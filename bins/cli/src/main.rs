//! currfmt command-line tool
//!
//! Formats an amount of minor currency units as a price string.
//!
//! Usage: currfmt [--zero-major <empty|digit>] [--json] <AMOUNT> [CURRENCY]
//!        currfmt --list [--json]

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currfmt_core::{PriceFormatter, currency};
use currfmt_shared::{AppConfig, FormatError, Price, ZeroMajor};

/// Format minor-unit amounts as currency strings.
#[derive(Parser, Debug)]
#[command(name = "currfmt", version, about, long_about = None)]
struct Cli {
    /// Amount in minor currency units (e.g. cents)
    #[arg(allow_negative_numbers = true, required_unless_present = "list")]
    amount: Option<i64>,

    /// ISO 4217 currency code; defaults to the configured currency
    currency: Option<String>,

    /// How amounts below one major unit render: "empty" ($.05) or "digit" ($0.05)
    #[arg(long, value_name = "POLICY")]
    zero_major: Option<ZeroMajor>,

    /// List the supported currencies
    #[arg(long)]
    list: bool,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            if cli.json
                && let Some(format_err) = err.downcast_ref::<FormatError>()
            {
                println!("{}", error_json(format_err));
            }
            Err(err)
        }
    }
}

/// Produces the text printed on success.
fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    if cli.list {
        return list_currencies(cli.json);
    }

    let Some(amount) = cli.amount else {
        bail!("an amount is required");
    };
    let Some(code) = cli
        .currency
        .clone()
        .or_else(|| config.formatter.default_currency.clone())
    else {
        bail!("no currency given and no default currency configured");
    };

    let formatter = cli.zero_major.map_or_else(
        || PriceFormatter::from_config(&config.formatter),
        PriceFormatter::new,
    );
    debug!(zero_major = %formatter.zero_major(), "formatter ready");

    let price = Price::new(amount, code);
    let formatted = formatter.format_price(&price)?;
    debug!(amount = price.amount, currency = %price.currency, "formatted price");

    if cli.json {
        let output = serde_json::json!({
            "amount": price.amount,
            "currency": price.currency,
            "formatted": formatted,
        });
        Ok(output.to_string())
    } else {
        Ok(formatted)
    }
}

fn error_json(err: &FormatError) -> serde_json::Value {
    serde_json::json!({
        "error": err.error_code(),
        "message": err.to_string(),
    })
}

fn list_currencies(json: bool) -> anyhow::Result<String> {
    let mut entries = Vec::new();
    for code in currency::codes() {
        let info = currency::lookup(code).context("currency table changed while listing")?;
        entries.push((code, info));
    }

    if json {
        let output: Vec<_> = entries
            .iter()
            .map(|(code, info)| {
                serde_json::json!({
                    "code": code,
                    "symbol": info.symbol,
                    "minor_per_major": info.minor_per_major.get(),
                    "decimal_separator": info.decimal_separator,
                    "places_separator": info.places_separator,
                    "places_magnitude": info.places_magnitude,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let lines: Vec<_> = entries
        .iter()
        .map(|(code, info)| format!("{code}\t{}", info.symbol))
        .collect();
    Ok(lines.join("\n"))
}
