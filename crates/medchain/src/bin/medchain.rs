//! Command-line demo: build a chain, tamper with it, print the result.
//!
//! ```text
//! medchain --record P1="blood pressure 120/80" --record P2="glucose 90" --tamper 0
//! medchain --demo --format json
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medchain::render::{render, Format};
use medchain::{Ledger, LedgerConfig};

#[derive(Debug, Parser)]
#[command(name = "medchain", version, about = "Tamper-evident patient record chain demo")]
struct Cli {
    /// Append a record, as PATIENT_ID=RECORD_DATA (repeatable).
    #[arg(long = "record", value_name = "PATIENT=DATA", value_parser = parse_pair)]
    records: Vec<(String, String)>,

    /// Replace a record's data with arbitrary text, as INDEX=TEXT (repeatable).
    #[arg(long = "replace", value_name = "INDEX=TEXT", value_parser = parse_replace)]
    replacements: Vec<(i64, String)>,

    /// Tamper a record by appending the tamper marker (repeatable).
    #[arg(long = "tamper", value_name = "INDEX", allow_hyphen_values = true)]
    tampers: Vec<i64>,

    /// Suffix used by --tamper (overrides MEDCHAIN_TAMPER_MARKER).
    #[arg(long)]
    marker: Option<String>,

    /// Run the two-record scenario and tamper with the first record, plus any --tamper indices.
    #[arg(long, conflicts_with = "records")]
    demo: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Cli {
    /// Records to append and indices to tamper with the marker.
    ///
    /// `--demo` seeds the two-record scenario and a tamper at 0; any
    /// `--tamper` indices run after it.
    fn plan(&self) -> (Vec<(String, String)>, Vec<i64>) {
        if self.demo {
            let records = vec![
                ("P1".to_string(), "blood pressure 120/80".to_string()),
                ("P2".to_string(), "glucose 90".to_string()),
            ];
            let tampers = std::iter::once(0).chain(self.tampers.iter().copied()).collect();
            (records, tampers)
        } else {
            (self.records.clone(), self.tampers.clone())
        }
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected PATIENT=DATA, got {:?}", raw))
}

fn parse_replace(raw: &str) -> Result<(i64, String), String> {
    let (index, text) = parse_pair(raw)?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid index {:?}: {}", index, e))?;
    Ok((index, text))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medchain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = LedgerConfig::from_env().context("loading configuration")?;
    if let Some(marker) = &cli.marker {
        config.tamper_marker = marker.clone();
    }

    let ledger = Ledger::new(config);

    let (records, tampers) = cli.plan();
    if records.is_empty() {
        bail!("nothing to do: pass --record PATIENT=DATA or --demo");
    }

    for (patient_id, record_data) in &records {
        ledger
            .append(patient_id, record_data)
            .await
            .with_context(|| format!("appending record for {:?}", patient_id))?;
    }
    info!(records = ledger.len().await, "chain built");

    for (index, text) in &cli.replacements {
        ledger
            .tamper(*index, text)
            .await
            .with_context(|| format!("replacing record {}", index))?;
    }
    for index in tampers {
        ledger
            .tamper_default(index)
            .await
            .with_context(|| format!("tampering record {}", index))?;
    }

    let integrity = ledger.verify().await;
    let output = render(&ledger.view().await, &integrity, cli.format)?;
    print!("{}", output);
    if cli.format == Format::Json {
        println!();
    }

    Ok(())
}
