//! Command dispatcher that routes parsed CLI commands to their handlers.
//!
//! Each handler performs at most one outbound fetch and renders either the
//! human-readable output or, with `--json`, the raw wire shape.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use rust_decimal::Decimal;
use tracing::info;

use selic::config::SgsConfig;
use selic::sgs::SgsClient;
use selic::simulation::SimulationEngine;
use selic::utils::format_currency;

use crate::cli::Commands;

/// Route a parsed command to its handler
pub async fn dispatch_command(
    command: Commands,
    json_output: bool,
    config: SgsConfig,
) -> Result<()> {
    let client = SgsClient::new(&config)?;
    let engine = SimulationEngine::new(client);

    match command {
        Commands::History {
            start_date,
            end_date,
        } => dispatch_history(&engine, &start_date, &end_date, json_output).await,

        Commands::Simulate {
            principal,
            start_date,
            end_date,
        } => dispatch_simulate(&engine, &principal, &start_date, &end_date, json_output).await,

        Commands::Export {
            start_date,
            end_date,
            output,
        } => dispatch_export(&engine, &start_date, &end_date, &output).await,

        Commands::Latest => dispatch_latest(&engine, json_output).await,
    }
}

async fn dispatch_history(
    engine: &SimulationEngine,
    start_date: &str,
    end_date: &str,
    json_output: bool,
) -> Result<()> {
    validate_range(start_date, end_date)?;
    info!("Showing Selic history from {} to {}", start_date, end_date);

    let series = engine.history(start_date, end_date).await?;

    if json_output {
        println!("{}", serde_json::to_string(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!(
            "\n{} No data for {} to {}\n",
            "ℹ".blue().bold(),
            start_date,
            end_date
        );
        return Ok(());
    }

    use tabled::{settings::Style, Table, Tabled};

    #[derive(Tabled)]
    struct RateRow {
        #[tabled(rename = "Data")]
        date: String,
        #[tabled(rename = "Valor (% a.a.)")]
        rate: String,
    }

    let rows: Vec<RateRow> = series
        .iter()
        .map(|record| RateRow {
            date: record.date.clone(),
            rate: record.rate.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!(
        "\n{} {} daily observations from {} to {}\n",
        "✓".green().bold(),
        series.len(),
        start_date,
        end_date
    );

    Ok(())
}

async fn dispatch_simulate(
    engine: &SimulationEngine,
    principal: &str,
    start_date: &str,
    end_date: &str,
    json_output: bool,
) -> Result<()> {
    validate_range(start_date, end_date)?;
    let principal = parse_principal(principal)?;
    info!(
        "Simulating {} from {} to {}",
        principal, start_date, end_date
    );

    let result = engine.simulate(principal, start_date, end_date).await?;

    if json_output {
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    let gain = result.valorfinal - principal;
    println!("\n{} Selic simulation\n", "📈".cyan().bold());
    println!("  Period:      {} to {}", start_date, end_date);
    println!("  Principal:   {}", format_currency(principal));
    println!(
        "  Final value: {}",
        format_currency(result.valorfinal).green().bold()
    );
    println!("  Gain:        {}\n", format_currency(gain).green());

    Ok(())
}

async fn dispatch_export(
    engine: &SimulationEngine,
    start_date: &str,
    end_date: &str,
    output: &str,
) -> Result<()> {
    validate_range(start_date, end_date)?;
    info!(
        "Exporting Selic series from {} to {} into {}",
        start_date, end_date, output
    );

    let csv = engine.export_csv(start_date, end_date).await?;
    std::fs::write(output, &csv)
        .with_context(|| format!("Failed to write CSV to {}", output))?;

    // Subtract the header line for the record count.
    let records = csv.lines().count().saturating_sub(1);
    println!(
        "{} Exported {} records to {}",
        "✓".green().bold(),
        records,
        output
    );

    Ok(())
}

async fn dispatch_latest(engine: &SimulationEngine, json_output: bool) -> Result<()> {
    let latest = engine.latest().await?;

    if json_output {
        println!("{}", serde_json::to_string(&latest)?);
        return Ok(());
    }

    match latest {
        Some(record) => {
            println!(
                "\n{} Latest Selic ({}): {} % a.a.\n",
                "✓".green().bold(),
                record.date,
                record.rate.bold()
            );
        }
        None => {
            println!("\n{} No published Selic rate available\n", "ℹ".blue().bold());
        }
    }

    Ok(())
}

/// Reject inputs that are not valid DD/MM/YYYY dates before any fetch.
/// The accepted strings are still passed through to the upstream verbatim.
fn validate_range(start_date: &str, end_date: &str) -> Result<()> {
    parse_date_br(start_date)?;
    parse_date_br(end_date)?;
    Ok(())
}

fn parse_date_br(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .with_context(|| format!("Invalid date '{}', expected DD/MM/YYYY", value))
}

/// Parse a principal amount, accepting either a comma or a dot separator.
fn parse_principal(value: &str) -> Result<Decimal> {
    selic::simulation::parse_decimal_br(value)
        .with_context(|| format!("Invalid principal '{}', expected a decimal amount", value))
}
