//! ROI Engine CLI
//!
//! Command-line interface for analyzing a single property

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use roi_engine::analysis::{AnalysisConfig, AnalysisEngine};
use roi_engine::assumptions::load_overrides;
use roi_engine::metrics::Metric;
use roi_engine::property::{FinancingInput, PropertyInput};
use roi_engine::report::{assemble, Tier};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "roi_engine",
    version,
    about = "Property investment analysis: yields, amortization, projections, sensitivity and exit scenarios"
)]
struct Cli {
    /// Purchase price
    #[arg(long)]
    price: f64,

    /// Annual rent
    #[arg(long)]
    rent: f64,

    /// Unit size in square feet
    #[arg(long)]
    size: Option<f64>,

    /// Location tag echoed into the report
    #[arg(long)]
    location: Option<String>,

    /// Down payment as a fraction of the price
    #[arg(long, default_value_t = 0.25)]
    down: f64,

    /// Annual mortgage interest rate as a fraction
    #[arg(long, default_value_t = 0.045)]
    rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 25)]
    term: u32,

    /// Projection horizon in years
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Exit year to price, may repeat; defaults to the horizon
    #[arg(long = "exit")]
    exit_years: Vec<u32>,

    /// Selling cost rate applied on exit
    #[arg(long, default_value_t = 0.02)]
    selling_cost_rate: f64,

    /// CSV file of assumption overrides (parameter,value)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// With --json, emit the free-tier report instead of premium
    #[arg(long)]
    free: bool,

    /// Write the amortization schedule to this CSV file
    #[arg(long)]
    schedule_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut property = PropertyInput::new(cli.price, cli.rent);
    property.size_sqft = cli.size;
    property.location = cli.location.clone();
    let financing = FinancingInput::new(cli.down, cli.rate, cli.term);

    let overrides = match &cli.assumptions {
        Some(path) => Some(load_overrides(path).map_err(|e| {
            anyhow!("failed to load assumption overrides from {}: {}", path.display(), e)
        })?),
        None => None,
    };

    let exit_years = if cli.exit_years.is_empty() {
        vec![cli.years]
    } else {
        cli.exit_years.clone()
    };
    let config = AnalysisConfig {
        horizon_years: cli.years,
        exit_years,
        selling_cost_rate: cli.selling_cost_rate,
    };

    let result = match AnalysisEngine::new(config).analyze(&property, &financing, overrides.as_ref())
    {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{}", error);
            for issue in &error.issues {
                eprintln!("  {}: {}", issue.field, issue.message);
            }
            process::exit(2);
        }
    };

    if cli.json {
        let tier = if cli.free { Tier::Free } else { Tier::Premium };
        let report = assemble(&result, tier);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("ROI Engine v0.1.0");
    println!("=================\n");

    println!(
        "Property: {}",
        result.input.property.location.as_deref().unwrap_or("(unnamed)")
    );
    println!("  Purchase Price: {:.2}", result.input.property.purchase_price);
    println!("  Annual Rent: {:.2}", result.input.property.annual_rent);
    println!("  Down Payment: {:.2}", result.input.financing.down_payment);
    println!("  Loan Amount: {:.2}", result.input.financing.loan_amount);
    println!("  Closing Costs: {:.2}", result.input.financing.closing_costs);
    println!(
        "  Total Cash Invested: {:.2}",
        result.input.financing.total_cash_invested
    );
    println!();

    println!("Year-1 Metrics:");
    println!("  Gross Yield: {}", format_metric(&result.metrics.gross_yield));
    println!("  Net Yield: {}", format_metric(&result.metrics.net_yield));
    println!("  Cap Rate: {}", format_metric(&result.metrics.cap_rate));
    println!("  Cash-on-Cash: {}", format_metric(&result.metrics.cash_on_cash));
    println!("  Net Cash Flow: {:.2}", result.metrics.net_cash_flow);
    let monthly = result.metrics.monthly_breakdown();
    println!("  Monthly Net Cash Flow: {:.2}", monthly.net_cash_flow);
    println!();

    println!("Projection ({} years):", result.projection.snapshots.len());
    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>16} {:>16} {:>16}",
        "Year", "EffRent", "OpEx", "DebtSvc", "NetCF", "CumCF", "Value", "Equity"
    );
    println!("{}", "-".repeat(114));
    for snapshot in &result.projection.snapshots {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>16.2} {:>16.2} {:>16.2}",
            snapshot.year,
            snapshot.effective_rent,
            snapshot.operating_expenses,
            snapshot.debt_service,
            snapshot.net_cash_flow,
            snapshot.cumulative_cash_flow,
            snapshot.property_value,
            snapshot.equity,
        );
    }
    match result.projection.break_even_year {
        Some(year) => println!("\nBreak-even: year {}", year),
        None => println!("\nBreak-even: not reached within the horizon"),
    }
    println!();

    println!("Exit Scenarios:");
    for exit in &result.exits {
        println!(
            "  Year {:>2}: sale {:.2}, net proceeds {:.2}, total return {}, annualized {}",
            exit.exit_year,
            exit.sale_price,
            exit.net_sale_proceeds,
            format_metric(&exit.total_return),
            format_metric(&exit.annualized_return),
        );
    }

    if let Some(path) = &cli.schedule_csv {
        write_schedule_csv(&result.schedule.rows, path)
            .with_context(|| format!("failed to write schedule to {}", path.display()))?;
        println!("\nAmortization schedule written to: {}", path.display());
    }

    Ok(())
}

fn format_metric(metric: &Metric) -> String {
    match metric.value() {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "n/a".to_string(),
    }
}

fn write_schedule_csv(rows: &[roi_engine::mortgage::AmortizationRow], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Period,Payment,Principal,Interest,Balance")?;
    for row in rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            row.period, row.payment, row.principal, row.interest, row.balance
        )?;
    }
    Ok(())
}
