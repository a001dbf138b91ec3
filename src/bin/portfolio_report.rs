//! Batch analysis report for a portfolio of properties
//!
//! Loads a portfolio CSV, analyzes every entry in parallel, and prints
//! per-property figures plus portfolio aggregates.
//! Supports JSON output for API integration via --json flag
//! Accepts config via environment variables:
//!   PORTFOLIO_CSV, HORIZON_YEARS, SELLING_COST_RATE

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use roi_engine::analysis::{AnalysisConfig, AnalysisEngine, AnalysisResult};
use roi_engine::projection::DEFAULT_HORIZON_YEARS;
use roi_engine::property::load_portfolio;
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct PortfolioResponse {
    property_count: usize,
    analyzed_count: usize,
    horizon_years: u32,
    summary: PortfolioSummary,
    properties: Vec<PropertyReportRow>,
    execution_time_ms: u64,
    generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct PortfolioSummary {
    total_cash_invested: f64,
    total_year1_net_cash_flow: f64,
    average_gross_yield_pct: Option<f64>,
    cash_flow_positive_count: usize,
}

#[derive(Serialize)]
struct PropertyReportRow {
    label: String,
    purchase_price: f64,
    total_cash_invested: f64,
    gross_yield_pct: Option<f64>,
    cash_on_cash_pct: Option<f64>,
    year1_net_cash_flow: f64,
    break_even_year: Option<u32>,
    final_equity: f64,
    error: Option<String>,
}

fn report_row(label: &str, outcome: &Result<AnalysisResult, roi_engine::ValidationError>) -> PropertyReportRow {
    match outcome {
        Ok(result) => {
            let summary = result.projection.summary();
            PropertyReportRow {
                label: label.to_string(),
                purchase_price: result.input.property.purchase_price,
                total_cash_invested: result.input.financing.total_cash_invested,
                gross_yield_pct: result.metrics.gross_yield.value().map(|v| v * 100.0),
                cash_on_cash_pct: result.metrics.cash_on_cash.value().map(|v| v * 100.0),
                year1_net_cash_flow: result.metrics.net_cash_flow,
                break_even_year: summary.break_even_year,
                final_equity: summary.final_equity,
                error: None,
            }
        }
        Err(error) => PropertyReportRow {
            label: label.to_string(),
            purchase_price: 0.0,
            total_cash_invested: 0.0,
            gross_yield_pct: None,
            cash_on_cash_pct: None,
            year1_net_cash_flow: 0.0,
            break_even_year: None,
            final_equity: 0.0,
            error: Some(error.describe()),
        },
    }
}

fn main() {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    // Read config from environment or use defaults
    let csv_path = env::var("PORTFOLIO_CSV").unwrap_or_else(|_| "portfolio.csv".to_string());

    let horizon_years: u32 = env::var("HORIZON_YEARS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_HORIZON_YEARS);

    let selling_cost_rate: f64 = env::var("SELLING_COST_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.02);

    if !json_output {
        println!("Loading portfolio from {}...", csv_path);
    }

    let entries = load_portfolio(&csv_path).expect("Failed to load portfolio CSV");

    if !json_output {
        println!("Loaded {} properties in {:?}", entries.len(), start.elapsed());
        println!("Running analyses...");
    }

    let config = AnalysisConfig {
        horizon_years,
        exit_years: vec![horizon_years],
        selling_cost_rate,
    };

    let analysis_start = Instant::now();

    // Analyze the whole portfolio in parallel
    let outcomes: Vec<_> = entries
        .par_iter()
        .map(|entry| {
            let engine = AnalysisEngine::new(config.clone());
            let outcome = engine.analyze(&entry.property, &entry.financing, None);
            (entry.label.clone(), outcome)
        })
        .collect();

    if !json_output {
        println!("Analyses complete in {:?}", analysis_start.elapsed());
    }

    let properties: Vec<PropertyReportRow> = outcomes
        .iter()
        .map(|(label, outcome)| report_row(label, outcome))
        .collect();

    // Aggregate across the entries that analyzed cleanly
    let analyzed: Vec<&PropertyReportRow> =
        properties.iter().filter(|row| row.error.is_none()).collect();
    let total_cash_invested: f64 = analyzed.iter().map(|row| row.total_cash_invested).sum();
    let total_year1_net_cash_flow: f64 =
        analyzed.iter().map(|row| row.year1_net_cash_flow).sum();
    let yields: Vec<f64> = analyzed
        .iter()
        .filter_map(|row| row.gross_yield_pct)
        .collect();
    let average_gross_yield_pct = if yields.is_empty() {
        None
    } else {
        Some(yields.iter().sum::<f64>() / yields.len() as f64)
    };
    let cash_flow_positive_count = analyzed
        .iter()
        .filter(|row| row.year1_net_cash_flow > 0.0)
        .count();

    let response = PortfolioResponse {
        property_count: entries.len(),
        analyzed_count: analyzed.len(),
        horizon_years,
        summary: PortfolioSummary {
            total_cash_invested,
            total_year1_net_cash_flow,
            average_gross_yield_pct,
            cash_flow_positive_count,
        },
        properties,
        execution_time_ms: start.elapsed().as_millis() as u64,
        generated_at: Utc::now(),
    };

    if json_output {
        println!("{}", serde_json::to_string(&response).unwrap());
    } else {
        println!("\nPortfolio Report ({} year horizon):", horizon_years);
        println!(
            "{:<24} {:>14} {:>14} {:>10} {:>10} {:>14} {:>10}",
            "Label", "Price", "Invested", "GrossYld", "CoC", "Year1 NCF", "BreakEven"
        );
        println!("{}", "-".repeat(102));

        for row in &response.properties {
            if let Some(error) = &row.error {
                println!("{:<24} invalid input: {}", row.label, error.replace('\n', "; "));
                continue;
            }
            println!(
                "{:<24} {:>14.0} {:>14.0} {:>9.2}% {:>9.2}% {:>14.0} {:>10}",
                row.label,
                row.purchase_price,
                row.total_cash_invested,
                row.gross_yield_pct.unwrap_or(0.0),
                row.cash_on_cash_pct.unwrap_or(0.0),
                row.year1_net_cash_flow,
                row.break_even_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            );
        }

        println!("\nSummary:");
        println!("  Properties Analyzed: {} / {}", response.analyzed_count, response.property_count);
        println!("  Total Cash Invested: {:.2}", response.summary.total_cash_invested);
        println!(
            "  Total Year-1 Net Cash Flow: {:.2}",
            response.summary.total_year1_net_cash_flow
        );
        if let Some(avg) = response.summary.average_gross_yield_pct {
            println!("  Average Gross Yield: {:.2}%", avg);
        }
        println!(
            "  Cash-Flow Positive: {} of {}",
            response.summary.cash_flow_positive_count, response.analyzed_count
        );

        println!("\nTotal time: {:?}", start.elapsed());
    }
}
