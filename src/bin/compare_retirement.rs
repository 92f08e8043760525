//! Sweep Roth vs Traditional outcomes across tax-rate pairs
//!
//! Usage: cargo run --bin compare_retirement -- --contribution 6500 --years 30 --rate 7

use anyhow::Context;
use clap::Parser;

use household_planner::compare_roth_vs_traditional;
use household_planner::growth::Choice;

#[derive(Parser, Debug)]
#[command(name = "compare_retirement", about = "Roth vs Traditional across tax-rate pairs")]
struct Cli {
    /// Gross annual contribution in dollars
    #[arg(long, default_value_t = 6_500.0)]
    contribution: f64,

    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Annual growth rate, percent
    #[arg(long, default_value_t = 7.0)]
    rate: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Marginal rates from the married-filing-jointly bracket table
    let rates = [10.0, 12.0, 22.0, 24.0, 32.0, 35.0, 37.0];

    println!(
        "${:.0}/year for {} years at {:.1}% growth",
        cli.contribution, cli.years, cli.rate
    );
    println!(
        "{:>8} {:>8} {:>16} {:>16} {:>12}",
        "Now", "Retire", "Traditional", "Roth", "Favors"
    );
    println!("{}", "-".repeat(64));

    for current in rates {
        for retirement in rates {
            let cmp = compare_roth_vs_traditional(
                cli.contribution,
                cli.years,
                cli.rate,
                current,
                retirement,
            )
            .context("invalid comparison parameters")?;

            let favors = match cmp.recommendation {
                Choice::Roth => "Roth",
                Choice::Traditional => "Traditional",
                Choice::Either => "Either",
            };
            println!(
                "{:>7.0}% {:>7.0}% {:>16.2} {:>16.2} {:>12}",
                current,
                retirement,
                cmp.traditional_ending_value,
                cmp.roth_ending_value,
                favors
            );
        }
    }

    Ok(())
}
