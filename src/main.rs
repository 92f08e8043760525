//! Household Planner CLI
//!
//! Evaluates a household profile and prints the full plan report.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use household_planner::budget::{default_budget, total_budget};
use household_planner::household::{total_debt, Track};
use household_planner::networth::{default_components, NetWorthSummary};
use household_planner::{HouseholdProfile, PlanRunner};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTrack {
    Aggressive,
    Moderate,
}

impl From<CliTrack> for Track {
    fn from(value: CliTrack) -> Self {
        match value {
            CliTrack::Aggressive => Track::Aggressive,
            CliTrack::Moderate => Track::Moderate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "household_planner", about = "Household financial plan report")]
struct Cli {
    /// Household profile JSON; omit to use the built-in sample profile
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Assumptions CSV directory; omit to use compiled-in defaults
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Override the profile's planning track
    #[arg(long, value_enum)]
    track: Option<CliTrack>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runner = match &cli.assumptions {
        Some(dir) => PlanRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => PlanRunner::new(),
    };

    let mut profile = match &cli.profile {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading profile {}", path.display()))?;
            serde_json::from_str::<HouseholdProfile>(&raw)
                .with_context(|| format!("parsing profile {}", path.display()))?
        }
        None => HouseholdProfile::sample(),
    };
    if let Some(track) = cli.track {
        profile.track = track.into();
    }

    let report = runner.evaluate(&profile);

    println!("Household Planner v0.1.0");
    println!("========================\n");

    println!("Track: {}", profile.track.as_str());
    println!(
        "Income: ${:.0} + ${:.0} = ${:.0}",
        profile.income.primary_income,
        profile.income.secondary_income,
        profile.income.total()
    );
    println!("Total debt: ${:.0}", total_debt(&profile.debts));
    println!();

    println!("Taxes:");
    println!("  Taxable income:  ${:>12.0}", report.tax.taxable_income);
    println!("  Federal tax:     ${:>12.0}", report.tax.federal_tax);
    println!("  State tax:       ${:>12.0}", report.tax.state_tax);
    println!("  Total tax:       ${:>12.0}", report.tax.total_tax);
    println!("  Net income:      ${:>12.0}", report.tax.net_income);
    println!("  Monthly income:  ${:>12.0}", report.tax.monthly_income);
    println!("  Effective rate:  {:>12.1}%", report.tax.effective_rate * 100.0);
    println!();

    if !report.tax_suggestions.is_noop() {
        println!("Tax suggestions:");
        if report.tax_suggestions.enable_hsa {
            println!("  - Enable the HSA election");
        }
        if let Some(pct) = report.tax_suggestions.raise_pretax_pct_to {
            println!("  - Raise pre-tax 401(k) contribution to {pct:.0}%");
        }
        if let Some(cap) = report.tax_suggestions.raise_roth_to {
            println!("  - Raise Roth IRA contribution to ${cap:.0}");
        }
        println!();
    }

    println!(
        "Emergency fund: ${:.0} of ${:.0} ({:.0}%)",
        profile.emergency_fund, profile.emergency_fund_goal, report.emergency_fund_progress_pct
    );
    println!();

    if report.insurance_recommendations.is_empty() {
        println!("Insurance coverage is optimized.");
    } else {
        println!("Insurance recommendations:");
        for rec in &report.insurance_recommendations {
            println!("  - {rec}");
        }
    }
    println!();

    println!("Milestones:");
    for ms in &report.milestones {
        println!(
            "  {:<18} ${:>9.0} of ${:>9.0} ({:>3.0}%)  year {}",
            ms.name,
            ms.current,
            ms.target,
            ms.progress_pct(),
            ms.year
        );
    }
    println!();

    let budget = default_budget();
    println!("Monthly budget (${:.0} total):", total_budget(&budget));
    for item in &budget {
        println!("  {:<16} ${:>6.0}  {:>3}%", item.category, item.amount, item.percentage);
    }
    println!();

    let net_worth = NetWorthSummary::from_components(default_components());
    println!("Projected year-10 net worth by track:");
    println!("  {:<12} {:>12} {:>12}", "", "Aggressive", "Moderate");
    for component in &net_worth.components {
        println!(
            "  {:<12} {:>12.0} {:>12.0}",
            component.category, component.aggressive, component.moderate
        );
    }
    println!(
        "  {:<12} {:>12.0} {:>12.0}",
        "Total", net_worth.aggressive_total, net_worth.moderate_total
    );
    println!(
        "  Aggressive track ends ${:.0} ({:.0}%) ahead.",
        net_worth.difference, net_worth.advantage_pct
    );

    if let Some(path) = &cli.json {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("\nFull report written to: {}", path.display());
    }

    Ok(())
}
