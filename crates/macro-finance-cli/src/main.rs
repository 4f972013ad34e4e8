mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::contingent_claims::StatePriceArgs;
use commands::course::{MaterialsArgs, QuizArgs, SessionArgs};
use commands::equilibrium::ParetoArgs;
use commands::fixed_income::{CouponBondArgs, DiscountBondArgs};
use commands::intertemporal::ConsumptionArgs;
use commands::risky_assets::RiskyAssetArgs;
use config::AppConfig;

/// Macro-finance teaching calculators
#[derive(Parser)]
#[command(
    name = "mfin",
    version,
    about = "Macro-finance teaching calculators",
    long_about = "Closed-form calculators from the asset pricing foundations session: \
                  intertemporal choice, contingent claims, Pareto optimality, bond pricing \
                  and risky asset pricing, plus the session pages, quiz and PDF summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimal two-period consumption under log utility
    Consumption(ConsumptionArgs),
    /// Arrow-Debreu state prices and the implied risk-free rate
    StatePrices(StatePriceArgs),
    /// Check a two-consumer allocation for Pareto optimality
    Pareto(ParetoArgs),
    /// Price a discount (zero-coupon) bond
    DiscountBond(DiscountBondArgs),
    /// Price an annual-pay coupon bond
    CouponBond(CouponBondArgs),
    /// Compare Arrow-Debreu, risk-neutral and risk-adjusted prices
    RiskyAsset(RiskyAssetArgs),
    /// Render a session page
    Session(SessionArgs),
    /// List or answer the session quiz
    Quiz(QuizArgs),
    /// Locate or export a session's PDF summary
    Materials(MaterialsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(materials_dir = %config.materials_dir.display(), "configuration loaded");

    let result: commands::CommandResult = match cli.command {
        Commands::Consumption(args) => commands::intertemporal::run_consumption(args),
        Commands::StatePrices(args) => commands::contingent_claims::run_state_prices(args),
        Commands::Pareto(args) => commands::equilibrium::run_pareto(args),
        Commands::DiscountBond(args) => commands::fixed_income::run_discount_bond(args),
        Commands::CouponBond(args) => commands::fixed_income::run_coupon_bond(args),
        Commands::RiskyAsset(args) => commands::risky_assets::run_risky_asset(args),
        Commands::Session(args) => commands::course::run_session(args, &config),
        Commands::Quiz(args) => commands::course::run_quiz(args),
        Commands::Materials(args) => commands::course::run_materials(args, &config),
        Commands::Version => {
            println!("mfin {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
