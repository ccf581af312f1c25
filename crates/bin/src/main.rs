//! Monterrey CLI binary.
//!
//! Command-line interface for the Monterrey investment-advisory engine:
//! questionnaire scoring, portfolio recommendation, historical statistics
//! and compound growth projection.

mod answers;

use answers::{load_answers, template_json};
use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use monterrey::AdvisorSession;
use monterrey_data::{CachedQuotes, PriceSeries, YahooQuoteProvider};
use monterrey_growth::SimulationParams;
use monterrey_output::{
    AdviceReport, ProjectionSummary, write_trailing_returns_csv, write_trajectory_csv,
};
use monterrey_profile::{Allocation, AllocationModel, RiskCategory, sections};
use monterrey_stats::{
    DEFAULT_TRAILING_PERIODS, TrailingReturn, compute_stats, portfolio_index, trailing_returns,
};
use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::time::Duration as StdDuration;

#[derive(Parser)]
#[command(name = "monterrey")]
#[command(about = "Monterrey: investment-advisory engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the risk questionnaire
    Questions {
        /// Print a blank answers-file template instead
        #[arg(long)]
        template: bool,
    },

    /// Score an answers file and show the recommended portfolio
    Profile {
        /// Path to the answers JSON file
        answers: PathBuf,
    },

    /// Compute portfolio statistics from historical prices
    Analyze {
        /// Path to an answers JSON file
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Risk category (high, medium, conservative) instead of answers
        #[arg(long, conflicts_with = "answers")]
        category: Option<String>,

        /// Weight overrides, e.g. "QQQ=50,SPY=30,EEM=20"
        #[arg(long)]
        weights: Option<String>,

        /// History window in years
        #[arg(long, default_value = "10")]
        years: u32,

        /// Write per-instrument trailing returns to a CSV file
        #[arg(long)]
        trailing_csv: Option<PathBuf>,
    },

    /// Project compound growth for a fixed annual rate
    Simulate {
        /// Annual return in percent (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,

        /// Initial amount
        #[arg(long, default_value = "1000")]
        initial: f64,

        /// Monthly contribution
        #[arg(long, default_value = "100")]
        monthly: f64,

        /// Horizon in years (1-30)
        #[arg(long, default_value = "5")]
        years: u32,

        /// Write the trajectory to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Run the full advisory pipeline from answers to projection
    Advise {
        /// Path to the answers JSON file
        answers: PathBuf,

        /// Weight overrides, e.g. "QQQ=50,SPY=30,EEM=20"
        #[arg(long)]
        weights: Option<String>,

        /// Price history window in years
        #[arg(long, default_value = "10")]
        history_years: u32,

        /// Initial amount
        #[arg(long, default_value = "1000")]
        initial: f64,

        /// Monthly contribution
        #[arg(long, default_value = "100")]
        monthly: f64,

        /// Projection horizon in years (1-30)
        #[arg(long, default_value = "5")]
        horizon: u32,

        /// Write the full advice report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the projection trajectory as CSV
        #[arg(long)]
        trajectory_csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Questions { template } => {
            if template {
                println!("{}", template_json());
            } else {
                print_questions();
            }
        }
        Commands::Profile { answers } => {
            profile(&answers)?;
        }
        Commands::Analyze {
            answers,
            category,
            weights,
            years,
            trailing_csv,
        } => {
            analyze(answers, category, weights, years, trailing_csv).await?;
        }
        Commands::Simulate {
            rate,
            initial,
            monthly,
            years,
            csv,
        } => {
            run_simulation(rate, initial, monthly, years, csv)?;
        }
        Commands::Advise {
            answers,
            weights,
            history_years,
            initial,
            monthly,
            horizon,
            report,
            trajectory_csv,
        } => {
            advise(
                &answers,
                weights,
                history_years,
                SimulationParams {
                    initial,
                    monthly_contribution: monthly,
                    horizon_years: horizon,
                },
                report,
                trajectory_csv,
            )
            .await?;
        }
    }

    Ok(())
}

fn print_questions() {
    println!("Risk-tolerance questionnaire (answers on a 1-4 agreement scale)\n");
    for section in sections() {
        println!("Section {}", section.id);
        println!("─────────");
        for (i, question) in section.questions.iter().enumerate() {
            println!("{:3}. {}", i + 1, question);
        }
        println!();
    }
}

fn profile(answers_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let response = load_answers(answers_path)?;
    let score = response.score()?;
    let category = RiskCategory::from_score(score);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", "RISK PROFILE");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Total score:   {} (range 67-268)", score);
    println!("Risk profile:  {}\n", category);

    print_model(AllocationModel::for_category(category));
    Ok(())
}

async fn analyze(
    answers: Option<PathBuf>,
    category: Option<String>,
    weights: Option<String>,
    years: u32,
    trailing_csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = match (answers, category) {
        (Some(path), _) => {
            let response = load_answers(&path)?;
            RiskCategory::from_score(response.score()?)
        }
        (None, Some(name)) => parse_category(&name)?,
        (None, None) => {
            return Err("Provide --answers or --category".into());
        }
    };

    let model = AllocationModel::for_category(category);
    let allocation = resolve_allocation(model, weights.as_deref())?;

    println!("\nRisk profile: {}", category);
    print_allocation(&allocation);

    let end = Utc::now();
    let start = end - Duration::days(i64::from(years) * 365);
    let series = fetch_series(&allocation, start, end).await?;

    let stats = compute_stats(&series, &allocation)?;
    print_stats(stats.expected_return_pct, stats.volatility_pct);

    let index = portfolio_index(&series, &allocation)?;
    if let (Some((first_date, _)), Some((last_date, value))) = (index.first(), index.last()) {
        println!(
            "Growth of 1 unit invested {} through {}: {:.4}",
            first_date, last_date, value
        );
    }

    let trailing: Vec<(String, Vec<TrailingReturn>)> = allocation
        .symbols()
        .filter_map(|symbol| {
            series
                .get(symbol)
                .map(|s| (symbol.to_string(), trailing_returns(s, &DEFAULT_TRAILING_PERIODS)))
        })
        .collect();
    print_trailing_table(&trailing);

    if let Some(path) = trailing_csv {
        write_trailing_returns_csv(&trailing, File::create(&path)?)?;
        println!("\nTrailing returns written to {}", path.display());
    }

    Ok(())
}

fn run_simulation(
    rate: f64,
    initial: f64,
    monthly: f64,
    years: u32,
    csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = SimulationParams {
        initial,
        monthly_contribution: monthly,
        horizon_years: years,
    };
    let trajectory = params.run(rate)?;

    println!("\nCompound growth at {:.2}% per year", rate);
    println!("─────────────────────────────────────────────");
    println!("{:>6} {:>16} {:>16}", "Year", "Invested", "Saved");
    for (month, compounded, contributions_only) in trajectory.rows() {
        if month % 12 == 0 {
            println!(
                "{:>6} {:>16.2} {:>16.2}",
                month / 12,
                compounded,
                contributions_only
            );
        }
    }

    println!(
        "\nFinal value with returns:    ${:.2}",
        trajectory.final_compounded()
    );
    println!(
        "Final value without returns: ${:.2}",
        trajectory.final_contributions_only()
    );

    if let Some(path) = csv {
        write_trajectory_csv(&trajectory, File::create(&path)?)?;
        println!("\nTrajectory written to {}", path.display());
    }

    Ok(())
}

async fn advise(
    answers_path: &std::path::Path,
    weights: Option<String>,
    history_years: u32,
    params: SimulationParams,
    report: Option<PathBuf>,
    trajectory_csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = load_answers(answers_path)?;

    let mut session = AdvisorSession::new(YahooQuoteProvider::new());
    let category = session.submit_questionnaire(&response)?;
    let score = session.score().expect("questionnaire submitted");

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", "INVESTMENT ADVICE");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Total score:   {} (range 67-268)", score);
    println!("Risk profile:  {}\n", category);
    print_model(session.recommended_model()?);

    let overrides = weights.as_deref().map(parse_weights).transpose()?;
    let allocation = session.resolve_allocation(overrides.as_ref())?.clone();
    print_allocation(&allocation);

    let end = Utc::now();
    let start = end - Duration::days(i64::from(history_years) * 365);

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(StdDuration::from_millis(100));
    spinner.set_message(format!(
        "Fetching {} year(s) of price history...",
        history_years
    ));
    let stats = match session.compute_statistics(start, end).await {
        Ok(stats) => {
            spinner.finish_with_message("Price history fetched");
            stats
        }
        Err(e) => {
            spinner.finish_with_message("Failed!");
            return Err(e.into());
        }
    };
    print_stats(stats.expected_return_pct, stats.volatility_pct);

    let trajectory = session.project_growth(params)?.clone();
    println!(
        "Final value after {} year(s) with returns:    ${:.2}",
        params.horizon_years,
        trajectory.final_compounded()
    );
    println!(
        "Final value after {} year(s) without returns: ${:.2}",
        params.horizon_years,
        trajectory.final_contributions_only()
    );

    if let Some(path) = report {
        let advice = AdviceReport::new(score, category, allocation)
            .with_stats(stats)
            .with_projection(ProjectionSummary::from_trajectory(
                &trajectory,
                params.horizon_years,
            ));
        std::fs::write(&path, advice.to_json()?)?;
        println!("\nAdvice report written to {}", path.display());
    }

    if let Some(path) = trajectory_csv {
        write_trajectory_csv(&trajectory, File::create(&path)?)?;
        println!("Trajectory written to {}", path.display());
    }

    Ok(())
}

/// Fetch closing prices for every allocated instrument with a progress bar.
async fn fetch_series(
    allocation: &Allocation,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<HashMap<String, PriceSeries>, Box<dyn std::error::Error>> {
    let mut quotes = CachedQuotes::new(YahooQuoteProvider::new());

    let pb = ProgressBar::new(allocation.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("█▓░"),
    );
    pb.set_message("Fetching price history...");

    let mut series = HashMap::new();
    for symbol in allocation.symbols() {
        match quotes.fetch_closes(symbol, start, end).await {
            Ok(fetched) => {
                series.insert(symbol.to_string(), fetched);
                pb.inc(1);
            }
            Err(e) => {
                pb.finish_with_message("Failed!");
                return Err(format!("Failed to fetch {}: {}", symbol, e).into());
            }
        }
    }
    pb.finish_with_message(format!("Fetched {} instrument(s)", series.len()));

    Ok(series)
}

fn resolve_allocation(
    model: &AllocationModel,
    weights: Option<&str>,
) -> Result<Allocation, Box<dyn std::error::Error>> {
    match weights {
        Some(spec) => {
            let parsed = parse_weights(spec)?;
            Ok(Allocation::from_overrides(model, &parsed)?)
        }
        None => Ok(model.default_allocation()),
    }
}

fn parse_weights(spec: &str) -> Result<HashMap<String, u8>, Box<dyn std::error::Error>> {
    let mut weights = HashMap::new();
    for part in spec.split(',') {
        let (symbol, pct) = part
            .split_once('=')
            .ok_or_else(|| format!("Invalid weight '{}', expected SYMBOL=PCT", part))?;
        let pct: u8 = pct
            .trim()
            .parse()
            .map_err(|_| format!("Invalid percentage in '{}'", part))?;
        weights.insert(symbol.trim().to_uppercase(), pct);
    }
    Ok(weights)
}

fn parse_category(name: &str) -> Result<RiskCategory, Box<dyn std::error::Error>> {
    let category = match name.to_lowercase().as_str() {
        "high" | "aggressive" => RiskCategory::High,
        "medium" | "balanced" => RiskCategory::Medium,
        "conservative" | "low" => RiskCategory::Conservative,
        _ => return Err(format!("Unknown risk category: {}", name).into()),
    };
    Ok(category)
}

fn print_model(model: &AllocationModel) {
    println!("Recommended model portfolio:");
    for instrument in model.instruments {
        println!(
            "  {:<6} {:>3}%  {}",
            instrument.symbol, instrument.default_weight_pct, instrument.name
        );
    }
    println!("\n{}\n", model.rationale);
}

fn print_allocation(allocation: &Allocation) {
    println!("Allocation:");
    for entry in allocation.entries() {
        println!("  {:<6} {:>3}%", entry.symbol, entry.weight_pct);
    }
    println!();
}

fn print_stats(expected_return_pct: f64, volatility_pct: f64) {
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("PORTFOLIO STATISTICS (annualized over 252 trading days)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    println!("  Expected return: {:>8.2}%", expected_return_pct);
    println!("  Volatility:      {:>8.2}%\n", volatility_pct);
}

fn print_trailing_table(rows: &[(String, Vec<TrailingReturn>)]) {
    println!("\nTrailing returns:");
    print!("{:<8}", "Symbol");
    for period in &DEFAULT_TRAILING_PERIODS {
        print!("{:>10}", period.label);
    }
    println!();

    for (symbol, returns) in rows {
        print!("{:<8}", symbol);
        for trailing in returns {
            match trailing.return_pct {
                Some(value) => print!("{:>9.2}%", value),
                None => print!("{:>10}", "-"),
            }
        }
        println!();
    }
}
