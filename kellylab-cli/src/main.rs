//! KellyLab CLI: Kelly sizing and balance-path simulation.
//!
//! Commands:
//! - `run`: print the Kelly fraction and recommended stake, simulate the
//!   balance path, then chart it (or emit JSON)
//! - `init-config`: print the default configuration as TOML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kellylab_core::{
    BalanceSink, NullSink, SimulationConfig, SimulationRun, SimulationSummary, SizingReport,
    TradeSimulator,
};
use kellylab_tui::{install_panic_hook, TerminalChartSink};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kellylab",
    about = "KellyLab CLI: Kelly criterion sizing with a Monte Carlo balance path"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a position and simulate the balance path.
    Run(RunArgs),
    /// Print the default configuration as TOML.
    InitConfig,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Path to a TOML config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Probability of a winning trade (0-1).
    #[arg(long)]
    win_rate: Option<f64>,

    /// Average amount won per winning trade.
    #[arg(long)]
    average_win: Option<f64>,

    /// Average amount lost per losing trade.
    #[arg(long)]
    average_loss: Option<f64>,

    /// Starting account balance.
    #[arg(long)]
    account_balance: Option<f64>,

    /// Number of trades to simulate.
    #[arg(long)]
    num_trades: Option<usize>,

    /// Maximum fraction of balance risked per trade (0-1].
    #[arg(long)]
    max_risk: Option<f64>,

    /// PRNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report, summary, and balance path as JSON instead of charting.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Skip the chart.
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    config: &'a SimulationConfig,
    report: SizingReport,
    summary: SimulationSummary,
    balances: &'a [f64],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Run(args) => run_cmd(&args),
        Commands::InitConfig => {
            print!("{}", SimulationConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then individual flags.
///
/// Range checks happen once, when the simulator is built in [`execute`].
fn resolve_config(args: &RunArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(v) = args.win_rate {
        config.win_rate = v;
    }
    if let Some(v) = args.average_win {
        config.average_win = v;
    }
    if let Some(v) = args.average_loss {
        config.average_loss = v;
    }
    if let Some(v) = args.account_balance {
        config.account_balance = v;
    }
    if let Some(v) = args.num_trades {
        config.num_trades = v;
    }
    if let Some(v) = args.max_risk {
        config.max_risk_percentage = v;
    }
    if let Some(v) = args.seed {
        config.seed = v;
    }

    Ok(config)
}

/// Validate, compute the Kelly fraction once, then simulate with that fraction.
fn execute(config: &SimulationConfig) -> Result<(SizingReport, SimulationRun)> {
    let mut simulator =
        TradeSimulator::from_config(config).context("invalid configuration")?;
    let report = SizingReport::new(simulator.kelly_fraction(), config);
    let run = simulator.run(config.account_balance, config.num_trades);
    Ok((report, run))
}

fn run_cmd(args: &RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let (report, run) = execute(&config)?;
    let summary = SimulationSummary::from_run(&run);

    info!(
        final_balance = summary.final_balance,
        total_return = summary.total_return,
        max_drawdown = summary.max_drawdown,
        wins = summary.wins,
        losses = summary.losses,
        ruined = summary.ruined,
        "simulation summary"
    );

    if args.json {
        let output = RunOutput {
            config: &config,
            report,
            summary,
            balances: run.balances(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{report}");

    let mut sink: Box<dyn BalanceSink> = if args.no_plot {
        Box::new(NullSink)
    } else {
        install_panic_hook();
        Box::new(TerminalChartSink::default())
    };
    sink.consume(run.balances())
        .context("rendering balance chart")?;

    Ok(())
}
