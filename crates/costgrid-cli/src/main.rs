//! costgrid: run A* queries over weighted grids from the command line.
//!
//! ```text
//! costgrid case 3 --heuristic zero
//! costgrid all --seed 7
//! costgrid run --grid map.json --start 0,0 --goal 4,4 -H obstacle --debug
//! ```

mod cases;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use costgrid_core::{CostGrid, Position};
use costgrid_paths::{
    DEFAULT_EXPONENT, DEFAULT_PENALTY, HeuristicKind, HeuristicParams, SearchOptions,
};

use crate::cases::CASE_COUNT;
use crate::report::run_query;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Trace every node expansion and child evaluation
    #[arg(short, long, global = true)]
    debug: bool,

    /// Seed for the noisy heuristic (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Exponent of the power heuristic
    #[arg(long, global = true, default_value_t = DEFAULT_EXPONENT)]
    power: f64,

    /// Per-wall penalty of the obstacle heuristic
    #[arg(long, global = true, default_value_t = DEFAULT_PENALTY)]
    penalty: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one built-in test case
    Case {
        /// Case number
        #[arg(value_parser = clap::value_parser!(u8).range(1..=CASE_COUNT as i64))]
        number: u8,

        /// manhattan, zero, noisy, power, obstacle (or 1-5)
        #[arg(short = 'H', long, default_value = "manhattan")]
        heuristic: HeuristicKind,
    },
    /// Run every built-in case with every heuristic
    All,
    /// Search a grid loaded from a JSON file (an array of rows)
    Run {
        /// Path to the grid file
        #[arg(short, long)]
        grid: PathBuf,

        /// Start cell as row,col
        #[arg(long)]
        start: Position,

        /// Goal cell as row,col
        #[arg(long)]
        goal: Position,

        /// manhattan, zero, noisy, power, obstacle (or 1-5)
        #[arg(short = 'H', long, default_value = "manhattan")]
        heuristic: HeuristicKind,
    },
}

fn load_grid(path: &Path) -> anyhow::Result<CostGrid> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading grid file {}", path.display()))?;
    let grid: CostGrid = serde_json::from_str(&text)
        .with_context(|| format!("parsing grid file {}", path.display()))?;
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let params = HeuristicParams {
        seed: cli.seed,
        exponent: cli.power,
        penalty: cli.penalty,
    };
    let options = SearchOptions { trace: cli.debug };

    match cli.command {
        Commands::Case { number, heuristic } => {
            let case = cases::builtin(number)?;
            log::info!("case {number}: {}x{} grid", case.grid.rows(), case.grid.cols());
            log::debug!("grid:\n{}", case.grid);
            let report =
                run_query(&case.grid, case.start, case.goal, heuristic, &params, &options)?;
            println!("{report}");
        }
        Commands::All => {
            for case in cases::all()? {
                for kind in HeuristicKind::ALL {
                    println!("Case {} ({})", case.number, kind.number());
                    let report =
                        run_query(&case.grid, case.start, case.goal, kind, &params, &options)?;
                    println!("{report}\n");
                }
            }
        }
        Commands::Run {
            grid,
            start,
            goal,
            heuristic,
        } => {
            let cost_grid = load_grid(&grid)?;
            log::info!(
                "loaded {}x{} grid from {}",
                cost_grid.rows(),
                cost_grid.cols(),
                grid.display()
            );
            let report = run_query(&cost_grid, start, goal, heuristic, &params, &options)
                .with_context(|| format!("searching {}", grid.display()))?;
            println!("{report}");
        }
    }
    Ok(())
}
