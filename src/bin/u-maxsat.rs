use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use u_maxsat::formula::read_formula;
use u_maxsat::hc::HcConfig;
use u_maxsat::sa::{CoolingSchedule, SaConfig};
use u_maxsat::{MaxSatSolver, Method, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Cooling {
    Linear,
    Exponential,
    Reference,
}

impl From<Cooling> for CoolingSchedule {
    fn from(c: Cooling) -> Self {
        match c {
            Cooling::Linear => CoolingSchedule::Linear,
            Cooling::Exponential => CoolingSchedule::Exponential,
            Cooling::Reference => CoolingSchedule::Reference,
        }
    }
}

/// Approximate MaxSAT with simulated annealing and hill climbing.
#[derive(Debug, Parser)]
#[command(name = "u-maxsat", version)]
struct Cli {
    /// Clause files: one clause per line, signed 1-based literals (DIMACS accepted).
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// Method to run (SA, HC). Repeat to run several; defaults to both.
    #[arg(short, long = "method")]
    methods: Vec<String>,

    /// Random seed shared by every run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// SA iteration budget.
    #[arg(long, default_value_t = 250_000)]
    max_iterations: usize,

    /// SA cooling schedule.
    #[arg(long, value_enum, default_value_t = Cooling::Linear)]
    cooling: Cooling,

    /// HC consecutive-stall limit.
    #[arg(long, default_value_t = 100)]
    max_stall_restarts: usize,

    /// HC cap on total restarts.
    #[arg(long)]
    max_restarts: Option<usize>,

    /// HC returns the assignment held at termination instead of the best seen.
    #[arg(long)]
    last_held: bool,

    /// Print the trajectory as `elapsed_secs score` lines after each result.
    #[arg(long)]
    trajectory: bool,
}

fn main() {
    env_logger::builder().format_timestamp(None).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Resolve selectors before touching any instance.
    let methods: Vec<Method> = if cli.methods.is_empty() {
        Method::ALL.to_vec()
    } else {
        cli.methods
            .iter()
            .map(|m| m.parse())
            .collect::<Result<_>>()?
    };

    let mut sa = SaConfig::default()
        .with_max_iterations(cli.max_iterations)
        .with_cooling(cli.cooling.into());
    let mut hc = HcConfig::default()
        .with_max_stall_restarts(cli.max_stall_restarts)
        .with_keep_best(!cli.last_held);
    if let Some(cap) = cli.max_restarts {
        hc = hc.with_max_restarts(cap);
    }
    if let Some(seed) = cli.seed {
        sa = sa.with_seed(seed);
        hc = hc.with_seed(seed);
    }
    let solver = MaxSatSolver::new(sa, hc);

    for path in &cli.instances {
        let formula = read_formula(path)?;
        info!(
            "{}: {} variables, {} clauses",
            path.display(),
            formula.num_vars(),
            formula.num_clauses()
        );

        for &method in &methods {
            let solution = solver.solve(&formula, method)?;
            let bits: String = solution
                .bits()
                .iter()
                .map(|b| char::from(b'0' + b))
                .collect();
            println!(
                "{} {} clauses: {}/{} ({:?}, seed {}) {}",
                method,
                formula.num_clauses(),
                solution.score,
                formula.num_clauses(),
                solution.termination,
                solution.seed,
                bits
            );
            if cli.trajectory {
                for p in &solution.trajectory {
                    println!("{:.6} {}", p.elapsed_secs, p.score);
                }
            }
        }
    }
    Ok(())
}
