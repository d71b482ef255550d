//! VCF solver command line
//!
//! ```text
//! vcf "H8,I8,J8/G8" --attacker black --depth 10
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;

use vcf::encoding::{encode_cells, parse_board};
use vcf::search::OrderingKind;
use vcf::{Position, Rule, Solver, SolverConfig, Stone};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Attacker {
    Black,
    White,
}

impl From<Attacker> for Stone {
    fn from(attacker: Attacker) -> Self {
        match attacker {
            Attacker::Black => Stone::Black,
            Attacker::White => Stone::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Search for a Victory by Continuous Four", long_about = None)]
struct Args {
    /// Stones as "blacks/whites", e.g. "H8,J10/I9"
    board: String,

    /// Color that attacks
    #[arg(short, long, value_enum, default_value_t = Attacker::Black)]
    attacker: Attacker,

    /// Maximum number of attacker forcing moves
    #[arg(long)]
    depth: Option<u8>,

    /// Win condition: freestyle or exact
    #[arg(long)]
    rule: Option<Rule>,

    /// Candidate ordering: scan or proximity
    #[arg(long)]
    ordering: Option<OrderingKind>,

    /// Search increasing depths and return a shortest proof
    #[arg(long)]
    shortest: bool,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(depth) = self.depth {
            config.depth_limit = depth;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(ordering) = self.ordering {
            config.ordering = ordering;
        }
        if self.shortest {
            config.iterative_deepening = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = args.solver_config()?;
    let (blacks, whites) =
        parse_board(&args.board).with_context(|| format!("invalid board {:?}", args.board))?;
    let attacker = Stone::from(args.attacker);
    let position = Position::from_stones(&blacks, &whites, attacker)?;

    log::info!(
        "solving for {attacker}, depth {}, rule {}, ordering {}",
        config.depth_limit,
        config.rule,
        config.ordering
    );
    let solver = Solver::with_config(config);
    let result = solver.solve_position(&position, attacker);
    log::debug!(
        "{} nodes, {} dead-end hits in {}ms",
        result.stats.nodes,
        result.stats.dead_end_hits,
        result.time_ms
    );

    if args.json {
        let cells = result.path().map(|p| encode_cells(&p.cells())).unwrap_or_default();
        let notation = result.path().map(|p| p.to_string()).unwrap_or_default();
        let out = json!({
            "attacker": attacker,
            "found": result.is_win(),
            "path": cells,
            "notation": notation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", position.board());
    match result.path() {
        Some(path) => println!(
            "{attacker} wins by VCF in {} moves: {path}",
            path.attack_count()
        ),
        None => println!("no VCF for {attacker} within depth {}", config.depth_limit),
    }
    Ok(())
}
