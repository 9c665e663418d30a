use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use slider_puzzle::render::{self, Mode};
use slider_puzzle::{Board, Heuristic, Pruning, Solver, SolverOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Hamming,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PruningArg {
    Predecessor,
    Visited,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: the dimension, then the tiles row by row, 0 for the blank.
    file: Option<PathBuf>,

    /// Dimension of the random board solved when no file is given.
    #[arg(long, value_name = "N", default_value_t = 3)]
    random: usize,

    /// Seed for the random board.
    #[arg(long)]
    seed: Option<u64>,

    /// Priority estimate used by the search.
    #[arg(long, value_name = "NAME", default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Boards the search refuses to revisit.
    #[arg(long, value_name = "MODE", default_value = "predecessor")]
    pruning: PruningArg,

    /// Print plain text instead of coloured boards.
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    let args = Args::parse();

    let initial = match &args.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            text.parse::<Board>()
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            anyhow::ensure!(args.random > 0, "random board dimension must be at least 1");
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Board::shuffled(args.random, &mut rng)
        }
    };
    log::info!("Solving:\n{}", initial);

    let options = SolverOptions {
        heuristic: match args.heuristic {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Hamming => Heuristic::Hamming,
        },
        pruning: match args.pruning {
            PruningArg::Predecessor => Pruning::Predecessor,
            PruningArg::Visited => Pruning::Visited,
        },
    };
    let solver = Solver::with_options(initial, options);
    log::info!("Search statistics: {:?}", solver.stats());

    let mode = if args.plain { Mode::Plain } else { Mode::Styled };
    render::write_solution(&mut io::stdout().lock(), &solver, mode)?;

    Ok(())
}
