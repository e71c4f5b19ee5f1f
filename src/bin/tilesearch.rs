use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;
use tilesearch::{
    puzzle::{
        scenarios::{
            compare_heuristics, compare_strategies, parse_scenarios, read_scenarios,
            write_scenarios, BatchReport, ScenarioConfig, ScenarioError,
        },
        PuzzleError, TileHeuristicName, TilePuzzle, TileState,
    },
    search::{validate, SearchEngineName, SearchError, SearchResult},
    Verbosity,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve sliding-tile puzzles and benchmark search engines on them.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single board and print the moves of the blank.
    Solve {
        #[arg(
            help = "The board as comma separated tiles in row-major order, 0 for the blank",
            value_parser = parse_board,
            id = "TILES"
        )]
        board: TileState,
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::AStar
        )]
        search_engine_name: SearchEngineName,
        #[arg(
            value_enum,
            help = "The heuristic to use, only consulted by A*",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = TileHeuristicName::Manhattan
        )]
        heuristic_name: TileHeuristicName,
    },
    /// Generate random scenarios by scrambling the solved board, one board per
    /// line of the output file.
    Generate {
        #[arg(help = "The scenario file to write")]
        output: PathBuf,
        #[arg(
            help = "A TOML file with the generator settings, the flags below \
            override it",
            long = "config",
            id = "CONFIG"
        )]
        config: Option<PathBuf>,
        #[arg(help = "Number of boards", short = 'n', long = "count")]
        count: Option<usize>,
        #[arg(help = "Random moves per board", short = 'm', long = "moves")]
        scramble_moves: Option<usize>,
        #[arg(help = "Board width", short = 'w', long = "width")]
        width: Option<usize>,
        #[arg(help = "Random seed", short = 's', long = "seed")]
        seed: Option<u64>,
    },
    /// Compare the informative heuristics with A* on every scenario of a file.
    Heuristics {
        #[arg(help = "The scenario file")]
        scenarios: PathBuf,
    },
    /// Compare search engines on every scenario of a file.
    Compare {
        #[arg(help = "The scenario file")]
        scenarios: PathBuf,
        #[arg(
            value_enum,
            help = "The search engines to compare",
            short = 'e',
            long = "engines",
            id = "ENGINES",
            value_delimiter = ',',
            default_values_t = [SearchEngineName::BFS, SearchEngineName::UCS, SearchEngineName::AStar]
        )]
        engines: Vec<SearchEngineName>,
        #[arg(
            value_enum,
            help = "The heuristic A* uses",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = TileHeuristicName::Manhattan
        )]
        heuristic_name: TileHeuristicName,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("found an invalid plan: {0}")]
    Search(#[from] SearchError),
}

fn parse_board(text: &str) -> Result<TileState, ScenarioError> {
    parse_scenarios(text)?
        .pop()
        .ok_or(ScenarioError::Puzzle(PuzzleError::InvalidSize(0)))
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Solve {
            board,
            search_engine_name,
            heuristic_name,
        } => solve(board, search_engine_name, heuristic_name),
        Commands::Generate {
            output,
            config,
            count,
            scramble_moves,
            width,
            seed,
        } => {
            let mut config = match config {
                Some(path) => ScenarioConfig::from_path(&path)?,
                None => ScenarioConfig::default(),
            };
            config.count = count.unwrap_or(config.count);
            config.scramble_moves = scramble_moves.unwrap_or(config.scramble_moves);
            config.width = width.unwrap_or(config.width);
            config.seed = seed.or(config.seed);

            let scenarios = config.generate()?;
            write_scenarios(&output, &scenarios)?;
            info!(count = scenarios.len(), output = ?output, "scenarios written");
            Ok(())
        }
        Commands::Heuristics { scenarios } => {
            let scenarios = read_scenarios(&scenarios)?;
            print_report(&compare_heuristics(
                &scenarios,
                &TileHeuristicName::INFORMATIVE,
            ));
            Ok(())
        }
        Commands::Compare {
            scenarios,
            engines,
            heuristic_name,
        } => {
            let scenarios = read_scenarios(&scenarios)?;
            print_report(&compare_strategies(&scenarios, &engines, heuristic_name));
            Ok(())
        }
    }
}

fn solve(
    board: TileState,
    search_engine_name: SearchEngineName,
    heuristic_name: TileHeuristicName,
) -> Result<(), CliError> {
    println!("{}", board);
    let problem = TilePuzzle::new(board);
    let outcome = search_engine_name.search(&problem, heuristic_name.create());

    match outcome.result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            let cost = validate(&problem, &plan)?;
            info!(plan_length = plan.len(), plan_cost = cost.into_inner());

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
        }
        SearchResult::Unsolvable => {
            info!("no plan found");
            println!("No plan found");
        }
    }
    println!(
        "Expanded nodes: {}, max frontier size: {}",
        outcome.statistics.expanded_nodes(),
        outcome.statistics.max_frontier_size()
    );
    Ok(())
}

fn print_report(report: &BatchReport) {
    for trial in &report.trials {
        println!("[{}] {}", trial.scenario, trial);
    }
    println!();
    for summary in &report.summaries {
        println!("{}", summary);
    }
}
