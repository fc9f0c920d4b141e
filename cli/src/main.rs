mod error_formatter;
mod formatter;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use onset::serializers::{decode_record, encode_record, EncodedPuzzleRecord};
use onset::{parse_arrangement, Engine, GeneratorConfig, Puzzle, PuzzleRecord, ResourceLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "onset")]
#[command(about = "Set-theory dice puzzles.")]
#[command(
    long_about = "Onset deals eight colored cards and a pool of dice showing colors, set operators and restrictions.\nThe CLI generates puzzles, solves and checks puzzle files, and evaluates arrangements against a puzzle's cards."
)]
#[command(version)]
struct Cli {
    /// Log engine activity to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate puzzles and print them as JSON records
    ///
    /// Each puzzle is built from a template, so its goal is whatever the
    /// template evaluates to against freshly dealt cards.
    Generate {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        /// Seed for replayable generation
        #[arg(short, long)]
        seed: Option<u64>,
        /// Attempts allowed per puzzle
        #[arg(long)]
        attempts: Option<usize>,
        /// Smallest acceptable goal
        #[arg(long, default_value = "1")]
        min_goal: usize,
        /// Largest acceptable goal
        #[arg(long, default_value = "7")]
        max_goal: usize,
        /// Reject puzzles with more distinct solutions than this
        #[arg(long)]
        max_solutions: Option<usize>,
        /// Do not mark a required, wild or bonus die
        #[arg(long)]
        no_special_cube: bool,
        /// Obfuscate cards, dice and solution in the output
        #[arg(short, long)]
        encode: bool,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Solve the puzzles in a record file
    ///
    /// Shows the shortest solution and solution statistics. Encoded records
    /// are decoded automatically.
    Solve {
        /// Puzzle record file (single record or array)
        file: PathBuf,
        /// Only solve the puzzle with this id
        #[arg(long)]
        id: Option<u64>,
        /// List every distinct solution
        #[arg(short, long)]
        all: bool,
        /// Recount and compare against the recorded statistics
        #[arg(long)]
        verify: bool,
    },
    /// Evaluate an arrangement against a puzzle's cards
    ///
    /// Examples:
    ///   onset eval puzzle.json "red ∪ blue′"
    ///   onset eval puzzle.json "red ⊆ U | green - gold"
    Eval {
        /// Puzzle record file providing the cards
        file: PathBuf,
        /// Arrangement: a set-name row, optionally preceded by "restriction |"
        arrangement: String,
        /// Puzzle id when the file holds several records
        #[arg(long)]
        id: Option<u64>,
    },
    /// Obfuscate the cards, dice and solution of plain records
    Encode {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore plain records from obfuscated ones
    Decode {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Generate {
            count,
            seed,
            attempts,
            min_goal,
            max_goal,
            max_solutions,
            no_special_cube,
            encode,
            output,
        } => {
            let config = GeneratorConfig {
                min_goal: *min_goal,
                max_goal: *max_goal,
                max_solution_count: *max_solutions,
                assign_special_cube: !no_special_cube,
                ..GeneratorConfig::default()
            };
            generate_command(*count, *seed, *attempts, config, *encode, output.as_deref())
        }
        Commands::Solve {
            file,
            id,
            all,
            verify,
        } => solve_command(file, *id, *all, *verify),
        Commands::Eval {
            file,
            arrangement,
            id,
        } => eval_command(file, arrangement, *id),
        Commands::Encode { file, output } => encode_command(file, output.as_deref()),
        Commands::Decode { file, output } => decode_command(file, output.as_deref()),
    };

    if let Err(e) = result {
        if let Some(onset_err) = e.downcast_ref::<onset::OnsetError>() {
            eprintln!("{}", error_formatter::format_error(onset_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "onset=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn generate_command(
    count: usize,
    seed: Option<u64>,
    attempts: Option<usize>,
    config: GeneratorConfig,
    encode: bool,
    output: Option<&Path>,
) -> Result<()> {
    if config.min_goal > config.max_goal {
        bail!(
            "--min-goal ({}) is larger than --max-goal ({})",
            config.min_goal,
            config.max_goal
        );
    }

    let mut limits = ResourceLimits::default();
    if let Some(attempts) = attempts {
        limits.max_generation_attempts = attempts;
    }
    let engine = Engine::with_limits(limits);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(count, ?seed, "generating puzzles");
    let report = engine.generate(count, config, &mut rng)?;
    if report.shortfall > 0 {
        eprintln!(
            "Generated {} of {} puzzles ({} attempts{})",
            report.puzzles.len(),
            report.requested,
            report.attempts,
            if report.timed_out {
                ", time budget spent"
            } else {
                ""
            }
        );
    }

    let records: Vec<PuzzleRecord> = report
        .puzzles
        .iter()
        .enumerate()
        .map(|(i, puzzle)| puzzle.to_record(i as u64 + 1))
        .collect();

    let json = if encode {
        let encoded = records
            .iter()
            .map(encode_record)
            .collect::<Result<Vec<_>, _>>()?;
        serde_json::to_string_pretty(&encoded)?
    } else {
        serde_json::to_string_pretty(&records)?
    };
    write_output(output, &json)
}

fn solve_command(file: &Path, id: Option<u64>, all: bool, verify: bool) -> Result<()> {
    let records = select(read_records(file)?, id)?;
    let engine = Engine::new();
    let formatter = Formatter::default();

    for record in &records {
        let stats = engine.count_all_solutions(&record.cards, &record.dice, record.goal, true)?;
        let shortest = engine.find_shortest_solution(&record.cards, &record.dice, record.goal)?;
        let complement_required =
            engine.complement_is_required(&record.cards, &record.dice, record.goal)?;
        debug!(id = record.id, total = stats.total_solutions, "puzzle solved");

        print!(
            "{}",
            formatter.format_solve_summary(record, &stats, shortest.as_ref(), complement_required)
        );

        if all {
            let solutions = engine.all_solutions(&record.cards, &record.dice, record.goal)?;
            print!("{}", formatter.format_solutions(&solutions));
        }

        if verify {
            let puzzle = Puzzle::from_record(record)?;
            match engine.verify_puzzle(&puzzle) {
                Ok(()) => println!("Puzzle {}: record verified", record.id),
                Err(e) => {
                    warn!(id = record.id, error = %e, "record does not verify");
                    return Err(e)
                        .with_context(|| format!("puzzle {} does not verify", record.id));
                }
            }
        }
        println!();
    }

    Ok(())
}

fn eval_command(file: &Path, arrangement: &str, id: Option<u64>) -> Result<()> {
    let records = select(read_records(file)?, id)?;
    let record = match records.as_slice() {
        [record] => record,
        _ => bail!(
            "{} holds {} puzzles; pick one with --id",
            file.display(),
            records.len()
        ),
    };

    let parsed = parse_arrangement(arrangement)?;
    let engine = Engine::new();
    let formatter = Formatter::default();

    let result = if parsed.restriction.is_empty() {
        onset::OperationResult::Value(engine.evaluate_expression(&parsed.set_name, &record.cards)?)
    } else {
        engine.evaluate_restricted(&parsed.set_name, &parsed.restriction, &record.cards)?
    };

    print!("{}", formatter.format_evaluation(record, &result));
    Ok(())
}

fn encode_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let records = read_records(file)?;
    let encoded = records
        .iter()
        .map(encode_record)
        .collect::<Result<Vec<_>, _>>()?;
    write_output(output, &serde_json::to_string_pretty(&encoded)?)
}

fn decode_command(file: &Path, output: Option<&Path>) -> Result<()> {
    let records = read_records(file)?;
    write_output(output, &serde_json::to_string_pretty(&records)?)
}

/// Read plain or encoded records; a file may hold one record or an array
fn read_records(file: &Path) -> Result<Vec<PuzzleRecord>> {
    let text =
        fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    items.into_iter().map(record_from_value).collect()
}

fn record_from_value(value: Value) -> Result<PuzzleRecord> {
    if value.get("cards").is_some_and(Value::is_string) {
        let encoded: EncodedPuzzleRecord = serde_json::from_value(value)?;
        Ok(decode_record(&encoded)?)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

fn select(records: Vec<PuzzleRecord>, id: Option<u64>) -> Result<Vec<PuzzleRecord>> {
    let Some(id) = id else {
        return Ok(records);
    };
    let selected: Vec<PuzzleRecord> = records.into_iter().filter(|r| r.id == id).collect();
    if selected.is_empty() {
        bail!("Puzzle {} not found", id);
    }
    Ok(selected)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", content))
            .with_context(|| format!("cannot write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
            Ok(())
        }
    }
}
