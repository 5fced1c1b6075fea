//! Word Morph CLI
//!
//! Interactive word-ladder game plus a few one-shot subcommands.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use word_morph::search::DEFAULT_EXPANSION_CEILING;
use word_morph::survey::random_pairs;
use word_morph::{
    load_dictionary, search, survey, EditMode, GameConfig, GameSession, Hint, Lexicon,
    MoveOutcome, NeighborGenerator, SearchOutcome, SurveyReport,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Word Morph — turn one word into another, one letter at a time
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = USAGE_TEXT)]
struct Cli {
    /// Word list to use instead of the built-in one (whitespace separated)
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Edit model: classic (substitute) or flex (substitute, insert, delete)
    #[arg(short, long, default_value_t = EditMode::Classic)]
    mode: EditMode,

    /// Allowed word lengths
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![3, 4, 5])]
    lengths: Vec<usize>,

    /// Maximum number of words a single search may discover
    #[arg(short, long, default_value_t = DEFAULT_EXPANSION_CEILING)]
    ceiling: usize,

    /// Seed for random pairs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a shortest path between two words
    Solve {
        start: String,
        target: String,
        /// Move cap (defaults to three moves per letter of the longer word)
        #[arg(long)]
        cap: Option<usize>,
    },
    /// Solve random pairs and summarize how many are reachable
    Survey {
        #[arg(default_value_t = 200)]
        pairs: usize,
    },
    /// Show word counts per length
    Stats,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_lexicon(path: Option<&PathBuf>) -> io::Result<Lexicon> {
    match path {
        Some(path) => Ok(Lexicon::build(&std::fs::read_to_string(path)?)),
        None => Ok(load_dictionary()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_stats(lexicon: &Lexicon) {
    println!("Total words: {}", lexicon.total_count());
    for (len, count) in lexicon.length_counts() {
        if count > 0 {
            println!("  {:>2} letters: {:>6}", len, count);
        }
    }
}

fn print_survey(report: &SurveyReport) {
    println!("Results:");
    println!("{}", "=".repeat(40));
    println!("  Found:      {:>6}", report.found);
    println!("  Not found:  {:>6}", report.not_found);
    println!("  Too large:  {:>6}", report.exceeded);
    println!();
    if report.found > 0 {
        println!("Move distribution:");
        for (moves, count) in &report.distribution {
            let pct = *count as f64 / report.found as f64 * 100.0;
            let bar = "█".repeat((*count * 40 / report.found).max(1));
            println!("  {:>2} moves: {:>5} ({:>5.1}%) {}", moves, count, pct, bar);
        }
    }
    if let Some(avg) = report.average_moves() {
        println!("Average moves: {:.2}", avg);
    }
}

fn print_game(session: &GameSession) {
    if let (Some(start), Some(target)) = (session.start(), session.target()) {
        println!(
            "{} → {}   ({} mode, cap {} moves, {} left)",
            start.to_uppercase(),
            target.to_uppercase(),
            session.mode(),
            session.cap(),
            session.remaining_moves()
        );
        println!("Path: {}", session.path().join(" → "));
    }
}

fn run_survey(session: &GameSession, rng: &mut StdRng, n: usize) {
    let pairs = match random_pairs(session, rng, n) {
        Ok(pairs) => pairs,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    println!("Solving {} random pairs...", pairs.len());
    let start = Instant::now();
    let report = survey(session.lexicon(), session.config(), &pairs);
    let elapsed = start.elapsed();
    print_survey(&report);
    println!("Time elapsed: {:.2?}", elapsed);
}

fn run_interactive(mut session: GameSession, mut rng: StdRng) {
    print_banner();
    println!("Loaded {} words.", session.lexicon().total_count());
    if session.lexicon().is_empty() {
        println!("⚠️  The word list has no usable words (3-14 letters a-z).");
    }
    println!("Type 'help' for commands or 'random' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "stats" => print_stats(session.lexicon()),
            "mode" => match parts.get(1).map(|s| s.parse::<EditMode>()) {
                Some(Ok(mode)) => {
                    session.set_mode(mode);
                    println!("Mode: {}", mode);
                }
                Some(Err(err)) => println!("{}", err),
                None => println!("Mode: {}", session.mode()),
            },
            "lengths" => {
                let lengths: Vec<String> =
                    session.allowed_lengths().iter().map(|l| l.to_string()).collect();
                println!("Allowed lengths: {}", lengths.join(", "));
            }
            "toggle" => match parts.get(1).and_then(|s| s.parse::<usize>().ok()) {
                Some(len) => match session.toggle_length(len) {
                    Ok(true) => println!("Length {} allowed.", len),
                    Ok(false) => println!("Length {} disallowed.", len),
                    Err(err) => println!("{}", err),
                },
                None => println!("Usage: toggle <len>"),
            },
            "random" | "new" => {
                let started = session
                    .random_pair(&mut rng)
                    .and_then(|(start, target)| session.start_game(&start, &target));
                match started {
                    Ok(()) => print_game(&session),
                    Err(err) => println!("{}", err),
                }
            }
            "start" => {
                if parts.len() < 3 {
                    println!("Usage: start <from> <to>");
                    continue;
                }
                match session.start_game(parts[1], parts[2]) {
                    Ok(()) => print_game(&session),
                    Err(err) => println!("{}", err),
                }
            }
            "play" | "p" => {
                let Some(word) = parts.get(1) else {
                    println!("Usage: play <word>");
                    continue;
                };
                match session.play(word) {
                    Ok(MoveOutcome::Advanced) => print_game(&session),
                    Ok(MoveOutcome::Reached) => {
                        print_game(&session);
                        println!("🎉 Target reached in {} moves!", session.path().len() - 1);
                    }
                    Err(err) => println!("{}", err),
                }
            }
            "neighbors" | "n" => {
                let Some(word) = parts.get(1).map(|w| w.to_lowercase()) else {
                    println!("Usage: neighbors <word>");
                    continue;
                };
                let generator = NeighborGenerator::new(session.lexicon(), session.mode());
                let neighbors: Vec<&str> = generator.neighbors(&word).into_iter().collect();
                println!("{} neighbors: {}", neighbors.len(), neighbors.join(" "));
            }
            "hint" => match session.hint() {
                Ok(Hint::Next(next)) => {
                    let current = session.current_word().unwrap_or_default();
                    println!("Hint: {} → {}", current, next);
                }
                Ok(Hint::AtTarget) => println!("Already at the target."),
                Err(err) => println!("{}", err),
            },
            "next" => match session.apply_hint() {
                Ok(Some((word, outcome))) => {
                    println!("Played {}", word);
                    print_game(&session);
                    if outcome == MoveOutcome::Reached {
                        println!("🎉 Target reached!");
                    }
                }
                Ok(None) => println!("Already at the target."),
                Err(err) => println!("{}", err),
            },
            "answer" => match session.answer() {
                Ok(path) => {
                    println!("Shortest path ({} moves): {}", path.moves(), path);
                }
                Err(err) => println!("{}", err),
            },
            "path" => {
                if session.is_active() {
                    print_game(&session);
                } else {
                    println!("No game in progress.");
                }
            }
            "restart" | "reset" => {
                session.restart();
                println!("Game cleared.");
            }
            "survey" | "bench" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(200);
                run_survey(&session, &mut rng, n);
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = match load_lexicon(cli.wordlist.as_ref()) {
        Ok(lexicon) => Arc::new(lexicon),
        Err(err) => {
            eprintln!("Cannot read word list: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = GameConfig {
        mode: cli.mode,
        allowed_lengths: cli.lengths.iter().copied().collect::<BTreeSet<_>>(),
        expansion_ceiling: cli.ceiling,
        ..GameConfig::default()
    };
    let mut rng = make_rng(cli.seed);
    let session = GameSession::new(lexicon.clone(), config.clone());

    match cli.command {
        None => {
            run_interactive(session, rng);
            ExitCode::SUCCESS
        }
        Some(Command::Stats) => {
            print_stats(&lexicon);
            ExitCode::SUCCESS
        }
        Some(Command::Survey { pairs }) => {
            run_survey(&session, &mut rng, pairs);
            ExitCode::SUCCESS
        }
        Some(Command::Solve { start, target, cap }) => {
            let (start, target) = match session.validate_endpoints(&start, &target) {
                Ok(pair) => pair,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                }
            };
            let cap = cap.unwrap_or_else(|| config.move_cap(&start, &target));
            let generator = NeighborGenerator::new(&lexicon, config.mode);

            println!("Solving {} → {} (cap {})", start.to_uppercase(), target.to_uppercase(), cap);
            match search(&start, &target, &generator, cap, config.expansion_ceiling) {
                Ok(SearchOutcome::Found(path)) => {
                    println!("{}", path);
                    println!("Solved in {} moves.", path.moves());
                    ExitCode::SUCCESS
                }
                Ok(SearchOutcome::NotFound) => {
                    println!("No path within {} moves. Try a larger cap or other lengths.", cap);
                    ExitCode::FAILURE
                }
                Err(err) => {
                    eprintln!("{}. Narrow the allowed lengths or pick closer words.", err);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
