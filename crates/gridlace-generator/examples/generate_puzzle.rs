//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` gated by a `PropagationSolver`
//! - Generate a random puzzle for a chosen geometry and difficulty
//! - Display the puzzle, solution, seed, and technique stats
//! - Filter puzzles by technique usage counts
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick the board size and difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6 --level 4 --level-points 12
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-digits>
//! ```
//!
//! Filter for puzzles by selecting the one that maximizes the total count
//! of the specified techniques within the sampling budget (repeatable,
//! case-insensitive):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --technique "hidden single (block)" --max-tries 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridlace_core::{Difficulty, Geometry};
use gridlace_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use gridlace_solver::{PropagationSolver, SolveGrid, SolverStats};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoardSize {
    #[value(name = "4")]
    Four,
    #[value(name = "6")]
    Six,
    #[value(name = "9")]
    Nine,
}

impl BoardSize {
    fn geometry(self) -> Geometry {
        match self {
            BoardSize::Four => Geometry::SIZE_4,
            BoardSize::Six => Geometry::SIZE_6,
            BoardSize::Nine => Geometry::SIZE_9,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size.
    #[arg(long, value_name = "SIZE", default_value = "9")]
    size: BoardSize,

    /// Difficulty level (1-5).
    #[arg(long, value_name = "LEVEL", default_value_t = 3)]
    level: u8,

    /// Difficulty points per level (5-16).
    #[arg(long, value_name = "POINTS", default_value_t = 10)]
    level_points: u8,

    /// Seed to reproduce, as 64 hex digits.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Technique name to require in stats (case-insensitive). Repeatable.
    #[arg(short, long = "technique", value_name = "TECHNIQUE", num_args = 1..)]
    techniques: Vec<String>,

    /// Maximum puzzles to sample when filtering.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let geometry = args.size.geometry();
    let difficulty = match Difficulty::new(args.level, args.level_points) {
        Ok(difficulty) => difficulty,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let solver = PropagationSolver::with_fundamental_techniques();
    let generator = PuzzleGenerator::new(&solver);
    let available: Vec<&'static str> = solver
        .techniques()
        .iter()
        .map(|technique| technique.name())
        .collect();

    if !args.techniques.is_empty() {
        let unknown = args
            .techniques
            .iter()
            .filter(|name| !technique_name_matches(name, &available))
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            eprintln!("Unknown technique(s): {}", unknown.join(", "));
            eprintln!("Available techniques:");
            for name in &available {
                eprintln!("  {name}");
            }
            process::exit(2);
        }
    }

    if let Some(seed) = args.seed {
        let puzzle = generate_or_exit(|| generator.generate_with_seed(geometry, difficulty, seed));
        let stats = solve_stats(&solver, &puzzle);
        print_puzzle(&puzzle, &solver, &stats, None, &[]);
        return;
    }

    if args.techniques.is_empty() {
        let puzzle = generate_or_exit(|| generator.generate(geometry, difficulty));
        let stats = solve_stats(&solver, &puzzle);
        print_puzzle(&puzzle, &solver, &stats, None, &[]);
        return;
    }

    let max_tries = args.max_tries;
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let puzzle = generate_or_exit(|| generator.generate(geometry, difficulty));
            let stats = solve_stats(&solver, &puzzle);
            let score = techniques_score(&solver, &stats, &args.techniques);
            (puzzle, stats, score)
        })
        .max_by(|a, b| a.2.cmp(&b.2));

    if let Some((puzzle, stats, score)) = best {
        print_puzzle(
            &puzzle,
            &solver,
            &stats,
            Some((max_tries, score)),
            &args.techniques,
        );
        return;
    }

    eprintln!("No puzzle matched the requested techniques.");
    process::exit(1);
}

fn generate_or_exit(
    generate: impl Fn() -> Result<GeneratedPuzzle, gridlace_generator::GenerateError>,
) -> GeneratedPuzzle {
    match generate() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn technique_name_matches(name: &str, available: &[&'static str]) -> bool {
    available
        .iter()
        .any(|available| available.eq_ignore_ascii_case(name))
}

fn solve_stats(solver: &PropagationSolver, puzzle: &GeneratedPuzzle) -> SolverStats {
    let mut grid = SolveGrid::from_board(&puzzle.problem);
    let (outcome, stats) = solver.solve(&mut grid);
    assert!(outcome.is_solved());
    stats
}

fn techniques_score(
    solver: &PropagationSolver,
    stats: &SolverStats,
    techniques: &[String],
) -> usize {
    techniques
        .iter()
        .map(|name| technique_count(solver, stats, name))
        .sum()
}

fn technique_count(solver: &PropagationSolver, stats: &SolverStats, name: &str) -> usize {
    let Some(i) = solver
        .techniques()
        .iter()
        .position(|technique| technique.name().eq_ignore_ascii_case(name))
    else {
        return 0;
    };
    stats.applications()[i]
}

fn print_puzzle(
    puzzle: &GeneratedPuzzle,
    solver: &PropagationSolver,
    stats: &SolverStats,
    selection: Option<(usize, usize)>,
    techniques: &[String],
) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Difficulty:");
    println!(
        "  level {} ({} points)",
        puzzle.difficulty.level(),
        puzzle.difficulty.level_points()
    );
    println!();

    if let Some((max_tries, best_score)) = selection {
        println!("Selection:");
        println!("  Techniques: {}", techniques.join(", "));
        println!("  Max tries: {max_tries}");
        println!("  Best score: {best_score}");
        println!();
    }

    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    for (i, count) in stats.applications().iter().enumerate() {
        let name = solver.techniques()[i].name();
        println!("  {name}: {count}");
    }
    println!("  total: {}", stats.total_steps());
}
