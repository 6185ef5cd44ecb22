//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one puzzle and prints its seed, problem, and solution grids, or
//! samples a batch in parallel and reports clue statistics.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Replay a specific puzzle by seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample 1000 uniqueness-enforced puzzles and report how close carving gets
//! to the target clue count:
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- --unique --batch 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use webdoku_generator::{
    Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, UniquenessPolicy,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed to replay (64 hex characters). Incompatible with --batch.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Verify a unique solution after every removed clue.
    #[arg(long)]
    unique: bool,

    /// Generate this many puzzles in parallel and print clue statistics.
    #[arg(long, value_name = "COUNT")]
    batch: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let policy = if args.unique {
        UniquenessPolicy::Enforced
    } else {
        UniquenessPolicy::Relaxed
    };
    let generator = PuzzleGenerator::with_policy(policy);

    match args.batch {
        None => {
            let result = match args.seed {
                Some(seed) => generator.generate_with_seed(args.difficulty, seed),
                None => generator.generate(args.difficulty),
            };
            match result {
                Ok(generated) => print_puzzle(&generated),
                Err(err) => {
                    eprintln!("generation failed: {err}");
                    process::exit(1);
                }
            }
        }
        Some(count) => {
            if args.seed.is_some() {
                eprintln!("--seed and --batch are incompatible.");
                process::exit(2);
            }
            if count == 0 {
                eprintln!("--batch must be at least 1.");
                process::exit(2);
            }
            print_batch_stats(&generator, args.difficulty, count);
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Problem ({} clues):", generated.puzzle.clue_count());
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
}

fn print_batch_stats(generator: &PuzzleGenerator, difficulty: Difficulty, count: usize) {
    let target = usize::from(difficulty.clue_count());
    let clue_counts: Vec<usize> = (0..count)
        .into_par_iter()
        .filter_map(|_| generator.generate(difficulty).ok())
        .map(|generated| generated.puzzle.clue_count())
        .collect();

    if clue_counts.is_empty() {
        eprintln!("no puzzle could be generated.");
        process::exit(1);
    }

    let exact = clue_counts.iter().filter(|&&clues| clues == target).count();
    let min = clue_counts.iter().min().copied().unwrap_or_default();
    let max = clue_counts.iter().max().copied().unwrap_or_default();
    #[expect(clippy::cast_precision_loss)]
    let mean = clue_counts.iter().sum::<usize>() as f64 / clue_counts.len() as f64;

    println!("Generated: {} puzzles ({difficulty})", clue_counts.len());
    println!("Target clues: {target}");
    println!("  exact: {exact}");
    println!("  min: {min}");
    println!("  max: {max}");
    println!("  mean: {mean:.2}");
}
