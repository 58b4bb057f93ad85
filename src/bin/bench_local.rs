//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of phone numbers on *your* machine.
//! - Loads the word list once, then translates each case several times and reports the median.
//! - Every solution is enumerated (no cap), so the numbers measure the whole search.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few solutions:          `cargo run --bin bench_local --release -- -p 5`
//! - Also time a numbers file:       `cargo run --bin bench_local --release -- -n numbers.txt`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - I/O (printing) is kept outside the timed section.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use phonecode::dictionary::Dictionary;
use phonecode::digits::{DigitString, FilterMode, NumberList};
use phonecode::segment::format_solution;
use phonecode::translator::translate;

/// Simple local benchmark runner: load the word list once, time several numbers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/words.txt")
    )]
    word_list: String,

    /// Extra phone numbers file; each line becomes its own case
    #[arg(short, long)]
    numbers: Option<String>,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many solutions per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a label (echoed in output) and its digits.
struct Case {
    label: String,
    digits: DigitString,
}

/// Built-in cases, already clean digits. Long runs of digits with many short
/// words stress the backtracking far more than typical phone numbers.
fn builtin_cases() -> std::io::Result<Vec<Case>> {
    const DIGITS: [&str; 5] = [
        "5624825624825624",
        "4824482448244824",
        "1078913510789135",
        "04824048240482404824",
        "78357835783578357835783578",
    ];

    DIGITS
        .iter()
        .map(|s| Ok(Case { label: (*s).to_string(), digits: s.parse::<DigitString>()? }))
        .collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_LABEL_LEN: usize = 32;

fn main() -> std::io::Result<()> {
    /// One row in the benchmark summary: (label, median seconds, number of solutions).
    type SummaryRow = (String, f64, usize);

    phonecode::log::init_logger(phonecode::log::debug_requested());
    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-case timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let dict = Dictionary::load_from_path(&cli.word_list)?;
    eprintln!(
        "Loaded {} words ({} encodings) in {:.3}s",
        dict.num_words(),
        dict.num_encodings(),
        t_load.elapsed().as_secs_f64()
    );

    let mut cases = builtin_cases()?;
    if let Some(path) = &cli.numbers {
        let numbers = NumberList::load_from_path(path, FilterMode::MapLetters)?;
        cases.extend(numbers.numbers.into_iter().map(|n| Case { label: n.raw, digits: n.digits }));
    }

    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.label);

        // warm-up; timing ignored
        let _warmup = translate(&case.digits, &dict).count();

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_count = 0;

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let count = translate(black_box(&case.digits), &dict).count();
            let solve_secs = t_solve.elapsed().as_secs_f64();

            times.push(solve_secs);
            last_count = black_box(count);

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} {})",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_count,
                pluralizer(last_count, "solution".into(), None)
            );
        }

        let med = median(times);

        // outside timing
        for solution in translate(&case.digits, &dict).take(cli.print_limit) {
            println!("{}", format_solution(&case.label, &solution));
        }

        eprintln!("  → median {med:.3}s over {} run(s)", cli.num_repeats);
        summary.push((case.label.clone(), med, last_count));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_LABEL_LEN$} | {:>10} | {:>11}", "number", "median (s)", "# solutions");
    eprintln!("{:-<MAX_LABEL_LEN$}-+-{:-<10}-+-{:-<11}", "", "", "");
    for (label, med, num_solutions) in &summary {
        let display = if label.chars().count() > MAX_LABEL_LEN {
            // "- 1" for the "…"
            format!("{}…", label.chars().take(MAX_LABEL_LEN - 1).collect::<String>())
        } else {
            label.clone()
        };
        eprintln!("{display:<MAX_LABEL_LEN$} | {med:>10.3} | {num_solutions:>11}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
