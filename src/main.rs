use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use phonecode::dictionary::Dictionary;
use phonecode::digits::{FilterMode, NumberList};
use phonecode::segment::Segment;
use phonecode::translator::{translate, TimeBudget};

/// Print every rendering of phone numbers as dictionary words and lone digits
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Word list, one word per line
    #[arg(default_value = "tests/fixtures/words.txt")]
    dictionary: String,

    /// Phone numbers, one per line
    #[arg(default_value = "tests/fixtures/numbers.txt")]
    numbers: String,

    /// Stop after this many solutions per number
    #[arg(short = 'n', long)]
    max_solutions: Option<usize>,

    /// Give up on a number after this many seconds
    #[arg(short = 't', long)]
    time_budget: Option<f64>,

    /// Only print the total number of solutions
    #[arg(short, long)]
    count: bool,

    /// Ignore letters in phone numbers instead of mapping them to digits
    #[arg(long)]
    digits_only: bool,
}

/// Entry point of the phonecode CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    phonecode::log::init_logger(phonecode::log::debug_requested());

    if let Err(e) = try_main() {
        // Exit explicitly with a nonzero code so scripts can detect failure
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load both lists, translate every number, and write `number: segments` lines
/// to stdout (or just the total with `--count`). Counts and timings go to stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let budget = cli
        .time_budget
        .map(Duration::try_from_secs_f64)
        .transpose()
        .map_err(|e| format!("invalid --time-budget: {e}"))?;
    let mode = if cli.digits_only { FilterMode::DigitsOnly } else { FilterMode::MapLetters };

    let t_load = Instant::now();
    let dict = Dictionary::load_from_path(&cli.dictionary)?;
    let numbers = NumberList::load_from_path(&cli.numbers, mode)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!(
        "{} words ({} encodings), {} numbers",
        dict.num_words(),
        dict.num_encodings(),
        numbers.len()
    );
    let inert = dict.empty_encoding_words().len();
    if inert > 0 {
        log::warn!("{inert} words contain no letters and will never match");
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let max_solutions = cli.max_solutions.unwrap_or(usize::MAX);

    let t_solve = Instant::now();
    let mut total = 0usize;
    let mut timed_out = 0usize;

    for number in &numbers.numbers {
        let mut translations = translate(&number.digits, &dict);
        if let Some(limit) = budget {
            translations = translations.with_budget(TimeBudget::new(limit));
        }

        let mut found = 0usize;
        for solution in translations.by_ref().take(max_solutions) {
            found += 1;
            if !cli.count {
                write_solution(&mut writer, &number.raw, &solution)?;
            }
        }

        if translations.timed_out() {
            timed_out += 1;
            log::warn!("{}: time budget expired after {found} solutions", number.raw);
        }
        log::debug!("{}: {found} solutions", number.raw);
        total += found;
    }

    if cli.count {
        writeln!(writer, "{total}")?;
    }
    writer.flush()?;

    eprintln!(
        "Loaded {} words and {} numbers in {:.3}s; found {} solutions in {:.3}s{}.",
        dict.num_words(),
        numbers.len(),
        load_secs,
        total,
        t_solve.elapsed().as_secs_f64(),
        if timed_out > 0 { format!(" ({timed_out} numbers timed out)") } else { String::new() }
    );

    Ok(())
}

/// Write one `number: seg seg ...` line without building it as a `String` first.
fn write_solution<W: Write>(writer: &mut W, number: &str, solution: &[Segment<'_>]) -> io::Result<()> {
    write!(writer, "{number}:")?;
    for segment in solution {
        write!(writer, " {segment}")?;
    }
    writeln!(writer)
}
