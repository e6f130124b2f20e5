//! Print reproducible synthetic values.
//!
//! Settings come from `SYNTHETIC_DATA_*` environment variables; `--seed` and
//! `--locale` override them. The applied seed is always logged so a random
//! run can be replayed.
//!
//! # Examples
//! ```sh
//! synthetic-data --seed 42 --locale nb_NO --count 3 city
//! synthetic-data password --mode simple
//! synthetic-data password --length 12 --symbol 2 --numeric 1
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use synthetic_data::{
    GenerationError, Generator, GeneratorSettings, PasswordMode, PasswordOptions, PasswordSpec,
    RangeError, Requirement, SettingsError, WeekdayOptions,
};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const PROGRAM: &str = "synthetic-data";

/// Length used when explicit password requirements omit `--length`.
const DEFAULT_PASSWORD_LENGTH: usize = 15;

/// `synthetic-data` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "synthetic-data",
    about = "Print deterministic, locale-aware synthetic values",
    version
)]
struct CliArgs {
    /// Seed for the generator. Falls back to `SYNTHETIC_DATA_SEED`, then a
    /// random seed.
    #[arg(long, value_name = "n")]
    seed: Option<u32>,
    /// Comma-separated locale chain such as `nb_NO,sk`. English and the base
    /// table are always appended.
    #[arg(long, value_name = "codes")]
    locale: Option<String>,
    /// Number of values to print.
    #[arg(long, value_name = "n", default_value_t = 1)]
    count: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Passwords from a preset or explicit requirements.
    Password(PasswordArgs),
    /// Integers in an inclusive range.
    Int {
        /// Lower bound.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        min: i64,
        /// Upper bound.
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        max: i64,
    },
    /// Weekday names.
    Weekday {
        /// Use abbreviated names.
        #[arg(long)]
        abbreviated: bool,
        /// Prefer in-sentence forms when the locale has them.
        #[arg(long)]
        context: bool,
    },
    /// City names.
    City,
    /// Full names.
    Name,
    /// Version 4 UUIDs.
    Uuid,
}

#[derive(Debug, Clone, Args)]
struct PasswordArgs {
    /// Named preset. Used when no explicit requirement is given; defaults to
    /// `secure`.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Target length for explicit requirements.
    #[arg(long, value_name = "n")]
    length: Option<usize>,
    /// Minimum lowercase letters.
    #[arg(long, value_name = "n")]
    lowercase: Option<i64>,
    /// Minimum uppercase letters.
    #[arg(long, value_name = "n")]
    uppercase: Option<i64>,
    /// Minimum digits.
    #[arg(long, value_name = "n")]
    numeric: Option<i64>,
    /// Minimum symbols.
    #[arg(long, value_name = "n")]
    symbol: Option<i64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Secure,
    Simple,
}

impl PasswordArgs {
    fn spec(&self) -> PasswordSpec {
        let explicit = self.length.is_some()
            || [self.lowercase, self.uppercase, self.numeric, self.symbol]
                .iter()
                .any(Option::is_some);
        if let Some(mode) = self.mode.filter(|_| !explicit) {
            return PasswordSpec::Mode(match mode {
                ModeArg::Secure => PasswordMode::Secure,
                ModeArg::Simple => PasswordMode::Simple,
            });
        }
        if !explicit {
            return PasswordSpec::Mode(PasswordMode::Secure);
        }
        let requirement =
            |count: Option<i64>| count.map_or(Requirement::Flag(false), Requirement::AtLeast);
        PasswordSpec::Options(
            PasswordOptions::new(self.length.unwrap_or(DEFAULT_PASSWORD_LENGTH))
                .with_lowercase(requirement(self.lowercase))
                .with_uppercase(requirement(self.uppercase))
                .with_numeric(requirement(self.numeric))
                .with_symbol(requirement(self.symbol)),
        )
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Log filter from `RUST_LOG`, enabling `info` when it is unset so the seed
/// line is always written.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run(&CliArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Fixes the seed before the generator is built, drawing one from the OS when
/// none is configured. Returns the seed and whether it was drawn.
fn pin_seed(settings: &mut GeneratorSettings) -> (u32, bool) {
    match settings.seed {
        Some(seed) => (seed, false),
        None => {
            let seed = rand::rng().random();
            settings.seed = Some(seed);
            (seed, true)
        }
    }
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let mut settings = GeneratorSettings::load_without_cli(PROGRAM)?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(locale) = &args.locale {
        settings.locales = vec![locale.clone()];
    }

    let (seed, random) = pin_seed(&mut settings);
    let mut generator = settings.build_generator()?;
    if random {
        info!(seed, locales = ?settings.locales(), "using random seed");
    } else {
        info!(seed, locales = ?settings.locales(), "using configured seed");
    }

    let mut out = io::stdout().lock();
    for _ in 0..args.count {
        let value = render(&mut generator, &args.command)?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}

fn render(generator: &mut Generator, command: &Command) -> Result<String, CliError> {
    let value = match command {
        Command::Password(password) => generator.internet().password(password.spec())?,
        Command::Int { min, max } => generator.number().int(*min, *max)?.to_string(),
        Command::Weekday {
            abbreviated,
            context,
        } => generator.date().weekday(WeekdayOptions {
            abbreviated: *abbreviated,
            context: *context,
        })?,
        Command::City => generator.location().city_name()?,
        Command::Name => generator.person().full_name()?,
        Command::Uuid => generator.string().uuid().to_string(),
    };
    Ok(value)
}
