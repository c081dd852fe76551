use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use puzzle24::codec::decode_tuples;
use puzzle24::{
    Alphabet, BASE64_ALPHABET, GeneratorConfig, LEVEL_ALPHABET, PuzzleSolver, generate_levels,
    validate_values,
};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Symbol table used for level strings
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlphabetChoice {
    /// The table of the published level sets
    Level,
    /// Standard Base64, decodable without ambiguity
    Base64,
}

impl AlphabetChoice {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            AlphabetChoice::Level => &LEVEL_ALPHABET,
            AlphabetChoice::Base64 => &BASE64_ALPHABET,
        }
    }
}

/// puzzle24 - Generate leveled puzzle sets for the 24 card game
#[derive(Parser, Debug)]
#[command(name = "puzzle24")]
#[command(about = "Solve 24 puzzles and generate encoded level sets")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the puzzle corpus and print one encoded level per line
    Generate {
        /// Number of levels
        #[arg(long, default_value_t = 100)]
        levels: usize,

        /// Smallest card value
        #[arg(long, default_value_t = 1)]
        min_value: u8,

        /// Largest card value (at most 31)
        #[arg(long, default_value_t = 31)]
        max_value: u8,

        #[arg(long, value_enum, default_value = "level")]
        alphabet: AlphabetChoice,
    },
    /// Print every expression over four cards that makes 24
    Solve {
        /// Four card values
        #[arg(num_args = 4, required = true)]
        values: Vec<u8>,
    },
    /// Print the tuples held by an encoded level string
    Decode {
        level: String,

        #[arg(long, value_enum, default_value = "level")]
        alphabet: AlphabetChoice,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    match args.command {
        Command::Generate {
            levels,
            min_value,
            max_value,
            alphabet,
        } => {
            let config = GeneratorConfig {
                min_value,
                max_value,
                level_count: levels,
                ..GeneratorConfig::default()
            };
            config.validate().context("Invalid configuration")?;

            info!("Generating {} levels over {}..={}", levels, min_value, max_value);
            let encoded =
                generate_levels(&config, alphabet.alphabet()).context("Level generation failed")?;
            for level in encoded {
                println!("{}", level);
            }
            Ok(())
        }
        Command::Solve { values } => {
            let tuple = validate_values(&values).context("Invalid card values")?;
            let solver = PuzzleSolver::new();
            let solutions = solver.solve(&tuple).context("Solving failed")?;

            if solutions.is_empty() {
                warn!("No expression over {:?} reaches 24", tuple);
                println!("No solution.");
            } else {
                for solution in &solutions {
                    println!("{}", solution);
                }
                println!("{} solutions", solutions.len());
            }
            Ok(())
        }
        Command::Decode { level, alphabet } => {
            if !alphabet.alphabet().is_lossless() {
                warn!("Letters are ambiguous in this alphabet; decoding takes the first match");
            }
            let tuples =
                decode_tuples(&level, alphabet.alphabet()).context("Invalid level string")?;
            for tuple in tuples {
                println!("{:?}", tuple);
            }
            Ok(())
        }
    }
}
