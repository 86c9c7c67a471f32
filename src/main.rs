// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use app_controller::Controller;

mod app_config;
mod alignment;
mod tmx;
mod file_utils;
mod app_controller;
mod language_utils;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Align two parallel text files into a TMX translation memory (default command)
    #[command(alias = "align")]
    Align(AlignArgs),

    /// Generate shell completions for tmxalign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Source-language text file
    #[arg(value_name = "SOURCE_FILE")]
    source_file: PathBuf,

    /// Target-language text file
    #[arg(value_name = "TARGET_FILE")]
    target_file: PathBuf,

    /// Output TMX file (default: <source-stem>.<src>-<tgt>.tmx next to the source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source language code (e.g., 'fr', 'en', 'es')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'fr', 'en', 'es')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

/// tmxalign - Parallel text to TMX aligner
///
/// Pairs the lines of a source-language text file with its translation and
/// writes the aligned segments as a TMX 1.4 translation memory.
#[derive(Parser, Debug)]
#[command(name = "tmxalign")]
#[command(version = "1.0.0")]
#[command(about = "Build TMX translation memories from parallel text files")]
#[command(long_about = "tmxalign pairs corresponding sentences of two parallel plain-text files
and writes them as a TMX 1.4 translation memory.

EXAMPLES:
    tmxalign source.txt target.txt              # Align using default config (fr -> en)
    tmxalign -s en -t de source.txt target.txt  # Align English to German
    tmxalign -o memory.tmx src.txt tgt.txt      # Choose the output path
    tmxalign -f -y src.txt tgt.txt              # Overwrite, no confirmation
    tmxalign completions bash > tmxalign.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED LANGUAGES:
    fr, en, es, de, it, pt (default pair: fr -> en)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source-language text file
    #[arg(value_name = "SOURCE_FILE")]
    source_file: Option<PathBuf>,

    /// Target-language text file
    #[arg(value_name = "TARGET_FILE")]
    target_file: Option<PathBuf>,

    /// Output TMX file (default: <source-stem>.<src>-<tgt>.tmx next to the source)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source language code (e.g., 'fr', 'en', 'es')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'fr', 'en', 'es')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "tmxalign", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Align(args)) => run_align(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let source_file = cli.source_file.ok_or_else(|| {
                anyhow!("SOURCE_FILE is required when no subcommand is specified")
            })?;
            let target_file = cli.target_file.ok_or_else(|| {
                anyhow!("TARGET_FILE is required when no subcommand is specified")
            })?;

            let align_args = AlignArgs {
                source_file,
                target_file,
                output: cli.output,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
                force_overwrite: cli.force_overwrite,
                yes: cli.yes,
            };
            run_align(align_args)
        }
    }
}

fn run_align(options: AlignArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(source_lang) = &options.source_language {
            config.source_language = source_lang.clone();
        }

        if let Some(target_lang) = &options.target_language {
            config.target_language = target_lang.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(source_lang) = &options.source_language {
            config.source_language = source_lang.clone();
        }

        if let Some(target_lang) = &options.target_language {
            config.target_language = target_lang.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Resolve the output path
    let output_file = options.output.clone().unwrap_or_else(|| {
        FileManager::generate_output_path(
            &options.source_file,
            &config.source_language,
            &config.target_language,
        )
    });

    // Summary before committing to the run
    let source_name = language_utils::get_language_name(&config.source_language)
        .unwrap_or_else(|_| config.source_language.clone());
    let target_name = language_utils::get_language_name(&config.target_language)
        .unwrap_or_else(|_| config.target_language.clone());

    info!("Source: {} ({})", options.source_file.display(), source_name);
    info!("Target: {} ({})", options.target_file.display(), target_name);
    info!("Output: {}", output_file.display());

    if !options.yes && !confirm("Continue?")? {
        info!("Operation cancelled.");
        return Ok(());
    }

    // Create controller and run the alignment
    let controller = Controller::with_config(config)?;
    controller.run(
        &options.source_file,
        &options.target_file,
        &output_file,
        options.force_overwrite,
    )
}

// @prompts: Yes/no question on stdin, defaulting to yes
fn confirm(question: &str) -> Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{} [Y/n] ", question)?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}
