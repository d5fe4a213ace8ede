// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use srtsync::app_config::{self, Config, TranslationProvider};
use srtsync::app_controller::{Controller, EditCommand};
use srtsync::report::ReportView;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Ollama,
    Anthropic,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
        }
    }
}

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

#[derive(Subcommand, Debug)]
enum EditOp {
    /// Move the first N lines of a line set to the previous set
    LinesToPrevious { line_set: usize, count: usize },
    /// Move the last N lines of a line set to the next set
    LinesToNext { line_set: usize, count: usize },
    /// Move the first N words of a line set to the previous set
    WordsToPrevious { line_set: usize, count: usize },
    /// Move the last N words of a line set to the next set
    WordsToNext { line_set: usize, count: usize },
    /// Move the first word of a translated line to the line above
    WordUp { line: usize },
    /// Move the last word of a translated line to the line below
    WordDown { line: usize },
    /// Split a line set so that BREAK_LINE starts a new set
    Split { line_set: usize, break_line: usize },
    /// Merge a line set into the previous one
    MergePrevious { line_set: usize },
    /// Merge a line set with the next one
    MergeNext { line_set: usize },
    /// Replace the translated text of a line set
    SetText { line_set: usize, text: String },
}

impl From<EditOp> for EditCommand {
    fn from(op: EditOp) -> Self {
        match op {
            EditOp::LinesToPrevious { line_set, count } => EditCommand::MoveLinesToPrevious { line_set, count },
            EditOp::LinesToNext { line_set, count } => EditCommand::MoveLinesToNext { line_set, count },
            EditOp::WordsToPrevious { line_set, count } => EditCommand::MoveWordsToPrevious { line_set, count },
            EditOp::WordsToNext { line_set, count } => EditCommand::MoveWordsToNext { line_set, count },
            EditOp::WordUp { line } => EditCommand::MoveWordFromLineToPrevious { line },
            EditOp::WordDown { line } => EditCommand::MoveWordFromLineToNext { line },
            EditOp::Split { line_set, break_line } => EditCommand::Split { line_set, break_line },
            EditOp::MergePrevious { line_set } => EditCommand::MergeWithPrevious { line_set },
            EditOp::MergeNext { line_set } => EditCommand::MergeWithNext { line_set },
            EditOp::SetText { line_set, text } => EditCommand::SetText { line_set, text },
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Align an SRT file with an existing flat translation
    Align {
        /// Original SRT file
        srt: PathBuf,
        /// Plain text file with the translation
        translation: PathBuf,
        /// State directory to write
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
    },

    /// Translate an SRT file with the configured provider and align the result
    Translate {
        /// Original SRT file
        srt: PathBuf,
        /// State directory to write
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
    },

    /// Apply one edit to a saved state
    Edit {
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
        #[command(subcommand)]
        op: EditOp,
    },

    /// Print a report of a saved state
    Report {
        #[arg(value_enum)]
        view: ReportView,
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
    },

    /// Check the consistency of a saved state
    Check {
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
    },

    /// Write the translated SRT of a saved state
    Export {
        #[arg(short = 'd', long, default_value = "state")]
        state_dir: PathBuf,
        /// Output file, defaults to translated.srt inside the state directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions for srtsync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtsync - line by line alignment of subtitle translations
#[derive(Parser, Debug)]
#[command(name = "srtsync")]
#[command(version)]
#[command(about = "Align a flat subtitle translation with the original SRT lines")]
#[command(long_about = "srtsync splits a flat translation of a subtitle file back into the original lines.

EXAMPLES:
    srtsync align movie.srt movie.es.txt              # Align an existing translation
    srtsync -p ollama -t es translate movie.srt       # Translate and align
    srtsync report line-sets                          # Show the line set table
    srtsync edit words-to-next 12 2                   # Move two words to the next set
    srtsync check                                     # Verify the saved state
    srtsync export -o movie.es.srt                    # Write the translated SRT
    srtsync completions bash > srtsync.bash           # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Translation provider to use
    #[arg(short, long, value_enum, global = true)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Source language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long, global = true)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long, global = true)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(provider) = &cli.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(model) = &cli.model {
        config.set_model(model);
    }
    if let Some(source_lang) = &cli.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &cli.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config is read; the CLI flag wins over the config level
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "srtsync", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        log::set_max_level(app_config::LogLevel::from(level.clone()).to_level_filter());
    }
    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config);

    match cli.command {
        Commands::Align { srt, translation, state_dir } => {
            let file = controller.align_files(&srt, &translation, &state_dir)?;
            info!("Aligned {} lines into {} line sets", file.num_lines(), file.num_line_sets());
        }
        Commands::Translate { srt, state_dir } => {
            let file = controller.translate_file(&srt, &state_dir).await?;
            info!("Translated {} lines into {} line sets", file.num_lines(), file.num_line_sets());
        }
        Commands::Edit { state_dir, op } => {
            if !controller.apply_edit(&state_dir, &op.into())? {
                warn!("Nothing changed");
            }
        }
        Commands::Report { view, state_dir } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            controller.report(&state_dir, view, &mut out)?;
        }
        Commands::Check { state_dir } => {
            let report = controller.check(&state_dir)?;
            println!("{}", report);
            if !report.is_consistent() {
                return Err(anyhow!("State in {:?} is inconsistent", state_dir));
            }
        }
        Commands::Export { state_dir, output } => {
            controller.export(&state_dir, output.as_deref())?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
