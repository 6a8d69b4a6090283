// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tokio::io::BufReader as AsyncBufReader;

use che2_subtitles::app_config::{self, Config, ExportFormat};
use che2_subtitles::app_controller::Controller;

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

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Docx,
    Text,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Docx => ExportFormat::Docx,
            CliExportFormat::Text => ExportFormat::Text,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit a subtitle sheet interactively (default command)
    Edit(EditArgs),

    /// Render a JSON sheet to a document without the editor
    Render(RenderArgs),

    /// Generate shell completions for che2-subtitles
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
struct EditArgs {
    /// Start with part tagging enabled
    #[arg(long)]
    part_mode: bool,

    /// Pre-filled choir or soloist label
    #[arg(long)]
    singer: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON sheet with author, date, singer, part_mode and entries
    #[arg(value_name = "SHEET")]
    sheet: PathBuf,

    /// Output file or directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,
}

/// che2 subtitle uploader
///
/// Compose the ordered subtitle lines of a worship service, tag them with
/// vocal parts, and export a color coded Word document.
#[derive(Parser, Debug)]
#[command(name = "che2-subtitles")]
#[command(version)]
#[command(about = "Worship subtitle sheet editor")]
#[command(long_about = "che2-subtitles collects subtitle lines for a worship service and exports them as a Word document.

EXAMPLES:
    che2-subtitles                                  # Start the editor
    che2-subtitles edit --part-mode                 # Start with part tags enabled
    che2-subtitles render sheet.json -o out.docx    # Render a JSON sheet
    che2-subtitles --format text render sheet.json  # Plain text output
    che2-subtitles completions bash > che2.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Export format
    #[arg(long, value_enum, global = true)]
    format: Option<CliExportFormat>,
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
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
                "\x1B[{}m{} {:<5} {}\x1B[0m",
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

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize at trace so the config can lower the level later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "che2-subtitles", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(to_level_filter(&config.log_level));

    match cli.command {
        Some(Commands::Render(args)) => {
            let controller = Controller::with_config(config)?;
            let written = controller
                .render_sheet(&args.sheet, args.output.as_deref(), args.force_overwrite)
                .await?;
            info!("Success: {:?}", written);
        }
        Some(Commands::Edit(args)) => run_editor(config, args).await?,
        None => run_editor(config, EditArgs::default()).await?,
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}

async fn run_editor(mut config: Config, args: EditArgs) -> Result<()> {
    if args.part_mode {
        config.session.part_mode = true;
    }
    if let Some(singer) = args.singer {
        config.session.singer = singer;
    }

    let mut controller = Controller::with_config(config)?;
    controller
        .run_interactive(AsyncBufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}

// @loads: Config file, creating a default one when missing, then CLI overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }
    if let Some(format) = &cli.format {
        config.export.format = format.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}
