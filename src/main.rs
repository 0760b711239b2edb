//! codec-menu CLI
//!
//! Interactive menu for base64 and byte-sequence text transforms, plus
//! one-shot commands for scripting.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use codec_menu::report::{format_listing, format_output};
use codec_menu::transform::{Transform, TRANSFORMS};
use codec_menu::tui;
use codec_menu::types::{
    MenuConfig, OutputFormat, TransformInfo, TransformOutput, DEFAULT_MAX_INPUT_CHARS,
};

#[derive(Parser)]
#[command(name = "codec-menu")]
#[command(about = "Pick a text transform, type a string, see the result")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quit once typed input grows past this many characters
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    max_input: usize,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "off")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// List the available transforms
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Apply one transform to a string and print the result
    Apply {
        /// Transform to apply
        #[arg(value_enum)]
        transform: TransformArg,

        /// Text to transform
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum TransformArg {
    #[value(name = "base64-encode")]
    Base64Encode,
    #[value(name = "base64-decode")]
    Base64Decode,
    #[value(name = "byte-encode")]
    ByteEncode,
    #[value(name = "byte-decode")]
    ByteDecode,
}

impl From<TransformArg> for Transform {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::Base64Encode => Transform::Base64Encode,
            TransformArg::Base64Decode => Transform::Base64Decode,
            TransformArg::ByteEncode => Transform::ByteEncode,
            TransformArg::ByteDecode => Transform::ByteDecode,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = MenuConfig {
        max_input_chars: cli.max_input,
    };

    let result = match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cmd_menu(config),
        Commands::List { format } => cmd_list(format.into()),
        Commands::Apply { transform, input, format } => {
            cmd_apply(transform.into(), input, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the frame painted on stdout.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_menu(config: MenuConfig) -> Result<(), String> {
    tui::run(config).map_err(|e| e.to_string())
}

fn cmd_list(format: OutputFormat) -> Result<(), String> {
    let listing: Vec<TransformInfo> = TRANSFORMS.iter().copied().map(TransformInfo::from).collect();
    let text = format_listing(&listing, format).map_err(|e| e.to_string())?;
    print!("{}", text);
    Ok(())
}

fn cmd_apply(transform: Transform, input: String, format: OutputFormat) -> Result<(), String> {
    let output = transform.try_apply(&input).map_err(|e| e.to_string())?;
    tracing::debug!(transform = transform.id(), input_chars = input.chars().count(), "applied");

    let record = TransformOutput {
        transform: transform.id(),
        input,
        output,
    };
    let text = format_output(&record, format).map_err(|e| e.to_string())?;
    print!("{}", text);
    Ok(())
}
