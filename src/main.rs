use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use receipt_cli::config::{paths::ReceiptPaths, settings::Settings};
use receipt_cli::recognition::RecognitionPipeline;
use receipt_cli::tui;

#[derive(Parser)]
#[command(
    name = "receipt",
    version,
    about = "Terminal-based grocery receipt entry with OCR-assisted autofill",
    long_about = "receipt-cli walks through a two-step entry wizard: first the \
                  purchase date, store, and an optional photo of the receipt, \
                  then the item list. With a photo, an OCR command reads it in \
                  the background and fills in whatever you left blank."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive entry wizard
    #[command(alias = "ui")]
    Tui,

    /// Run the OCR command over a receipt photo and print the text
    Recognize {
        /// Path to the receipt image
        image: PathBuf,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReceiptPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            paths.ensure_directories()?;
            tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Recognize { image }) => {
            let pipeline = RecognitionPipeline::from_settings(&settings);
            let (text, parsed) = pipeline.run_with_text(&image)?;
            println!("{}", text.trim_end());
            if !parsed.is_empty() {
                println!();
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            }
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized receipt-cli at: {}", paths.base_dir().display());
            println!();
            println!("Run 'receipt tui' to start entering receipts.");
        }
        Some(Commands::Config) => {
            println!("receipt-cli Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Session log:    {}", paths.session_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  OCR command:     {} (language: {})",
                settings.ocr_command, settings.ocr_language
            );
        }
        None => {
            println!("receipt-cli - Terminal-based grocery receipt entry");
            println!();
            println!("Run 'receipt --help' for usage information.");
            println!("Run 'receipt tui' to launch the entry wizard.");
        }
    }

    Ok(())
}
