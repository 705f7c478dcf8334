use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finviz::cli::{handle_report_command, ReportArgs};
use finviz::config::paths::{FinvizPaths, CONFIG_DIR_ENV};
use finviz::config::settings::Settings;
use finviz::logging::{init_tracing_stderr, init_tracing_to_file};

#[derive(Parser)]
#[command(
    name = "finviz",
    version,
    about = "Terminal personal-finance visualizer",
    long_about = "finviz records income and expense transactions for one session, \
                  filters them by month, year and category, tracks per-category \
                  budgets and charts where the money went."
)]
struct Cli {
    /// Directory holding config.json and the log file
    #[arg(long, global = true, env = CONFIG_DIR_ENV, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Start with sample transactions
        #[arg(long)]
        demo: bool,
    },

    /// Print the dashboard for a one-off session
    Report(ReportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to config.json
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.config_dir {
        Some(dir) => FinvizPaths::with_base_dir(dir),
        None => FinvizPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui { demo: false }) {
        Commands::Tui { demo } => {
            init_tracing_to_file(&paths.log_file(), &settings.log_filter)?;
            finviz::tui::run_tui(&settings, demo)?;
        }
        Commands::Report(args) => {
            init_tracing_stderr(&settings.log_filter);
            handle_report_command(args, &settings)?;
        }
        Commands::Config { write } => {
            if write {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }

            println!("finviz Configuration");
            println!("====================");
            println!();
            println!("Paths:");
            println!("  Config dir:     {}", paths.base_dir().display());
            println!("  Settings file:  {}", paths.settings_file().display());
            println!("  Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Date format:    {}", settings.date_format);
            println!("  Recent limit:   {}", settings.recent_limit);
            println!("  Notice time:    {}s", settings.notification_secs);
            println!("  Tick rate:      {}ms", settings.tick_rate_ms);
            println!("  Log filter:     {}", settings.log_filter);
        }
    }

    Ok(())
}
