//! memoscope: interactive demo and headless replay.

use clap::{Parser, Subcommand};
use memoscope::app::{self, Edit, Field, Session, Variant};
use memoscope::error::Error;
use memoscope::{logging, DemoConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Optimization stage to run (overrides the config file)
    #[arg(long, value_enum, global = true)]
    variant: Option<Variant>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file for the interactive demo (overrides the config file)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal demo (default)
    Run,
    /// Type a name and a surname without a terminal and print the counters
    Replay {
        /// Text typed into the name field, one keystroke per character
        #[arg(long, default_value = "Jane")]
        name: String,
        /// Text typed into the surname field afterwards
        #[arg(long, default_value = "Doe")]
        surname: String,
        /// Replay every variant instead of only the selected one
        #[arg(long)]
        all: bool,
    },
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let mut config = DemoConfig::load_or_default(cli.config.as_deref())?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }
    config.validate()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let _guard = logging::init_file(&config)?;
            tracing::info!(variant = %config.variant, log_file = %config.log_file.display(), "starting demo");
            app::run(config.variant)
        }
        Commands::Replay { name, surname, all } => {
            logging::init_stdout(&config)?;
            let variants = if all {
                Variant::ALL.to_vec()
            } else {
                vec![config.variant]
            };
            let mut out = io::stdout().lock();
            for variant in variants {
                let mut session = Session::new(variant);
                session.replay(&Edit::typing(Field::Name, &name));
                let frame = session.replay(&Edit::typing(Field::Surname, &surname));
                app::write_report(&mut out, variant, frame)?;
            }
            Ok(())
        }
    }
}
