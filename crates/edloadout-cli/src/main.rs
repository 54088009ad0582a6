use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use edloadout_cli::output::OutputFormat;
use edloadout_cli::paths::{load_catalog, load_roster};
use edloadout_lib::LoadoutFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elite: Dangerous loadout utilities")]
struct Cli {
    /// Override the blueprint catalog CSV path.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override the engineer roster JSON path.
    #[arg(long, global = true)]
    engineers: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a Coriolis or SLEF export and print the engineered components.
    Import {
        /// Loadout export file.
        file: PathBuf,
        /// Export format (coriolis or slef); detected when omitted.
        #[arg(long)]
        format: Option<LoadoutFormat>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// List, for each engineered component, the engineers able to apply it.
    Engineers {
        /// Loadout export file.
        file: PathBuf,
        /// Export format (coriolis or slef); detected when omitted.
        #[arg(long)]
        format: Option<LoadoutFormat>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Check whether an engineer can apply a blueprint uuid.
    Check {
        /// Engineer name (case-insensitive).
        #[arg(long)]
        engineer: String,
        /// Blueprint uuid from the catalog.
        #[arg(long)]
        uuid: String,
        /// Blueprint grade; resolves a uuid shared across grades.
        #[arg(long)]
        grade: Option<u8>,
    },
    /// List the ship hulls recognized in SLEF exports.
    Ships,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Import {
            file,
            format,
            output,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            commands::import::handle_import(&catalog, &file, format, output)
        }
        Command::Engineers {
            file,
            format,
            output,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let roster = load_roster(cli.engineers.as_deref())?;
            commands::engineers::handle_engineers(&catalog, &roster, &file, format, output)
        }
        Command::Check {
            engineer,
            uuid,
            grade,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let roster = load_roster(cli.engineers.as_deref())?;
            commands::check::handle_check(&catalog, &roster, &engineer, &uuid, grade)
        }
        Command::Ships => {
            commands::ships::handle_list_ships();
            Ok(())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
