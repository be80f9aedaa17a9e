use anyhow::Result;
use clap::{Parser, Subcommand};
use widgetry_core::{error::validate, seed_catalog};
use widgetry_tui::{app::App, terminal, tracing_setup};

/// Terminal UI widget gallery: browse, search, and try widgets live.
#[derive(Parser)]
#[command(name = "widgetry", version, about)]
struct Cli {
    /// Start with this search query already applied
    query: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the seed catalog as JSON and exit
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    match cli.command {
        Some(Command::Catalog) => {
            let sections = seed_catalog();
            validate(&sections)?;
            serde_json::to_writer_pretty(std::io::stdout(), &sections)?;
            println!();
            Ok(())
        }
        None => {
            let mut app = App::new();
            if let Some(query) = cli.query {
                app = app.with_initial_query(query);
            }
            terminal::run(app)
        }
    }
}
