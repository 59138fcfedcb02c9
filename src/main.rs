use clap::Parser;
use std::io;
use std::path::PathBuf;
use toy_robot::{Session, SimulatorConfig, logger};

#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(about = "Drive a toy robot around a table with PLACE, MOVE, LEFT, RIGHT and REPORT.")]
struct Cli {
    /// TOML file with `rows` and `columns`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows on the table (overrides the config file)
    #[arg(long)]
    rows: Option<u32>,

    /// Number of columns on the table (overrides the config file)
    #[arg(long)]
    columns: Option<u32>,

    /// Do not print the help banner
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "starting toy-robot");

    let mut config = match &cli.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }

    let mut session = Session::new(config.processor()?, io::stdout().lock());
    if !cli.quiet {
        session.print_banner()?;
    }
    session.run(io::stdin().lock())?;
    Ok(())
}
