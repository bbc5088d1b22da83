use clean_build::{cli::Cli, Cleaner, SystemRunner};
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let verbose = cli.verbose;
    let cwd = match &cli.directory {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let cleaner = Cleaner::new(cli.into_config(cwd), SystemRunner);
    let report = cleaner.run();

    if verbose {
        println!("{}", report.display_status());
    }

    Ok(())
}
