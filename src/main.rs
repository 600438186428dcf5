use anyhow::Context;
use arcpick::{ArcPick, ArcPickError, Cli, OutputFormatter, OutputMode, UserFriendlyError};
use clap::Parser;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbosity_level());

    if let Err(err) = run(&cli) {
        print_startup_error(&err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let arcpick = ArcPick::from_cli(cli).context("Could not start")?;
    debug!("Configuration: {:?}", arcpick.config());

    let outcome = arcpick.run().context("Session stopped unexpectedly")?;
    debug!("Outcome: {:?}", outcome);

    Ok(())
}

/// Logs go to stderr so they never interleave with prompts.
fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "arcpick=warn",
        1 => "arcpick=info",
        _ => "arcpick=debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn print_startup_error(error: &anyhow::Error) {
    let colors = console::Term::stdout().features().colors_supported();
    let formatter = OutputFormatter::new(OutputMode::Human, colors);

    match error.downcast_ref::<ArcPickError>() {
        Some(err) => {
            println!("{}", formatter.error(&err.user_message()));
            if let Some(suggestion) = err.suggestion() {
                println!("{}", formatter.info(&format!("Suggestion: {}", suggestion)));
            }
        }
        None => println!("{}", formatter.error(&format!("{:#}", error))),
    }
}
