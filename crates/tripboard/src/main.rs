//! tripboard entry point.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripboard::cli::command::HELP;
use tripboard::cli::{Cli, Command};
use tripboard::events::load_events;
use tripboard::{App, Config, Step};
use tripboard_core::trip::generate_seed_events;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripboard=info,tripboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();

    let events = match &cli.events {
        Some(path) => load_events(path)?,
        None => {
            let start = cli.start.unwrap_or_else(|| Local::now().date_naive());
            tracing::info!(%start, count = config.seed_events, "Generating demo events");
            generate_seed_events(start, config.seed_events)
        }
    };

    let mut app = App::new(&events, cli.sort.into(), &config).with_format(cli.format);

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let interactive = cli.script.is_none() && !cli.quiet;

    if !cli.quiet {
        println!("{HELP}\n");
    }
    println!("{}", app.render());

    let mut stdout = io::stdout();
    if interactive {
        print!("> ");
        stdout.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            let step = line
                .parse::<Command>()
                .and_then(|command| app.execute(command));
            match step {
                Ok(Step::Print(text)) => println!("{text}"),
                Ok(Step::Quit) => break,
                Err(error) => eprintln!("Error: {error}"),
            }
        }

        if interactive {
            print!("> ");
            stdout.flush()?;
        }
    }

    Ok(())
}
