use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands::*};
use dotenv::dotenv;
use std::time::Duration;
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

mod app;
mod cli;
mod config;
mod export;
mod menu;
mod render;

fn preprocess(trace_level: Level) -> Result<()> {
    dotenv().ok();
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    preprocess(cli.trace.into())?;
    trace!("Command line input recorded: {cli:#?}");

    let settings = config::Settings::from_env();
    let app = app::App::new(settings, Duration::from_secs(cli.timeout), cli.out_dir)?;

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    // "> mktdash [menu | market | category <name> | report | rm <csv sheet>]"
    let outcome = match cli.command.unwrap_or(Menu) {
        Menu => menu::run(&app).await,
        Market { output } => app.market(output).await,
        Category { name, output } => app.category(name.into(), output).await,
        Report => app.report().await,
        Rm { files } => files.into_iter().try_for_each(|kind| app.remove(kind)),
    };
    app::conclude(outcome);

    Ok(())
}
