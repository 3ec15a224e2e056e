use crate::app::{conclude, App};
use crate::cli::{Output, RmArgs};
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Select};
use mktdash_warehouse::CategoryId;
use tracing::trace;

const ACTIONS: [&str; 5] = [
    "Market snapshot",
    "Economic category",
    "Economic & market report",
    "Clear stored files",
    "Quit",
];

/// Interactive loop; returns once the user quits.
pub async fn run(app: &App) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;
        trace!("menu selection: {}", ACTIONS[action]);

        let outcome = match action {
            0 => app.market(pick_output(&theme)?).await,
            1 => {
                let id = pick_category(&theme)?;
                app.category(id, pick_output(&theme)?).await
            }
            2 => app.report().await,
            3 => app.remove(pick_stored(&theme)?),
            _ => {
                println!("Thank you for using the app, see you tomorrow!");
                return Ok(());
            }
        };
        conclude(outcome);
    }
}

fn pick_output(theme: &ColorfulTheme) -> Result<Output> {
    let outputs = Output::value_variants();
    let labels: Vec<&str> = outputs.iter().map(|output| output.label()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("How would you like it?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(outputs[choice])
}

fn pick_category(theme: &ColorfulTheme) -> Result<CategoryId> {
    let titles: Vec<&str> = CategoryId::ALL.iter().map(|id| id.title()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Which category?")
        .items(&titles)
        .default(0)
        .interact()?;
    Ok(CategoryId::ALL[choice])
}

fn pick_stored(theme: &ColorfulTheme) -> Result<RmArgs> {
    let choice = Select::with_theme(theme)
        .with_prompt("Which files should be removed?")
        .items(&["CSV files", "Spreadsheets"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 { RmArgs::Csv } else { RmArgs::Sheet })
}
