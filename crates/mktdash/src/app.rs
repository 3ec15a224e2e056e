use crate::cli::{Output, RmArgs};
use crate::config::Settings;
use crate::export;
use crate::render::{self, Bar};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use mktdash_util::build_client;
use mktdash_warehouse::schema::econ::percent_change;
use mktdash_warehouse::{
    aggregate, aggregate_all, report, Catalog, CategoryId, CategoryTable, Endpoints, Fred, Frame,
    MarketSnapshot,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info};

/// What every action needs: the HTTP client, the endpoints, the catalog and where exports go.
pub struct App {
    http_client: reqwest::Client,
    endpoints: Endpoints,
    catalog: Catalog,
    out_dir: PathBuf,
}

impl App {
    pub fn new(settings: Settings, timeout: Duration, out_dir: PathBuf) -> Result<Self> {
        let http_client = build_client(&settings.user_agent, timeout)
            .context("could not build the HTTP client")?;
        Ok(Self {
            http_client,
            endpoints: settings.endpoints,
            catalog: Catalog::standard(),
            out_dir,
        })
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////
    //
    // Actions
    //
    ///////////////////////////////////////////////////////////////////////////////////////////////

    pub async fn market(&self, output: Output) -> Result<()> {
        info!("Building market snapshot");
        let snapshot = MarketSnapshot::build(&self.http_client, &self.endpoints).await;

        match output {
            Output::Terminal => {
                for frame in snapshot.frames() {
                    println!("{}", render::table(&frame));
                }
            }
            Output::Chart => match snapshot.equity.rows() {
                Ok(bars) => {
                    let bars: Vec<Bar> = bars
                        .iter()
                        .map(|bar| Bar {
                            label: bar.index.clone(),
                            change: percent_change(bar.close, bar.open),
                        })
                        .collect();
                    println!("{}", render::chart("Equity Indices (open to close)", &bars));
                }
                Err(_) => println!("{}", render::table(&snapshot.equity.frame("Equity Indices"))),
            },
            Output::Csv => self.export_csv(&snapshot.union(), export::MARKET_CSV),
            Output::Sheet => {
                self.export_sheet(&snapshot.union(), export::MARKET_CSV, export::MARKET_SHEET)
            }
        }
        Ok(())
    }

    pub async fn category(&self, id: CategoryId, output: Output) -> Result<()> {
        let table = self.fetch_category(id).await?;

        match output {
            Output::Terminal => println!("{}", render::table(&table.frame())),
            Output::Chart => {
                let bars: Vec<Bar> = table
                    .rows
                    .iter()
                    .map(|row| Bar {
                        label: row.name.to_string(),
                        change: row.change,
                    })
                    .collect();
                println!("{}", render::chart(id.title(), &bars));
            }
            Output::Csv => self.export_csv(&table.frame(), id.slug()),
            Output::Sheet => self.export_sheet(&table.frame(), id.slug(), id.slug()),
        }
        Ok(())
    }

    /// Categories are fetched until the first one fails; the report then stops at that category
    /// and the market is not fetched at all.
    pub async fn report(&self) -> Result<()> {
        self.require_fred_key()?;
        let fred = Fred::new(&self.http_client, &self.endpoints);

        let (tables, failure) = aggregate_all(&fred, &self.catalog).await;
        let snapshot = match failure {
            None => MarketSnapshot::build(&self.http_client, &self.endpoints).await,
            Some(e) => {
                error!("report stops after {} categories: {e}", tables.len());
                MarketSnapshot::unavailable()
            }
        };

        let prepared = chrono::Local::now().date_naive();
        for line in report::render(&tables, &snapshot, prepared) {
            println!("{line}\n");
        }
        Ok(())
    }

    pub fn remove(&self, kind: RmArgs) -> Result<()> {
        let removed = export::clear(&self.out_dir, kind)
            .with_context(|| format!("could not remove the stored {kind:?} files"))?;
        if removed == 0 {
            println!("The file you are trying to delete does not exist");
        } else {
            println!("Removed {removed} stored file(s)");
        }
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////////////////////////

    fn require_fred_key(&self) -> Result<()> {
        if self.endpoints.fred_api_key.is_empty() {
            bail!("FRED_API is not set; economic data needs a FRED API key");
        }
        Ok(())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryTable> {
        self.require_fred_key()?;
        let category = self
            .catalog
            .get(id)
            .with_context(|| format!("{id} is not in the catalog"))?;
        let fred = Fred::new(&self.http_client, &self.endpoints);

        aggregate(&fred, category)
            .await
            .with_context(|| format!("{id} data is currently unavailable, please try again later"))
    }

    fn export_csv(&self, frame: &Frame, stem: &str) {
        let path = export::csv_path(&self.out_dir, stem);
        announce(export::csv(frame, &path), &path);
    }

    fn export_sheet(&self, frame: &Frame, csv_stem: &str, sheet_stem: &str) {
        let csv_path = export::csv_path(&self.out_dir, csv_stem);
        let sheet_path = export::sheet_path(&self.out_dir, sheet_stem);
        announce(export::sheet(frame, &csv_path, &sheet_path), &sheet_path);
    }
}

fn announce<E: std::fmt::Display>(result: std::result::Result<(), E>, path: &Path) {
    match result {
        Ok(()) => {
            debug!("exported to {}", path.display());
            println!("Your export was successful: {}", path.display());
        }
        Err(e) => {
            error!("export to {} failed: {e}", path.display());
            println!("{}", "Your export was unsuccessful".red());
        }
    }
}

/// Print the one line a failed action leaves behind.
pub fn conclude(outcome: Result<()>) {
    if let Err(e) = outcome {
        error!("{e:#}");
        println!("{}", e.to_string().red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(out_dir: &Path, fred_api_key: &str) -> App {
        app_at("http://127.0.0.1:9", out_dir, fred_api_key)
    }

    fn app_at(base: &str, out_dir: &Path, fred_api_key: &str) -> App {
        let settings = Settings {
            endpoints: Endpoints::all_at(base, fred_api_key),
            user_agent: "mktdash-test".into(),
        };
        App::new(settings, Duration::from_millis(200), out_dir.to_path_buf()).unwrap()
    }

    #[tokio::test]
    async fn categories_need_a_fred_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = app(dir.path(), "").category(CategoryId::Growth, Output::Terminal).await;

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("FRED_API is not set"));
    }

    #[tokio::test]
    async fn unreachable_fred_is_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let result = app(dir.path(), "key").category(CategoryId::Growth, Output::Terminal).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Economic Growth data is currently unavailable, please try again later"
        );
    }

    #[tokio::test]
    async fn unreachable_market_still_exports() {
        let dir = tempfile::tempdir().unwrap();
        app(dir.path(), "").market(Output::Csv).await.unwrap();

        let written =
            std::fs::read_to_string(export::csv_path(dir.path(), export::MARKET_CSV)).unwrap();
        assert!(written.starts_with("Status\n"));
        assert_eq!(written.lines().count(), 4);
    }

    #[tokio::test]
    async fn failed_category_skips_the_market() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fred/series/observations"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/(api|v8)/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        app_at(&server.uri(), dir.path(), "key").report().await.unwrap();
    }

    #[test]
    fn removing_nothing_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(app(dir.path(), "").remove(RmArgs::Sheet).is_ok());
    }
}
