//! Terminal entry point.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use vinolytics_dashboard::render;
use vinolytics_dashboard::{AnalyticsClient, DashboardConfig, DashboardState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vinolytics_observability::init();

    let config = DashboardConfig::from_env().context("invalid dashboard configuration")?;
    let client = AnalyticsClient::new(&config).context("failed to build HTTP client")?;

    tracing::info!(
        api_url = %config.api_url,
        health = ?client.health().await,
        "analytics service"
    );

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut state = DashboardState::load(&client, config.initial_ui()).await;

    loop {
        match &state {
            DashboardState::Ready(dashboard) => {
                print!("{}", render::render(&dashboard.view()));
                return Ok(());
            }
            DashboardState::Failed(err) => {
                eprint!("{}", render::render_failure(err));
                let answer = stdin.next_line().await.context("failed to read stdin")?;
                match answer.as_deref().map(str::trim) {
                    None | Some("q") | Some("Q") => return Ok(()),
                    _ => {
                        tracing::info!("retrying dashboard load");
                        state.retry(&client, config.initial_ui()).await;
                    }
                }
            }
            DashboardState::Loading => {
                state = DashboardState::load(&client, config.initial_ui()).await;
            }
        }
    }
}
