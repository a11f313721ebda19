use std::io;
use log::info;
use strava_activity_reporter::config::{CONFIG_YAML, ReporterConfig};
use strava_activity_reporter::service::activity_reporter::ActivityReporter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ReporterConfig::load(CONFIG_YAML)?;
    let reporter = ActivityReporter::new(&config)?;

    let mut out = io::stdout().lock();
    let count = reporter.get_all_activities(&mut out).await?;
    info!("Done, {count} activities printed");

    Ok(())
}
