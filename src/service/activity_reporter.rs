use std::io::Write;
use futures::{pin_mut, TryStreamExt};
use log::info;
use crate::config::ReporterConfig;
use crate::error::ReporterError;
use crate::service::strava_client::StravaClient;

/// Prints one line per activity of the authenticated athlete.
pub struct ActivityReporter {
    client: StravaClient
}

impl ActivityReporter {
    pub fn new(config: &ReporterConfig) -> Result<Self, ReporterError> {
        Ok(Self { client: StravaClient::new(config)? })
    }

    /// Writes every activity to `out` in the order returned by Strava and returns the number
    /// of lines written. Lines are written while paging, so memory stays bounded by one page.
    /// Any failure aborts the run and is returned as is.
    pub async fn get_all_activities<W: Write>(&self, out: &mut W) -> Result<usize, ReporterError> {
        let activities = self.client.activities();
        pin_mut!(activities);
        let mut count = 0;
        while let Some(activity) = activities.try_next().await? {
            writeln!(out, "{activity}")?;
            count += 1;
        }
        out.flush()?;
        info!("Reported {count} activities");
        Ok(count)
    }
}
