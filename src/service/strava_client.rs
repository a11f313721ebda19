use async_stream::try_stream;
use futures::Stream;
use log::{debug, info, warn};
use reqwest::{Response, StatusCode};
use url::Url;
use crate::config::ReporterConfig;
use crate::domain::activity::{Activity, ActivityVec};
use crate::error::ReporterError;
use crate::oauth::token::Bearer;

/// Minimal client for the Strava v3 API, authenticated with a static bearer token.
pub struct StravaClient {
    http: reqwest::Client,
    activities_url: Url,
    bearer: Bearer,
    per_page: u16,
    before: Option<i64>,
    after: Option<i64>
}

impl StravaClient {
    pub fn new(config: &ReporterConfig) -> Result<Self, ReporterError> {
        let base_url = config.api_url.trim_end_matches('/');
        let activities_url = Url::parse(&format!("{base_url}/athlete/activities"))?;
        Ok(Self {
            http: reqwest::Client::new(),
            activities_url,
            bearer: config.bearer.clone(),
            per_page: config.per_page,
            before: config.before,
            after: config.after
        })
    }

    /// Lazily walks all pages of the athlete's activities.
    /// A page is requested only when the consumer has drained the previous one,
    /// and the walk ends after the first page that is not full.
    pub fn activities(&self) -> impl Stream<Item = Result<Activity, ReporterError>> + '_ {
        try_stream! {
            let mut page: u32 = 1;
            loop {
                let activities = self.get_page(page).await?;
                let count = activities.len();
                for activity in activities {
                    yield activity;
                }
                if count < self.per_page as usize {
                    debug!("Page {page} holds {count} activities, no further pages");
                    break;
                }
                page += 1;
            }
        }
    }

    async fn get_page(&self, page: u32) -> Result<ActivityVec, ReporterError> {
        let mut query = vec![("page", page as i64), ("per_page", self.per_page as i64)];
        if let Some(before) = self.before {
            query.push(("before", before));
        }
        if let Some(after) = self.after {
            query.push(("after", after));
        }
        debug!("Request page {page} from {}", self.activities_url);

        let response = self.http
            .get(self.activities_url.clone())
            .header(reqwest::header::AUTHORIZATION, self.bearer.as_str())
            .query(&query)
            .send().await?;

        let activities = check_status(response).await?
            .json::<ActivityVec>().await?;
        info!("Received {} activities on page {page}", activities.len());
        Ok(activities)
    }
}

async fn check_status(response: Response) -> Result<Response, ReporterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|e| {
        debug!("Cannot read body of HTTP {status} response: {e}");
        String::new()
    });
    match status {
        StatusCode::UNAUTHORIZED => Err(ReporterError::Unauthorized(body)),
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Strava rate limit hit");
            Err(ReporterError::RateLimited)
        }
        _ => Err(ReporterError::Status { status, body })
    }
}
