pub mod activity_reporter;
pub mod strava_client;
