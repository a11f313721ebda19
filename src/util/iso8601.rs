use iso8601_timestamp::Timestamp;

/// Parses an ISO-8601 timestamp into seconds since epoch, as expected by the
/// `before` and `after` query parameters of the Strava API.
pub fn string_to_secs(str: &str) -> Option<i64> {
    Timestamp::parse(str.trim()).map(timestamp_to_secs)
}

fn timestamp_to_secs(ts: Timestamp) -> i64 {
    ts.duration_since(Timestamp::UNIX_EPOCH).whole_seconds()
}
