use std::fmt;
use serde::Deserialize;
use serde_json::Number;

/// Summary of an athlete activity as returned by `GET /athlete/activities`.
/// Fields not needed for the report are ignored on deserialization.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    // Kept as JSON number so that the value is neither rounded nor converted
    pub distance: Number,
    pub start_date_local: String
}

pub type ActivityVec = Vec<Activity>;

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Activity ID: {}, Name: {}, Distance: {}, Start Date: {}",
            self.id, self.name, self.distance, self.start_date_local)
    }
}
