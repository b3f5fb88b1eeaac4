use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One airport from the local dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub name: String,

    /// Some dataset rows carry `null` or no code at all; those become an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub iata: String,

    /// Coordinates, country, etc. Carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AirportRecord {
    pub fn new(name: impl Into<String>, iata: impl Into<String>) -> Self {
        Self { name: name.into(), iata: iata.into(), extra: Map::new() }
    }
}

/// A single departure as returned by the schedule API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default)]
    pub flight_iata: Option<String>,
    #[serde(default)]
    pub dep_time_utc: Option<String>,
    #[serde(default)]
    pub arr_time_utc: Option<String>,
    #[serde(default)]
    pub arr_iata: Option<String>,
    /// Minutes of delay, `None` when on time.
    #[serde(default)]
    pub delayed: Option<i64>,
}

/// A departure joined against the airport catalog, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedFlight {
    pub flight_iata: Option<String>,
    pub dep_time_utc: Option<String>,
    pub arr_airport: Option<String>,
    pub delayed_display: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
