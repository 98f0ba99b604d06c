//! Ruter reisapi response DTOs.
//!
//! Field names follow the PascalCase JSON of the API. Fields are optional
//! or defaulted because the API omits or nulls them freely; only the
//! outer shape (an array of objects) is required for a body to decode.

use serde::{Deserialize, Deserializer};

/// One entry from `stopvisit/getdepartures`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArrivalRecord {
    #[serde(default)]
    pub monitored_vehicle_journey: MonitoredVehicleJourney,
}

/// The vehicle journey serving a stop visit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredVehicleJourney {
    /// Line name as shown to passengers, e.g. "20" or "N12".
    pub published_line_name: Option<String>,

    /// Final destination of the journey.
    pub destination_name: Option<String>,

    /// Vehicle mode code (0 bus, 2 train, 3 tram, 4 metro).
    pub vehicle_mode: Option<i64>,

    /// Direction code. Sent as a string holding a number, e.g. `"2"`.
    #[serde(default, deserialize_with = "direction_code")]
    pub direction_ref: i64,

    #[serde(default)]
    pub monitored_call: MonitoredCall,
}

/// Timing of the visit at the monitored stop.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonitoredCall {
    /// Expected arrival, `YYYY-MM-DDTHH:MM:SS+HH:MM`.
    pub expected_arrival_time: Option<String>,

    pub departure_platform_name: Option<String>,

    pub destination_display: Option<String>,
}

/// One entry from `place/getplaces`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceRecord {
    #[serde(default)]
    pub name: String,

    /// "Stop", "Area", "POI", "Street", ...
    #[serde(default)]
    pub place_type: String,

    #[serde(rename = "ID", default)]
    pub id: i64,
}

/// Accept `"2"`, `2` or `null` for a direction code.
fn direction_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Number(i64),
        Text(String),
    }

    match Option::<Code>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Code::Number(n)) => Ok(n),
        Some(Code::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journey(json: &str) -> MonitoredVehicleJourney {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn direction_ref_as_string() {
        assert_eq!(journey(r#"{"DirectionRef":"2"}"#).direction_ref, 2);
    }

    #[test]
    fn direction_ref_as_number() {
        assert_eq!(journey(r#"{"DirectionRef":1}"#).direction_ref, 1);
    }

    #[test]
    fn direction_ref_missing_or_null() {
        assert_eq!(journey("{}").direction_ref, 0);
        assert_eq!(journey(r#"{"DirectionRef":null}"#).direction_ref, 0);
    }

    #[test]
    fn direction_ref_non_numeric_is_error() {
        let result = serde_json::from_str::<MonitoredVehicleJourney>(r#"{"DirectionRef":"up"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn place_record_fields() {
        let place: PlaceRecord =
            serde_json::from_str(r#"{"ID":3010200,"Name":"Majorstuen [T-bane]","PlaceType":"Stop","X":1}"#)
                .unwrap();
        assert_eq!(place.id, 3010200);
        assert_eq!(place.name, "Majorstuen [T-bane]");
        assert_eq!(place.place_type, "Stop");
    }
}
