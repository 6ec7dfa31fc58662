use jiff::{Timestamp, Zoned, tz::TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};

pub const TOKYO_TZ: &str = "Asia/Tokyo";
pub const UTC_TZ: &str = "UTC";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LocalTime {
    pub city: String,
    pub tz: &'static str,
    pub now: String,
}

pub fn get_time(args: &Map<String, Value>) -> LocalTime {
    let city = args
        .get("city")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim()
        .to_string();
    let tz = zone_for_city(&city);
    LocalTime {
        now: now_in(tz),
        city,
        tz,
    }
}

/// Naive city to zone mapping: anything that isn't Tokyo is reported in UTC.
pub fn zone_for_city(city: &str) -> &'static str {
    if city.to_lowercase().starts_with("tokyo") {
        TOKYO_TZ
    } else {
        UTC_TZ
    }
}

fn now_in(tz_name: &str) -> String {
    match TimeZone::get(tz_name) {
        Ok(tz) => Zoned::now()
            .with_time_zone(tz)
            .strftime("%Y-%m-%dT%H:%M:%S%.6f%:z")
            .to_string(),
        Err(e) => {
            // no tz database on this host; fall back to bare UTC
            tracing::debug!(tz = tz_name, error = %e, "time zone lookup failed, using UTC");
            Timestamp::now()
                .strftime("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string()
        }
    }
}
