//! Display formatting and device-intent helpers

use chrono::NaiveDateTime;

/// Clock-punch display for completed shifts, "N/A" when never punched
pub fn clock_time(timestamp: Option<&NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => ts.format("%-I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// Host platform for the map-launching intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPlatform {
    Ios,
    Android,
}

/// URL handed to the device map launcher for a venue.
///
/// iOS uses the `maps:` scheme, Android the `geo:` scheme with the venue
/// name as a percent-encoded pin label.
pub fn map_intent_url(platform: MapPlatform, name: &str, latitude: f64, longitude: f64) -> String {
    match platform {
        MapPlatform::Ios => format!(
            "maps:0,0?q={}@{},{}",
            urlencoding::encode(name),
            latitude,
            longitude
        ),
        MapPlatform::Android => format!(
            "geo:0,0?q={},{}({})",
            latitude,
            longitude,
            urlencoding::encode(name)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_clock_time_morning() {
        assert_eq!(clock_time(Some(&ts("2023-12-18T09:05:23"))), "9:05 AM");
    }

    #[test]
    fn test_clock_time_afternoon() {
        assert_eq!(clock_time(Some(&ts("2023-12-18T15:02:45"))), "3:02 PM");
    }

    #[test]
    fn test_clock_time_missing() {
        assert_eq!(clock_time(None), "N/A");
    }

    #[test]
    fn test_android_map_url_encodes_label() {
        let url = map_intent_url(
            MapPlatform::Android,
            "Infinity Convention Centre",
            45.4215,
            -75.6972,
        );
        assert_eq!(
            url,
            "geo:0,0?q=45.4215,-75.6972(Infinity%20Convention%20Centre)"
        );
    }

    #[test]
    fn test_ios_map_url() {
        let url = map_intent_url(MapPlatform::Ios, "Shaw Centre", 45.4244, -75.6927);
        assert_eq!(url, "maps:0,0?q=Shaw%20Centre@45.4244,-75.6927");
    }
}
