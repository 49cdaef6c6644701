//! Route and waypoint value types.
//!
//! A `Route` is an ordered list of waypoints. The order is the order the
//! path is drawn in; there is no graph structure between routes.

use serde::{Deserialize, Serialize};

/// A single geographic coordinate on a route, in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    /// Human-readable port name, if the waypoint is a port call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Waypoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, label: None }
    }

    pub fn port(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { lat, lon, label: Some(label.into()) }
    }

    /// `[lat, lon]` pair in the order map widgets expect.
    pub fn lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(name: impl Into<String>, waypoints: Vec<Waypoint>) -> Self {
        Self { name: name.into(), waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Port labels in call order; unlabelled waypoints are skipped.
    pub fn port_labels(&self) -> Vec<&str> {
        self.waypoints
            .iter()
            .filter_map(|w| w.label.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_labels_skip_unlabelled() {
        let route = Route::new("Test", vec![
            Waypoint::port("Shanghai", 31.2304, 121.4737),
            Waypoint::new(10.0, 110.0),
            Waypoint::port("Jakarta", -6.2088, 106.8456),
        ]);
        assert_eq!(route.port_labels(), vec!["Shanghai", "Jakarta"]);
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn test_unlabelled_waypoint_omits_label_in_json() {
        let json = serde_json::to_value(Waypoint::new(1.0, 2.0)).unwrap();
        assert!(json.get("label").is_none());
        assert_eq!(json["lat"], 1.0);
    }

    #[test]
    fn test_lat_lon_order() {
        let w = Waypoint::port("Sydney", -33.8688, 151.2093);
        assert_eq!(w.lat_lon(), [-33.8688, 151.2093]);
    }
}
