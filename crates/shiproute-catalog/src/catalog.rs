//! Route catalog — ordered, immutable table of shipping lanes.

use shiproute_common::error::{CatalogError, Result};
use shiproute_common::{Route, Waypoint};

/// Read-only set of routes, kept in definition order.
///
/// Lookups are linear; the catalog holds a handful of routes.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
}

impl RouteCatalog {
    /// Build a catalog from an explicit list. Names must be unique.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|r| r.name == route.name) {
                return Err(CatalogError::DuplicateRoute(route.name.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// The three lanes shown on the dashboard.
    pub fn builtin() -> Self {
        Self { routes: builtin_routes() }
    }

    /// Route names in definition order.
    pub fn list_route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn get_route(&self, name: &str) -> Result<&Route> {
        self.routes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.iter().any(|r| r.name == name)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_routes() -> Vec<Route> {
    vec![
        Route::new("China-Indonesia", vec![
            Waypoint::port("Shanghai",  31.2304, 121.4737),
            Waypoint::port("Ningbo",    28.1802, 121.2787),
            Waypoint::port("Fuqing",    25.7528, 119.3400),
            Waypoint::port("Shantou",   23.3541, 116.6819),
            Waypoint::port("Shekou",    22.5431, 114.0579),
            Waypoint::port("Jakarta",   -6.2088, 106.8456),
            Waypoint::port("Surabaya",  -7.2575, 112.7521),
        ]),
        Route::new("Middle-East-Southeast Asia", vec![
            Waypoint::port("Dammam",       26.3927,   50.9775),
            Waypoint::port("Jebel Ali",    25.276987, 55.296249),
            Waypoint::port("Mundra",       22.3039,   73.1926),
            Waypoint::port("Nhava Sheva",  19.0760,   72.8777),
            Waypoint::port("Laem Chabang", 13.7234,   100.4762),
            Waypoint::port("Cai Mep",      10.7769,   106.7009),
            Waypoint::port("Singapore",    1.3521,    103.8198),
            Waypoint::port("Jakarta",      -6.2088,   106.8456),
        ]),
        Route::new("Global Direct Call", vec![
            Waypoint::port("New York",     40.7128,  -74.0060),
            Waypoint::port("Norfolk",      36.8508,  -76.2859),
            Waypoint::port("Savannah",     32.0835,  -81.0998),
            Waypoint::port("Hong Kong",    22.3964,  114.1095),
            Waypoint::port("Laem Chabang", 13.7234,  100.4762),
            Waypoint::port("Singapore",    1.3521,   103.8198),
            Waypoint::port("Jakarta",      -6.2088,  106.8456),
            Waypoint::port("Sydney",       -33.8688, 151.2093),
        ]),
    ]
}
