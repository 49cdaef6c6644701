//! Page rendering. A page is a pure function of a `DashboardState` snapshot.

use minijinja::Environment;
use serde::Serialize;

use shiproute_catalog::{MapArtifact, RouteCatalog};

use crate::state::{DashboardState, Outcome, OVERVIEW_CHOICE};

const DASHBOARD_TEMPLATE: &str = "dashboard.html";

/// Compiled page templates. HTML auto-escaping applies to `.html` names.
pub struct Pages {
    env: Environment<'static>,
}

#[derive(Debug, Serialize)]
struct RouteOption<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct PortRow<'a> {
    order: usize,
    port: &'a str,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Serialize)]
struct DashboardView<'a> {
    model: &'a str,
    route_options: Vec<RouteOption<'a>>,
    selected_route: Option<&'a str>,
    ports: Vec<PortRow<'a>>,
    map_json: String,
    last_query: &'a str,
    outcome: &'a Outcome,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(DASHBOARD_TEMPLATE, include_str!("../templates/dashboard.html"))?;
        Ok(Self { env })
    }

    pub fn dashboard(
        &self,
        catalog: &RouteCatalog,
        state: &DashboardState,
        model: &str,
    ) -> Result<String, minijinja::Error> {
        let current = state.selection.form_value();

        let mut route_options = vec![
            RouteOption { value: "", label: "Pilih rute…", selected: current.is_empty() },
            RouteOption { value: OVERVIEW_CHOICE, label: "Semua rute", selected: current == OVERVIEW_CHOICE },
        ];
        route_options.extend(catalog.list_route_names().into_iter().map(|name| RouteOption {
            value: name,
            label: name,
            selected: current == name,
        }));

        let selected_route = state.selection.route_name();
        let ports: Vec<PortRow> = selected_route
            .and_then(|name| catalog.get_route(name).ok())
            .map(|route| {
                route.waypoints.iter().enumerate().map(|(i, w)| PortRow {
                    order: i + 1,
                    port: w.label.as_deref().unwrap_or("-"),
                    lat: w.lat,
                    lon: w.lon,
                }).collect()
            })
            .unwrap_or_default();

        let view = DashboardView {
            model,
            route_options,
            selected_route,
            ports,
            map_json: script_safe_json(&state.map(catalog))?,
            last_query: state.last_query.as_deref().unwrap_or(""),
            outcome: &state.outcome,
        };

        self.env.get_template(DASHBOARD_TEMPLATE)?.render(&view)
    }
}

/// Map JSON that can sit inside a `<script>` element.
fn script_safe_json(map: &MapArtifact) -> Result<String, minijinja::Error> {
    let json = map.to_json().map_err(|e| {
        minijinja::Error::new(minijinja::ErrorKind::BadSerialization, e.to_string())
    })?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &DashboardState) -> String {
        Pages::new()
            .unwrap()
            .dashboard(&RouteCatalog::builtin(), state, "gpt-4o")
            .unwrap()
    }

    #[test]
    fn test_page_lists_every_route_in_selector() {
        let html = render(&DashboardState::default());
        for name in RouteCatalog::builtin().list_route_names() {
            assert!(html.contains(&format!(r#"<option value="{name}""#)), "{name}");
        }
        assert!(html.contains("Ship Route Visualization and Analysis"));
    }

    #[test]
    fn test_selected_route_marked_and_ports_listed() {
        let mut state = DashboardState::default();
        state.select(&RouteCatalog::builtin(), "China-Indonesia").unwrap();
        let html = render(&state);
        assert!(html.contains(r#"<option value="China-Indonesia" selected>"#));
        assert!(html.contains("Surabaya"));
    }

    #[test]
    fn test_analysis_text_is_escaped() {
        let mut state = DashboardState::default();
        state.complete("custom", "<b>Jakarta & Surabaya".to_string());
        let html = render(&state);
        assert!(html.contains("&lt;b&gt;Jakarta &amp; Surabaya"));
        assert!(!html.contains("<b>Jakarta"));
    }

    #[test]
    fn test_warning_and_error_banners() {
        let mut state = DashboardState::default();
        state.warn("Kosong");
        assert!(render(&state).contains(r#"class="alert alert-warning""#));
        state.fail("Gagal");
        assert!(render(&state).contains(r#"class="alert alert-danger""#));
    }

    #[test]
    fn test_script_safe_json_breaks_closing_tags() {
        use shiproute_common::{Route, Waypoint};
        let route = Route::new("</script>", vec![Waypoint::new(0.0, 0.0)]);
        let json = script_safe_json(&shiproute_catalog::map::render(&route)).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains(r#""<\/script>""#));
    }
}
