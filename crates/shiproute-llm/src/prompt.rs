//! Prompt text for route analysis.

/// Role-setting instruction sent as the `system` message on every call.
pub const SYSTEM_ROLE: &str = "Anda adalah ahli analisis logistik dan pelabuhan.";

const ANALYSIS_ASK: &str = "Berikan analisis mendalam tentang bagaimana rute ini memengaruhi \
efisiensi logistik untuk PT Pelindo. Sertakan dampak ekonomi, potensi kemacetan pelabuhan, \
dan peluang optimalisasi rute yang dapat meningkatkan efisiensi operasional.";

/// What the user asked for, before it becomes prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Templated question about one route.
    Route(String),
    /// Templated question about every route in the catalog.
    Overview(Vec<String>),
    /// Free text typed by the user, sent verbatim.
    Custom(String),
}

impl AnalysisRequest {
    pub fn prompt_text(&self) -> String {
        match self {
            Self::Route(name) => route_prompt(name),
            Self::Overview(names) => overview_prompt(names),
            Self::Custom(text) => text.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Route(_) => "route",
            Self::Overview(_) => "overview",
            Self::Custom(_) => "custom",
        }
    }
}

pub fn route_prompt(route_name: &str) -> String {
    format!("Aplikasi ini memvisualisasikan rute kapal {route_name}. {ANALYSIS_ASK}")
}

pub fn overview_prompt<S: AsRef<str>>(route_names: &[S]) -> String {
    let names = route_names
        .iter()
        .map(|n| format!("'{}'", n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Aplikasi ini memvisualisasikan rute kapal berikut: [{names}]. {ANALYSIS_ASK}")
}
