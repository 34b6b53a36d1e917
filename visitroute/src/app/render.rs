use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use visitroute_core::{
    catalog::RouteCatalog,
    model::DayOfWeek,
    request::RouteResponse,
};

use super::AppError;

/// how results are written to stdout
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// link on the first line followed by one line per stop
    #[default]
    Text,
    /// the response payload as pretty-printed JSON
    Json,
}

pub fn render_response(response: &RouteResponse, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(response)
            .map_err(|e| AppError::Serialization(e.to_string())),
        OutputFormat::Text => match response {
            RouteResponse::Success { url, stops } => {
                let lines = std::iter::once(url.clone())
                    .chain(stops.iter().map(|s| s.to_string()))
                    .join("\n");
                Ok(lines)
            }
            RouteResponse::Failure { severity, message } => Ok(format!("{severity}: {message}")),
        },
    }
}

pub fn render_staff(catalog: &RouteCatalog) -> String {
    catalog.staff().iter().map(|s| s.to_string()).join("\n")
}

pub fn render_days() -> String {
    DayOfWeek::ALL.iter().map(|d| d.label()).join("\n")
}

/// one line per plan: staff id, staff name if known, day and stop count
pub fn render_plans(catalog: &RouteCatalog) -> String {
    catalog
        .plans()
        .iter()
        .map(|p| {
            let name = catalog
                .staff_member(p.staff_id)
                .map(|s| s.name.as_str())
                .unwrap_or("<unknown staff>");
            format!(
                "{} ({}) {}: {} stops",
                p.staff_id,
                name,
                p.day,
                p.stops.len()
            )
        })
        .join("\n")
}
