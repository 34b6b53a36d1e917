use std::process::ExitCode;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use visitroute_core::{
    model::DayOfWeek,
    request::{resolve_route, RouteResponse},
};

use crate::app::{render, AppError, OutputFormat, VisitRouteConfig};

/// Command line tool that builds a directions link for a staff member's
/// customer visits on a given day
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct VisitRouteApp {
    /// TOML file with the staff roster, route plans and link settings. if not
    /// provided, the embedded default configuration is used.
    #[arg(short, long, global = true)]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub op: VisitRouteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum VisitRouteOperation {
    /// build the directions link and stop list for a staff member and day
    Link {
        /// staff identifier
        #[arg(short, long)]
        staff: Option<String>,

        /// day label, one of Sunday..Saturday (case-sensitive)
        #[arg(short, long, conflicts_with = "today")]
        day: Option<String>,

        /// use the current local day of the week
        #[arg(long)]
        today: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// list the staff roster
    Staff,
    /// list the day labels
    Days,
    /// list the route plans in the catalog
    Plans,
    /// print the effective configuration as TOML
    Config,
}

impl VisitRouteApp {
    pub fn run(&self) -> Result<ExitCode, AppError> {
        self.op.run(self.config_file.as_deref())
    }
}

impl VisitRouteOperation {
    pub fn run(&self, config_file: Option<&str>) -> Result<ExitCode, AppError> {
        match self {
            VisitRouteOperation::Link {
                staff,
                day,
                today,
                format,
            } => {
                let day = selected_day(day.as_deref(), *today);
                let staff = staff.clone().unwrap_or_default();
                let config = VisitRouteConfig::load(config_file)?;
                let response = link_response(&config, &staff, &day)?;
                let output = render::render_response(&response, *format)?;
                if response.is_success() {
                    println!("{output}");
                    Ok(ExitCode::SUCCESS)
                } else {
                    match format {
                        OutputFormat::Json => println!("{output}"),
                        OutputFormat::Text => eprintln!("{output}"),
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
            VisitRouteOperation::Staff => {
                let config = VisitRouteConfig::load(config_file)?;
                let catalog = config.build_catalog()?;
                println!("{}", render::render_staff(&catalog));
                Ok(ExitCode::SUCCESS)
            }
            VisitRouteOperation::Plans => {
                let config = VisitRouteConfig::load(config_file)?;
                let catalog = config.build_catalog()?;
                println!("{}", render::render_plans(&catalog));
                Ok(ExitCode::SUCCESS)
            }
            VisitRouteOperation::Days => {
                println!("{}", render::render_days());
                Ok(ExitCode::SUCCESS)
            }
            VisitRouteOperation::Config => {
                let config = VisitRouteConfig::load(config_file)?;
                let toml_str = toml::to_string_pretty(&config)
                    .map_err(|e| AppError::Serialization(e.to_string()))?;
                println!("{toml_str}");
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// builds the catalog from configuration and resolves a single selection.
/// catalog problems are configuration errors, selection problems are
/// returned as a failure response.
pub fn link_response(
    config: &VisitRouteConfig,
    staff: &str,
    day: &str,
) -> Result<RouteResponse, AppError> {
    let catalog = config.build_catalog()?;
    let result = resolve_route(&catalog, &config.link, staff, day);
    Ok(RouteResponse::from(result))
}

/// the day label to look up. an explicit day wins, then the current local
/// day if requested, otherwise an empty selection.
fn selected_day(day: Option<&str>, today: bool) -> String {
    match (day, today) {
        (Some(d), _) => d.to_string(),
        (None, true) => current_day().to_string(),
        (None, false) => String::new(),
    }
}

fn current_day() -> DayOfWeek {
    DayOfWeek::from(chrono::Local::now().weekday())
}
