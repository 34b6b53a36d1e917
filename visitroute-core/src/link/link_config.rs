use serde::{Deserialize, Serialize};

/// travel mode requested from the directions service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// settings for the directions link. the stop count limits belong to the
/// directions service and are not configurable here.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MapsLinkConfig {
    /// directions endpoint, defaults to "https://www.google.com/maps/dir/"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub travel_mode: TravelMode,
    /// number of decimal places written for each coordinate. if not provided,
    /// the shortest text that reads back to the same f64 is written.
    #[serde(default)]
    pub coordinate_decimals: Option<usize>,
}

impl Default for MapsLinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            travel_mode: TravelMode::default(),
            coordinate_decimals: None,
        }
    }
}

fn default_base_url() -> String {
    "https://www.google.com/maps/dir/".to_string()
}
