use itertools::Itertools;
use url::Url;

use crate::model::Stop;

use super::{LinkError, MapsLinkConfig, NavigationLink, StopDescription, StopRole};

/// intermediate waypoints accepted by the directions service
pub const MAX_WAYPOINTS: usize = 23;
/// origin + waypoints + destination
pub const MAX_STOPS: usize = MAX_WAYPOINTS + 2;
pub const MIN_STOPS: usize = 2;

/// builds a directions url visiting `stops` in order, along with a role
/// description for each stop. the first stop is the origin, the last is the
/// destination and all others are waypoints.
///
/// # Arguments
///
/// * `stops` - ordered route, between [`MIN_STOPS`] and [`MAX_STOPS`] long
/// * `config` - directions endpoint, travel mode and coordinate formatting
///
/// # Returns
///
/// * the link, or the first failed validation. nothing is produced on failure.
pub fn build_navigation_link(
    stops: &[Stop],
    config: &MapsLinkConfig,
) -> Result<NavigationLink, LinkError> {
    let count = stops.len();
    if count < MIN_STOPS {
        return Err(LinkError::InsufficientStops { count });
    }
    if count > MAX_STOPS {
        return Err(LinkError::TooManyStops { count });
    }

    let (origin, destination) = match (stops.first(), stops.last()) {
        (Some(o), Some(d)) => (o, d),
        _ => return Err(LinkError::InsufficientStops { count }),
    };
    let waypoints = &stops[1..count - 1];

    let decimals = config.coordinate_decimals;
    let mut params: Vec<(&str, String)> = vec![
        ("api", String::from("1")),
        ("origin", format_point(origin, decimals)),
        ("destination", format_point(destination, decimals)),
    ];
    if !waypoints.is_empty() {
        let joined = waypoints
            .iter()
            .map(|s| format_point(s, decimals))
            .join("|");
        params.push(("waypoints", joined));
    }
    params.push(("travelmode", config.travel_mode.to_string()));

    let url = Url::parse_with_params(&config.base_url, &params).map_err(|e| {
        LinkError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        }
    })?;
    log::debug!(
        "built directions link with {} waypoints: {url}",
        waypoints.len()
    );

    let descriptions = stops
        .iter()
        .enumerate()
        .map(|(idx, stop)| StopDescription::new(StopRole::at(idx, count), stop))
        .collect();

    Ok(NavigationLink {
        url: url.to_string(),
        stops: descriptions,
    })
}

/// writes a stop as "lat,lng". with no fixed decimals, each value is the
/// shortest decimal text that parses back to the same f64.
pub fn format_point(stop: &Stop, decimals: Option<usize>) -> String {
    match decimals {
        Some(d) => format!("{:.d$},{:.d$}", stop.latitude, stop.longitude),
        None => format!("{},{}", stop.latitude, stop.longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::TravelMode;

    fn riyadh_stops() -> Vec<Stop> {
        vec![
            Stop::new(101, 24.7136, 46.6753),
            Stop::new(102, 24.7743, 46.7386),
            Stop::new(103, 24.7890, 46.6420),
            Stop::new(104, 24.6761, 46.6856),
            Stop::new(105, 24.7749, 46.7386),
        ]
    }

    fn generated_stops(n: usize) -> Vec<Stop> {
        (0..n)
            .map(|i| Stop::new(i as i64, 24.0 + i as f64 * 0.01, 46.0))
            .collect()
    }

    fn query_value(url: &str, key: &str) -> Option<String> {
        let parsed = Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn four_decimals() -> MapsLinkConfig {
        MapsLinkConfig {
            coordinate_decimals: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn test_riyadh_route() {
        let link = build_navigation_link(&riyadh_stops(), &four_decimals()).unwrap();
        assert!(link.url.starts_with("https://www.google.com/maps/dir/?api=1&"));
        assert!(link.url.contains("origin=24.7136%2C46.6753"));
        assert!(link.url.contains("destination=24.7749%2C46.7386"));
        assert!(link
            .url
            .contains("waypoints=24.7743%2C46.7386%7C24.7890%2C46.6420%7C24.6761%2C46.6856"));
        assert!(link.url.contains("travelmode=driving"));

        let roles: Vec<StopRole> = link.stops.iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                StopRole::Start,
                StopRole::Stop,
                StopRole::Stop,
                StopRole::Stop,
                StopRole::End
            ]
        );
        let customers: Vec<i64> = link.stops.iter().map(|s| s.customer_id.0).collect();
        assert_eq!(customers, vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_exact_url_layout() {
        let stops = vec![Stop::new(1, 24.5, 46.25), Stop::new(2, -33.875, 151.5)];
        let link = build_navigation_link(&stops, &MapsLinkConfig::default()).unwrap();
        assert_eq!(
            link.url,
            "https://www.google.com/maps/dir/?api=1&origin=24.5%2C46.25&destination=-33.875%2C151.5&travelmode=driving"
        );
    }

    #[test]
    fn test_shortest_representation_by_default() {
        let link = build_navigation_link(&riyadh_stops(), &MapsLinkConfig::default()).unwrap();
        let waypoints = query_value(&link.url, "waypoints").unwrap();
        assert_eq!(waypoints, "24.7743,46.7386|24.789,46.642|24.6761,46.6856");
    }

    #[test]
    fn test_deterministic() {
        let config = four_decimals();
        let first = build_navigation_link(&riyadh_stops(), &config).unwrap();
        let second = build_navigation_link(&riyadh_stops(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_waypoint_count_is_n_minus_two() {
        for n in 3..=MAX_STOPS {
            let link = build_navigation_link(&generated_stops(n), &MapsLinkConfig::default())
                .unwrap();
            let waypoints = query_value(&link.url, "waypoints").unwrap();
            assert_eq!(waypoints.split('|').count(), n - 2, "route of {n} stops");
            assert_eq!(link.stops.len(), n);
        }
    }

    #[test]
    fn test_two_stops_omit_waypoints() {
        let link =
            build_navigation_link(&generated_stops(2), &MapsLinkConfig::default()).unwrap();
        assert!(query_value(&link.url, "waypoints").is_none());
        assert!(!link.url.contains("waypoints"));
        assert_eq!(link.stops[0].role, StopRole::Start);
        assert_eq!(link.stops[1].role, StopRole::End);
    }

    #[test]
    fn test_too_few_stops() {
        let config = MapsLinkConfig::default();
        assert_eq!(
            build_navigation_link(&[], &config),
            Err(LinkError::InsufficientStops { count: 0 })
        );
        assert_eq!(
            build_navigation_link(&generated_stops(1), &config),
            Err(LinkError::InsufficientStops { count: 1 })
        );
    }

    #[test]
    fn test_stop_limit() {
        let config = MapsLinkConfig::default();
        assert!(build_navigation_link(&generated_stops(25), &config).is_ok());
        assert_eq!(
            build_navigation_link(&generated_stops(26), &config),
            Err(LinkError::TooManyStops { count: 26 })
        );
    }

    #[test]
    fn test_travel_mode_and_base_url() {
        let config = MapsLinkConfig {
            base_url: String::from("https://maps.example.com/maps/dir/"),
            travel_mode: TravelMode::Walking,
            coordinate_decimals: None,
        };
        let link = build_navigation_link(&generated_stops(2), &config).unwrap();
        assert!(link.url.starts_with("https://maps.example.com/maps/dir/?"));
        assert_eq!(query_value(&link.url, "travelmode").as_deref(), Some("walking"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = MapsLinkConfig {
            base_url: String::from("not a url"),
            ..Default::default()
        };
        let result = build_navigation_link(&generated_stops(2), &config);
        assert!(matches!(result, Err(LinkError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_format_point_fixed_decimals() {
        let stop = Stop::new(1, 24.789, -46.642);
        assert_eq!(format_point(&stop, Some(4)), "24.7890,-46.6420");
        assert_eq!(format_point(&stop, Some(6)), "24.789000,-46.642000");
        assert_eq!(format_point(&stop, None), "24.789,-46.642");
    }
}
