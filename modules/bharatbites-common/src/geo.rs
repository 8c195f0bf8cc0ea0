use serde::{Deserialize, Serialize};

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Discrete proximity classification, hottest to coldest.
///
/// The derived ordering follows distance: a farther guess never sorts
/// hotter than a nearer one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureTier {
    Boiling,
    Hot,
    Warm,
    Cold,
    Freezing,
}

impl TemperatureTier {
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureTier::Boiling => "Boiling!",
            TemperatureTier::Hot => "Hot",
            TemperatureTier::Warm => "Warm",
            TemperatureTier::Cold => "Cold",
            TemperatureTier::Freezing => "Freezing",
        }
    }

    /// Display color for this tier. Opaque to the engine; UI layers pass
    /// it straight through.
    pub fn color(&self) -> &'static str {
        match self {
            TemperatureTier::Boiling => "text-red-600",
            TemperatureTier::Hot => "text-orange-600",
            TemperatureTier::Warm => "text-amber-500",
            TemperatureTier::Cold => "text-sky-500",
            TemperatureTier::Freezing => "text-blue-700",
        }
    }
}

impl std::fmt::Display for TemperatureTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tier boundaries in kilometers. Non-overlapping, covering [0, ∞).
pub const BOILING_MAX_KM: f64 = 50.0;
pub const HOT_MAX_KM: f64 = 300.0;
pub const WARM_MAX_KM: f64 = 700.0;
pub const COLD_MAX_KM: f64 = 1200.0;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Distance from a guess to the nearest of a dish's origin coordinates.
///
/// Dishes are validated to carry at least one origin at load time, so an
/// empty slice here is a programming error.
pub fn closest_origin_distance(guess: Coordinate, origins: &[Coordinate]) -> f64 {
    assert!(!origins.is_empty(), "dish must have at least one origin");
    origins
        .iter()
        .map(|origin| distance_km(guess, *origin))
        .fold(f64::INFINITY, f64::min)
}

/// Classify a distance into its temperature tier. Ordered range lookup
/// over the fixed boundaries above.
pub fn temperature_of(distance_km: f64) -> TemperatureTier {
    if distance_km < BOILING_MAX_KM {
        TemperatureTier::Boiling
    } else if distance_km < HOT_MAX_KM {
        TemperatureTier::Hot
    } else if distance_km < WARM_MAX_KM {
        TemperatureTier::Warm
    } else if distance_km < COLD_MAX_KM {
        TemperatureTier::Cold
    } else {
        TemperatureTier::Freezing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::StateName;

    #[test]
    fn haversine_delhi_to_mumbai() {
        // Delhi to Mumbai is ~1150km
        let dist = distance_km(
            StateName::Delhi.centroid(),
            Coordinate {
                lat: 19.0760,
                lng: 72.8777,
            },
        );
        assert!(
            (dist - 1150.0).abs() < 30.0,
            "Delhi to Mumbai should be ~1150km, got {dist}"
        );
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = StateName::Kerala.centroid();
        let b = StateName::Punjab.centroid();
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let p = StateName::Goa.centroid();
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn closest_origin_picks_the_minimum() {
        let guess = StateName::Haryana.centroid();
        let origins = [
            StateName::Kerala.centroid(),
            StateName::Punjab.centroid(),
        ];
        let dist = closest_origin_distance(guess, &origins);
        assert!(
            (dist - distance_km(guess, origins[1])).abs() < 1e-9,
            "Punjab is far closer to Haryana than Kerala is"
        );
    }

    #[test]
    fn temperature_is_monotonic_in_distance() {
        let samples = [0.0, 10.0, 49.9, 50.0, 299.0, 400.0, 699.0, 1199.0, 1200.0, 3000.0];
        let mut last = TemperatureTier::Boiling;
        for d in samples {
            let tier = temperature_of(d);
            assert!(tier >= last, "{d}km classified hotter than a shorter distance");
            last = tier;
        }
    }

    #[test]
    fn zero_distance_is_boiling() {
        assert_eq!(temperature_of(0.0), TemperatureTier::Boiling);
    }

    #[test]
    fn cross_subcontinent_is_freezing() {
        let dist = distance_km(
            StateName::JammuAndKashmir.centroid(),
            StateName::TamilNadu.centroid(),
        );
        assert_eq!(temperature_of(dist), TemperatureTier::Freezing);
    }
}
