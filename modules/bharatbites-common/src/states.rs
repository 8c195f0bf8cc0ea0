//! The canonical state list and its geo-reference table.
//!
//! `StateName` is the authoritative identity for origins, guesses, and map
//! matching. Keeping it a fieldless enum makes the centroid table total by
//! construction: every canonical name resolves to a coordinate or the crate
//! does not compile.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::Coordinate;
use crate::normalize::resolve_state;

/// One of India's 28 states or 8 union territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StateName {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
    AndamanAndNicobarIslands,
    Chandigarh,
    DadraAndNagarHaveliAndDamanAndDiu,
    Delhi,
    JammuAndKashmir,
    Ladakh,
    Lakshadweep,
    Puducherry,
}

impl StateName {
    /// Every canonical state and union territory, in display order.
    /// Feeds guess-input autocomplete.
    pub const ALL: [StateName; 36] = [
        StateName::AndhraPradesh,
        StateName::ArunachalPradesh,
        StateName::Assam,
        StateName::Bihar,
        StateName::Chhattisgarh,
        StateName::Goa,
        StateName::Gujarat,
        StateName::Haryana,
        StateName::HimachalPradesh,
        StateName::Jharkhand,
        StateName::Karnataka,
        StateName::Kerala,
        StateName::MadhyaPradesh,
        StateName::Maharashtra,
        StateName::Manipur,
        StateName::Meghalaya,
        StateName::Mizoram,
        StateName::Nagaland,
        StateName::Odisha,
        StateName::Punjab,
        StateName::Rajasthan,
        StateName::Sikkim,
        StateName::TamilNadu,
        StateName::Telangana,
        StateName::Tripura,
        StateName::UttarPradesh,
        StateName::Uttarakhand,
        StateName::WestBengal,
        StateName::AndamanAndNicobarIslands,
        StateName::Chandigarh,
        StateName::DadraAndNagarHaveliAndDamanAndDiu,
        StateName::Delhi,
        StateName::JammuAndKashmir,
        StateName::Ladakh,
        StateName::Lakshadweep,
        StateName::Puducherry,
    ];

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateName::AndhraPradesh => "Andhra Pradesh",
            StateName::ArunachalPradesh => "Arunachal Pradesh",
            StateName::Assam => "Assam",
            StateName::Bihar => "Bihar",
            StateName::Chhattisgarh => "Chhattisgarh",
            StateName::Goa => "Goa",
            StateName::Gujarat => "Gujarat",
            StateName::Haryana => "Haryana",
            StateName::HimachalPradesh => "Himachal Pradesh",
            StateName::Jharkhand => "Jharkhand",
            StateName::Karnataka => "Karnataka",
            StateName::Kerala => "Kerala",
            StateName::MadhyaPradesh => "Madhya Pradesh",
            StateName::Maharashtra => "Maharashtra",
            StateName::Manipur => "Manipur",
            StateName::Meghalaya => "Meghalaya",
            StateName::Mizoram => "Mizoram",
            StateName::Nagaland => "Nagaland",
            StateName::Odisha => "Odisha",
            StateName::Punjab => "Punjab",
            StateName::Rajasthan => "Rajasthan",
            StateName::Sikkim => "Sikkim",
            StateName::TamilNadu => "Tamil Nadu",
            StateName::Telangana => "Telangana",
            StateName::Tripura => "Tripura",
            StateName::UttarPradesh => "Uttar Pradesh",
            StateName::Uttarakhand => "Uttarakhand",
            StateName::WestBengal => "West Bengal",
            StateName::AndamanAndNicobarIslands => "Andaman and Nicobar Islands",
            StateName::Chandigarh => "Chandigarh",
            StateName::DadraAndNagarHaveliAndDamanAndDiu => {
                "Dadra and Nagar Haveli and Daman and Diu"
            }
            StateName::Delhi => "Delhi",
            StateName::JammuAndKashmir => "Jammu and Kashmir",
            StateName::Ladakh => "Ladakh",
            StateName::Lakshadweep => "Lakshadweep",
            StateName::Puducherry => "Puducherry",
        }
    }

    /// Centroid of the state, used for all distance scoring.
    pub fn centroid(&self) -> Coordinate {
        let (lat, lng) = match self {
            StateName::AndhraPradesh => (15.9129, 79.7400),
            StateName::ArunachalPradesh => (28.2180, 94.7278),
            StateName::Assam => (26.2006, 92.9376),
            StateName::Bihar => (25.0961, 85.3131),
            StateName::Chhattisgarh => (21.2787, 81.8661),
            StateName::Goa => (15.2993, 74.1240),
            StateName::Gujarat => (22.2587, 71.1924),
            StateName::Haryana => (29.0588, 76.0856),
            StateName::HimachalPradesh => (31.9042, 77.1734),
            StateName::Jharkhand => (23.6102, 85.2799),
            StateName::Karnataka => (15.3173, 75.7139),
            StateName::Kerala => (10.8505, 76.2711),
            StateName::MadhyaPradesh => (22.9734, 78.6569),
            StateName::Maharashtra => (19.7515, 75.7139),
            StateName::Manipur => (24.6637, 93.9063),
            StateName::Meghalaya => (25.4670, 91.3662),
            StateName::Mizoram => (23.1645, 92.9376),
            StateName::Nagaland => (26.1584, 94.5624),
            StateName::Odisha => (20.9517, 85.0985),
            StateName::Punjab => (31.1471, 75.3412),
            StateName::Rajasthan => (27.0238, 74.2179),
            StateName::Sikkim => (27.5330, 88.5122),
            StateName::TamilNadu => (11.1271, 78.6569),
            StateName::Telangana => (18.1124, 79.0193),
            StateName::Tripura => (23.9408, 91.9882),
            StateName::UttarPradesh => (26.8467, 80.9462),
            StateName::Uttarakhand => (30.0668, 79.0193),
            StateName::WestBengal => (22.9868, 87.8550),
            StateName::AndamanAndNicobarIslands => (11.7401, 92.6586),
            StateName::Chandigarh => (30.7333, 76.7794),
            StateName::DadraAndNagarHaveliAndDamanAndDiu => (20.1809, 73.0169),
            StateName::Delhi => (28.7041, 77.1025),
            StateName::JammuAndKashmir => (33.7782, 76.5762),
            StateName::Ladakh => (34.2268, 77.5619),
            StateName::Lakshadweep => (10.5667, 72.6417),
            StateName::Puducherry => (11.9416, 79.8083),
        };
        Coordinate { lat, lng }
    }
}

impl std::fmt::Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<StateName> for String {
    fn from(state: StateName) -> Self {
        state.as_str().to_string()
    }
}

impl TryFrom<String> for StateName {
    type Error = GeoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        resolve_state(&value).ok_or(GeoError::UnknownState(value))
    }
}

/// String-keyed front door to the centroid table for consumers that start
/// from free-form names (the map renderer's boundary dataset). The typed
/// path goes through [`StateName::centroid`] and cannot fail.
pub fn coordinate_of(name: &str) -> Result<Coordinate, GeoError> {
    resolve_state(name)
        .map(|state| state.centroid())
        .ok_or_else(|| GeoError::UnknownState(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_centroid_lies_within_india() {
        for state in StateName::ALL {
            let c = state.centroid();
            assert!(
                (6.0..=37.0).contains(&c.lat) && (68.0..=98.0).contains(&c.lng),
                "{state} centroid {c:?} outside India's bounding box"
            );
        }
    }

    #[test]
    fn coordinate_of_accepts_canonical_names() {
        for state in StateName::ALL {
            let c = coordinate_of(state.as_str()).unwrap();
            assert_eq!(c, state.centroid());
        }
    }

    #[test]
    fn coordinate_of_rejects_garbage() {
        assert!(matches!(
            coordinate_of("Atlantis"),
            Err(GeoError::UnknownState(_))
        ));
    }

    #[test]
    fn serde_round_trips_through_display_names() {
        let json = serde_json::to_string(&StateName::TamilNadu).unwrap();
        assert_eq!(json, "\"Tamil Nadu\"");
        let back: StateName = serde_json::from_str("\"Orissa\"").unwrap();
        assert_eq!(back, StateName::Odisha);
    }
}
