pub mod error;
pub mod geo;
pub mod normalize;
pub mod states;

pub use error::GeoError;
pub use geo::{
    closest_origin_distance, distance_km, temperature_of, Coordinate, TemperatureTier,
};
pub use normalize::{is_match, normalize, resolve_state};
pub use states::{coordinate_of, StateName};
