pub mod geo;

pub use geo::{haversine_distance_nm, initial_bearing_deg, EARTH_RADIUS_NM};
