//! Beaufort wind force classification.

use serde::Serialize;

/// A wind strength classified on the Beaufort scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeaufortForce {
    /// Force number, 0 through 12
    pub force: u8,
    /// Conventional name of the force band
    pub description: &'static str,
}

/// Ascending upper bounds in knots with the matching force names. A wind
/// speed below bound `i` classifies as force `i - 1` (floor 0); at or above
/// the last bound it is force 12. This keeps the bands the logbook has always
/// shown: force 0 runs up to 4 kn, force 1 starts at 4 kn.
const BEAUFORT_SCALE: [(f64, &str); 12] = [
    (1.0, "Calm"),
    (4.0, "Light air"),
    (7.0, "Light breeze"),
    (11.0, "Gentle breeze"),
    (17.0, "Moderate breeze"),
    (22.0, "Fresh breeze"),
    (28.0, "Strong breeze"),
    (34.0, "Near gale"),
    (41.0, "Gale"),
    (48.0, "Strong gale"),
    (56.0, "Storm"),
    (64.0, "Violent storm"),
];

/// Classify a wind speed in knots on the Beaufort scale.
///
/// Monotonic step function; band boundaries are inclusive below and exclusive
/// above. Input is not validated: a negative speed classifies as force 0 and
/// NaN falls through to force 12, consistent with the crate-wide
/// garbage-in/garbage-out policy.
pub fn beaufort_force(wind_speed_knots: f64) -> BeaufortForce {
    for (idx, (upper_bound, _)) in BEAUFORT_SCALE.iter().enumerate() {
        if wind_speed_knots < *upper_bound {
            let force = idx.saturating_sub(1);
            return BeaufortForce {
                force: force as u8,
                description: BEAUFORT_SCALE[force].1,
            };
        }
    }
    BeaufortForce {
        force: 12,
        description: "Hurricane force",
    }
}
