//! # Standard Atmosphere
//!
//! Barometric pressure from site altitude, per the ASHRAE standard
//! atmosphere. Pressure is the one shared input every moist-air
//! derivation depends on; it is captured in an [`AtmosphericContext`]
//! snapshot and passed by value into each calculation, so a batch of
//! recalculations always sees one consistent pressure.
//!
//! ## Example
//!
//! ```rust
//! use air_core::atmosphere::{pressure_from_altitude_kpa, AtmosphericContext};
//!
//! let sea_level = pressure_from_altitude_kpa(0.0);
//! assert!((sea_level - 101.325).abs() < 1e-9);
//!
//! let denver = AtmosphericContext::at_altitude(1609.0);
//! assert!(denver.pressure_kpa.0 < sea_level);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{KiloPascals, Metres};

/// Standard sea-level pressure (kPa)
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.325;

/// Compute barometric pressure (kPa) at a given altitude (m).
///
/// ASHRAE standard atmosphere: `p = 101.325 (1 - 2.25577e-5 Z)^5.2559`,
/// valid from -500 m to 11 000 m geometric altitude. Strictly decreasing
/// in altitude over that range.
pub fn pressure_from_altitude_kpa(altitude_m: f64) -> f64 {
    SEA_LEVEL_PRESSURE_KPA * (1.0 - 2.25577e-5 * altitude_m).powf(5.2559)
}

/// Immutable snapshot of the site atmosphere.
///
/// Holds the altitude and the pressure derived from it. Derivations take
/// the pressure value, never the altitude, so recomputing the snapshot is
/// the single place the barometric formula runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericContext {
    /// Site altitude above sea level
    pub altitude_m: Metres,

    /// Barometric pressure derived from the altitude
    pub pressure_kpa: KiloPascals,
}

impl AtmosphericContext {
    /// Build a snapshot for the given altitude (m).
    pub fn at_altitude(altitude_m: f64) -> Self {
        AtmosphericContext {
            altitude_m: Metres(altitude_m),
            pressure_kpa: KiloPascals(pressure_from_altitude_kpa(altitude_m)),
        }
    }

    /// Sea-level snapshot (101.325 kPa).
    pub fn sea_level() -> Self {
        AtmosphericContext::at_altitude(0.0)
    }
}

impl Default for AtmosphericContext {
    fn default() -> Self {
        AtmosphericContext::sea_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sea_level_pressure() {
        assert!((pressure_from_altitude_kpa(0.0) - 101.325).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_decreases_with_altitude() {
        let mut previous = pressure_from_altitude_kpa(0.0);
        for altitude in (250..=5000).step_by(250) {
            let p = pressure_from_altitude_kpa(altitude as f64);
            assert!(
                p < previous,
                "pressure should decrease: {} kPa at {} m",
                p,
                altitude
            );
            previous = p;
        }
    }

    #[test]
    fn test_known_altitudes() {
        // ~1500 m: about 84.6 kPa per the standard atmosphere tables
        let p_1500 = pressure_from_altitude_kpa(1500.0);
        assert!((p_1500 - 84.56).abs() < 0.2);

        // ~3000 m: about 70.1 kPa
        let p_3000 = pressure_from_altitude_kpa(3000.0);
        assert!((p_3000 - 70.11).abs() < 0.3);
    }

    #[test]
    fn test_context_snapshot() {
        let ctx = AtmosphericContext::at_altitude(1000.0);
        assert_eq!(ctx.altitude_m.0, 1000.0);
        assert!(ctx.pressure_kpa.0 < 101.325);
        assert!(ctx.pressure_kpa.0 > 85.0);
    }

    #[test]
    fn test_context_serialization() {
        let ctx = AtmosphericContext::default();
        let json = serde_json::to_string(&ctx).unwrap();
        let roundtrip: AtmosphericContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, roundtrip);
    }
}
