//! # Moist-Air State Records & Parameter-Pair Dispatch
//!
//! [`AirState`] is the central record: eight properties, each present or
//! absent. [`derive_from_pair`] takes two given parameters plus the
//! barometric pressure and routes them through the derivation path for
//! that pair; every supported path funnels into one terminal closed-form
//! step once dry bulb and humidity ratio are known.
//!
//! The dispatcher is a stateless pure function. It never fails loudly:
//! an unsupported pair, an out-of-range pressure, or a physically
//! invalid input returns the given values unchanged, with the derived
//! fields absent: "not enough valid information", for the caller to
//! detect.
//!
//! ## Example
//!
//! ```rust
//! use air_core::psychrometrics::{derive_from_pair, AirParameter};
//!
//! // Dew point and enthalpy alone cannot pin down a state
//! let partial = derive_from_pair(
//!     AirParameter::DewPoint,
//!     12.0,
//!     AirParameter::Enthalpy,
//!     48.0,
//!     101.325,
//! );
//! assert!(!partial.is_resolved());
//! assert_eq!(partial.dew_point_c, Some(12.0));
//! assert_eq!(partial.dry_bulb_c, None);
//! ```

use serde::{Deserialize, Serialize};

use super::properties::{
    enthalpy_kj_per_kg, humidity_ratio_from_enthalpy, humidity_ratio_from_vapor_pressure,
    saturation_humidity_ratio, specific_volume_m3_per_kg, vapor_pressure_from_humidity_ratio,
    wet_bulb_humidity_ratio,
};
use super::saturation::{dew_point_c, saturation_pressure_kpa};
use super::solver;

/// Slack on the 100% relative-humidity ceiling, absorbing round-trip
/// noise at exact saturation before the value is clamped back to 100
const RH_CEILING_SLACK: f64 = 1e-6;

/// The eight moist-air state parameters.
///
/// Any one state is pinned down by two of these (a supported pair) plus
/// the barometric pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirParameter {
    /// Ordinary air temperature (°C)
    DryBulb,
    /// Relative humidity (%, 0-100)
    RelativeHumidity,
    /// Wet-bulb temperature (°C)
    WetBulb,
    /// Dew-point temperature (°C)
    DewPoint,
    /// kg water vapor per kg dry air
    HumidityRatio,
    /// Specific enthalpy (kJ/kg dry air)
    Enthalpy,
    /// Specific volume (m³/kg dry air)
    SpecificVolume,
    /// Water vapor partial pressure (kPa)
    VaporPressure,
}

impl AirParameter {
    pub const ALL: [AirParameter; 8] = [
        AirParameter::DryBulb,
        AirParameter::RelativeHumidity,
        AirParameter::WetBulb,
        AirParameter::DewPoint,
        AirParameter::HumidityRatio,
        AirParameter::Enthalpy,
        AirParameter::SpecificVolume,
        AirParameter::VaporPressure,
    ];

    /// Human-readable name with units
    pub fn display_name(&self) -> &'static str {
        match self {
            AirParameter::DryBulb => "Dry-bulb temperature (°C)",
            AirParameter::RelativeHumidity => "Relative humidity (%)",
            AirParameter::WetBulb => "Wet-bulb temperature (°C)",
            AirParameter::DewPoint => "Dew-point temperature (°C)",
            AirParameter::HumidityRatio => "Humidity ratio (kg/kg)",
            AirParameter::Enthalpy => "Enthalpy (kJ/kg)",
            AirParameter::SpecificVolume => "Specific volume (m³/kg)",
            AirParameter::VaporPressure => "Vapor pressure (kPa)",
        }
    }
}

impl std::fmt::Display for AirParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A moist-air state record. Fields that have not been derived (or were
/// never given) are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirState {
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: Option<f64>,

    /// Relative humidity (%, 0-100)
    pub relative_humidity_pct: Option<f64>,

    /// Wet-bulb temperature (°C), never above the dry bulb
    pub wet_bulb_c: Option<f64>,

    /// Dew-point temperature (°C), never above the dry bulb
    pub dew_point_c: Option<f64>,

    /// Humidity ratio (kg water / kg dry air)
    pub humidity_ratio: Option<f64>,

    /// Specific enthalpy (kJ/kg dry air)
    pub enthalpy_kj_per_kg: Option<f64>,

    /// Specific volume (m³/kg dry air)
    pub specific_volume_m3_per_kg: Option<f64>,

    /// Water vapor partial pressure (kPa)
    pub vapor_pressure_kpa: Option<f64>,
}

impl AirState {
    /// Build a partial record holding just the two given parameters.
    pub fn from_pair(
        first: AirParameter,
        first_value: f64,
        second: AirParameter,
        second_value: f64,
    ) -> Self {
        let mut state = AirState::default();
        state.set(first, first_value);
        state.set(second, second_value);
        state
    }

    /// Read one parameter by tag.
    pub fn get(&self, parameter: AirParameter) -> Option<f64> {
        match parameter {
            AirParameter::DryBulb => self.dry_bulb_c,
            AirParameter::RelativeHumidity => self.relative_humidity_pct,
            AirParameter::WetBulb => self.wet_bulb_c,
            AirParameter::DewPoint => self.dew_point_c,
            AirParameter::HumidityRatio => self.humidity_ratio,
            AirParameter::Enthalpy => self.enthalpy_kj_per_kg,
            AirParameter::SpecificVolume => self.specific_volume_m3_per_kg,
            AirParameter::VaporPressure => self.vapor_pressure_kpa,
        }
    }

    fn set(&mut self, parameter: AirParameter, value: f64) {
        match parameter {
            AirParameter::DryBulb => self.dry_bulb_c = Some(value),
            AirParameter::RelativeHumidity => self.relative_humidity_pct = Some(value),
            AirParameter::WetBulb => self.wet_bulb_c = Some(value),
            AirParameter::DewPoint => self.dew_point_c = Some(value),
            AirParameter::HumidityRatio => self.humidity_ratio = Some(value),
            AirParameter::Enthalpy => self.enthalpy_kj_per_kg = Some(value),
            AirParameter::SpecificVolume => self.specific_volume_m3_per_kg = Some(value),
            AirParameter::VaporPressure => self.vapor_pressure_kpa = Some(value),
        }
    }

    /// True when every property is present.
    pub fn is_resolved(&self) -> bool {
        self.dry_bulb_c.is_some()
            && self.relative_humidity_pct.is_some()
            && self.wet_bulb_c.is_some()
            && self.dew_point_c.is_some()
            && self.humidity_ratio.is_some()
            && self.enthalpy_kj_per_kg.is_some()
            && self.specific_volume_m3_per_kg.is_some()
            && self.vapor_pressure_kpa.is_some()
    }
}

/// Derivation strategy for a supported parameter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Derivation {
    DryBulbRelativeHumidity,
    DryBulbWetBulb,
    DryBulbDewPoint,
    DryBulbHumidityRatio,
    DryBulbEnthalpy,
    RelativeHumidityWetBulb,
}

/// The fixed table of supported pairs. The first parameter of each row
/// is the one the strategy treats as its leading value; dispatch itself
/// is order-insensitive.
const SUPPORTED_PAIRS: [(AirParameter, AirParameter, Derivation); 6] = [
    (
        AirParameter::DryBulb,
        AirParameter::RelativeHumidity,
        Derivation::DryBulbRelativeHumidity,
    ),
    (
        AirParameter::DryBulb,
        AirParameter::WetBulb,
        Derivation::DryBulbWetBulb,
    ),
    (
        AirParameter::DryBulb,
        AirParameter::DewPoint,
        Derivation::DryBulbDewPoint,
    ),
    (
        AirParameter::DryBulb,
        AirParameter::HumidityRatio,
        Derivation::DryBulbHumidityRatio,
    ),
    (
        AirParameter::DryBulb,
        AirParameter::Enthalpy,
        Derivation::DryBulbEnthalpy,
    ),
    (
        AirParameter::RelativeHumidity,
        AirParameter::WetBulb,
        Derivation::RelativeHumidityWetBulb,
    ),
];

fn derivation_for(
    first: AirParameter,
    second: AirParameter,
) -> Option<(Derivation, bool)> {
    SUPPORTED_PAIRS.iter().find_map(|&(a, b, derivation)| {
        if (first, second) == (a, b) {
            Some((derivation, false))
        } else if (first, second) == (b, a) {
            Some((derivation, true))
        } else {
            None
        }
    })
}

/// Whether a derivation path exists for the two given parameters, in
/// either order.
pub fn is_supported_pair(first: AirParameter, second: AirParameter) -> bool {
    derivation_for(first, second).is_some()
}

/// Derive a complete moist-air state from two given parameters and the
/// barometric pressure (kPa).
///
/// Returns the fully populated record on success. Unsupported pairs and
/// physically invalid inputs (relative humidity outside 0-100, wet bulb
/// or dew point above the dry bulb, negative humidity ratio, vapor
/// pressure at or above the total pressure, non-positive pressure)
/// return the partial record holding only the given values, never an
/// error, never a fabricated state.
///
/// Dispatch is commutative: swapping the two parameters produces an
/// identical record.
pub fn derive_from_pair(
    first: AirParameter,
    first_value: f64,
    second: AirParameter,
    second_value: f64,
    pressure_kpa: f64,
) -> AirState {
    let given = AirState::from_pair(first, first_value, second, second_value);

    if !pressure_kpa.is_finite() || pressure_kpa <= 0.0 {
        return given;
    }
    if !first_value.is_finite() || !second_value.is_finite() {
        return given;
    }
    let Some((derivation, swapped)) = derivation_for(first, second) else {
        return given;
    };
    let (lead, trail) = if swapped {
        (second_value, first_value)
    } else {
        (first_value, second_value)
    };

    run_derivation(derivation, lead, trail, pressure_kpa).unwrap_or(given)
}

fn run_derivation(
    derivation: Derivation,
    lead: f64,
    trail: f64,
    pressure_kpa: f64,
) -> Option<AirState> {
    match derivation {
        Derivation::DryBulbRelativeHumidity => {
            let (dry_bulb, rh) = (lead, trail);
            if !(0.0..=100.0).contains(&rh) {
                return None;
            }
            let vapor_pressure = rh / 100.0 * saturation_pressure_kpa(dry_bulb);
            let w = humidity_ratio_from_vapor_pressure(vapor_pressure, pressure_kpa)?;
            resolve(dry_bulb, w, pressure_kpa)
        }
        Derivation::DryBulbWetBulb => {
            let (dry_bulb, wet_bulb) = (lead, trail);
            if wet_bulb > dry_bulb {
                return None;
            }
            // The humidity ratio the wet-bulb solver would converge to is
            // the energy balance evaluated at the given wet bulb
            let w = wet_bulb_humidity_ratio(dry_bulb, wet_bulb, pressure_kpa)?.max(0.0);
            resolve(dry_bulb, w, pressure_kpa)
        }
        Derivation::DryBulbDewPoint => {
            let (dry_bulb, dew_point) = (lead, trail);
            if dew_point > dry_bulb {
                return None;
            }
            let vapor_pressure = saturation_pressure_kpa(dew_point);
            let w = humidity_ratio_from_vapor_pressure(vapor_pressure, pressure_kpa)?;
            resolve(dry_bulb, w, pressure_kpa)
        }
        Derivation::DryBulbHumidityRatio => {
            let (dry_bulb, w) = (lead, trail);
            if w < 0.0 {
                return None;
            }
            resolve(dry_bulb, w, pressure_kpa)
        }
        Derivation::DryBulbEnthalpy => {
            let (dry_bulb, enthalpy) = (lead, trail);
            let ws = saturation_humidity_ratio(dry_bulb, pressure_kpa)?;
            let w = humidity_ratio_from_enthalpy(dry_bulb, enthalpy).clamp(0.0, ws);
            resolve(dry_bulb, w, pressure_kpa)
        }
        Derivation::RelativeHumidityWetBulb => {
            let (rh, wet_bulb) = (lead, trail);
            if !(0.0..=100.0).contains(&rh) {
                return None;
            }
            let dry_bulb = solver::dry_bulb_from_rh_and_wet_bulb(rh, wet_bulb, pressure_kpa);
            let vapor_pressure = rh / 100.0 * saturation_pressure_kpa(dry_bulb);
            let w = humidity_ratio_from_vapor_pressure(vapor_pressure, pressure_kpa)?;
            resolve(dry_bulb, w, pressure_kpa)
        }
    }
}

/// Terminal closed-form step: expand a (dry bulb, humidity ratio) pair
/// into the full record. `None` when the pair is supersaturated or the
/// dew point is undefined (zero vapor pressure).
fn resolve(dry_bulb_c: f64, humidity_ratio: f64, pressure_kpa: f64) -> Option<AirState> {
    if !humidity_ratio.is_finite() || humidity_ratio < 0.0 {
        return None;
    }

    let vapor_pressure = vapor_pressure_from_humidity_ratio(humidity_ratio, pressure_kpa);
    let saturation = saturation_pressure_kpa(dry_bulb_c);
    let relative_humidity = 100.0 * vapor_pressure / saturation;
    if relative_humidity > 100.0 + RH_CEILING_SLACK {
        return None;
    }

    let dew_point = dew_point_c(vapor_pressure)?.min(dry_bulb_c);
    let wet_bulb = solver::wet_bulb_c(dry_bulb_c, humidity_ratio, pressure_kpa);

    Some(AirState {
        dry_bulb_c: Some(dry_bulb_c),
        relative_humidity_pct: Some(relative_humidity.min(100.0)),
        wet_bulb_c: Some(wet_bulb),
        dew_point_c: Some(dew_point),
        humidity_ratio: Some(humidity_ratio),
        enthalpy_kj_per_kg: Some(enthalpy_kj_per_kg(dry_bulb_c, humidity_ratio)),
        specific_volume_m3_per_kg: Some(specific_volume_m3_per_kg(
            dry_bulb_c,
            humidity_ratio,
            pressure_kpa,
        )),
        vapor_pressure_kpa: Some(vapor_pressure),
    })
}
