//! # Moist-Air State Point Calculation
//!
//! Resolves a complete moist-air state from two given parameters plus
//! the site barometric pressure, via the psychrometric engine.
//!
//! ## Assumptions
//!
//! - SI units throughout (ASHRAE Fundamentals 2017 Ch. 1 correlations)
//! - Humidity ratio is entered in kg/kg and reported in g/kg
//! - Iterative derivations are bounded and return their best estimate
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use air_core::calculations::moist_air::{calculate, MoistAirInput};
//! use air_core::psychrometrics::AirParameter;
//!
//! let input = MoistAirInput::new(
//!     "AHU-1 supply",
//!     AirParameter::DryBulb,
//!     25.0,
//!     AirParameter::RelativeHumidity,
//!     50.0,
//! );
//!
//! let result = calculate(&input, 101.325).unwrap();
//!
//! println!("Wet bulb: {:.1} °C", result.wet_bulb_c);
//! println!("Humidity ratio: {:.1} g/kg", result.humidity_ratio_g_per_kg);
//! println!("Enthalpy: {:.1} kJ/kg", result.enthalpy_kj_per_kg);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::psychrometrics::{derive_from_pair, is_supported_pair, AirParameter, AirState};
use crate::units::{GramsPerKg, KgPerKg};

/// Input parameters for a moist-air state point.
///
/// Exactly two independent parameters are given; the engine derives the
/// rest. Which pairs are derivable is fixed by the dispatch table; see
/// [`is_supported_pair`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "AHU-1 supply",
///   "first_parameter": "DryBulb",
///   "first_value": 25.0,
///   "second_parameter": "RelativeHumidity",
///   "second_value": 50.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoistAirInput {
    /// User label for this state point (e.g., "AHU-1 supply", "Outdoor air")
    pub label: String,

    /// First given parameter kind
    pub first_parameter: AirParameter,

    /// First given value, in the parameter's SI unit
    pub first_value: f64,

    /// Second given parameter kind
    pub second_parameter: AirParameter,

    /// Second given value, in the parameter's SI unit
    pub second_value: f64,
}

impl MoistAirInput {
    /// Convenience constructor.
    pub fn new(
        label: impl Into<String>,
        first_parameter: AirParameter,
        first_value: f64,
        second_parameter: AirParameter,
        second_value: f64,
    ) -> Self {
        MoistAirInput {
            label: label.into(),
            first_parameter,
            first_value,
            second_parameter,
            second_value,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_parameter(self.first_parameter, self.first_value, "first_value")?;
        validate_parameter(self.second_parameter, self.second_value, "second_value")?;

        if self.first_parameter == self.second_parameter {
            return Err(CalcError::invalid_input(
                "second_parameter",
                format!("{:?}", self.second_parameter),
                "The two given parameters must differ",
            ));
        }
        if !is_supported_pair(self.first_parameter, self.second_parameter) {
            return Err(CalcError::unsupported_pair(
                self.first_parameter,
                self.second_parameter,
            ));
        }
        Ok(())
    }
}

/// Per-parameter plausibility bounds. These catch typos and unit
/// mix-ups; physical consistency between the two values is the
/// engine's job.
fn validate_parameter(parameter: AirParameter, value: f64, field: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be finite",
        ));
    }
    let (min, max, reason) = match parameter {
        AirParameter::DryBulb | AirParameter::WetBulb | AirParameter::DewPoint => {
            (-100.0, 200.0, "Temperature outside -100..200 °C")
        }
        AirParameter::RelativeHumidity => (0.0, 100.0, "Relative humidity outside 0..100%"),
        AirParameter::HumidityRatio => (0.0, 0.5, "Humidity ratio outside 0..0.5 kg/kg"),
        AirParameter::Enthalpy => (-150.0, 3000.0, "Enthalpy outside -150..3000 kJ/kg"),
        AirParameter::SpecificVolume => (0.1, 10.0, "Specific volume outside 0.1..10 m³/kg"),
        AirParameter::VaporPressure => (0.0, 200.0, "Vapor pressure outside 0..200 kPa"),
    };
    if value < min || value > max {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

/// Results for a resolved moist-air state point.
///
/// All eight state properties, mutually consistent to within the solver
/// tolerances.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dry_bulb_c": 25.0,
///   "relative_humidity_pct": 50.0,
///   "wet_bulb_c": 17.9,
///   "dew_point_c": 13.9,
///   "humidity_ratio_g_per_kg": 9.9,
///   "enthalpy_kj_per_kg": 50.3,
///   "specific_volume_m3_per_kg": 0.858,
///   "vapor_pressure_kpa": 1.585
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoistAirResult {
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,

    /// Relative humidity (%)
    pub relative_humidity_pct: f64,

    /// Wet-bulb temperature (°C)
    pub wet_bulb_c: f64,

    /// Dew-point temperature (°C)
    pub dew_point_c: f64,

    /// Humidity ratio in display units (g water / kg dry air)
    pub humidity_ratio_g_per_kg: f64,

    /// Specific enthalpy (kJ/kg dry air)
    pub enthalpy_kj_per_kg: f64,

    /// Specific volume (m³/kg dry air)
    pub specific_volume_m3_per_kg: f64,

    /// Water vapor partial pressure (kPa)
    pub vapor_pressure_kpa: f64,
}

impl MoistAirResult {
    /// Humidity ratio in the engine's internal unit (kg/kg dry air).
    pub fn humidity_ratio_kg_per_kg(&self) -> f64 {
        KgPerKg::from(GramsPerKg(self.humidity_ratio_g_per_kg)).value()
    }

    /// Wet-bulb depression, dry bulb minus wet bulb (°C).
    pub fn wet_bulb_depression_c(&self) -> f64 {
        self.dry_bulb_c - self.wet_bulb_c
    }

    /// Whether the state sits on the saturation curve.
    pub fn is_saturated(&self) -> bool {
        self.relative_humidity_pct >= 99.95
    }
}

/// Resolve a moist-air state point.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - The two given parameters, tagged and valued
/// * `pressure_kpa` - Barometric pressure at the site
///
/// # Returns
///
/// * `Ok(MoistAirResult)` - All eight properties, mutually consistent
/// * `Err(CalcError)` - Structured error if the inputs are invalid,
///   the pair is unsupported, or the values are physically inconsistent
///   (e.g., wet bulb above dry bulb)
///
/// # Example
///
/// ```rust
/// use air_core::calculations::moist_air::{calculate, MoistAirInput};
/// use air_core::psychrometrics::AirParameter;
///
/// let input = MoistAirInput::new(
///     "Room",
///     AirParameter::DryBulb,
///     21.0,
///     AirParameter::DewPoint,
///     10.0,
/// );
/// let result = calculate(&input, 101.325).expect("state should resolve");
/// assert!(result.relative_humidity_pct > 45.0);
/// assert!(result.relative_humidity_pct < 55.0);
/// ```
pub fn calculate(input: &MoistAirInput, pressure_kpa: f64) -> CalcResult<MoistAirResult> {
    input.validate()?;

    if !pressure_kpa.is_finite() || pressure_kpa <= 0.0 {
        return Err(CalcError::invalid_input(
            "pressure_kpa",
            pressure_kpa.to_string(),
            "Barometric pressure must be positive",
        ));
    }

    let state = derive_from_pair(
        input.first_parameter,
        input.first_value,
        input.second_parameter,
        input.second_value,
        pressure_kpa,
    );

    result_from_state(&state).ok_or_else(|| {
        CalcError::unresolved(format!(
            "'{}': the given {:?}/{:?} values do not describe a physical state at {} kPa",
            input.label, input.first_parameter, input.second_parameter, pressure_kpa
        ))
    })
}

fn result_from_state(state: &AirState) -> Option<MoistAirResult> {
    Some(MoistAirResult {
        dry_bulb_c: state.dry_bulb_c?,
        relative_humidity_pct: state.relative_humidity_pct?,
        wet_bulb_c: state.wet_bulb_c?,
        dew_point_c: state.dew_point_c?,
        humidity_ratio_g_per_kg: GramsPerKg::from(KgPerKg(state.humidity_ratio?)).value(),
        enthalpy_kj_per_kg: state.enthalpy_kj_per_kg?,
        specific_volume_m3_per_kg: state.specific_volume_m3_per_kg?,
        vapor_pressure_kpa: state.vapor_pressure_kpa?,
    })
}
