//! # Air-Process Energy Calculation
//!
//! A process transition connects two resolved moist-air state points
//! (start and end) with a volumetric airflow, and derives the dry-air
//! mass flow plus the sensible, latent, and total heat transferred
//! between the states.
//!
//! Sign convention: positive values add heat or moisture to the air
//! (heating / humidification), negative values remove them.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use air_core::calculations::moist_air::{calculate as resolve_point, MoistAirInput};
//! use air_core::calculations::process::{calculate, ProcessInput};
//! use air_core::psychrometrics::AirParameter;
//! use uuid::Uuid;
//!
//! let entering = resolve_point(
//!     &MoistAirInput::new("Return", AirParameter::DryBulb, 25.0,
//!         AirParameter::RelativeHumidity, 50.0),
//!     101.325,
//! ).unwrap();
//! let leaving = resolve_point(
//!     &MoistAirInput::new("Supply", AirParameter::DryBulb, 35.0,
//!         AirParameter::RelativeHumidity, 28.0),
//!     101.325,
//! ).unwrap();
//!
//! let input = ProcessInput {
//!     label: "Heating coil".to_string(),
//!     start_point: Uuid::new_v4(),
//!     end_point: Uuid::new_v4(),
//!     airflow_m3_per_s: 1.5,
//! };
//!
//! let result = calculate(&input, &entering, &leaving).unwrap();
//! assert!(result.total_heat_kw > 0.0); // heating
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::moist_air::MoistAirResult;
use crate::errors::{CalcError, CalcResult};
use crate::psychrometrics::{CP_DRY_AIR, CP_WATER_VAPOR};

/// Input parameters for an air-process energy calculation.
///
/// The start and end points are references to moist-air state points by
/// id; the owning project resolves them before calling [`calculate`],
/// and drops the process when a referenced point is deleted.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cooling coil",
///   "start_point": "4b4630a6-1b12-4e52-8a1e-70b8a1c6b0de",
///   "end_point": "92cf0dd3-57a8-4a9f-bd3a-8ff6e6e0b1b4",
///   "airflow_m3_per_s": 2.4
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInput {
    /// User label for this process (e.g., "Cooling coil", "Mixing duct")
    pub label: String,

    /// Id of the entering state point
    pub start_point: Uuid,

    /// Id of the leaving state point
    pub end_point: Uuid,

    /// Volumetric airflow at the entering state (m³/s)
    pub airflow_m3_per_s: f64,
}

impl ProcessInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.airflow_m3_per_s.is_finite() || self.airflow_m3_per_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "airflow_m3_per_s",
                self.airflow_m3_per_s.to_string(),
                "Airflow must be positive",
            ));
        }
        if self.airflow_m3_per_s > 1000.0 {
            return Err(CalcError::invalid_input(
                "airflow_m3_per_s",
                self.airflow_m3_per_s.to_string(),
                "Airflow exceeds 1000 m³/s - verify units",
            ));
        }
        Ok(())
    }

    /// Whether this process references the given state point.
    pub fn references(&self, point_id: &Uuid) -> bool {
        self.start_point == *point_id || self.end_point == *point_id
    }
}

/// Results from an air-process energy calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mass_flow_kg_per_s": 1.75,
///   "sensible_heat_kw": 17.8,
///   "latent_heat_kw": 4.9,
///   "total_heat_kw": 22.7
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Dry-air mass flow derived from the entering state (kg/s)
    pub mass_flow_kg_per_s: f64,

    /// Sensible heat change (kW); positive is heating
    pub sensible_heat_kw: f64,

    /// Latent heat change (kW); positive is humidification
    pub latent_heat_kw: f64,

    /// Total heat change (kW), mass flow times enthalpy difference
    pub total_heat_kw: f64,
}

impl ProcessResult {
    /// Sensible heat ratio, sensible / total. `None` when the total is
    /// (numerically) zero.
    pub fn sensible_heat_ratio(&self) -> Option<f64> {
        if self.total_heat_kw.abs() < 1e-9 {
            None
        } else {
            Some(self.sensible_heat_kw / self.total_heat_kw)
        }
    }

    /// Whether the process adds heat to the air overall.
    pub fn is_heating(&self) -> bool {
        self.total_heat_kw > 0.0
    }

    /// Whether the process adds moisture to the air.
    pub fn is_humidifying(&self) -> bool {
        self.latent_heat_kw > 0.0
    }
}

/// Calculate the energy change across an air process.
///
/// The dry-air mass flow comes from the volumetric airflow at the
/// entering state (`m = V / v₁`); the sensible share uses the moist
/// specific heat at the entering humidity ratio, and the latent share is
/// the remainder of the enthalpy change.
///
/// # Arguments
///
/// * `input` - Process parameters (label, point references, airflow)
/// * `start` - Resolved entering state
/// * `end` - Resolved leaving state
///
/// # Returns
///
/// * `Ok(ProcessResult)` - Mass flow and heat breakdown
/// * `Err(CalcError)` - Structured error if the airflow is invalid
pub fn calculate(
    input: &ProcessInput,
    start: &MoistAirResult,
    end: &MoistAirResult,
) -> CalcResult<ProcessResult> {
    input.validate()?;

    let mass_flow_kg_per_s = input.airflow_m3_per_s / start.specific_volume_m3_per_kg;

    let w_start = start.humidity_ratio_kg_per_kg();
    let moist_cp = CP_DRY_AIR + CP_WATER_VAPOR * w_start;

    let sensible_heat_kw = mass_flow_kg_per_s * moist_cp * (end.dry_bulb_c - start.dry_bulb_c);
    let total_heat_kw =
        mass_flow_kg_per_s * (end.enthalpy_kj_per_kg - start.enthalpy_kj_per_kg);
    let latent_heat_kw = total_heat_kw - sensible_heat_kw;

    Ok(ProcessResult {
        mass_flow_kg_per_s,
        sensible_heat_kw,
        latent_heat_kw,
        total_heat_kw,
    })
}
