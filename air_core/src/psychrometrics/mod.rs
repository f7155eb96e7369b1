//! # Psychrometric Property Engine
//!
//! Pure-function library for moist-air state properties. Given any two
//! independent state parameters plus barometric pressure, the engine
//! derives the remaining properties, consistently, for every supported
//! input pair, including pairs with no closed-form solution, which go
//! through the bounded iterative solver.
//!
//! All correlations and constants follow ASHRAE Fundamentals 2017 Ch. 1
//! (SI). Temperatures are °C, pressures kPa, humidity ratio kg water per
//! kg dry air, enthalpy kJ/kg dry air, specific volume m³/kg dry air.
//!
//! ## Modules
//!
//! - [`saturation`] - Saturation vapor pressure and dew point
//! - [`properties`] - Closed-form property conversions
//! - [`solver`] - Bounded bisection and the wet-bulb solver
//! - [`state`] - The parameter-pair dispatcher over [`AirState`] records
//!
//! ## Example
//!
//! ```rust
//! use air_core::psychrometrics::{derive_from_pair, AirParameter};
//!
//! let state = derive_from_pair(
//!     AirParameter::DryBulb,
//!     25.0,
//!     AirParameter::RelativeHumidity,
//!     50.0,
//!     101.325,
//! );
//!
//! assert!(state.is_resolved());
//! let w = state.humidity_ratio.unwrap();
//! assert!((w * 1000.0 - 9.9).abs() < 0.1); // about 9.9 g/kg
//! ```

pub mod properties;
pub mod saturation;
pub mod solver;
pub mod state;

pub use saturation::{dew_point_c, saturation_pressure_kpa};
pub use state::{derive_from_pair, is_supported_pair, AirParameter, AirState};

/// Specific heat of dry air (kJ/(kg·K))
pub const CP_DRY_AIR: f64 = 1.006;

/// Specific heat of water vapor (kJ/(kg·K))
pub const CP_WATER_VAPOR: f64 = 1.86;

/// Latent heat of vaporization of water at 0 °C (kJ/kg)
pub const LATENT_HEAT_0C: f64 = 2501.0;

/// Ratio of molar masses, water vapor / dry air
pub const MOLAR_MASS_RATIO: f64 = 0.621945;

/// Gas constant for dry air (kJ/(kg·K))
pub const DRY_AIR_GAS_CONSTANT: f64 = 0.287042;

/// Moist-air volume coefficient, 1 / MOLAR_MASS_RATIO
pub const VOLUME_COEFFICIENT: f64 = 1.6078;
