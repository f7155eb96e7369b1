//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Psychrometric work uses a consistent SI unit set
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Airside uses SI units internally, matching the ASHRAE SI correlations:
//! - Temperature: degrees Celsius (°C), kelvin (K)
//! - Pressure: kilopascals (kPa), pascals (Pa)
//! - Humidity ratio: kg water / kg dry air internally, g/kg for display
//! - Enthalpy: kilojoules per kg dry air (kJ/kg)
//! - Specific volume: cubic metres per kg dry air (m³/kg)
//! - Altitude: metres (m)
//!
//! ## Example
//!
//! ```rust
//! use air_core::units::{Celsius, Kelvin, KgPerKg, GramsPerKg};
//!
//! let t = Celsius(25.0);
//! let t_abs: Kelvin = t.into();
//! assert_eq!(t_abs.0, 298.15);
//!
//! let w = KgPerKg(0.0099);
//! let w_display: GramsPerKg = w.into();
//! assert!((w_display.0 - 9.9).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Absolute temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Self {
        Kelvin(c.0 + 273.15)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Self {
        Celsius(k.0 - 273.15)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in kilopascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

impl From<KiloPascals> for Pascals {
    fn from(kpa: KiloPascals) -> Self {
        Pascals(kpa.0 * 1000.0)
    }
}

impl From<Pascals> for KiloPascals {
    fn from(pa: Pascals) -> Self {
        KiloPascals(pa.0 / 1000.0)
    }
}

// ============================================================================
// Humidity Ratio Units
// ============================================================================

/// Humidity ratio in kg water per kg dry air (internal form)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerKg(pub f64);

/// Humidity ratio in grams water per kg dry air (display form)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GramsPerKg(pub f64);

impl From<KgPerKg> for GramsPerKg {
    fn from(w: KgPerKg) -> Self {
        GramsPerKg(w.0 * 1000.0)
    }
}

impl From<GramsPerKg> for KgPerKg {
    fn from(w: GramsPerKg) -> Self {
        KgPerKg(w.0 / 1000.0)
    }
}

// ============================================================================
// Energy / Volume Units
// ============================================================================

/// Specific enthalpy in kilojoules per kg dry air
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloJoulesPerKg(pub f64);

/// Specific volume in cubic metres per kg dry air
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetresPerKg(pub f64);

/// Altitude/length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Celsius);
impl_arithmetic!(Kelvin);
impl_arithmetic!(KiloPascals);
impl_arithmetic!(Pascals);
impl_arithmetic!(KgPerKg);
impl_arithmetic!(GramsPerKg);
impl_arithmetic!(KiloJoulesPerKg);
impl_arithmetic!(CubicMetresPerKg);
impl_arithmetic!(Metres);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_kelvin() {
        let t = Celsius(25.0);
        let k: Kelvin = t.into();
        assert_eq!(k.0, 298.15);

        let back: Celsius = k.into();
        assert_eq!(back.0, 25.0);
    }

    #[test]
    fn test_kilopascals_to_pascals() {
        let p = KiloPascals(101.325);
        let pa: Pascals = p.into();
        assert_eq!(pa.0, 101325.0);
    }

    #[test]
    fn test_humidity_ratio_display_form() {
        let w = KgPerKg(0.0125);
        let g: GramsPerKg = w.into();
        assert!((g.0 - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Celsius(20.0);
        let b = Celsius(5.0);
        assert_eq!((a + b).0, 25.0);
        assert_eq!((a - b).0, 15.0);
        assert_eq!((a * 2.0).0, 40.0);
        assert_eq!((a / 2.0).0, 10.0);
    }

    #[test]
    fn test_serialization() {
        let p = KiloPascals(101.325);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "101.325");

        let roundtrip: KiloPascals = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
