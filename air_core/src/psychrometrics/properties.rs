//! # Closed-Form Moist-Air Properties
//!
//! The algebraic property conversions every derivation path is built
//! from: humidity ratio ↔ vapor pressure, relative humidity ↔ vapor
//! pressure, enthalpy, specific volume, and the adiabatic-saturation
//! energy balance that ties humidity ratio to wet-bulb temperature.
//!
//! Functions that can run out of physical range (vapor pressure at or
//! above total pressure) return `Option` and leave the policy to the
//! caller; nothing in this module panics.

use super::saturation::saturation_pressure_kpa;
use super::{
    CP_DRY_AIR, CP_WATER_VAPOR, DRY_AIR_GAS_CONSTANT, LATENT_HEAT_0C, MOLAR_MASS_RATIO,
    VOLUME_COEFFICIENT,
};

/// Humidity ratio (kg/kg dry air) from water vapor partial pressure and
/// total pressure (both kPa).
///
/// `W = 0.621945 pw / (p - pw)`. Returns `None` when the vapor pressure
/// is negative or does not leave room for any dry air (`pw >= p`).
pub fn humidity_ratio_from_vapor_pressure(
    vapor_pressure_kpa: f64,
    pressure_kpa: f64,
) -> Option<f64> {
    if !vapor_pressure_kpa.is_finite() || vapor_pressure_kpa < 0.0 {
        return None;
    }
    if vapor_pressure_kpa >= pressure_kpa {
        return None;
    }
    Some(MOLAR_MASS_RATIO * vapor_pressure_kpa / (pressure_kpa - vapor_pressure_kpa))
}

/// Water vapor partial pressure (kPa) from humidity ratio and total
/// pressure. Exact inverse of [`humidity_ratio_from_vapor_pressure`].
pub fn vapor_pressure_from_humidity_ratio(humidity_ratio: f64, pressure_kpa: f64) -> f64 {
    humidity_ratio * pressure_kpa / (MOLAR_MASS_RATIO + humidity_ratio)
}

/// Humidity ratio of saturated air (kg/kg dry air) at the given
/// temperature and total pressure.
///
/// `None` when the saturation pressure reaches the total pressure
/// (boiling at the given pressure).
pub fn saturation_humidity_ratio(temp_c: f64, pressure_kpa: f64) -> Option<f64> {
    humidity_ratio_from_vapor_pressure(saturation_pressure_kpa(temp_c), pressure_kpa)
}

/// Moist-air specific enthalpy (kJ/kg dry air), dry-air reference at 0 °C.
///
/// `h = 1.006 t + W (2501 + 1.86 t)`
pub fn enthalpy_kj_per_kg(dry_bulb_c: f64, humidity_ratio: f64) -> f64 {
    CP_DRY_AIR * dry_bulb_c + humidity_ratio * (LATENT_HEAT_0C + CP_WATER_VAPOR * dry_bulb_c)
}

/// Humidity ratio from dry-bulb temperature and enthalpy, the algebraic
/// inverse of [`enthalpy_kj_per_kg`]. Unclamped; the dispatcher limits
/// the result to the physical range.
pub fn humidity_ratio_from_enthalpy(dry_bulb_c: f64, enthalpy_kj_per_kg: f64) -> f64 {
    (enthalpy_kj_per_kg - CP_DRY_AIR * dry_bulb_c)
        / (LATENT_HEAT_0C + CP_WATER_VAPOR * dry_bulb_c)
}

/// Specific volume of moist air (m³/kg dry air).
///
/// `v = 0.287042 (t + 273.15)(1 + 1.6078 W) / p`
pub fn specific_volume_m3_per_kg(dry_bulb_c: f64, humidity_ratio: f64, pressure_kpa: f64) -> f64 {
    DRY_AIR_GAS_CONSTANT * (dry_bulb_c + 273.15) * (1.0 + VOLUME_COEFFICIENT * humidity_ratio)
        / pressure_kpa
}

/// Humidity ratio implied by the adiabatic-saturation energy balance at
/// a given wet-bulb temperature:
///
/// `W = (c_pa (t_wb - t) + Ws(t_wb)(h_fg0 + c_pv t_wb)) / (h_fg0 + c_pv t)`
///
/// Monotonically increasing in `t_wb`, which is what lets the wet-bulb
/// solver bisect on it. `None` when the saturation humidity ratio at the
/// trial wet bulb is out of range for the total pressure.
pub fn wet_bulb_humidity_ratio(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
) -> Option<f64> {
    let ws = saturation_humidity_ratio(wet_bulb_c, pressure_kpa)?;
    let numerator =
        CP_DRY_AIR * (wet_bulb_c - dry_bulb_c) + ws * (LATENT_HEAT_0C + CP_WATER_VAPOR * wet_bulb_c);
    let denominator = LATENT_HEAT_0C + CP_WATER_VAPOR * dry_bulb_c;
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidity_ratio_reference_point() {
        // 25 °C, 50% RH, sea level: pw = 1.585 kPa, W about 9.9 g/kg
        let pw = 0.5 * saturation_pressure_kpa(25.0);
        let w = humidity_ratio_from_vapor_pressure(pw, 101.325).unwrap();
        assert!((w * 1000.0 - 9.9).abs() < 0.1);
    }

    #[test]
    fn test_humidity_ratio_vapor_pressure_roundtrip() {
        for &pw in &[0.05, 0.611, 1.585, 3.17, 7.38] {
            let w = humidity_ratio_from_vapor_pressure(pw, 101.325).unwrap();
            let back = vapor_pressure_from_humidity_ratio(w, 101.325);
            assert!((back - pw).abs() < 1e-12);
        }
    }

    #[test]
    fn test_humidity_ratio_out_of_range() {
        assert!(humidity_ratio_from_vapor_pressure(-0.1, 101.325).is_none());
        assert!(humidity_ratio_from_vapor_pressure(101.325, 101.325).is_none());
        assert!(humidity_ratio_from_vapor_pressure(150.0, 101.325).is_none());
    }

    #[test]
    fn test_enthalpy_reference_point() {
        // h = 1.006*25 + 0.00988*(2501 + 1.86*25) = about 50.3 kJ/kg
        let h = enthalpy_kj_per_kg(25.0, 0.00988);
        assert!((h - 50.2).abs() < 0.3);
    }

    #[test]
    fn test_enthalpy_inverse() {
        for &(t, w) in &[(0.0, 0.002), (25.0, 0.00988), (40.0, 0.02), (-10.0, 0.001)] {
            let h = enthalpy_kj_per_kg(t, w);
            let back = humidity_ratio_from_enthalpy(t, h);
            assert!((back - w).abs() < 1e-12);
        }
    }

    #[test]
    fn test_specific_volume_reference_point() {
        // 25 °C, W = 0.00988, sea level: about 0.858 m³/kg dry air
        let v = specific_volume_m3_per_kg(25.0, 0.00988, 101.325);
        assert!((v - 0.858).abs() < 0.005);
    }

    #[test]
    fn test_wet_bulb_balance_at_saturation() {
        // At t_wb = t the balance reduces to Ws(t): saturated air
        let ws = saturation_humidity_ratio(25.0, 101.325).unwrap();
        let w = wet_bulb_humidity_ratio(25.0, 25.0, 101.325).unwrap();
        assert!((w - ws).abs() < 1e-12);
    }

    #[test]
    fn test_wet_bulb_balance_monotone_in_wet_bulb() {
        let mut previous = wet_bulb_humidity_ratio(30.0, -20.0, 101.325).unwrap();
        let mut t_wb = -20.0;
        while t_wb < 30.0 {
            t_wb += 1.0;
            let w = wet_bulb_humidity_ratio(30.0, t_wb, 101.325).unwrap();
            assert!(w > previous, "balance not increasing at t_wb = {}", t_wb);
            previous = w;
        }
    }
}
