//! # Saturation Vapor Pressure & Dew Point
//!
//! Hyland-Wexler correlations for the saturation pressure of water vapor,
//! over ice below 0 °C and over liquid water at and above 0 °C (ASHRAE
//! Fundamentals 2017 Ch. 1, eq. 5 and 6). The two branches agree at the
//! freezing point to well within 0.01%.
//!
//! The dew point inverse starts from the ASHRAE closed-form fit (eq. 37
//! and 38) and tightens it with a short Newton pass against the forward
//! correlation, which brings the error below 0.01 °C across the working
//! range.

// Over ice, -100..0 °C (pressure in Pa, temperature in K)
const C1: f64 = -5.674_535_9e3;
const C2: f64 = 6.392_524_7;
const C3: f64 = -9.677_843_0e-3;
const C4: f64 = 6.221_570_1e-7;
const C5: f64 = 2.074_782_5e-9;
const C6: f64 = -9.484_024_0e-13;
const C7: f64 = 4.163_501_9;

// Over liquid water, 0..200 °C
const C8: f64 = -5.800_220_6e3;
const C9: f64 = 1.391_499_3;
const C10: f64 = -4.864_023_9e-2;
const C11: f64 = 4.176_476_8e-5;
const C12: f64 = -1.445_209_3e-8;
const C13: f64 = 6.545_967_3;

/// Newton refinement budget for the dew-point inverse. The closed-form
/// guess is within ~0.1 °C in the working range, so this converges in
/// two or three steps; the cap keeps extreme inputs bounded.
const DEW_POINT_REFINEMENT_STEPS: usize = 10;

/// Saturation vapor pressure of water (kPa) at the given temperature (°C).
///
/// Defined for any temperature above absolute zero; the correlation is
/// monotonically increasing over the working range.
pub fn saturation_pressure_kpa(temp_c: f64) -> f64 {
    let t = temp_c + 273.15;
    let ln_pws_pa = if temp_c >= 0.0 {
        C8 / t + C9 + t * (C10 + t * (C11 + t * C12)) + C13 * t.ln()
    } else {
        C1 / t + C2 + t * (C3 + t * (C4 + t * (C5 + t * C6))) + C7 * t.ln()
    };
    ln_pws_pa.exp() / 1000.0
}

/// Slope of the saturation curve, d(pws)/dT (kPa per K).
///
/// Analytic derivative of the correlation above, used by the Newton
/// refinement in [`dew_point_c`].
pub(crate) fn saturation_pressure_slope(temp_c: f64) -> f64 {
    let t = temp_c + 273.15;
    let dln_dt = if temp_c >= 0.0 {
        -C8 / (t * t) + C10 + 2.0 * C11 * t + 3.0 * C12 * t * t + C13 / t
    } else {
        -C1 / (t * t) + C3 + 2.0 * C4 * t + 3.0 * C5 * t * t + 4.0 * C6 * t * t * t + C7 / t
    };
    saturation_pressure_kpa(temp_c) * dln_dt
}

/// Dew-point temperature (°C) for the given water vapor partial
/// pressure (kPa).
///
/// Returns `None` for vapor pressures that are zero, negative, or not
/// finite; the dew point is undefined there.
pub fn dew_point_c(vapor_pressure_kpa: f64) -> Option<f64> {
    if !vapor_pressure_kpa.is_finite() || vapor_pressure_kpa <= 0.0 {
        return None;
    }

    let alpha = vapor_pressure_kpa.ln();

    // Closed-form first guess, branched at the freezing-point pressure
    let mut dew_point = if vapor_pressure_kpa >= saturation_pressure_kpa(0.0) {
        6.54 + 14.526 * alpha
            + 0.7389 * alpha * alpha
            + 0.094_86 * alpha.powi(3)
            + 0.4569 * vapor_pressure_kpa.powf(0.1984)
    } else {
        6.09 + 12.608 * alpha + 0.4959 * alpha * alpha
    };

    // Newton pass against the forward correlation
    for _ in 0..DEW_POINT_REFINEMENT_STEPS {
        let residual = saturation_pressure_kpa(dew_point) - vapor_pressure_kpa;
        let slope = saturation_pressure_slope(dew_point);
        if slope <= 0.0 {
            break;
        }
        let step = residual / slope;
        dew_point -= step;
        if step.abs() < 1e-6 {
            break;
        }
    }

    Some(dew_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_saturation_pressures() {
        // Freezing point: 0.6112 kPa
        assert!((saturation_pressure_kpa(0.0) - 0.6112).abs() < 0.001);

        // 25 °C: 3.1699 kPa
        assert!((saturation_pressure_kpa(25.0) - 3.1699).abs() < 0.005);

        // 50 °C: 12.352 kPa
        assert!((saturation_pressure_kpa(50.0) - 12.352).abs() < 0.02);

        // -10 °C over ice: 0.2601 kPa
        assert!((saturation_pressure_kpa(-10.0) - 0.2601).abs() < 0.002);

        // Boiling point: 101.42 kPa
        assert!((saturation_pressure_kpa(100.0) - 101.42).abs() < 0.2);
    }

    #[test]
    fn test_continuity_at_freezing() {
        let below = saturation_pressure_kpa(-1e-9);
        let above = saturation_pressure_kpa(1e-9);
        let relative_gap = (above - below).abs() / above;
        assert!(relative_gap < 1e-3, "branch gap {} too large", relative_gap);
    }

    #[test]
    fn test_strictly_increasing() {
        let mut t = -50.0;
        let mut previous = saturation_pressure_kpa(t);
        while t < 60.0 {
            t += 0.5;
            let p = saturation_pressure_kpa(t);
            assert!(p > previous, "pws not increasing at {} °C", t);
            previous = p;
        }
    }

    #[test]
    fn test_slope_matches_finite_difference() {
        // Stay clear of the 0 °C branch point: a central difference
        // across it mixes the two correlations
        for &t in &[-30.0, -5.0, 2.0, 10.0, 25.0, 45.0] {
            let analytic = saturation_pressure_slope(t);
            let h = 1e-4;
            let numeric =
                (saturation_pressure_kpa(t + h) - saturation_pressure_kpa(t - h)) / (2.0 * h);
            assert!(
                (analytic - numeric).abs() / numeric < 1e-5,
                "slope mismatch at {} °C: {} vs {}",
                t,
                analytic,
                numeric
            );
        }
    }

    #[test]
    fn test_dew_point_inverts_saturation() {
        for &t in &[-40.0, -20.0, -5.0, 0.5, 10.0, 25.0, 40.0, 60.0] {
            let pws = saturation_pressure_kpa(t);
            let dew = dew_point_c(pws).unwrap();
            assert!(
                (dew - t).abs() < 0.01,
                "dew point {} for pws at {} °C",
                dew,
                t
            );
        }
    }

    #[test]
    fn test_dew_point_known_value() {
        // 25 °C at 50% RH -> pw = 1.585 kPa -> dew point about 13.9 °C
        let dew = dew_point_c(1.585).unwrap();
        assert!((dew - 13.87).abs() < 0.1);
    }

    #[test]
    fn test_dew_point_undefined_inputs() {
        assert!(dew_point_c(0.0).is_none());
        assert!(dew_point_c(-1.0).is_none());
        assert!(dew_point_c(f64::NAN).is_none());
    }
}
