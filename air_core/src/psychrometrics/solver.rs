//! # Iterative Solvers
//!
//! One bounded bisection routine backs every "solve for a temperature
//! given a target derived quantity" case in the engine: wet bulb from
//! humidity ratio, and dry bulb from relative humidity plus wet bulb.
//!
//! The routine relies on the residual being monotonically increasing
//! over the bracket, which the saturation correlation guarantees for
//! both uses. It always terminates within [`MAX_ITERATIONS`] and returns
//! the best available estimate when the tolerance is not reached:
//! residual error over availability, as an engineering calculator wants.

use super::properties;

/// Iteration budget for every bisection solve
pub const MAX_ITERATIONS: usize = 100;

/// Convergence tolerance on humidity-ratio residuals (kg/kg dry air)
pub const HUMIDITY_RATIO_TOLERANCE: f64 = 1e-5;

/// Convergence tolerance on temperature brackets (°C)
pub const TEMPERATURE_TOLERANCE_C: f64 = 0.01;

/// Bisection over `[lower, upper]` for a monotonically increasing
/// residual with `residual(lower) <= 0 <= residual(upper)`.
///
/// Stops when the residual magnitude drops below `tolerance` or the
/// bracket narrows below [`TEMPERATURE_TOLERANCE_C`]; either way the
/// bracket midpoint comes back after at most [`MAX_ITERATIONS`] rounds.
fn bisect(lower: f64, upper: f64, tolerance: f64, residual: impl Fn(f64) -> f64) -> f64 {
    let mut lo = lower;
    let mut hi = upper;
    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let r = residual(mid);
        if r.abs() < tolerance {
            return mid;
        }
        if r > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        if hi - lo < TEMPERATURE_TOLERANCE_C {
            break;
        }
    }
    0.5 * (lo + hi)
}

/// Wet-bulb temperature (°C) for the given dry bulb, humidity ratio and
/// total pressure.
///
/// Finds the root of the adiabatic-saturation energy balance
/// (see [`properties::wet_bulb_humidity_ratio`]) over
/// `[t - 100 °C, t]`. The result never exceeds the dry bulb; a humidity
/// ratio at or above saturation converges onto the dry bulb itself.
pub fn wet_bulb_c(dry_bulb_c: f64, humidity_ratio: f64, pressure_kpa: f64) -> f64 {
    let target = humidity_ratio.max(0.0);
    let lower = dry_bulb_c - 100.0;
    let solved = bisect(lower, dry_bulb_c, HUMIDITY_RATIO_TOLERANCE, |t_wb| {
        properties::wet_bulb_humidity_ratio(dry_bulb_c, t_wb, pressure_kpa)
            .map_or(f64::MAX, |w| w - target)
    });
    solved.min(dry_bulb_c)
}

/// Dry-bulb temperature (°C) whose state at the given relative humidity
/// produces the given wet-bulb temperature.
///
/// A candidate dry bulb reproduces the target wet bulb exactly when the
/// humidity ratio at `rh` matches the energy balance evaluated at the
/// target wet bulb, so that difference is the bisection residual; it is
/// increasing in the candidate temperature. The search domain is clamped
/// to `[t_wb, t_wb + 80 °C]`; at 100% relative humidity the root is the
/// wet bulb itself.
pub fn dry_bulb_from_rh_and_wet_bulb(
    relative_humidity_pct: f64,
    wet_bulb_c: f64,
    pressure_kpa: f64,
) -> f64 {
    let fraction = (relative_humidity_pct / 100.0).clamp(0.0, 1.0);
    let upper = wet_bulb_c + 80.0;
    let solved = bisect(wet_bulb_c, upper, HUMIDITY_RATIO_TOLERANCE, |t| {
        let from_rh = properties::humidity_ratio_from_vapor_pressure(
            fraction * super::saturation_pressure_kpa(t),
            pressure_kpa,
        )
        .unwrap_or(f64::MAX);
        let from_balance = properties::wet_bulb_humidity_ratio(t, wet_bulb_c, pressure_kpa)
            .unwrap_or(f64::MIN);
        from_rh - from_balance
    });
    solved.max(wet_bulb_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psychrometrics::properties::{
        saturation_humidity_ratio, wet_bulb_humidity_ratio,
    };

    #[test]
    fn test_wet_bulb_reference_point() {
        // 25 °C, 50% RH at sea level: wet bulb between 17.7 and 18.0 °C
        let w = 0.009_884;
        let t_wb = wet_bulb_c(25.0, w, 101.325);
        assert!(
            (17.7..=18.0).contains(&t_wb),
            "wet bulb {} outside expected band",
            t_wb
        );
    }

    #[test]
    fn test_wet_bulb_at_saturation_equals_dry_bulb() {
        let ws = saturation_humidity_ratio(25.0, 101.325).unwrap();
        let t_wb = wet_bulb_c(25.0, ws, 101.325);
        assert!((t_wb - 25.0).abs() < TEMPERATURE_TOLERANCE_C);
    }

    #[test]
    fn test_wet_bulb_never_exceeds_dry_bulb() {
        for &t in &[-10.0, 0.0, 15.0, 30.0, 50.0] {
            for &rh in &[0.01, 0.2, 0.5, 0.9, 1.0] {
                let ws = saturation_humidity_ratio(t, 101.325).unwrap();
                let t_wb = wet_bulb_c(t, rh * ws, 101.325);
                assert!(t_wb <= t, "wet bulb {} above dry bulb {}", t_wb, t);
            }
        }
    }

    #[test]
    fn test_wet_bulb_terminates_on_pathological_inputs() {
        // Bone dry, supersaturated, and domain-extreme states all come
        // back finite from the bounded solve
        for &(t, w) in &[
            (50.0, 0.0),
            (50.0, 1.0),
            (-10.0, 0.0),
            (-10.0, 0.5),
            (60.0, 1e-9),
        ] {
            let t_wb = wet_bulb_c(t, w, 101.325);
            assert!(t_wb.is_finite());
            assert!(t_wb <= t);
        }
    }

    #[test]
    fn test_wet_bulb_solution_satisfies_balance() {
        let w = 0.008;
        let t_wb = wet_bulb_c(30.0, w, 101.325);
        let residual = wet_bulb_humidity_ratio(30.0, t_wb, 101.325).unwrap() - w;
        assert!(residual.abs() < 2.0 * HUMIDITY_RATIO_TOLERANCE);
    }

    #[test]
    fn test_dry_bulb_from_rh_and_wet_bulb_roundtrip() {
        // Derive the wet bulb for a known state, then recover the dry bulb
        for &(t, rh) in &[(25.0, 50.0), (35.0, 20.0), (10.0, 80.0), (30.0, 65.0)] {
            let fraction = rh / 100.0;
            let pw = fraction * crate::psychrometrics::saturation_pressure_kpa(t);
            let w = crate::psychrometrics::properties::humidity_ratio_from_vapor_pressure(
                pw, 101.325,
            )
            .unwrap();
            let t_wb = wet_bulb_c(t, w, 101.325);

            let recovered = dry_bulb_from_rh_and_wet_bulb(rh, t_wb, 101.325);
            assert!(
                (recovered - t).abs() < 0.1,
                "recovered {} for dry bulb {} at rh {}",
                recovered,
                t,
                rh
            );
        }
    }

    #[test]
    fn test_dry_bulb_at_full_saturation_is_wet_bulb() {
        let t = dry_bulb_from_rh_and_wet_bulb(100.0, 18.0, 101.325);
        assert!((t - 18.0).abs() < TEMPERATURE_TOLERANCE_C);
    }

    #[test]
    fn test_dry_bulb_search_stays_in_domain() {
        // Near-zero humidity pushes the root toward the domain edge;
        // the clamped search still terminates with a bounded estimate
        let t = dry_bulb_from_rh_and_wet_bulb(0.1, 50.0, 101.325);
        assert!(t.is_finite());
        assert!((50.0..=130.0).contains(&t));
    }
}
