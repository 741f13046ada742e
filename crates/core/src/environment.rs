//! Environment score calculation.
//!
//! Each measured value is normalised against the material's ideal value as
//! `1 - |measured - ideal| / tolerance` and the three terms are combined with
//! fixed weights. The result is deliberately left unclamped: large deviations
//! drive individual terms, and the score, below zero.

use crate::condition::{MaterialProfile, Reading};

/// Temperature deviation (degrees) that zeroes the temperature term.
pub const TEMPERATURE_TOLERANCE: f64 = 10.0;
/// Humidity deviation (percentage points) that zeroes the humidity term.
pub const HUMIDITY_TOLERANCE: f64 = 100.0;
/// Oxygen deviation (percentage points) that zeroes the oxygen term.
pub const OXYGEN_TOLERANCE: f64 = 100.0;

pub const TEMPERATURE_WEIGHT: f64 = 0.5;
pub const HUMIDITY_WEIGHT: f64 = 0.3;
pub const OXYGEN_WEIGHT: f64 = 0.2;

fn normalized_deviation(measured: f64, ideal: f64, tolerance: f64) -> f64 {
    1.0 - ((measured - ideal) / tolerance).abs()
}

/// Composite score of a reading against a material's ideal profile.
///
/// `1.0` means every value matches its ideal exactly.
pub fn environment_score(reading: &Reading, profile: &MaterialProfile) -> f64 {
    let norm_temp = normalized_deviation(
        reading.temperature,
        profile.ideal_temperature,
        TEMPERATURE_TOLERANCE,
    );
    let norm_humidity =
        normalized_deviation(reading.humidity, profile.ideal_humidity, HUMIDITY_TOLERANCE);
    let norm_oxygen = normalized_deviation(
        reading.oxygen_level,
        profile.ideal_oxygen_level,
        OXYGEN_TOLERANCE,
    );

    norm_temp * TEMPERATURE_WEIGHT + norm_humidity * HUMIDITY_WEIGHT + norm_oxygen * OXYGEN_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn profile() -> MaterialProfile {
        MaterialProfile {
            id: 1,
            ideal_temperature: 4.0,
            ideal_humidity: 50.0,
            ideal_oxygen_level: 21.0,
        }
    }

    fn reading(temperature: f64, humidity: f64, oxygen_level: f64) -> Reading {
        Reading {
            material_id: 1,
            temperature,
            humidity,
            oxygen_level,
        }
    }

    #[test]
    fn ideal_reading_scores_one() {
        let score = environment_score(&reading(4.0, 50.0, 21.0), &profile());
        assert!((score - 1.0).abs() < EPS, "score was {score}");
    }

    #[test]
    fn large_temperature_deviation_goes_below_lower_threshold() {
        // normTemp = 1 - 16/10 = -0.6 -> 0.5 * -0.6 + 0.3 + 0.2 = 0.2
        let score = environment_score(&reading(20.0, 50.0, 21.0), &profile());
        assert!((score - 0.2).abs() < EPS, "score was {score}");
    }

    #[test]
    fn score_is_not_clamped_below_zero() {
        let score = environment_score(&reading(100.0, 0.0, 100.0), &profile());
        // 0.5 * (1 - 9.6) + 0.3 * 0.5 + 0.2 * 0.21
        let expected = 0.5 * -8.6 + 0.3 * 0.5 + 0.2 * (1.0 - 0.79);
        assert!((score - expected).abs() < EPS, "score was {score}");
        assert!(score < 0.0);
    }

    #[test]
    fn deviation_is_symmetric() {
        let above = environment_score(&reading(9.0, 60.0, 25.0), &profile());
        let below = environment_score(&reading(-1.0, 40.0, 17.0), &profile());
        assert!((above - below).abs() < EPS);
    }

    #[test]
    fn weights_apply_per_component() {
        let humidity_only = environment_score(&reading(4.0, 0.0, 21.0), &profile());
        assert!((humidity_only - (0.5 + 0.3 * 0.5 + 0.2)).abs() < EPS);

        let oxygen_only = environment_score(&reading(4.0, 50.0, 71.0), &profile());
        assert!((oxygen_only - (0.5 + 0.3 + 0.2 * 0.5)).abs() < EPS);
    }

    #[test]
    fn identical_inputs_give_identical_scores() {
        let r = reading(7.3, 44.1, 19.8);
        assert_eq!(
            environment_score(&r, &profile()).to_bits(),
            environment_score(&r, &profile()).to_bits()
        );
    }
}
