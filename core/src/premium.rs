//! # Premium Calculator
//!
//! Vehicles with a model year up to and including
//! [`MODEL_YEAR_THRESHOLD`] pay twice the base rate, newer ones pay the base
//! rate unchanged. Every integer year is accepted.

use carsure_common::insurance::{MODEL_YEAR_THRESHOLD, PremiumTier, Quote};
use carsure_common::vehicle::ModelYear;

/// Classifies a model year. The threshold year itself is doubled.
pub fn tier_for(year: i32) -> PremiumTier {
    if year <= MODEL_YEAR_THRESHOLD {
        PremiumTier::Doubled
    } else {
        PremiumTier::Standard
    }
}

/// Computes the premium for `vehicle` against `base_rate`.
///
/// Widening to `u64` keeps the doubled branch from overflowing.
pub fn calculate<V: ModelYear + ?Sized>(vehicle: &V, base_rate: u32) -> u64 {
    u64::from(base_rate) * tier_for(vehicle.model_year()).multiplier()
}

/// Same as [`calculate`], but keeps the year and tier for reporting.
pub fn quote<V: ModelYear + ?Sized>(vehicle: &V, base_rate: u32) -> Quote {
    let year = vehicle.model_year();
    let tier = tier_for(year);
    Quote::new(year, tier, u64::from(base_rate) * tier.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carsure_common::vehicle::Vehicle;
    use rayon::prelude::*;

    struct Year(i32);

    impl ModelYear for Year {
        fn model_year(&self) -> i32 {
            self.0
        }
    }

    #[test]
    fn older_years_are_doubled() {
        for year in [i32::MIN, -1, 0, 1999, 2013, 2019, 2020] {
            assert_eq!(calculate(&Year(year), 5000), 10_000, "year {year}");
        }
    }

    #[test]
    fn newer_years_pay_base_rate() {
        for year in [2021, 2025, 9999, i32::MAX] {
            assert_eq!(calculate(&Year(year), 5000), 5000, "year {year}");
        }
    }

    #[test]
    fn threshold_year_is_doubled() {
        assert_eq!(tier_for(2020), PremiumTier::Doubled);
        assert_eq!(tier_for(2021), PremiumTier::Standard);
        assert_eq!(calculate(&Year(2020), 1), 2);
    }

    #[test]
    fn largest_base_rate_does_not_overflow() {
        assert_eq!(calculate(&Year(2000), u32::MAX), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn quote_carries_year_and_tier() {
        let quote = quote(&Vehicle::default_sample(), 5000);
        assert_eq!(quote, Quote::new(2013, PremiumTier::Doubled, 10_000));
    }

    #[test]
    fn quote_agrees_with_calculate() {
        for year in [1990, 2020, 2021, 2030] {
            let vehicle = Vehicle::new("Any", "Make", year, 0);
            assert_eq!(quote(&vehicle, 750).premium, calculate(&vehicle, 750));
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let vehicle = Vehicle::new("Jazz", "Honda", 2020, 90_000);
        let first = calculate(&vehicle, 5000);
        for _ in 0..100 {
            assert_eq!(calculate(&vehicle, 5000), first);
        }
    }

    #[test]
    fn concurrent_calls_do_not_interfere() {
        let results: Vec<(i32, u32, u64)> = (1990..2050)
            .into_par_iter()
            .map(|year| {
                let base_rate = (year as u32) % 97 + 1;
                let vehicle = Vehicle::new("Car", "Brand", year, 0);
                (year, base_rate, calculate(&vehicle, base_rate))
            })
            .collect();

        for (year, base_rate, premium) in results {
            let expected = if year <= 2020 { base_rate as u64 * 2 } else { base_rate as u64 };
            assert_eq!(premium, expected, "year {year}");
        }
    }
}
