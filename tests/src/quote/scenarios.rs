#![cfg(test)]
use carsure_common::config::Config;
use carsure_common::insurance::reporting::MemoryReporter;
use carsure_common::insurance::{PremiumTier, Quote, QuoteReporter};
use carsure_common::vehicle::Vehicle;
use carsure_core::insurance::InsuranceService;
use carsure_core::premium;
use rayon::prelude::*;
use std::sync::Arc;

/// Lets the test keep a handle on the reporter after boxing it into the service.
struct SharedMemory(Arc<MemoryReporter>);

impl QuoteReporter for SharedMemory {
    fn report(&self, quote: &Quote) -> anyhow::Result<()> {
        self.0.report(quote)
    }
}

fn run(vehicle: &Vehicle, base_rate: u32) -> (Quote, Vec<String>) {
    let memory = Arc::new(MemoryReporter::new());
    let service = InsuranceService::new(Box::new(SharedMemory(memory.clone())));
    let quote = service
        .quote_and_report(vehicle, base_rate)
        .expect("memory reporter never fails");
    (quote, memory.lines())
}

/// The sample Honda City from 2013 pays twice the default base rate.
#[test]
fn sample_vehicle_with_default_config() {
    let cfg = Config::default();
    let (quote, lines) = run(&Vehicle::default_sample(), cfg.base_rate);

    assert_eq!(quote.premium, 10_000);
    assert_eq!(quote.tier, PremiumTier::Doubled);
    assert_eq!(
        lines,
        vec!["The insurance for this car of the model year 2013 is: 10000".to_string()]
    );
}

#[test]
fn newer_vehicle_pays_base_rate() {
    let (quote, lines) = run(&Vehicle::new("Civic", "Honda", 2021, 250_000), 5000);

    assert_eq!(quote.premium, 5000);
    assert_eq!(
        lines,
        vec!["The insurance for this car model is: 5000".to_string()]
    );
}

#[test]
fn threshold_year_pays_double() {
    let (quote, lines) = run(&Vehicle::new("Amaze", "Honda", 2020, 120_000), 5000);

    assert_eq!(quote.premium, 10_000);
    assert_eq!(
        lines,
        vec!["The insurance for this car of the model year 2020 is: 10000".to_string()]
    );
}

#[test]
fn implausible_inputs_follow_the_same_rule() {
    let (old, _) = run(&Vehicle::new("", "", 0, -1), 3);
    let (future, _) = run(&Vehicle::new("", "", 9999, i64::MIN), 3);

    assert_eq!(old.premium, 6);
    assert_eq!(future.premium, 3);
}

#[test]
fn quoting_does_not_touch_the_vehicle() {
    let vehicle = Vehicle::default_sample();
    let before = vehicle.clone();
    let _ = run(&vehicle, 5000);
    assert_eq!(vehicle, before);
}

#[test]
fn parallel_quotes_match_sequential_quotes() {
    let vehicles: Vec<(Vehicle, u32)> = (0..200)
        .map(|i| (Vehicle::new("Car", "Make", 1950 + i, i64::from(i)), (i as u32) * 10 + 1))
        .collect();

    let sequential: Vec<u64> = vehicles
        .iter()
        .map(|(vehicle, rate)| premium::calculate(vehicle, *rate))
        .collect();

    let parallel: Vec<u64> = vehicles
        .par_iter()
        .map(|(vehicle, rate)| premium::calculate(vehicle, *rate))
        .collect();

    assert_eq!(sequential, parallel);
}
