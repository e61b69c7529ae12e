//! # Insurance Service
//!
//! Implements the "quote a vehicle" use case.
//!
//! Computing the premium and presenting it are kept apart: the calculation
//! lives in [`crate::premium`], presentation behind [`QuoteReporter`].

use carsure_common::insurance::{Quote, QuoteReporter};
use carsure_common::vehicle::Vehicle;
use tracing::{debug, info_span};

use crate::premium;

/// Application Service for insurance quotes.
///
/// Orchestrates one quote by:
/// 1. delegating the premium rule to [`premium::quote`].
/// 2. handing the result to the [`QuoteReporter`].
pub struct InsuranceService {
    reporter: Box<dyn QuoteReporter>,
}

impl InsuranceService {
    pub fn new(reporter: Box<dyn QuoteReporter>) -> Self {
        Self { reporter }
    }

    /// Quotes `vehicle` against `base_rate` and reports the result.
    pub fn quote_and_report(&self, vehicle: &Vehicle, base_rate: u32) -> anyhow::Result<Quote> {
        let span = info_span!("quote", model = vehicle.model(), brand = vehicle.brand());
        let _guard = span.enter();

        let quote = premium::quote(vehicle, base_rate);
        debug!(
            year = quote.year,
            tier = quote.tier.as_str(),
            premium = quote.premium,
            "premium computed"
        );

        self.reporter.report(&quote)?;
        Ok(quote)
    }
}
