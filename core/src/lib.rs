//! # Carsure Core
//!
//! * **[`premium`]**: The model-year premium rule. Pure functions, no IO.
//! * **[`insurance`]**: The application service that quotes a vehicle and hands
//!   the result to a [`carsure_common::insurance::QuoteReporter`].

pub mod insurance;
pub mod premium;
