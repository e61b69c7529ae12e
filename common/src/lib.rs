//! # Carsure Common
//!
//! Shared building blocks for the `carsure` workspace.
//!
//! * **[`vehicle`]**: The vehicle record and the [`vehicle::ModelYear`] capability.
//! * **[`insurance`]**: Premium tiers, quotes and the reporting port.
//! * **[`config`]**: Runtime options assembled by the CLI.

pub mod config;
pub mod insurance;
pub mod vehicle;
