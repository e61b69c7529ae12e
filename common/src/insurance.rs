//! # Insurance Models
//!
//! Values produced by the premium calculator and the port used to report them.
//!
//! * [`quote::PremiumTier`]: Which branch of the model-year rule applied.
//! * [`quote::Quote`]: A computed premium ready for display.
//! * [`reporting::QuoteReporter`]: Where quotes are sent once computed.

pub mod quote;
pub mod reporting;

pub use quote::{PremiumTier, Quote};
pub use reporting::QuoteReporter;

/// Base rate used when the caller does not supply one.
pub const DEFAULT_BASE_RATE: u32 = 5000;

/// Newest model year that still pays the doubled premium.
pub const MODEL_YEAR_THRESHOLD: i32 = 2020;
