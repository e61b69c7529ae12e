use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PremiumTier {
    /// Model year at or before the threshold. Pays twice the base rate.
    Doubled,
    /// Newer vehicles. Pays the base rate unchanged.
    Standard,
}

impl PremiumTier {
    pub fn multiplier(&self) -> u64 {
        match self {
            PremiumTier::Doubled => 2,
            PremiumTier::Standard => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PremiumTier::Doubled => "Doubled",
            PremiumTier::Standard => "Standard",
        }
    }
}

/// A premium computed for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub year: i32,
    pub tier: PremiumTier,
    pub premium: u64,
}

impl Quote {
    pub fn new(year: i32, tier: PremiumTier, premium: u64) -> Self {
        Self {
            year,
            tier,
            premium,
        }
    }
}

impl fmt::Display for Quote {
    /// Renders the single report line written to stdout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            PremiumTier::Doubled => write!(
                f,
                "The insurance for this car of the model year {} is: {}",
                self.year, self.premium
            ),
            PremiumTier::Standard => {
                write!(f, "The insurance for this car model is: {}", self.premium)
            }
        }
    }
}
