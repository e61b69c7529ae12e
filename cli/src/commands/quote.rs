use colored::*;
use tracing::info;

use crate::terminal::{colors, print, reporter::StdoutReporter};
use carsure_common::{config::Config, insurance::MODEL_YEAR_THRESHOLD, insurance::PremiumTier, vehicle::Vehicle};
use carsure_core::insurance::InsuranceService;

type Detail = (String, ColoredString);

pub fn quote(vehicle: &Vehicle, cfg: &Config) -> anyhow::Result<()> {
    print::header("insurance quote", cfg.quiet);
    if cfg.quiet == 0 {
        print_vehicle_tree(vehicle);
    }

    let service = InsuranceService::new(Box::new(StdoutReporter));
    let quote = service.quote_and_report(vehicle, cfg.base_rate)?;

    match quote.tier {
        PremiumTier::Doubled => info!(
            "Model year {} is {} or older, base rate of {} doubled",
            quote.year, MODEL_YEAR_THRESHOLD, cfg.base_rate
        ),
        PremiumTier::Standard => info!(
            "Model year {} is newer than {}, base rate of {} applies",
            quote.year, MODEL_YEAR_THRESHOLD, cfg.base_rate
        ),
    }

    Ok(())
}

fn print_vehicle_tree(vehicle: &Vehicle) {
    print::tree_head(0, &format!("{} {}", vehicle.brand(), vehicle.model()));
    let details: Vec<Detail> = vec![
        ("Model".to_string(), vehicle.model().normal()),
        ("Brand".to_string(), vehicle.brand().normal()),
        ("Year".to_string(), vehicle.year().to_string().color(colors::ACCENT)),
        ("Price".to_string(), vehicle.price().to_string().color(colors::ACCENT)),
    ];
    print::as_tree_one_level(details);
}
