pub mod quote;

use carsure_common::insurance::DEFAULT_BASE_RATE;
use carsure_common::vehicle::Vehicle;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "carsure")]
#[command(about = "Quotes car insurance premiums by model year.", version)]
pub struct CommandLine {
    /// Hide the header and vehicle summary
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote the insurance premium for a vehicle
    #[command(alias = "q")]
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Vehicle as model:brand:year:price
    #[arg(default_value_t = Vehicle::default_sample())]
    pub vehicle: Vehicle,

    /// Premium before the model-year adjustment
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BASE_RATE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub base_rate: u32,
}

impl Default for QuoteArgs {
    fn default() -> Self {
        Self {
            vehicle: Vehicle::default_sample(),
            base_rate: DEFAULT_BASE_RATE,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Arguments of the quote to run. A bare `carsure` quotes the sample vehicle.
    pub fn quote_args(&self) -> QuoteArgs {
        match &self.command {
            Some(Commands::Quote(args)) => args.clone(),
            None => QuoteArgs::default(),
        }
    }
}
