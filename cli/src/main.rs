mod commands;
mod terminal;

use commands::{CommandLine, quote};
use carsure_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let args = commands.quote_args();

    let cfg = Config {
        base_rate: args.base_rate,
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg);

    quote::quote(&args.vehicle, &cfg)
}
