use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::lookup::LookupArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Stock price lookup client")]
pub struct Cli {
    /// Minimum level of the JSON log lines
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn command(self) -> Command {
        self.command
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Post one ticker and period to the server and print the price summary
    Lookup(LookupArgs),
    /// List the period identifiers the server understands
    Periods,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Period;

    #[test]
    fn lookup_defaults() {
        let cli = Cli::try_parse_from(["stock-lookup", "lookup", "AAPL"]).expect("parses");
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        let Command::Lookup(args) = cli.command() else {
            panic!("expected lookup command");
        };
        assert_eq!(args.ticker, "AAPL");
        assert_eq!(args.period, Period::OneMonth);
        assert_eq!(args.server, crate::constants::DEFAULT_SERVER_URL);
        assert!(args.save_chart.is_none());
    }

    #[test]
    fn unknown_period_is_rejected() {
        let result = Cli::try_parse_from(["stock-lookup", "lookup", "AAPL", "--period", "2y"]);
        assert!(result.is_err());
    }
}
