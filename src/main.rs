use anyhow::Result;
use clap::Parser;
use stock_lookup::cli::{self, Cli};
use stock_lookup::model::Period;
use stock_lookup::{logging, lookup};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level())?;

    match cli.command() {
        cli::Command::Lookup(args) => lookup::run(args).await,
        cli::Command::Periods => {
            for period in Period::ALL {
                println!("{:>4}  {}", period.as_str(), period.label());
            }
            Ok(())
        }
    }
}
