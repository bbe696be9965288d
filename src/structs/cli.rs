use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sitelyzer")]
#[clap(about = "Website quality analyzer with prioritized fix plans", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
