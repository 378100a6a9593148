//! Utils

use clap::Parser;

/// Arguments for the pharmacy demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Path to a product catalog YAML file (defaults to the built-in pharmacy fixture)
    #[clap(short, long)]
    pub catalog: Option<String>,

    /// Output file path for the stock chart (defaults to stdout)
    #[clap(short, long)]
    pub out: Option<String>,
}
