use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sf")]
#[command(about = "Storefront CLI: sign in, manage the local session, browse the catalog")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides config.toml and SF_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
