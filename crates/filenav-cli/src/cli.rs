use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filenav")]
#[command(about = "Navigate a list of items with the arrow keys", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Items to navigate, in display order
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Config file to use instead of the platform default (or set FILENAV_CONFIG)
    #[arg(long, value_name = "PATH", env = "FILENAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dispatch these comma-separated key identifiers headlessly and print each selection
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    pub replay: Option<Vec<String>>,
}
