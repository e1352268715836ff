use clap::Parser;

use crate::{infrastructure::config::Config, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "URL",
        help = "Base URL of the fleet API, overrides api.base_url"
    )]
    pub base_url: Option<String>,

    #[arg(
        short,
        long,
        value_name = "ROWS",
        help = "Drivers per table page, overrides table.page_size"
    )]
    pub page_size: Option<usize>,
}

impl Cli {
    /// Applies the command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.table.page_size = page_size.max(1);
        }
    }
}
