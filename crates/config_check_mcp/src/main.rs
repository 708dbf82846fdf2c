mod cli;
mod config;
mod domain;
mod errors;
mod handlers;
mod report;
mod utils;

use cli::Cli;
use handlers::run;
use utils::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging()?;

    run(config)
}
