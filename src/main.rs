use anyhow::Result;
use kc_analyzer::cli;
use kc_analyzer::logging::init_logging;

fn main() -> Result<()> {
    init_logging();
    cli::run()
}
