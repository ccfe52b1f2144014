use clap::Parser;
use color_eyre::Result;

use gas_review::cli::Cli;
use gas_review::state::platform::AppPaths;
use gas_review::state::{App, AppConfig};
use gas_review::{logging, tui};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let paths = AppPaths::new();
    match paths.log_file() {
        Ok(log_file) => {
            if let Err(e) = logging::init(&log_file) {
                eprintln!("Logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    let config = AppConfig::load();
    let props = cli.build_props(&config)?;
    let config_path = AppConfig::config_path()
        .inspect_err(|e| tracing::warn!("Preferences will not be saved: {e}"))
        .ok();

    let mut app = App::new(props, config, config_path);
    let options = cli.terminal_options();
    let mut terminal = tui::init(options)?;
    let result = app.run(&mut terminal);
    tui::restore(options)?;

    result
}
