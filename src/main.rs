use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use dayplan_tui::{Config, Profile, TaskStore, cli::Cli, utils};

fn main() -> Result<()> {
    // Set up error reporting with color-eyre
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine profile: --dev flag enables dev mode, otherwise use prod
    let profile = if cli.dev { Profile::Dev } else { Profile::Prod };

    // Load configuration with the determined profile
    // Note: --config is parsed but not yet used to override the config path
    let config = Config::load_with_profile(profile)?;

    // Seed the store with the requested date, or today
    let start_date = match cli.date {
        Some(ref text) => utils::parse_date(text)
            .wrap_err_with(|| format!("Invalid --date '{}', expected YYYY-MM-DD", text))?,
        None => utils::today(),
    };
    let store = TaskStore::new(start_date);

    let app = dayplan_tui::tui::App::new(config, store);
    dayplan_tui::tui::run_event_loop(app)?;

    Ok(())
}
