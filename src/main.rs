use clap::Parser;
use tracing::info;

use pacer::app::App;
use pacer::cli::Cli;
use pacer::input;
use pacer::logging::init_tracing;
use pacer::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    // Load and validate before touching the terminal so errors print normally
    let document = input::load(&cli.source())?;
    info!(source = %document.source, bytes = document.text.len(), "document loaded");

    let mut app = App::new(document.text, cli.run_config())?;
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
