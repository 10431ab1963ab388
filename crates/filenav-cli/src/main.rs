mod cli;
mod replay;

use clap::Parser;
use cli::Cli;
use filenav_core::FilenavConfig;
use filenav_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FILENAV_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => FilenavConfig::load_from(path)?,
        None => FilenavConfig::load(),
    };

    match cli.replay {
        Some(keys) => {
            let stdout = std::io::stdout();
            replay::run(cli.items, &keys, stdout.lock())?;
        }
        None => {
            tracing::info!("Starting interactive navigation over {} items", cli.items.len());
            let mut app = App::new(cli.items, config);
            app.run().await?;
        }
    }

    Ok(())
}
