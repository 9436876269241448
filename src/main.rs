//! local-notifier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use local_notifier::cli::{
    app::{init_logging, load_merged_config, run_serve, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use local_notifier::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let cli_config = cli.to_config();

    let store = match cli.config.as_ref() {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            if let Err(e) = handle_config_command(action, &store, cli_config, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Serve) | None => {
            let (config, config_error) = load_merged_config(&store, cli_config).await;
            init_logging(config.log_level_or_default());

            if let Some(e) = config_error {
                tracing::warn!(error = %e, "ignoring config file, using defaults");
            }

            run_serve(config).await
        }
    }
}
