//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::BridgeConfig;
use crate::domain::error::ConfigError;

use super::args::ConfigAction;
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    cli_config: BridgeConfig,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().display().to_string());
            Ok(())
        }
        ConfigAction::Show => handle_show(store, cli_config, presenter).await,
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_show<S: ConfigStore>(
    store: &S,
    cli_config: BridgeConfig,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let file_config = store.load().await?;
    let merged = BridgeConfig::defaults().merge(file_config).merge(cli_config);

    let content =
        toml::to_string_pretty(&merged).map_err(|e| ConfigError::WriteError(e.to_string()))?;
    presenter.output(content.trim_end());
    Ok(())
}
