//! Main app runner for serving the method channel

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::ports::ConfigStore;
use crate::application::{BridgeOptions, NotificationBridge};
use crate::domain::config::BridgeConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::create_notification_center;

use super::channel::MethodChannel;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Merge defaults, the config file, and CLI values (highest precedence).
///
/// A config file that cannot be loaded is skipped; the error is returned
/// alongside so it can be reported once logging is up.
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: BridgeConfig,
) -> (BridgeConfig, Option<ConfigError>) {
    let (file_config, error) = match store.load().await {
        Ok(config) => (config, None),
        Err(e) => (BridgeConfig::empty(), Some(e)),
    };

    let merged = BridgeConfig::defaults().merge(file_config).merge(cli_config);
    (merged, error)
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Serve the method channel on stdin/stdout until stdin closes
pub async fn run_serve(config: BridgeConfig) -> ExitCode {
    let center = create_notification_center(config.app_name_or_default());
    let options = BridgeOptions {
        sound: config.sound_or_default(),
        request_permission: config.request_permission_or_default(),
    };

    let bridge = NotificationBridge::start(center, options);
    let channel = MethodChannel::new(config.channel_or_default(), bridge);

    tracing::info!(
        channel = channel.name(),
        app_name = config.app_name_or_default(),
        "serving method channel on stdio"
    );

    match channel.serve(tokio::io::stdin(), tokio::io::stdout()).await {
        Ok(_) => {
            tracing::info!("stdin closed, shutting down");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "method channel I/O failed");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[tokio::test]
    async fn cli_values_override_file_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_name = \"FromFile\"\nsound = \"Glass\"\n").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let cli = BridgeConfig {
            app_name: Some("FromCli".to_string()),
            ..Default::default()
        };

        let (config, error) = load_merged_config(&store, cli).await;
        assert!(error.is_none());
        assert_eq!(config.app_name_or_default(), "FromCli");
        assert_eq!(config.sound.as_deref(), Some("Glass"));
        assert_eq!(config.channel_or_default(), "local_notifier");
    }

    #[tokio::test]
    async fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_name = [").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let (config, error) = load_merged_config(&store, BridgeConfig::empty()).await;
        assert!(matches!(error, Some(ConfigError::ParseError(_))));
        assert_eq!(config, BridgeConfig::defaults());
    }
}
