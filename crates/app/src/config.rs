use hydroatlas_core::{
    AccessConfig, CompactParity, DeniedBehavior, NavigationConfig, ShellConfig,
};
use std::sync::OnceLock;

static CONFIG: OnceLock<ShellConfig> = OnceLock::new();

const CONFIG_ENV: &str = "HYDROATLAS_CONFIG";

/// Compiled-in configuration, used when no file can be read (always the
/// case on web).
const BUNDLED_CONFIG: &str = include_str!("../hydroatlas.toml");

/// Load the shell configuration once. Call before launching the app.
///
/// Reads the file named by `HYDROATLAS_CONFIG` if set, otherwise the bundled
/// `hydroatlas.toml`. A broken file logs a warning and falls back to the
/// bundled config, and a broken bundle to the defaults.
pub fn load_shell_config() -> &'static ShellConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let from_file = std::env::var(CONFIG_ENV).ok().and_then(|path| {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match ShellConfig::from_toml(&contents) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(%path, error = %e, "ignoring invalid config file");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(%path, error = %e, "config file not readable");
                    None
                }
            }
        });

        let config = from_file.unwrap_or_else(|| {
            ShellConfig::from_toml(BUNDLED_CONFIG).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "bundled config invalid, using defaults");
                ShellConfig::default()
            })
        });

        tracing::info!(
            compact = ?config.navigation.compact,
            on_denied = ?config.access.on_denied,
            accounts = config.accounts.len(),
            "shell configuration loaded"
        );
        config
    })
}

/// The loaded configuration. Returns defaults if
/// [`load_shell_config`] hasn't been called yet.
pub fn shell_config() -> &'static ShellConfig {
    static DEFAULT: ShellConfig = ShellConfig {
        navigation: NavigationConfig {
            compact: CompactParity::Source,
        },
        access: AccessConfig {
            on_denied: DeniedBehavior::Silent,
        },
        accounts: Vec::new(),
    };
    CONFIG.get().unwrap_or(&DEFAULT)
}
