use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::User;

/// Initialize structured logging based on verbosity level
///
/// Events go to stderr so stdout carries only the report.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(use_ansi())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }

    Ok(())
}

/// Color only when stderr is a terminal and NO_COLOR is unset
fn use_ansi() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "golang_hub=debug,info"
    } else {
        "golang_hub=info,warn"
    }
}

/// Log the configuration the application runs with
pub fn log_config_loaded(config: &Config) {
    tracing::debug!(
        app_name = %config.app_name,
        version = %config.version,
        port = config.port,
        "Configuration loaded"
    );
}

/// Log a newly created user
pub fn log_user_created(user: &User) {
    tracing::debug!(
        id = %user.id,
        name = %user.name,
        email = %user.email,
        created_at = %user.created_at.to_rfc3339(),
        "User created"
    );
}

/// Announce successful startup
pub fn log_startup_complete(config: &Config) {
    tracing::info!(
        version = %config.version,
        "{} started successfully!",
        config.app_name
    );
}
