//! hbchat - a minimal real-time terminal chat client and its relay server
//!
//! The binaries are thin wrappers around [`run_client`] and [`run_relay`].
//! All logic lives in the workspace crates:
//!
//! - `hbchat-core`: transcript, projection, errors, logging
//! - `hbchat-net`: the server connection
//! - `hbchat-app`: state, messages, update, configuration
//! - `hbchat-tui`: terminal front end and frame loop
//! - `hbchat-relay`: broadcast server

use std::path::PathBuf;

use hbchat_app::config::load_settings_or_default;
use hbchat_app::Settings;
use hbchat_core::prelude::*;
use hbchat_net::Connection;
use hbchat_relay::{default_relay_config_path, load_relay_settings, Relay, RelaySettings};

pub use hbchat_app as app;
pub use hbchat_core as core;
pub use hbchat_net as net;
pub use hbchat_relay as relay;
pub use hbchat_tui as tui;

/// Command-line overrides for the client
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
}

/// Command-line overrides for the relay
#[derive(Debug, Clone, Default)]
pub struct RelayOptions {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
}

/// Load the config file, apply flag overrides, and validate
pub fn resolve_client_settings(options: &ClientOptions) -> Result<Settings> {
    let mut settings = load_settings_or_default(options.config.as_deref());
    if let Some(host) = &options.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = options.port {
        settings.server.port = port;
    }
    settings.validate()?;
    Ok(settings)
}

pub fn resolve_relay_settings(options: &RelayOptions) -> RelaySettings {
    let path = options.config.clone().or_else(default_relay_config_path);
    let mut settings = match path {
        Some(path) => load_relay_settings(&path),
        None => RelaySettings::default(),
    };
    if let Some(bind) = &options.bind {
        settings.bind = bind.clone();
    }
    if let Some(port) = options.port {
        settings.port = port;
    }
    settings
}

/// Run the chat client until the user quits.
///
/// Setup failures (invalid config, connect failure, terminal init) are
/// returned before the terminal is taken over.
pub async fn run_client(options: ClientOptions) -> Result<()> {
    hbchat_core::logging::init()?;

    let settings = resolve_client_settings(&options)?;
    info!("Server: {}", settings.server.label());

    let connection = Connection::connect(
        &settings.server.host,
        settings.server.port,
        settings.server.connect_timeout(),
    )
    .await
    .with_context(|| format!("Could not reach {}", settings.server.label()))?
    .with_chunk_size(settings.network.read_chunk_bytes);

    let result = hbchat_tui::run(&settings, connection).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "hbchat: session ended with an error, logs are in {}",
            hbchat_core::logging::get_log_directory().display()
        );
    }
    info!("hbchat exiting");
    result
}

/// Run the relay until Ctrl+C
pub async fn run_relay(options: RelayOptions) -> Result<()> {
    hbchat_core::logging::init_stderr();

    let settings = resolve_relay_settings(&options);
    let relay = Relay::bind(settings).await.context("Relay setup failed")?;

    tokio::select! {
        result = relay.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Relay shutting down");
            Ok(())
        }
    }
}
