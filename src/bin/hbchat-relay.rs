//! hbchat-relay - broadcast server for hbchat clients

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hbchat-relay")]
#[command(about = "Relay every client's messages to all other clients", long_about = None)]
struct Args {
    /// Address to listen on (default 0.0.0.0)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (default 3071)
    #[arg(long)]
    port: Option<u16>,

    /// Path to relay.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    hbchat::run_relay(hbchat::RelayOptions {
        bind: args.bind,
        port: args.port,
        config: args.config,
    })
    .await?;
    Ok(())
}
