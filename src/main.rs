//! hbchat - terminal chat client
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;

/// hbchat - a minimal real-time terminal chat client
#[derive(Parser, Debug)]
#[command(name = "hbchat")]
#[command(about = "A minimal real-time terminal chat client", long_about = None)]
struct Args {
    /// Chat server host (default 104.236.25.60)
    #[arg(long)]
    host: Option<String>,

    /// Chat server port (default 3071)
    #[arg(long)]
    port: Option<u16>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    hbchat::run_client(hbchat::ClientOptions {
        host: args.host,
        port: args.port,
        config: args.config,
    })
    .await?;
    Ok(())
}
