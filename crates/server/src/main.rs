//! Notes API Server binary
//!
//! Loads `.env`, the optional `server` config file and `NOTES_API__*`
//! environment overrides, then serves until SIGTERM or Ctrl+C.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
