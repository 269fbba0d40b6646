//! Fetches a game record and downloads its archive into `downloads/`.
//!
//! Usage:
//! `cargo run --example fetch_game -- <game_id>`

use devcade_client::DevcadeClient;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let id = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: cargo run --example fetch_game -- <game_id>"))?;

    let client = DevcadeClient::new(None)?;

    let game = client.get_game(&id).await?;
    println!("Fetching '{}' by {}", game.name, game.author);

    let path = client.download_game(&id, "downloads").await?;
    println!("Saved game archive to {}", path.display());

    Ok(())
}
