//! This demo uploads a local game archive together with a title field.
//!
//! It initializes a `DevcadeClient` and calls the `upload_game` method, which
//! streams the archive to the `games/upload` endpoint as a multipart form.
//! When the server accepts the upload, the success message is printed.
//!
//! To run this demo, a zip archive must exist at `./testsmall.zip`. The target
//! deployment can be overridden via the `DEVCADE_API_URL` environment variable.
//!
//! Usage:
//! `cargo run --example upload_game`

use devcade_client::DevcadeClient;

const GAME_PATH: &str = "./testsmall.zip";
const TITLE: &str = "uploadTest";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = DevcadeClient::new(None)?;

    println!("Uploading '{}' as '{}'", GAME_PATH, TITLE);
    if let Some(message) = client.upload_game(GAME_PATH, TITLE).await? {
        println!("{}", message);
    }

    Ok(())
}
