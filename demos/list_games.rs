use devcade_client::DevcadeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = DevcadeClient::new(None)?;

    match client.list_games().await {
        Ok(games) => {
            println!("{} game(s) available:", games.len());
            for game in games {
                println!("  {}  {} by {}", game.id, game.name, game.author);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}
