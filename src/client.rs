use crate::error::DevcadeError;
use crate::types::Game;
use reqwest::multipart;
use reqwest::StatusCode;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{info, warn};
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080/api/";

/// The main client for interacting with the Devcade games API.
///
/// It holds the shared `reqwest::Client` and the base URL for all API requests.
/// It is designed to be cloneable and safe to share across threads.
#[derive(Clone)]
pub struct DevcadeClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DevcadeClient {
    /// Creates a new `DevcadeClient`.
    ///
    /// The base URL is taken from the `base_url` parameter if present. If it's
    /// `None`, it falls back to the `DEVCADE_API_URL` environment variable and
    /// then to the default local deployment address.
    ///
    /// # Errors
    ///
    /// - `DevcadeError::RequestFailed` if the internal HTTP client fails to build.
    /// - `DevcadeError::UrlParseFailed` if the resolved base URL is invalid.
    pub fn new(base_url: Option<String>) -> Result<Self, DevcadeError> {
        let base_url = base_url
            .or_else(|| env::var("DEVCADE_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::with_base_url(&base_url)
    }

    /// Creates a new `DevcadeClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a different deployment.
    ///
    /// # Errors
    ///
    /// - `DevcadeError::RequestFailed` if the internal HTTP client fails to build.
    /// - `DevcadeError::UrlParseFailed` if the provided `base_url` is invalid.
    pub fn with_base_url(base_url: &str) -> Result<Self, DevcadeError> {
        let client = reqwest::Client::builder().build()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Uploads a game archive together with its title.
    ///
    /// The archive is sent to the `games/upload` endpoint as a
    /// `multipart/form-data` request with two parts: a `title` text field and
    /// the streamed `file` contents. The file is read incrementally, so large
    /// archives are never buffered in memory.
    ///
    /// # Arguments
    ///
    /// * `game_path` - The path to the local game archive to upload.
    /// * `title` - The title under which the game is registered.
    ///
    /// # Returns
    ///
    /// `Some("Upload complete")` when the server answers with status 200. Any
    /// other status is logged together with the response body and yields
    /// `None`.
    ///
    /// # Errors
    ///
    /// Failures while opening the file, assembling the form, or reaching the
    /// server propagate unaltered; no retry or recovery is attempted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use devcade_client::DevcadeClient;
    /// # #[tokio::main]
    /// # async fn main() -> anyhow::Result<()> {
    /// let client = DevcadeClient::new(None)?;
    /// if let Some(message) = client.upload_game("./testsmall.zip", "uploadTest").await? {
    ///     println!("{}", message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_game<P: AsRef<Path>>(
        &self,
        game_path: P,
        title: &str,
    ) -> Result<Option<String>, DevcadeError> {
        let url = self.base_url.join("games/upload")?;

        let file_part = Self::stream_part(game_path.as_ref()).await?;
        let form = multipart::Form::new()
            .text("title", title.to_string())
            .part("file", file_part);

        info!("awaiting response....");
        let response = self.client.post(url).multipart(form).send().await?;
        info!("response received!");

        if response.status() == StatusCode::OK {
            Ok(Some("Upload complete".to_string()))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "upload was not accepted");
            Ok(None)
        }
    }

    /// Retrieves every game known to the API.
    ///
    /// # Returns
    ///
    /// The full catalog as a `Vec` of [`Game`] records.
    pub async fn list_games(&self) -> Result<Vec<Game>, DevcadeError> {
        let url = self.base_url.join("games/")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            let games: Vec<Game> = response.json().await?;
            Ok(games)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DevcadeError::ApiError { message: body })
        }
    }

    /// Retrieves a single game record.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier of the game to query.
    pub async fn get_game(&self, id: &str) -> Result<Game, DevcadeError> {
        let url = self.base_url.join(&format!("games/{}", id))?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            let game: Game = response.json().await?;
            Ok(game)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DevcadeError::ApiError { message: body })
        }
    }

    /// Downloads a game's stored archive to a destination directory.
    ///
    /// The archive is written as `{id}.zip` inside `dest_dir`, which is
    /// created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier of the game to download.
    /// * `dest_dir` - The local directory path where the archive will be saved.
    ///
    /// # Errors
    ///
    /// This function can return an error if the download fails, if the
    /// destination directory or file cannot be created, or if there's an issue
    /// writing the archive to disk.
    pub async fn download_game<P: AsRef<Path>>(
        &self,
        id: &str,
        dest_dir: P,
    ) -> Result<PathBuf, DevcadeError> {
        let url = self.base_url.join(&format!("games/{}/game", id))?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DevcadeError::ApiError {
                message: format!("Failed to download game: status {}", response.status()),
            });
        }

        fs::create_dir_all(dest_dir.as_ref()).await?;

        let file_path = dest_dir.as_ref().join(format!("{}.zip", id));
        let mut file = File::create(&file_path).await?;
        let content = response.bytes().await?;
        file.write_all(&content).await?;
        file.flush().await?;

        Ok(file_path)
    }

    /// Replaces the stored archive of an existing game.
    ///
    /// The new archive is sent to the `games/{id}/game` endpoint as a single
    /// streamed `file` part.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier of the game to update.
    /// * `game_path` - The path to the replacement archive.
    ///
    /// # Returns
    ///
    /// The refreshed [`Game`] record, including the new content hash.
    pub async fn update_game_binary<P: AsRef<Path>>(
        &self,
        id: &str,
        game_path: P,
    ) -> Result<Game, DevcadeError> {
        let url = self.base_url.join(&format!("games/{}/game", id))?;

        let file_part = Self::stream_part(game_path.as_ref()).await?;
        let form = multipart::Form::new().part("file", file_part);

        let response = self.client.put(url).multipart(form).send().await?;

        if response.status().is_success() {
            let game: Game = response.json().await?;
            Ok(game)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DevcadeError::ApiError { message: body })
        }
    }

    /// Builds a streamed multipart part from a local file.
    ///
    /// The part carries the file's name and a MIME type guessed from its
    /// extension, falling back to `application/octet-stream`.
    async fn stream_part(path: &Path) -> Result<multipart::Part, DevcadeError> {
        let file = File::open(path).await?;
        let stream = FramedRead::new(file, BytesCodec::new());
        let file_body = reqwest::Body::wrap_stream(stream);

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                DevcadeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "Could not determine file name",
                ))
            })?
            .to_string();

        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();

        let part = multipart::Part::stream(file_body)
            .file_name(file_name)
            .mime_str(&mime_type)?;

        Ok(part)
    }
}
