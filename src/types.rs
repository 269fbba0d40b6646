use chrono::NaiveDate;
use serde::Deserialize;

/// A game record as stored by the API.
///
/// Records are created server-side when an archive is uploaded; the client
/// only ever reads them back.
#[derive(Debug, Deserialize, Clone)]
pub struct Game {
    /// The server-assigned identifier of the game.
    pub id: String,
    /// The user that uploaded the game.
    pub author: String,
    /// The date the game was first uploaded.
    pub upload_date: NaiveDate,
    /// The display name of the game.
    pub name: String,
    /// The content hash of the stored archive, computed server-side.
    pub hash: String,
    /// The game's description.
    pub description: String,
}
