//! Transcript archive client.
//!
//! Closed tickets have their message logs stored by a separate archive service. The
//! export pipeline reads them through the [`TranscriptArchive`] trait so tests can swap
//! in an in-memory archive.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::server::{error::archive::ArchiveError, model::ticket::Transcript};

#[async_trait]
pub trait TranscriptArchive: Send + Sync {
    /// Fetches the transcript of one ticket.
    ///
    /// # Returns
    /// - `Ok(Transcript)` - The archived message log
    /// - `Err(ArchiveError::NotFound)` - No transcript is stored for this ticket
    /// - `Err(ArchiveError)` - The archive could not be reached or answered unexpectedly
    async fn get_transcript(&self, guild_id: u64, ticket_id: i32)
        -> Result<Transcript, ArchiveError>;
}

/// Archive reached over HTTP.
///
/// Transcripts are addressed as `GET {base_url}/?guild={guild_id}&id={ticket_id}`.
#[derive(Clone)]
pub struct HttpTranscriptArchive {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranscriptArchive {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TranscriptArchive for HttpTranscriptArchive {
    async fn get_transcript(
        &self,
        guild_id: u64,
        ticket_id: i32,
    ) -> Result<Transcript, ArchiveError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("guild", guild_id.to_string()), ("id", ticket_id.to_string())])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Transcript(response.json().await?)),
            StatusCode::NOT_FOUND => Err(ArchiveError::NotFound {
                guild_id,
                ticket_id,
            }),
            status => Err(ArchiveError::UnexpectedStatus {
                ticket_id,
                status: status.as_u16(),
            }),
        }
    }
}
