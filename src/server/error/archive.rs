use thiserror::Error;

/// Errors returned by a transcript archive.
///
/// `NotFound` is a normal outcome for tickets whose transcript was never stored,
/// callers decide whether it is fatal.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The archive holds no transcript for this ticket.
    #[error("Transcript not found for ticket {ticket_id} in guild {guild_id}")]
    NotFound { guild_id: u64, ticket_id: i32 },

    /// The request to the archive could not be completed or its body could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The archive answered with a status other than 200 or 404.
    #[error("Archive responded with unexpected status {status} for ticket {ticket_id}")]
    UnexpectedStatus { ticket_id: i32, status: u16 },
}
