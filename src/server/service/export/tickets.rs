use crate::server::{
    data::ticket::TicketRepository,
    error::{archive::ArchiveError, AppError},
    model::ticket::{ExportTicket, TicketQueryOptions},
    util::join::fan_out,
};

use super::ExportService;

impl ExportService {
    /// Reads tickets with ratings, close metadata and transcripts.
    ///
    /// Runs in three phases: ticket IDs, then ratings and close metadata for those IDs,
    /// then one transcript task per ticket. Tickets without an archived transcript are
    /// left out of the export.
    pub(super) async fn fetch_tickets(self, guild_id: u64) -> Result<Vec<ExportTicket>, AppError> {
        let ticket_ids: Vec<i32> = TicketRepository::new(&self.db)
            .get_by_options(TicketQueryOptions::for_guild(guild_id))
            .await?
            .into_iter()
            .map(|ticket| ticket.id)
            .collect();

        let (mut ratings, mut close_metadata) = tokio::try_join!(
            self.query({
                let ticket_ids = ticket_ids.clone();
                move |db| async move {
                    TicketRepository::new(&db)
                        .get_ratings(guild_id, &ticket_ids)
                        .await
                }
            }),
            self.query({
                let ticket_ids = ticket_ids.clone();
                move |db| async move {
                    TicketRepository::new(&db)
                        .get_close_metadata(guild_id, &ticket_ids)
                        .await
                }
            }),
        )?;

        let transcripts = fan_out(ticket_ids.iter().copied(), self.concurrency, |ticket_id| {
            let archive = self.archive.clone();
            async move {
                match archive.get_transcript(guild_id, ticket_id).await {
                    Ok(transcript) => Ok(Some(transcript)),
                    Err(err @ ArchiveError::NotFound { .. }) => {
                        tracing::debug!("{}", err);
                        Ok(None)
                    }
                    Err(err) => Err(AppError::from(err)),
                }
            }
        })
        .await?;

        let tickets = ticket_ids
            .into_iter()
            .zip(transcripts)
            .filter_map(|(ticket_id, transcript)| {
                Some(ExportTicket {
                    ticket_id,
                    close: close_metadata.remove(&ticket_id),
                    rating: ratings.remove(&ticket_id),
                    transcript: transcript?,
                })
            })
            .collect();

        Ok(tickets)
    }
}
