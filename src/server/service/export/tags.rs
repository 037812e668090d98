use crate::{
    model::export::TagDto,
    server::{
        data::{embed::EmbedRepository, tag::TagRepository},
        error::AppError,
    },
};

use super::ExportService;

impl ExportService {
    /// Reads tags and resolves the embed of every embed tag.
    pub(super) async fn fetch_tags(self, guild_id: u64) -> Result<Vec<TagDto>, AppError> {
        let (tags, embeds, fields) = tokio::try_join!(
            self.query(move |db| async move { TagRepository::new(&db).get_by_guild(guild_id).await }),
            self.query(move |db| async move {
                EmbedRepository::new(&db).get_by_guild(guild_id).await
            }),
            self.query(move |db| async move {
                EmbedRepository::new(&db).get_fields_by_guild(guild_id).await
            }),
        )?;

        let tags = tags
            .into_iter()
            .map(|tag| {
                let embed = tag
                    .embed_id
                    .filter(|_| tag.use_embed)
                    .and_then(|embed_id| embeds.get(&embed_id))
                    .map(|embed| {
                        let embed_fields = fields.get(&embed.id).cloned().unwrap_or_default();
                        (embed.clone(), embed_fields)
                    });

                tag.into_dto(embed)
            })
            .collect();

        Ok(tags)
    }
}
