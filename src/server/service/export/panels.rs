use crate::server::{
    data::{embed::EmbedRepository, panel::PanelRepository},
    error::AppError,
    model::panel::ExportPanel,
    util::join::fan_out,
};

use super::ExportService;

impl ExportService {
    /// Reads panels with their mentions, teams, welcome embed and access-control list.
    ///
    /// Guild-wide maps are read first, then the per-panel side tables are read for each
    /// panel concurrently.
    pub(super) async fn fetch_panels(self, guild_id: u64) -> Result<Vec<ExportPanel>, AppError> {
        let (panels, mut access_control, fields) = tokio::try_join!(
            self.query(move |db| async move {
                PanelRepository::new(&db)
                    .get_by_guild_with_welcome_message(guild_id)
                    .await
            }),
            self.query(move |db| async move {
                PanelRepository::new(&db)
                    .get_access_control_rules_by_guild(guild_id)
                    .await
            }),
            self.query(move |db| async move {
                EmbedRepository::new(&db).get_fields_by_guild(guild_id).await
            }),
        )?;

        let side_tables = fan_out(
            panels.iter().map(|row| row.panel.panel_id),
            self.concurrency,
            |panel_id| {
                let mention_user = self.query(move |db| async move {
                    PanelRepository::new(&db).should_mention_user(panel_id).await
                });
                let role_mentions = self.query(move |db| async move {
                    PanelRepository::new(&db).get_role_mentions(panel_id).await
                });
                let teams = self.query(move |db| async move {
                    PanelRepository::new(&db).get_team_ids(panel_id).await
                });

                async move { tokio::try_join!(mention_user, role_mentions, teams) }
            },
        )
        .await?;

        let panels = panels
            .into_iter()
            .zip(side_tables)
            .map(|(row, (mention_user, role_mentions, teams))| {
                let welcome_message = row.welcome_message.map(|embed| {
                    let embed_fields = fields.get(&embed.id).cloned().unwrap_or_default();
                    (embed, embed_fields)
                });
                let access_control_list = access_control
                    .remove(&row.panel.panel_id)
                    .unwrap_or_default();

                ExportPanel {
                    panel: row.panel,
                    welcome_message,
                    mention_user,
                    role_mentions,
                    teams,
                    access_control_list,
                }
            })
            .collect();

        Ok(panels)
    }
}
