use sea_orm::DatabaseConnection;

use crate::server::{
    data::{multi_panel::MultiPanelRepository, panel::PanelRepository},
    error::AppError,
    util::join::fan_out,
};

pub struct PanelService<'a> {
    db: &'a DatabaseConnection,
    concurrency: usize,
}

impl<'a> PanelService<'a> {
    pub fn new(db: &'a DatabaseConnection, concurrency: usize) -> Self {
        Self { db, concurrency }
    }

    /// Checks whether switching a panel to `emote` would clash inside a multi-panel.
    ///
    /// A clash exists when any multi-panel containing the panel has another member panel,
    /// identified by a different message ID, already using the emote. Multi-panels are
    /// checked concurrently.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one multi-panel would contain the emote twice
    /// - `Ok(false)` - No conflict
    /// - `Err(AppError::NotFound)` - The panel does not exist
    /// - `Err(AppError::BadRequest)` - The panel belongs to another guild
    pub async fn has_emote_conflict(
        &self,
        guild_id: u64,
        panel_id: i32,
        emote: &str,
    ) -> Result<bool, AppError> {
        let panel = PanelRepository::new(self.db)
            .get_by_id(panel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Panel not found".to_string()))?;

        if panel.guild_id != guild_id {
            return Err(AppError::BadRequest("Guild ID does not match".to_string()));
        }

        let multi_panels = MultiPanelRepository::new(self.db)
            .get_containing_panel(panel.panel_id)
            .await?;

        let message_id = panel.message_id;
        let conflicts = fan_out(
            multi_panels.into_iter().map(|multi_panel| multi_panel.id),
            self.concurrency,
            |multi_panel_id| {
                let db = self.db.clone();
                let emote = emote.to_string();
                async move {
                    let members = MultiPanelRepository::new(&db)
                        .get_panels(multi_panel_id)
                        .await?;

                    Ok::<_, AppError>(members.iter().any(|member| {
                        member.message_id != message_id
                            && member.emoji_name.as_deref() == Some(emote.as_str())
                    }))
                }
            },
        )
        .await?;

        Ok(conflicts.into_iter().any(|conflict| conflict))
    }
}
