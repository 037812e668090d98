use crate::{
    model::export::MultiPanelDto,
    server::{data::multi_panel::MultiPanelRepository, error::AppError, util::join::fan_out},
};

use super::ExportService;

impl ExportService {
    /// Reads multi-panels and the member panel IDs of each one.
    pub(super) async fn fetch_multi_panels(
        self,
        guild_id: u64,
    ) -> Result<Vec<MultiPanelDto>, AppError> {
        let multi_panels = MultiPanelRepository::new(&self.db)
            .get_by_guild(guild_id)
            .await?;

        let panel_ids = fan_out(
            multi_panels.iter().map(|multi_panel| multi_panel.id),
            self.concurrency,
            |id| {
                self.query(move |db| async move {
                    MultiPanelRepository::new(&db).get_panel_ids(id).await
                })
            },
        )
        .await?;

        Ok(multi_panels
            .into_iter()
            .zip(panel_ids)
            .map(|(multi_panel, panels)| multi_panel.into_dto(panels))
            .collect())
    }
}
