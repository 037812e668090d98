use sea_orm::{
    sea_query::Query, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::panel::{MultiPanel, Panel};

pub struct MultiPanelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MultiPanelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all multi-panels of a guild ordered by ID
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<MultiPanel>, DbErr> {
        let multi_panels = entity::prelude::MultiPanel::find()
            .filter(entity::multi_panel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::multi_panel::Column::Id)
            .all(self.db)
            .await?;

        multi_panels
            .into_iter()
            .map(MultiPanel::from_entity)
            .collect()
    }

    /// Gets the IDs of the panels grouped under a multi-panel
    pub async fn get_panel_ids(&self, multi_panel_id: i32) -> Result<Vec<i32>, DbErr> {
        let targets = entity::prelude::MultiPanelTarget::find()
            .filter(entity::multi_panel_target::Column::MultiPanelId.eq(multi_panel_id))
            .order_by_asc(entity::multi_panel_target::Column::PanelId)
            .all(self.db)
            .await?;

        Ok(targets.into_iter().map(|t| t.panel_id).collect())
    }

    /// Gets the panels grouped under a multi-panel
    pub async fn get_panels(&self, multi_panel_id: i32) -> Result<Vec<Panel>, DbErr> {
        let member_ids = Query::select()
            .column(entity::multi_panel_target::Column::PanelId)
            .from(entity::multi_panel_target::Entity)
            .and_where(entity::multi_panel_target::Column::MultiPanelId.eq(multi_panel_id))
            .to_owned();

        let panels = entity::prelude::Panel::find()
            .filter(entity::panel::Column::PanelId.in_subquery(member_ids))
            .order_by_asc(entity::panel::Column::PanelId)
            .all(self.db)
            .await?;

        panels.into_iter().map(Panel::from_entity).collect()
    }

    /// Gets every multi-panel that includes the given panel
    pub async fn get_containing_panel(&self, panel_id: i32) -> Result<Vec<MultiPanel>, DbErr> {
        let containing = Query::select()
            .column(entity::multi_panel_target::Column::MultiPanelId)
            .from(entity::multi_panel_target::Entity)
            .and_where(entity::multi_panel_target::Column::PanelId.eq(panel_id))
            .to_owned();

        let multi_panels = entity::prelude::MultiPanel::find()
            .filter(entity::multi_panel::Column::Id.in_subquery(containing))
            .order_by_asc(entity::multi_panel::Column::Id)
            .all(self.db)
            .await?;

        multi_panels
            .into_iter()
            .map(MultiPanel::from_entity)
            .collect()
    }
}
