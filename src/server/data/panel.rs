use sea_orm::{
    sea_query::Query, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    model::panel::{AccessControlRule, Panel, PanelWithWelcomeMessage},
    util::parse::parse_sorted_snowflakes,
};

pub struct PanelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PanelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a panel by ID
    pub async fn get_by_id(&self, panel_id: i32) -> Result<Option<Panel>, DbErr> {
        entity::prelude::Panel::find_by_id(panel_id)
            .one(self.db)
            .await?
            .map(Panel::from_entity)
            .transpose()
    }

    /// Gets all panels of a guild joined with their welcome message embed, ordered by ID
    pub async fn get_by_guild_with_welcome_message(
        &self,
        guild_id: u64,
    ) -> Result<Vec<PanelWithWelcomeMessage>, DbErr> {
        let panels = entity::prelude::Panel::find()
            .filter(entity::panel::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::panel::Column::PanelId)
            .find_also_related(entity::prelude::Embed)
            .all(self.db)
            .await?;

        panels
            .into_iter()
            .map(|(panel, embed)| PanelWithWelcomeMessage::from_entity(panel, embed))
            .collect()
    }

    /// Gets the access-control rules of every panel in a guild, keyed by panel ID
    ///
    /// Rules for each panel are ordered by position. Panels without rules have no entry.
    pub async fn get_access_control_rules_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<i32, Vec<AccessControlRule>>, DbErr> {
        let guild_panels = Query::select()
            .column(entity::panel::Column::PanelId)
            .from(entity::panel::Entity)
            .and_where(entity::panel::Column::GuildId.eq(guild_id.to_string()))
            .to_owned();

        let rules = entity::prelude::PanelAccessControlRule::find()
            .filter(entity::panel_access_control_rule::Column::PanelId.in_subquery(guild_panels))
            .order_by_asc(entity::panel_access_control_rule::Column::PanelId)
            .order_by_asc(entity::panel_access_control_rule::Column::Position)
            .all(self.db)
            .await?;

        let mut by_panel: HashMap<i32, Vec<AccessControlRule>> = HashMap::new();
        for rule in rules {
            let rule = AccessControlRule::from_entity(rule)?;
            by_panel.entry(rule.panel_id).or_default().push(rule);
        }

        Ok(by_panel)
    }

    /// Checks whether the ticket opener is mentioned when a ticket opens from the panel
    pub async fn should_mention_user(&self, panel_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::PanelUserMention::find_by_id(panel_id)
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.should_mention_user).unwrap_or(false))
    }

    /// Gets the roles mentioned when a ticket opens from the panel
    pub async fn get_role_mentions(&self, panel_id: i32) -> Result<Vec<u64>, DbErr> {
        let rows = entity::prelude::PanelRoleMention::find()
            .filter(entity::panel_role_mention::Column::PanelId.eq(panel_id))
            .all(self.db)
            .await?;

        parse_sorted_snowflakes(rows.iter().map(|r| r.role_id.as_str()), "role_id")
    }

    /// Gets the IDs of the support teams assigned to the panel
    pub async fn get_team_ids(&self, panel_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::PanelTeam::find()
            .filter(entity::panel_team::Column::PanelId.eq(panel_id))
            .order_by_asc(entity::panel_team::Column::TeamId)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.team_id).collect())
    }
}
