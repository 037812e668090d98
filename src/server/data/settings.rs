//! Per-guild settings lookups.
//!
//! Every settings concern is stored in its own table keyed by guild ID. A guild without a
//! row for a table gets that table's zero value; defaulting rules are applied by the
//! settings aggregator, not here.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::settings::{
    archive_channel_from_entity, category_from_entity, AutoCloseSettings, ClaimSettings,
    ColourMap, GuildSettings, NamingScheme, TicketPermissions,
};

pub struct SettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the main settings row for a guild
    pub async fn get_settings(&self, guild_id: u64) -> Result<GuildSettings, DbErr> {
        let settings = entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(settings.map(GuildSettings::from_entity).unwrap_or_default())
    }

    pub async fn get_claim_settings(&self, guild_id: u64) -> Result<ClaimSettings, DbErr> {
        let settings = entity::prelude::ClaimSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(settings.map(ClaimSettings::from_entity).unwrap_or_default())
    }

    pub async fn get_auto_close(&self, guild_id: u64) -> Result<AutoCloseSettings, DbErr> {
        let settings = entity::prelude::AutoClose::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(settings.map(AutoCloseSettings::from_entity).unwrap_or_default())
    }

    pub async fn get_ticket_permissions(&self, guild_id: u64) -> Result<TicketPermissions, DbErr> {
        let permissions = entity::prelude::TicketPermissions::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(permissions
            .map(TicketPermissions::from_entity)
            .unwrap_or_default())
    }

    /// Gets the guild's colour scheme with defaults filled in for unset colours
    pub async fn get_colours(&self, guild_id: u64) -> Result<ColourMap, DbErr> {
        let overrides = entity::prelude::CustomColour::find()
            .filter(entity::custom_colour::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::custom_colour::Column::ColourId)
            .all(self.db)
            .await?;

        Ok(ColourMap::from_overrides(
            overrides.into_iter().map(|c| (c.colour_id, c.colour)),
        ))
    }

    /// Gets the stored welcome message, empty when unset
    pub async fn get_welcome_message(&self, guild_id: u64) -> Result<String, DbErr> {
        let message = entity::prelude::WelcomeMessage::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(message.map(|m| m.welcome_message).unwrap_or_default())
    }

    /// Gets the stored ticket limit, 0 when unset
    pub async fn get_ticket_limit(&self, guild_id: u64) -> Result<u8, DbErr> {
        let limit = entity::prelude::TicketLimit::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        match limit {
            Some(limit) => u8::try_from(limit.limit)
                .map_err(|e| DbErr::Custom(format!("Failed to parse ticket limit: {}", e))),
            None => Ok(0),
        }
    }

    /// Gets the category new ticket channels are created in, 0 when unset
    pub async fn get_category(&self, guild_id: u64) -> Result<u64, DbErr> {
        let category = entity::prelude::ChannelCategory::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        category.map(category_from_entity).unwrap_or(Ok(0))
    }

    pub async fn get_archive_channel(&self, guild_id: u64) -> Result<Option<u64>, DbErr> {
        let channel = entity::prelude::ArchiveChannel::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(channel
            .map(archive_channel_from_entity)
            .transpose()?
            .flatten())
    }

    pub async fn get_users_can_close(&self, guild_id: u64) -> Result<bool, DbErr> {
        let row = entity::prelude::UsersCanClose::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.users_can_close).unwrap_or_default())
    }

    pub async fn get_close_confirmation(&self, guild_id: u64) -> Result<bool, DbErr> {
        let row = entity::prelude::CloseConfirmation::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.confirm).unwrap_or_default())
    }

    pub async fn get_feedback_enabled(&self, guild_id: u64) -> Result<bool, DbErr> {
        let row = entity::prelude::FeedbackEnabled::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.feedback_enabled).unwrap_or_default())
    }

    pub async fn get_naming_scheme(&self, guild_id: u64) -> Result<NamingScheme, DbErr> {
        let row = entity::prelude::NamingScheme::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        row.map(NamingScheme::from_entity)
            .unwrap_or(Ok(NamingScheme::default()))
    }

    /// Gets the guild's active language code, empty when unset
    pub async fn get_active_language(&self, guild_id: u64) -> Result<String, DbErr> {
        let row = entity::prelude::ActiveLanguage::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(row.map(|r| r.language).unwrap_or_default())
    }
}
