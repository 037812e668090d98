use crate::server::{
    data::settings::SettingsRepository,
    error::AppError,
    model::settings::{ExportSettings, DEFAULT_TICKET_LIMIT, DEFAULT_WELCOME_MESSAGE},
};

use super::ExportService;

impl ExportService {
    /// Reads every settings table of the guild concurrently and applies defaults.
    pub(super) async fn fetch_settings(self, guild_id: u64) -> Result<ExportSettings, AppError> {
        let (
            settings,
            claim_settings,
            auto_close,
            ticket_permissions,
            colours,
            welcome_message,
            ticket_limit,
            category,
            archive_channel,
            users_can_close,
            close_confirmation,
            feedback_enabled,
            naming_scheme,
            language,
        ) = tokio::try_join!(
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_settings(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_claim_settings(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_auto_close(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_ticket_permissions(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_colours(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_welcome_message(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_ticket_limit(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_category(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_archive_channel(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_users_can_close(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_close_confirmation(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_feedback_enabled(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_naming_scheme(guild_id).await
            }),
            self.query(move |db| async move {
                SettingsRepository::new(&db).get_active_language(guild_id).await
            }),
        )?;

        Ok(ExportSettings {
            settings,
            claim_settings,
            auto_close,
            ticket_permissions,
            colours,
            welcome_message: welcome_message_or_default(welcome_message),
            ticket_limit: ticket_limit_or_default(ticket_limit),
            category,
            archive_channel,
            naming_scheme,
            users_can_close,
            close_confirmation,
            feedback_enabled,
            language: language_or_unset(language),
        })
    }
}

fn welcome_message_or_default(message: String) -> String {
    if message.is_empty() {
        DEFAULT_WELCOME_MESSAGE.to_string()
    } else {
        message
    }
}

fn ticket_limit_or_default(limit: u8) -> u8 {
    if limit == 0 {
        DEFAULT_TICKET_LIMIT
    } else {
        limit
    }
}

fn language_or_unset(language: String) -> Option<String> {
    (!language.is_empty()).then_some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_welcome_message_falls_back_to_default() {
        assert_eq!(
            welcome_message_or_default(String::new()),
            DEFAULT_WELCOME_MESSAGE
        );
        assert_eq!(welcome_message_or_default("Hi".to_string()), "Hi");
    }

    #[test]
    fn zero_ticket_limit_becomes_five() {
        assert_eq!(ticket_limit_or_default(0), 5);
        assert_eq!(ticket_limit_or_default(1), 1);
        assert_eq!(ticket_limit_or_default(10), 10);
    }

    #[test]
    fn empty_language_is_unset() {
        assert_eq!(language_or_unset(String::new()), None);
        assert_eq!(language_or_unset("de".to_string()).as_deref(), Some("de"));
    }
}
