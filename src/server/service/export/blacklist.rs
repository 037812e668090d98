use crate::server::{
    data::blacklist::BlacklistRepository,
    error::AppError,
    model::export::{Blacklist, BLACKLIST_USER_LIMIT},
};

use super::ExportService;

impl ExportService {
    pub(super) async fn fetch_blacklist(self, guild_id: u64) -> Result<Blacklist, AppError> {
        let (users, roles) = tokio::try_join!(
            self.query(move |db| async move {
                BlacklistRepository::new(&db)
                    .get_users(guild_id, BLACKLIST_USER_LIMIT)
                    .await
            }),
            self.query(move |db| async move {
                BlacklistRepository::new(&db).get_roles(guild_id).await
            }),
        )?;

        Ok(Blacklist { users, roles })
    }
}
