use crate::{
    model::export::SupportTeamDto,
    server::{data::support_team::SupportTeamRepository, error::AppError, util::join::fan_out},
};

use super::ExportService;

impl ExportService {
    /// Reads support teams with their member users and roles.
    pub(super) async fn fetch_staff_teams(
        self,
        guild_id: u64,
    ) -> Result<Vec<SupportTeamDto>, AppError> {
        let teams = SupportTeamRepository::new(&self.db)
            .get_by_guild(guild_id)
            .await?;

        let members = fan_out(
            teams.iter().map(|team| team.id),
            self.concurrency,
            |team_id| {
                let users = self.query(move |db| async move {
                    SupportTeamRepository::new(&db).get_members(team_id).await
                });
                let roles = self.query(move |db| async move {
                    SupportTeamRepository::new(&db).get_roles(team_id).await
                });

                async move { tokio::try_join!(users, roles) }
            },
        )
        .await?;

        Ok(teams
            .into_iter()
            .zip(members)
            .map(|(team, (users, roles))| team.into_dto(users, roles))
            .collect())
    }
}
