use crate::{
    model::export::FormDto,
    server::{data::form::FormRepository, error::AppError},
};

use super::ExportService;

impl ExportService {
    /// Reads forms and attaches their inputs in position order.
    pub(super) async fn fetch_forms(self, guild_id: u64) -> Result<Vec<FormDto>, AppError> {
        let (forms, mut inputs) = tokio::try_join!(
            self.query(move |db| async move { FormRepository::new(&db).get_by_guild(guild_id).await }),
            self.query(move |db| async move {
                FormRepository::new(&db).get_inputs_by_guild(guild_id).await
            }),
        )?;

        Ok(forms
            .into_iter()
            .map(|form| {
                let form_inputs = inputs.remove(&form.form_id).unwrap_or_default();
                form.into_dto(form_inputs)
            })
            .collect())
    }
}
