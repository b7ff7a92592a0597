// src/application/queries/applications/list.rs
use super::ApplicationQueryService;
use crate::application::dto::{ActorContext, AdminApplicationDto, TenantApplicationDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::tenancy::ApplicationStatus;

pub struct AdminListQuery {
    /// One of the application statuses, `all`, or absent for no filter.
    pub status: Option<String>,
}

impl ApplicationQueryService {
    pub async fn list_mine(
        &self,
        actor: &ActorContext,
    ) -> ApplicationResult<Vec<TenantApplicationDto>> {
        let applications = self.applications.list_by_user(actor.user.id).await?;
        Ok(applications.into_iter().map(Into::into).collect())
    }

    pub async fn list_for_admin(
        &self,
        actor: &ActorContext,
        query: AdminListQuery,
    ) -> ApplicationResult<Vec<AdminApplicationDto>> {
        actor.user.ensure_admin()?;

        let filter = match query.status.as_deref() {
            None | Some("all") => None,
            Some(value) => Some(
                value
                    .parse::<ApplicationStatus>()
                    .map_err(|_| ApplicationError::validation("Invalid status filter"))?,
            ),
        };

        let rows = self.applications.list_with_property(filter).await?;
        Ok(rows
            .into_iter()
            .map(|(application, property)| {
                let (property_units, property_city) = match property {
                    Some(property) => (property.units, Some(property.city)),
                    None => (Default::default(), None),
                };
                AdminApplicationDto {
                    application: application.into(),
                    property_units,
                    property_city,
                }
            })
            .collect())
    }
}
