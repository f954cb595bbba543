//! Dashboard service
//!
//! Fetches the backing collections and runs the aggregation engine over the
//! role's widget configuration.

use tracing::instrument;

use ticketflow_core::dashboard::{render, widgets_for_role};
use ticketflow_core::{Role, TicketQuery};

use crate::dto::DashboardResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upper bound on the collection scan behind a dashboard; matches the store's
/// maximum page size
const SCAN_LIMIT: i64 = 1000;

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    /// Create a new DashboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render the dashboard for the given role
    #[instrument(skip(self))]
    pub async fn render_for_role(&self, role: Role) -> ServiceResult<DashboardResponse> {
        let tickets = self
            .ctx
            .ticket_repo()
            .list(&TicketQuery {
                limit: SCAN_LIMIT,
                ..TicketQuery::default()
            })
            .await?;
        let users = self.ctx.user_directory().list().await?;

        let widgets = render(widgets_for_role(role), &tickets, &users);
        Ok(DashboardResponse { role, widgets })
    }
}
