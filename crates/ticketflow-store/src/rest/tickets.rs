//! REST implementation of TicketRepository

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use ticketflow_core::{
    DomainError, RepoResult, Ticket, TicketId, TicketPatch, TicketQuery, TicketRepository,
};

use crate::models::{TicketModel, TicketPatchModel};

use super::{ensure_success, transport, RestClient};

/// Ticket store backed by the external REST resource
#[derive(Debug, Clone)]
pub struct RestTicketStore {
    client: RestClient,
}

impl RestTicketStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, id: &TicketId) -> RepoResult<Option<Ticket>> {
        let response = self
            .client
            .http()
            .get(self.client.url(&format!("/tickets/{id}")))
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let model: TicketModel = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        Ok(model.into_ticket(Some(id)))
    }
}

#[async_trait]
impl TicketRepository for RestTicketStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &TicketId) -> RepoResult<Option<Ticket>> {
        self.fetch(id).await
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &TicketQuery) -> RepoResult<Vec<Ticket>> {
        let mut params: Vec<(&str, String)> = vec![
            ("_page", query.page.to_string()),
            ("_limit", query.limit.to_string()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        if let Some(priority) = query.priority {
            params.push(("priority", priority.to_string()));
        }
        if let Some(search) = &query.search {
            params.push(("q", search.clone()));
        }

        let response = self
            .client
            .http()
            .get(self.client.url("/tickets"))
            .query(&params)
            .send()
            .await
            .map_err(transport)?;

        let models: Vec<TicketModel> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        // Records without an id are malformed; skip them rather than failing
        // the whole listing
        Ok(models
            .into_iter()
            .filter_map(|m| m.into_ticket(None))
            .collect())
    }

    #[instrument(skip(self, ticket))]
    async fn create(&self, ticket: &Ticket) -> RepoResult<Ticket> {
        let response = self
            .client
            .http()
            .post(self.client.url("/tickets"))
            .json(&TicketModel::for_create(ticket))
            .send()
            .await
            .map_err(transport)?;

        let model: TicketModel = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        model.into_ticket(None).ok_or_else(|| {
            DomainError::Transport("entity store returned a created ticket without an id".into())
        })
    }

    #[instrument(skip(self, patch))]
    async fn update(
        &self,
        id: &TicketId,
        patch: &TicketPatch,
        expected_version: i64,
    ) -> RepoResult<Ticket> {
        // The store enforces no preconditions itself, so re-validate against
        // a fresh read before writing. The window between this read and the
        // PATCH is bounded by the store's single-record atomicity.
        let current = self
            .fetch(id)
            .await?
            .ok_or_else(|| DomainError::TicketNotFound(id.clone()))?;

        if current.version != expected_version {
            return Err(DomainError::VersionConflict {
                id: id.clone(),
                expected: expected_version,
                found: current.version,
            });
        }

        let body = TicketPatchModel::new(patch, expected_version + 1);
        let response = self
            .client
            .http()
            .patch(self.client.url(&format!("/tickets/{id}")))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::TicketNotFound(id.clone()));
        }

        let model: TicketModel = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        model.into_ticket(Some(id)).ok_or_else(|| {
            DomainError::Transport("entity store returned an updated ticket without an id".into())
        })
    }
}
