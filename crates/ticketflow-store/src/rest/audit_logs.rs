//! REST implementation of AuditLogRepository

use async_trait::async_trait;
use tracing::instrument;

use ticketflow_core::{AuditEntity, AuditLogEntry, AuditLogRepository, RepoResult};

use crate::models::AuditLogModel;

use super::{ensure_success, transport, RestClient};

/// Append-only audit log backed by the external REST resource
#[derive(Debug, Clone)]
pub struct RestAuditLogStore {
    client: RestClient,
}

impl RestAuditLogStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> RepoResult<Vec<AuditLogEntry>> {
        let response = self
            .client
            .http()
            .get(self.client.url("/auditLogs"))
            .query(params)
            .send()
            .await
            .map_err(transport)?;

        let models: Vec<AuditLogModel> = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        let mut entries: Vec<AuditLogEntry> =
            models.into_iter().map(AuditLogEntry::from).collect();
        // Display order is timestamp ascending regardless of store ordering
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }
}

#[async_trait]
impl AuditLogRepository for RestAuditLogStore {
    #[instrument(skip(self, entry))]
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<AuditLogEntry> {
        entry.validate()?;

        let response = self
            .client
            .http()
            .post(self.client.url("/auditLogs"))
            .json(&AuditLogModel::from(entry))
            .send()
            .await
            .map_err(transport)?;

        let model: AuditLogModel = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport)?;

        Ok(AuditLogEntry::from(model))
    }

    #[instrument(skip(self))]
    async fn for_entity(
        &self,
        entity: AuditEntity,
        entity_id: &str,
    ) -> RepoResult<Vec<AuditLogEntry>> {
        self.fetch(&[("entity", entity.as_str()), ("entityId", entity_id)])
            .await
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<AuditLogEntry>> {
        self.fetch(&[]).await
    }
}
