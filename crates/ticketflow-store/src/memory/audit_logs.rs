//! In-memory implementation of AuditLogRepository

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use ticketflow_core::{AuditEntity, AuditLogEntry, AuditLogRepository, RepoResult};

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<AuditLogEntry>,
    next_id: u64,
}

/// Append-only audit log held entirely in memory.
///
/// The entry vector is only ever pushed to; nothing here mutates or removes
/// a stored entry.
#[derive(Debug, Clone, Default)]
pub struct MemAuditLogStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemAuditLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (test helper)
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sorted(mut entries: Vec<AuditLogEntry>) -> Vec<AuditLogEntry> {
    // Stable sort keeps same-timestamp entries in append order
    entries.sort_by_key(|e| e.timestamp);
    entries
}

#[async_trait]
impl AuditLogRepository for MemAuditLogStore {
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<AuditLogEntry> {
        entry.validate()?;

        let mut inner = self.inner.write();
        inner.next_id += 1;
        let mut stored = entry.clone();
        stored.id = Some(inner.next_id.to_string());
        inner.entries.push(stored.clone());
        Ok(stored)
    }

    async fn for_entity(
        &self,
        entity: AuditEntity,
        entity_id: &str,
    ) -> RepoResult<Vec<AuditLogEntry>> {
        let inner = self.inner.read();
        Ok(sorted(
            inner
                .entries
                .iter()
                .filter(|e| e.entity == entity && e.entity_id == entity_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_all(&self) -> RepoResult<Vec<AuditLogEntry>> {
        Ok(sorted(self.inner.read().entries.clone()))
    }
}
