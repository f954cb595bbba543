//! In-memory implementation of TicketRepository

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use ticketflow_core::{
    DomainError, RepoResult, Ticket, TicketId, TicketPatch, TicketQuery, TicketRepository,
};

#[derive(Debug, Default)]
struct Inner {
    tickets: BTreeMap<String, Ticket>,
    // Sequential ids, like the fake store's auto-increment
    next_id: u64,
}

/// Ticket store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemTicketStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tickets (test helper)
    pub fn len(&self) -> usize {
        self.inner.read().tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches(ticket: &Ticket, query: &TicketQuery) -> bool {
    if let Some(status) = query.status {
        if ticket.status != status {
            return false;
        }
    }
    if let Some(priority) = query.priority {
        if ticket.priority != priority {
            return false;
        }
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !ticket.title.to_lowercase().contains(&needle)
            && !ticket.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl TicketRepository for MemTicketStore {
    async fn find_by_id(&self, id: &TicketId) -> RepoResult<Option<Ticket>> {
        Ok(self.inner.read().tickets.get(id.as_str()).cloned())
    }

    async fn list(&self, query: &TicketQuery) -> RepoResult<Vec<Ticket>> {
        let inner = self.inner.read();
        let mut tickets: Vec<Ticket> = inner
            .tickets
            .values()
            .filter(|t| matches(t, query))
            .cloned()
            .collect();
        tickets.sort_by_key(|t| t.created_at);

        let page = query.page.max(1) as usize;
        let limit = query.limit.max(1) as usize;
        Ok(tickets
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect())
    }

    async fn create(&self, ticket: &Ticket) -> RepoResult<Ticket> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = TicketId::new(inner.next_id.to_string());

        let mut stored = ticket.clone();
        stored.id = id.clone();
        inner.tickets.insert(id.into_inner(), stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: &TicketId,
        patch: &TicketPatch,
        expected_version: i64,
    ) -> RepoResult<Ticket> {
        let mut inner = self.inner.write();
        let ticket = inner
            .tickets
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::TicketNotFound(id.clone()))?;

        if ticket.version != expected_version {
            return Err(DomainError::VersionConflict {
                id: id.clone(),
                expected: expected_version,
                found: ticket.version,
            });
        }

        ticket.apply(patch);
        Ok(ticket.clone())
    }
}
