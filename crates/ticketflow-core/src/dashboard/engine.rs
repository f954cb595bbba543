//! Metric computation and grouping
//!
//! Unknown metrics compute to zero; records with an unset group key bucket
//! under "UNKNOWN". Buckets are returned in name order so output is
//! deterministic.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::{Ticket, UserAccount};
use crate::value_objects::TicketStatus;

use super::config::{GroupKey, Metric, WidgetKind, WidgetQuery, WidgetSpec};

/// One bucket of a grouped frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupBucket {
    pub name: String,
    pub value: u64,
}

/// Computed widget payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetValue {
    Count(u64),
    Buckets(Vec<GroupBucket>),
}

/// A widget spec together with its computed value
#[derive(Debug, Clone, Serialize)]
pub struct WidgetData {
    pub id: &'static str,
    pub kind: WidgetKind,
    pub title: &'static str,
    pub value: WidgetValue,
}

/// Compute a scalar metric over the given collections.
pub fn compute_metric(metric: Metric, tickets: &[Ticket], users: &[UserAccount]) -> u64 {
    let count_status = |status: TicketStatus| {
        tickets.iter().filter(|t| t.status == status).count() as u64
    };

    match metric {
        Metric::Active => tickets.iter().filter(|t| t.status.is_active()).count() as u64,
        Metric::Reverify => count_status(TicketStatus::Reverify),
        Metric::Submitted => count_status(TicketStatus::Submitted),
        // Forwarded and management-pending are the same population seen from
        // opposite sides of the hand-off
        Metric::Forwarded | Metric::ManagementPending => {
            count_status(TicketStatus::ForwardedToManagement)
        }
        Metric::ActionTaken | Metric::AuditorPending => count_status(TicketStatus::ActionTaken),
        Metric::TotalUsers => users.len() as u64,
        Metric::ActiveUsers => users.iter().filter(|u| u.is_active()).count() as u64,
        Metric::Unknown => 0,
    }
}

/// Group a collection into a frequency table keyed by the given field.
pub fn group_frequencies(
    key: GroupKey,
    tickets: &[Ticket],
    users: &[UserAccount],
) -> Vec<GroupBucket> {
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();

    match key {
        GroupKey::Status => {
            for t in tickets {
                *buckets.entry(t.status.to_string()).or_default() += 1;
            }
        }
        GroupKey::Priority => {
            for t in tickets {
                *buckets.entry(t.priority.to_string()).or_default() += 1;
            }
        }
        GroupKey::AuditorDecision => {
            for t in tickets {
                let name = t
                    .auditor_decision
                    .map_or_else(|| "UNKNOWN".to_string(), |d| d.to_string());
                *buckets.entry(name).or_default() += 1;
            }
        }
        GroupKey::Role => {
            for u in users {
                *buckets.entry(u.role.to_string()).or_default() += 1;
            }
        }
        GroupKey::UserStatus => {
            for u in users {
                *buckets.entry(u.status.to_string()).or_default() += 1;
            }
        }
    }

    buckets
        .into_iter()
        .map(|(name, value)| GroupBucket { name, value })
        .collect()
}

/// Render a widget configuration against the given collections.
pub fn render(specs: &[WidgetSpec], tickets: &[Ticket], users: &[UserAccount]) -> Vec<WidgetData> {
    specs
        .iter()
        .map(|spec| {
            let value = match spec.query {
                WidgetQuery::Metric(metric) => {
                    WidgetValue::Count(compute_metric(metric, tickets, users))
                }
                WidgetQuery::GroupBy(key) => {
                    WidgetValue::Buckets(group_frequencies(key, tickets, users))
                }
            };
            WidgetData {
                id: spec.id,
                kind: spec.kind,
                title: spec.title,
                value,
            }
        })
        .collect()
}
