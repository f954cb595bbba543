//! Declarative widget specifications
//!
//! Each role sees a fixed set of widgets; the mapping is an exhaustive match
//! so adding a role forces a decision here.

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// How a widget renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetKind {
    Kpi,
    PieChart,
    BarChart,
}

/// Which collection a widget draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Tickets,
    Users,
}

/// Named scalar metrics.
///
/// `Unknown` absorbs metric names this engine does not recognize; they
/// compute to zero rather than failing the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Active,
    Reverify,
    Submitted,
    Forwarded,
    ManagementPending,
    ActionTaken,
    AuditorPending,
    TotalUsers,
    ActiveUsers,
    #[serde(other)]
    Unknown,
}

/// Fields a frequency table can group by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    /// Ticket status
    Status,
    /// Ticket priority
    Priority,
    /// Ticket auditor decision (unset buckets under UNKNOWN)
    AuditorDecision,
    /// User role
    Role,
    /// User account status
    UserStatus,
}

/// What a widget computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetQuery {
    Metric(Metric),
    GroupBy(GroupKey),
}

/// One widget in a role's dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    pub id: &'static str,
    pub kind: WidgetKind,
    pub title: &'static str,
    pub source: DataSource,
    pub query: WidgetQuery,
}

impl WidgetSpec {
    const fn kpi(id: &'static str, title: &'static str, source: DataSource, metric: Metric) -> Self {
        Self {
            id,
            kind: WidgetKind::Kpi,
            title,
            source,
            query: WidgetQuery::Metric(metric),
        }
    }

    const fn pie(id: &'static str, title: &'static str, source: DataSource, key: GroupKey) -> Self {
        Self {
            id,
            kind: WidgetKind::PieChart,
            title,
            source,
            query: WidgetQuery::GroupBy(key),
        }
    }

    const fn bar(id: &'static str, title: &'static str, source: DataSource, key: GroupKey) -> Self {
        Self {
            id,
            kind: WidgetKind::BarChart,
            title,
            source,
            query: WidgetQuery::GroupBy(key),
        }
    }
}

static OPERATIONS_WIDGETS: [WidgetSpec; 4] = [
    WidgetSpec::kpi(
        "op_kpi_active",
        "Active Tickets",
        DataSource::Tickets,
        Metric::Active,
    ),
    WidgetSpec::kpi(
        "op_kpi_reverify",
        "Reverify Pending",
        DataSource::Tickets,
        Metric::Reverify,
    ),
    WidgetSpec::pie(
        "op_status_chart",
        "Ticket Status Distribution",
        DataSource::Tickets,
        GroupKey::Status,
    ),
    WidgetSpec::bar(
        "op_priority_chart",
        "Priority Distribution",
        DataSource::Tickets,
        GroupKey::Priority,
    ),
];

static LEADERSHIP_WIDGETS: [WidgetSpec; 3] = [
    WidgetSpec::kpi(
        "lead_pending",
        "Pending Reviews",
        DataSource::Tickets,
        Metric::Submitted,
    ),
    WidgetSpec::kpi(
        "lead_forwarded",
        "Forwarded to Management",
        DataSource::Tickets,
        Metric::Forwarded,
    ),
    WidgetSpec::pie(
        "lead_status_chart",
        "Review Status Distribution",
        DataSource::Tickets,
        GroupKey::Status,
    ),
];

static MANAGEMENT_WIDGETS: [WidgetSpec; 3] = [
    WidgetSpec::kpi(
        "mgmt_pending",
        "Pending for Action",
        DataSource::Tickets,
        Metric::ManagementPending,
    ),
    WidgetSpec::kpi(
        "mgmt_action_taken",
        "Action Taken",
        DataSource::Tickets,
        Metric::ActionTaken,
    ),
    WidgetSpec::bar(
        "mgmt_priority_chart",
        "Priority Distribution",
        DataSource::Tickets,
        GroupKey::Priority,
    ),
];

static AUDITOR_WIDGETS: [WidgetSpec; 2] = [
    WidgetSpec::kpi(
        "audit_pending",
        "Pending Decisions",
        DataSource::Tickets,
        Metric::AuditorPending,
    ),
    WidgetSpec::pie(
        "audit_decision_chart",
        "Decision Distribution",
        DataSource::Tickets,
        GroupKey::AuditorDecision,
    ),
];

static ADMIN_WIDGETS: [WidgetSpec; 4] = [
    WidgetSpec::kpi(
        "admin_total_users",
        "Total Users",
        DataSource::Users,
        Metric::TotalUsers,
    ),
    WidgetSpec::kpi(
        "admin_active_users",
        "Active Users",
        DataSource::Users,
        Metric::ActiveUsers,
    ),
    WidgetSpec::pie(
        "admin_role_chart",
        "User Role Distribution",
        DataSource::Users,
        GroupKey::Role,
    ),
    WidgetSpec::bar(
        "admin_status_chart",
        "User Status Distribution",
        DataSource::Users,
        GroupKey::UserStatus,
    ),
];

/// The widget configuration a role's dashboard renders
pub fn widgets_for_role(role: Role) -> &'static [WidgetSpec] {
    match role {
        Role::Operations => &OPERATIONS_WIDGETS,
        Role::Leadership => &LEADERSHIP_WIDGETS,
        Role::Management => &MANAGEMENT_WIDGETS,
        Role::Auditor => &AUDITOR_WIDGETS,
        Role::Admin => &ADMIN_WIDGETS,
    }
}
