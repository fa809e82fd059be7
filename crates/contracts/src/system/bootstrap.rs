//! Bootstrap payload the host page embeds for the application
//!
//! The server renders it as JSON into the `data-bootstrap` attribute of the
//! mount element. Every section is optional so that a page can embed only
//! what it needs.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::dashboards::welcome::{
    ChartSummary, DashboardSummary, RecentActivity, SavedQuerySummary,
};
use crate::shared::explore::{ColumnMeta, ExploreFormData};
use crate::system::users::User;

/// Dataset the explore view is bound to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasourceInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapData {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub datasource: DatasourceInfo,
    #[serde(default)]
    pub form_data: ExploreFormData,
    #[serde(default)]
    pub recent_activity: Vec<RecentActivity>,
    #[serde(default)]
    pub dashboards: Vec<DashboardSummary>,
    #[serde(default)]
    pub saved_queries: Vec<SavedQuerySummary>,
    #[serde(default)]
    pub charts: Vec<ChartSummary>,
}

impl BootstrapData {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            anyhow::bail!("bootstrap payload is empty");
        }
        serde_json::from_str(raw).context("failed to parse bootstrap payload")
    }
}
