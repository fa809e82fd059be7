use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the user did with an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    #[default]
    Viewed,
    Edited,
    Created,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [Self::Viewed, Self::Edited, Self::Created];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewed => "Viewed",
            Self::Edited => "Edited",
            Self::Created => "Created",
        }
    }
}

/// Favorite / Mine switch of the welcome page lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipFilter {
    #[default]
    Favorite,
    Mine,
}

impl OwnershipFilter {
    pub const ALL: [OwnershipFilter; 2] = [Self::Favorite, Self::Mine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorite => "Favorite",
            Self::Mine => "Mine",
        }
    }
}

/// Kind of object a recent activity entry points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Dashboard,
    Chart,
    SavedQuery,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Chart => "Chart",
            Self::SavedQuery => "Saved query",
        }
    }
}

/// Entry of the "Recents" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub item_title: String,
    pub item_url: String,
    pub item_type: ObjectType,
    pub action: ActivityKind,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub id: i64,
    pub dashboard_title: String,
    pub url: String,
    /// User ids of the owners
    #[serde(default)]
    pub owners: Vec<i64>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub published: bool,
    pub changed_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub id: i64,
    pub slice_name: String,
    pub viz_type: String,
    pub url: String,
    #[serde(default)]
    pub owners: Vec<i64>,
    #[serde(default)]
    pub favorite: bool,
    pub changed_on: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQuerySummary {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    pub database_name: String,
    pub sql: String,
    /// User id of the author
    pub created_by: i64,
    #[serde(default)]
    pub favorite: bool,
    pub changed_on: DateTime<Utc>,
}
