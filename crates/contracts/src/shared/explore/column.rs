use serde::{Deserialize, Serialize};

/// Dataset column as exposed to the explore view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Physical column name, used as the column identifier
    pub column_name: String,
    /// Human-readable label configured on the dataset
    #[serde(default)]
    pub verbose_name: Option<String>,
    /// Database type name (e.g. "VARCHAR", "BIGINT")
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Temporal column flag
    #[serde(default)]
    pub is_dttm: bool,
}

impl ColumnMeta {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            verbose_name: None,
            type_name: None,
            is_dttm: false,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Label shown to the user: verbose name when configured, column name otherwise
    pub fn label(&self) -> &str {
        self.verbose_name
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(&self.column_name)
    }
}
