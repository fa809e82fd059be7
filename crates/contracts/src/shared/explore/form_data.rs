use serde::{Deserialize, Serialize};

use super::SelectionValue;

/// Column-control values of a chart being explored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploreFormData {
    /// Dimensions to group by (multi-select)
    #[serde(default = "empty_sequence")]
    pub groupby: SelectionValue,
    /// Column plotted on the x axis (single-select)
    #[serde(default)]
    pub x_axis: SelectionValue,
}

impl Default for ExploreFormData {
    fn default() -> Self {
        Self {
            groupby: empty_sequence(),
            x_axis: SelectionValue::Absent,
        }
    }
}

fn empty_sequence() -> SelectionValue {
    SelectionValue::Multiple(Vec::new())
}
