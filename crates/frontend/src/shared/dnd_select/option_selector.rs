//! Ordered, deduplicated column selection backing the drag-and-drop controls
//!
//! An `OptionSelector` is rebuilt from the owner's value on every render,
//! mutated by a single user interaction and then discarded; only the value
//! returned by [`OptionSelector::get_values`] survives. Index-based mutations
//! never fail: a stale index from an outdated render is ignored.

use std::collections::HashMap;

use contracts::shared::explore::{ColumnMeta, SelectionValue};

/// Outcome of comparing the selector with the owner's current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    Unchanged,
    Corrected(SelectionValue),
}

#[derive(Debug, Clone)]
pub struct OptionSelector {
    options: HashMap<String, ColumnMeta>,
    multi: bool,
    values: Vec<String>,
}

impl OptionSelector {
    /// Builds the selection from the owner's value.
    ///
    /// Identifiers missing from `options` are dropped (the dataset changed),
    /// duplicates keep their first position, and a single-select keeps at
    /// most one identifier.
    pub fn new(
        options: impl IntoIterator<Item = ColumnMeta>,
        multi: bool,
        value: &SelectionValue,
    ) -> Self {
        let options: HashMap<String, ColumnMeta> = options
            .into_iter()
            .map(|col| (col.column_name.clone(), col))
            .collect();

        let mut values: Vec<String> = Vec::new();
        for id in value.identifiers() {
            if !multi && !values.is_empty() {
                break;
            }
            if options.contains_key(id) && !values.contains(id) {
                values.push(id.clone());
            }
        }

        Self {
            options,
            multi,
            values,
        }
    }

    pub fn multi(&self) -> bool {
        self.multi
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A single-select holding its one value accepts no further additions
    pub fn is_full(&self) -> bool {
        !self.multi && !self.values.is_empty()
    }

    pub fn has(&self, column_name: &str) -> bool {
        self.values.iter().any(|v| v == column_name)
    }

    pub fn option(&self, column_name: &str) -> Option<&ColumnMeta> {
        self.options.get(column_name)
    }

    /// Selected columns in order, paired with their metadata
    pub fn resolved(&self) -> Vec<(usize, ColumnMeta)> {
        self.values
            .iter()
            .filter_map(|id| self.options.get(id).cloned())
            .enumerate()
            .collect()
    }

    /// Appends a column. Returns `false` when the column is unknown, already
    /// selected, or the selector is full.
    pub fn add(&mut self, column_name: &str) -> bool {
        if self.is_full() {
            log::debug!("option selector: single-select is full, '{}' ignored", column_name);
            return false;
        }
        if self.has(column_name) {
            log::debug!("option selector: '{}' already selected", column_name);
            return false;
        }
        if !self.options.contains_key(column_name) {
            log::debug!("option selector: unknown column '{}'", column_name);
            return false;
        }
        self.values.push(column_name.to_string());
        true
    }

    pub fn replace(&mut self, index: usize, column_name: &str) -> bool {
        if index >= self.values.len() {
            log::debug!("option selector: replace index {} out of range", index);
            return false;
        }
        if !self.options.contains_key(column_name) {
            log::debug!("option selector: unknown column '{}'", column_name);
            return false;
        }
        if let Some(pos) = self.values.iter().position(|v| v == column_name) {
            // Replacing a value with itself is fine, moving a duplicate in is not
            if pos != index {
                log::debug!("option selector: '{}' already selected at {}", column_name, pos);
            }
            return pos == index;
        }
        self.values[index] = column_name.to_string();
        true
    }

    pub fn del(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            log::debug!("option selector: del index {} out of range", index);
            return false;
        }
        self.values.remove(index);
        true
    }

    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.values.len() || b >= self.values.len() {
            log::debug!("option selector: swap ({}, {}) out of range", a, b);
            return false;
        }
        self.values.swap(a, b);
        true
    }

    /// Drop-acceptance predicate for a column dragged onto the control
    pub fn can_drop(&self, column_name: &str) -> bool {
        (self.multi || self.values.is_empty()) && !self.has(column_name)
    }

    /// Applies a dropped column: a filled single-select swaps its value,
    /// anything else appends.
    pub fn drop_column(&mut self, column_name: &str) -> bool {
        if !self.multi && !self.values.is_empty() {
            self.replace(0, column_name)
        } else {
            self.add(column_name)
        }
    }

    /// Value in the owner's shape: `Absent`/`Single` for a single-select,
    /// always `Multiple` otherwise.
    pub fn get_values(&self) -> SelectionValue {
        if self.multi {
            SelectionValue::Multiple(self.values.clone())
        } else {
            SelectionValue::from(self.values.first().cloned())
        }
    }

    /// Compares the normalized value with what the owner currently holds
    pub fn reconcile(&self, external: &SelectionValue) -> Reconciliation {
        let normalized = self.get_values();
        if &normalized == external {
            Reconciliation::Unchanged
        } else {
            Reconciliation::Corrected(normalized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ColumnMeta> {
        ["colA", "colB", "colC", "colX", "colY"]
            .into_iter()
            .map(ColumnMeta::new)
            .collect()
    }

    fn multi(value: SelectionValue) -> OptionSelector {
        OptionSelector::new(options(), true, &value)
    }

    fn single(value: SelectionValue) -> OptionSelector {
        OptionSelector::new(options(), false, &value)
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut sel = multi(SelectionValue::Multiple(vec![]));
        assert!(sel.add("colC"));
        assert!(sel.add("colA"));
        assert!(sel.add("colB"));
        assert_eq!(sel.values(), ids(&["colC", "colA", "colB"]).as_slice());
    }

    #[test]
    fn test_add_existing_is_noop() {
        let mut sel = multi(vec!["colA", "colB"].into());
        assert!(!sel.add("colA"));
        assert_eq!(sel.values(), ids(&["colA", "colB"]).as_slice());
    }

    #[test]
    fn test_add_unknown_is_noop() {
        let mut sel = multi(SelectionValue::Multiple(vec![]));
        assert!(!sel.add("missing"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_single_select_never_exceeds_one() {
        let mut sel = single(SelectionValue::Absent);
        assert!(sel.add("colA"));
        assert!(!sel.add("colB"));
        assert_eq!(sel.len(), 1);

        assert!(sel.drop_column("colB"));
        assert_eq!(sel.len(), 1);
        sel.swap(0, 0);
        assert!(!sel.replace(1, "colC"));
        assert_eq!(sel.len(), 1);

        assert!(sel.del(0));
        assert!(sel.drop_column("colC"));
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.get_values(), SelectionValue::from("colC"));
    }

    #[test]
    fn test_swap_is_self_inverse() {
        let mut sel = multi(vec!["colA", "colB", "colC"].into());
        let before = sel.values().to_vec();
        assert!(sel.swap(0, 2));
        assert_eq!(sel.values(), ids(&["colC", "colB", "colA"]).as_slice());
        assert!(sel.swap(0, 2));
        assert_eq!(sel.values(), before.as_slice());
    }

    #[test]
    fn test_swap_out_of_range_is_noop() {
        let mut sel = multi(vec!["colA", "colB"].into());
        assert!(!sel.swap(0, 5));
        assert!(!sel.swap(7, 1));
        assert_eq!(sel.values(), ids(&["colA", "colB"]).as_slice());
    }

    #[test]
    fn test_del_removes_element_at_index() {
        let mut sel = multi(vec!["colA", "colB", "colC"].into());
        assert!(sel.del(1));
        assert_eq!(sel.len(), 2);
        assert!(!sel.has("colB"));
        assert_eq!(sel.values(), ids(&["colA", "colC"]).as_slice());
    }

    #[test]
    fn test_del_out_of_range_is_noop() {
        let mut sel = multi(vec!["colA"].into());
        assert!(!sel.del(1));
        assert_eq!(sel.values(), ids(&["colA"]).as_slice());
    }

    #[test]
    fn test_replace_rules() {
        let mut sel = multi(vec!["colA", "colB"].into());
        assert!(!sel.replace(2, "colC"));
        assert!(!sel.replace(0, "colB"));
        assert!(sel.replace(0, "colA"));
        assert!(!sel.replace(0, "missing"));
        assert_eq!(sel.values(), ids(&["colA", "colB"]).as_slice());

        assert!(sel.replace(1, "colC"));
        assert_eq!(sel.values(), ids(&["colA", "colC"]).as_slice());
    }

    #[test]
    fn test_get_values_single_shape() {
        assert_eq!(single(SelectionValue::Absent).get_values(), SelectionValue::Absent);
        assert_eq!(
            single("colX".into()).get_values(),
            SelectionValue::Single("colX".to_string())
        );
    }

    #[test]
    fn test_get_values_multi_shape() {
        assert_eq!(
            multi(SelectionValue::Absent).get_values(),
            SelectionValue::Multiple(vec![])
        );
        assert_eq!(
            multi("colA".into()).get_values(),
            SelectionValue::from(vec!["colA"])
        );
    }

    #[test]
    fn test_construction_normalizes_value() {
        let sel = multi(vec!["colA", "gone", "colB", "colA"].into());
        assert_eq!(sel.values(), ids(&["colA", "colB"]).as_slice());

        let sel = single(vec!["gone", "colB", "colC"].into());
        assert_eq!(sel.get_values(), SelectionValue::from("colB"));

        let sel = single("gone".into());
        assert_eq!(sel.get_values(), SelectionValue::Absent);
    }

    #[test]
    fn test_can_drop() {
        let sel = single(SelectionValue::Absent);
        assert!(sel.can_drop("colA"));

        let sel = single("colA".into());
        assert!(!sel.can_drop("colB"));
        assert!(sel.is_full());

        let sel = multi(vec!["colA"].into());
        assert!(sel.can_drop("colB"));
        assert!(!sel.can_drop("colA"));
    }

    #[test]
    fn test_reconcile_equal_sequences_unchanged() {
        let value = SelectionValue::from(vec!["colA", "colB"]);
        assert_eq!(multi(value.clone()).reconcile(&value), Reconciliation::Unchanged);

        let value = SelectionValue::from("colA");
        assert_eq!(single(value.clone()).reconcile(&value), Reconciliation::Unchanged);
    }

    #[test]
    fn test_reconcile_reports_corrections() {
        // Shape mismatch
        let value = SelectionValue::from("colA");
        assert_eq!(
            multi(value.clone()).reconcile(&value),
            Reconciliation::Corrected(SelectionValue::from(vec!["colA"]))
        );

        // Column removed from the dataset
        let value = SelectionValue::from(vec!["colA", "gone"]);
        assert_eq!(
            multi(value.clone()).reconcile(&value),
            Reconciliation::Corrected(SelectionValue::from(vec!["colA"]))
        );

        // Single-select handed a list
        let value = SelectionValue::from(vec!["colX", "colY"]);
        assert_eq!(
            single(value.clone()).reconcile(&value),
            Reconciliation::Corrected(SelectionValue::from("colX"))
        );
    }

    #[test]
    fn test_resolved_pairs_metadata() {
        let cols = vec![
            ColumnMeta::new("colA").with_type("VARCHAR"),
            ColumnMeta::new("colB"),
        ];
        let sel = OptionSelector::new(cols, true, &vec!["colB", "colA"].into());
        let resolved = sel.resolved();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].0, 0);
        assert_eq!(resolved[0].1.column_name, "colB");
        assert_eq!(resolved[1].1.type_name.as_deref(), Some("VARCHAR"));
    }

    #[test]
    fn test_resolved_outlives_selector() {
        // Rendered options are built from a selector dropped right after
        let resolved = multi(vec!["colB", "colA"].into()).resolved();
        let names: Vec<String> = resolved
            .into_iter()
            .map(|(_, column)| column.column_name)
            .collect();
        assert_eq!(names, ids(&["colB", "colA"]));
    }

    #[test]
    fn test_multi_scenario() {
        let mut sel = multi(SelectionValue::Multiple(vec![]));
        sel.add("colA");
        assert_eq!(sel.get_values(), SelectionValue::from(vec!["colA"]));
        sel.add("colB");
        assert_eq!(sel.get_values(), SelectionValue::from(vec!["colA", "colB"]));
        sel.swap(0, 1);
        assert_eq!(sel.get_values(), SelectionValue::from(vec!["colB", "colA"]));
        sel.del(0);
        assert_eq!(sel.get_values(), SelectionValue::from(vec!["colA"]));
    }

    #[test]
    fn test_single_scenario() {
        let mut sel = single("colX".into());
        assert!(!sel.can_drop("colY"));
        assert!(sel.drop_column("colY"));
        assert_eq!(sel.get_values(), SelectionValue::from("colY"));
    }
}
