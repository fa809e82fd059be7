use serde::{Deserialize, Serialize};

/// Value of a column control as seen by its owner.
///
/// Single-select controls hold `Absent` or `Single`, multi-select controls
/// hold `Multiple`. On the wire the value is untagged: `null`, a string, or
/// an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

impl SelectionValue {
    /// Column identifiers in order, regardless of shape
    pub fn identifiers(&self) -> &[String] {
        match self {
            Self::Absent => &[],
            Self::Single(id) => std::slice::from_ref(id),
            Self::Multiple(ids) => ids,
        }
    }

    pub fn into_identifiers(self) -> Vec<String> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(id) => vec![id],
            Self::Multiple(ids) => ids,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers().is_empty()
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}

impl From<Option<String>> for SelectionValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Single)
    }
}

impl From<String> for SelectionValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for SelectionValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for SelectionValue {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}

impl From<Vec<&str>> for SelectionValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        assert_eq!(serde_json::to_string(&SelectionValue::Absent).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&SelectionValue::from("gender")).unwrap(),
            r#""gender""#
        );
        assert_eq!(
            serde_json::to_string(&SelectionValue::from(vec!["gender", "state"])).unwrap(),
            r#"["gender","state"]"#
        );
        assert_eq!(
            serde_json::to_string(&SelectionValue::Multiple(vec![])).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_parse_wire_shape() {
        let absent: SelectionValue = serde_json::from_str("null").unwrap();
        assert_eq!(absent, SelectionValue::Absent);

        let single: SelectionValue = serde_json::from_str(r#""ds""#).unwrap();
        assert_eq!(single, SelectionValue::Single("ds".to_string()));

        let multiple: SelectionValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(multiple, SelectionValue::from(vec!["a", "b"]));
    }

    #[test]
    fn test_identifiers() {
        assert!(SelectionValue::Absent.is_empty());
        assert!(SelectionValue::Multiple(vec![]).is_empty());
        assert_eq!(SelectionValue::from("x").identifiers(), ["x".to_string()]);
        assert_eq!(
            SelectionValue::from(vec!["a", "b"]).into_identifiers(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(SelectionValue::from(None), SelectionValue::Absent);
        assert!(!SelectionValue::from("x").is_sequence());
    }
}
