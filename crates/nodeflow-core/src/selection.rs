//! Selected element set.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Ordered set of currently selected element ids.
///
/// `None` means nothing has been selected yet, which behaves like an empty
/// selection. Ids may refer to nodes or edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedElements(Option<Vec<NodeId>>);

impl SelectedElements {
    /// Selection that has never been set.
    pub fn unset() -> Self {
        Self(None)
    }

    /// Selection holding the given ids, in order.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self(Some(ids.into_iter().map(Into::into).collect()))
    }

    /// Whether the element with this id is selected.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.0
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|selected| selected == id))
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[NodeId] {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_contains_nothing() {
        let selection = SelectedElements::unset();
        assert!(!selection.contains(&NodeId::new("a")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_contains_nothing() {
        let selection = SelectedElements::from_ids(Vec::<NodeId>::new());
        assert!(!selection.contains(&NodeId::new("a")));
    }

    #[test]
    fn test_contains() {
        let selection = SelectedElements::from_ids(["b", "edge-1"]);
        assert!(selection.contains(&NodeId::new("b")));
        assert!(!selection.contains(&NodeId::new("a")));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_serde_null_is_unset() {
        let selection: SelectedElements = serde_json::from_str("null").unwrap();
        assert_eq!(selection, SelectedElements::unset());
        let selection: SelectedElements = serde_json::from_str(r#"["x"]"#).unwrap();
        assert!(selection.contains(&NodeId::new("x")));
    }
}
