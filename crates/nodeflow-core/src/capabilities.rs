//! Capability policy and per-node attribute resolution.

use crate::node::Node;
use crate::registry::{NodeTypes, TypeResolution};
use crate::selection::SelectedElements;
use serde::{Deserialize, Serialize};

/// Store-wide capability defaults applied to nodes without an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapabilityPolicy {
    pub nodes_draggable: bool,
    pub nodes_connectable: bool,
    pub elements_removable: bool,
    pub elements_selectable: bool,
}

impl Default for CapabilityPolicy {
    fn default() -> Self {
        Self {
            nodes_draggable: true,
            nodes_connectable: true,
            elements_removable: true,
            elements_selectable: true,
        }
    }
}

impl CapabilityPolicy {
    /// Policy with every capability switched off.
    pub fn locked() -> Self {
        Self {
            nodes_draggable: false,
            nodes_connectable: false,
            elements_removable: false,
            elements_selectable: false,
        }
    }
}

/// Effective capabilities of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedCapabilities {
    pub draggable: bool,
    pub connectable: bool,
    pub removable: bool,
    pub selectable: bool,
}

/// Resolve the four capabilities of a node against the global policy.
pub fn resolve_capabilities(node: &Node, policy: &CapabilityPolicy) -> ResolvedCapabilities {
    ResolvedCapabilities {
        draggable: node.draggable.resolve(policy.nodes_draggable),
        connectable: node.connectable.resolve(policy.nodes_connectable),
        removable: node.removable.resolve(policy.elements_removable),
        selectable: node.selectable.resolve(policy.elements_selectable),
    }
}

/// Everything the renderer needs to know about a node beyond its raw fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAttributes<'a, C> {
    pub capabilities: ResolvedCapabilities,
    /// Both dimensions have been measured.
    pub is_initialized: bool,
    pub is_selected: bool,
    /// Component lookup, including whether the default was substituted.
    pub resolution: TypeResolution<'a, C>,
}

impl<'a, C> ResolvedAttributes<'a, C> {
    /// The type key the node asked for (`"default"` when absent).
    pub fn type_key(&self) -> &'a str {
        self.resolution.type_key()
    }

    pub fn component(&self) -> &'a C {
        self.resolution.component()
    }
}

/// Resolve a node's attributes.
///
/// Pure: an unknown type shows up as [`TypeResolution::Fallback`] and it is
/// up to the caller to report it.
pub fn resolve<'a, C>(
    node: &'a Node,
    policy: &CapabilityPolicy,
    selection: &SelectedElements,
    node_types: &'a NodeTypes<C>,
) -> ResolvedAttributes<'a, C> {
    ResolvedAttributes {
        capabilities: resolve_capabilities(node, policy),
        is_initialized: node.is_initialized(),
        is_selected: selection.contains(&node.id),
        resolution: node_types.resolve(node.node_type.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{DEFAULT_NODE_TYPE, Override};
    use kurbo::Point;

    fn node(id: &str) -> Node {
        Node::new(id, Point::ZERO)
    }

    fn with_all(id: &str, value: Override) -> Node {
        node(id)
            .with_draggable(value)
            .with_connectable(value)
            .with_removable(value)
            .with_selectable(value)
    }

    #[test]
    fn test_explicit_true_wins_over_false_policy() {
        let resolved = resolve_capabilities(&with_all("a", Override::ForceTrue), &CapabilityPolicy::locked());
        assert_eq!(
            resolved,
            ResolvedCapabilities { draggable: true, connectable: true, removable: true, selectable: true }
        );
    }

    #[test]
    fn test_explicit_false_wins_over_true_policy() {
        let resolved = resolve_capabilities(&with_all("a", Override::ForceFalse), &CapabilityPolicy::default());
        assert_eq!(resolved, ResolvedCapabilities::default());
    }

    #[test]
    fn test_unset_inherits_policy() {
        let unset = node("a");
        let open = resolve_capabilities(&unset, &CapabilityPolicy::default());
        assert!(open.draggable && open.connectable && open.removable && open.selectable);

        let locked = resolve_capabilities(&unset, &CapabilityPolicy::locked());
        assert_eq!(locked, ResolvedCapabilities::default());
    }

    #[test]
    fn test_each_flag_maps_to_its_own_field() {
        let policy = CapabilityPolicy {
            nodes_draggable: true,
            nodes_connectable: false,
            elements_removable: true,
            elements_selectable: false,
        };
        let resolved = resolve_capabilities(&node("a"), &policy);
        assert!(resolved.draggable);
        assert!(!resolved.connectable);
        assert!(resolved.removable);
        assert!(!resolved.selectable);
    }

    #[test]
    fn test_draggable_scenario() {
        let nodes = [
            node("a").with_draggable(true),
            node("b"),
            node("c").with_draggable(false),
        ];
        let policy = CapabilityPolicy { nodes_draggable: false, ..CapabilityPolicy::default() };
        let draggable: Vec<bool> = nodes
            .iter()
            .map(|node| resolve_capabilities(node, &policy).draggable)
            .collect();
        assert_eq!(draggable, vec![true, false, false]);
    }

    #[test]
    fn test_selection_scenario() {
        let nodes = [node("a"), node("b"), node("c")];
        let selection = SelectedElements::from_ids(["b"]);
        let types = NodeTypes::new(());
        let selected: Vec<bool> = nodes
            .iter()
            .map(|node| resolve(node, &CapabilityPolicy::default(), &selection, &types).is_selected)
            .collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_empty_selection_selects_nothing() {
        let types = NodeTypes::new(());
        let unselected = node("a");
        for selection in [SelectedElements::unset(), SelectedElements::from_ids(Vec::<String>::new())] {
            let resolved = resolve(&unselected, &CapabilityPolicy::default(), &selection, &types);
            assert!(!resolved.is_selected);
        }
    }

    #[test]
    fn test_initialized_state() {
        let types = NodeTypes::new(());
        let selection = SelectedElements::unset();
        let policy = CapabilityPolicy::default();

        let unmeasured = node("a");
        assert!(!resolve(&unmeasured, &policy, &selection, &types).is_initialized);

        let mut half = node("b");
        half.height = Some(5.0);
        assert!(!resolve(&half, &policy, &selection, &types).is_initialized);

        let measured = node("c").with_size(5.0, 5.0);
        assert!(resolve(&measured, &policy, &selection, &types).is_initialized);
    }

    #[test]
    fn test_type_resolution() {
        let types = NodeTypes::new("Default").with("custom", "Custom");
        let policy = CapabilityPolicy::default();
        let selection = SelectedElements::unset();

        let custom = node("a").with_type("custom");
        let resolved = resolve(&custom, &policy, &selection, &types);
        assert_eq!(*resolved.component(), "Custom");
        assert!(!resolved.resolution.is_fallback());

        let missing = node("b").with_type("missing");
        let resolved = resolve(&missing, &policy, &selection, &types);
        assert_eq!(*resolved.component(), "Default");
        assert_eq!(resolved.type_key(), "missing");
        assert!(resolved.resolution.is_fallback());

        let untyped = node("c");
        let resolved = resolve(&untyped, &policy, &selection, &types);
        assert_eq!(resolved.type_key(), DEFAULT_NODE_TYPE);
        assert!(!resolved.resolution.is_fallback());
    }
}
