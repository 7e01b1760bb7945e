//! Diagram state store: the inputs of a render pass plus change notification.

use crate::capabilities::CapabilityPolicy;
use crate::node::{Node, NodeId};
use crate::selection::SelectedElements;
use crate::transform::Transform;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Which render input changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    Nodes,
    Transform,
    Viewport,
    Selection,
    Policy,
}

/// Handle returned by [`DiagramStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(StoreChange)>;

/// Serializable part of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramState {
    pub nodes: Vec<Node>,
    pub transform: Transform,
    /// Visible screen area.
    pub viewport_box: Rect,
    pub selected_elements: SelectedElements,
    #[serde(flatten)]
    pub policy: CapabilityPolicy,
}

/// Immutable view of the store for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    pub nodes: &'a [Node],
    pub transform: Transform,
    pub viewport_box: Rect,
    pub selected_elements: &'a SelectedElements,
    pub policy: CapabilityPolicy,
    /// Store revision the snapshot was taken at.
    pub revision: u64,
}

/// Holds the render inputs and notifies observers when they change.
///
/// Every mutation bumps [`DiagramStore::revision`], so callers can also poll
/// for changes instead of subscribing.
#[derive(Default)]
pub struct DiagramStore {
    state: DiagramState,
    revision: u64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for DiagramStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn check_unique_ids(nodes: &[Node]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(&node.id) {
            return Err(StoreError::DuplicateNode(node.id.clone()));
        }
    }
    Ok(())
}

impl DiagramStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from existing state, rejecting duplicate node ids.
    pub fn with_state(state: DiagramState) -> StoreResult<Self> {
        check_unique_ids(&state.nodes)?;
        Ok(Self {
            state,
            ..Self::default()
        })
    }

    /// Load a store from JSON.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Self::with_state(serde_json::from_str(json)?)
    }

    /// Serialize the current state to JSON.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    /// Monotonic change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Take a snapshot of the current inputs.
    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            nodes: &self.state.nodes,
            transform: self.state.transform,
            viewport_box: self.state.viewport_box,
            selected_elements: &self.state.selected_elements,
            policy: self.state.policy,
            revision: self.revision,
        }
    }

    /// Register an observer called synchronously after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(StoreChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn changed(&mut self, change: StoreChange) {
        self.revision += 1;
        log::trace!("Store change {:?} at revision {}", change, self.revision);
        for (_, observer) in &mut self.observers {
            observer(change);
        }
    }

    /// Replace the node collection, rejecting duplicate ids.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) -> StoreResult<()> {
        check_unique_ids(&nodes)?;
        self.state.nodes = nodes;
        self.changed(StoreChange::Nodes);
        Ok(())
    }

    /// Mutate a single node in place. Returns false if no node has this id.
    ///
    /// The id itself must not be changed by `update`.
    pub fn update_node(&mut self, id: &NodeId, update: impl FnOnce(&mut Node)) -> bool {
        let Some(node) = self.state.nodes.iter_mut().find(|node| &node.id == id) else {
            return false;
        };
        update(node);
        self.changed(StoreChange::Nodes);
        true
    }

    /// Record measured dimensions for a node.
    pub fn set_node_dimensions(&mut self, id: &NodeId, width: f64, height: f64) -> bool {
        self.update_node(id, |node| {
            node.width = Some(width);
            node.height = Some(height);
        })
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.state.transform = transform;
        self.changed(StoreChange::Transform);
    }

    pub fn set_viewport_box(&mut self, viewport_box: Rect) {
        self.state.viewport_box = viewport_box;
        self.changed(StoreChange::Viewport);
    }

    pub fn set_selected_elements(&mut self, selection: SelectedElements) {
        self.state.selected_elements = selection;
        self.changed(StoreChange::Selection);
    }

    pub fn set_policy(&mut self, policy: CapabilityPolicy) {
        self.state.policy = policy;
        self.changed(StoreChange::Policy);
    }
}
