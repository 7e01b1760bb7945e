//! Render descriptors handed to node components.

use crate::handlers::NodeHandlers;
use nodeflow_core::capabilities::ResolvedAttributes;
use nodeflow_core::config::{RendererConfig, SnapGrid};
use nodeflow_core::node::{HandlePosition, Node, NodeId};
use nodeflow_core::transform::Transform;

/// Fully resolved, frame-local data for drawing one node.
pub struct NodeDescriptor<'a, C, E> {
    /// The node this descriptor was built from.
    pub node: &'a Node,
    pub id: &'a NodeId,
    /// Requested type key (`"default"` when the node has none).
    pub node_type: &'a str,
    /// Component resolved from the registry.
    pub component: &'a C,
    pub data: &'a serde_json::Value,
    pub x_pos: f64,
    pub y_pos: f64,
    pub is_dragging: bool,
    pub transform: Transform,
    pub selected: bool,
    pub style: Option<&'a serde_json::Value>,
    pub class_name: Option<&'a str>,
    pub is_draggable: bool,
    pub is_removable: bool,
    pub is_selectable: bool,
    pub is_connectable: bool,
    pub source_position: Option<HandlePosition>,
    pub target_position: Option<HandlePosition>,
    pub select_nodes_on_drag: bool,
    pub is_hidden: bool,
    /// Width and height are measured; components should skip hit-testing
    /// while this is false.
    pub is_initialized: bool,
    pub snap_to_grid: bool,
    pub snap_grid: SnapGrid,
    pub handlers: &'a NodeHandlers<E>,
}

impl<'a, C, E> NodeDescriptor<'a, C, E> {
    /// Combine a node with its resolved attributes and the pass-wide inputs.
    pub fn new(
        node: &'a Node,
        attributes: &ResolvedAttributes<'a, C>,
        transform: Transform,
        config: &RendererConfig,
        handlers: &'a NodeHandlers<E>,
    ) -> Self {
        let capabilities = attributes.capabilities;
        Self {
            node,
            id: &node.id,
            node_type: attributes.type_key(),
            component: attributes.component(),
            data: &node.data,
            x_pos: node.position.x,
            y_pos: node.position.y,
            is_dragging: node.is_dragging,
            transform,
            selected: attributes.is_selected,
            style: node.style.as_ref(),
            class_name: node.class_name.as_deref(),
            is_draggable: capabilities.draggable,
            is_removable: capabilities.removable,
            is_selectable: capabilities.selectable,
            is_connectable: capabilities.connectable,
            source_position: node.source_position,
            target_position: node.target_position,
            select_nodes_on_drag: config.select_nodes_on_drag,
            is_hidden: node.is_hidden,
            is_initialized: attributes.is_initialized,
            snap_to_grid: config.snap_to_grid,
            snap_grid: config.snap_grid,
            handlers,
        }
    }
}
