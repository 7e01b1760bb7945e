//! Diagram node model.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type key used when a node has no type or its type is not registered.
pub const DEFAULT_NODE_TYPE: &str = "default";

/// Unique, frame-stable identifier of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-node override of a global capability flag.
///
/// Serialized as an optional boolean: `null` or a missing key means
/// [`Override::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Override {
    /// Inherit the global flag.
    #[default]
    Unset,
    /// Explicitly enabled on this node.
    ForceTrue,
    /// Explicitly disabled on this node.
    ForceFalse,
}

impl Override {
    /// Whether the node carries an explicit value.
    pub fn is_set(self) -> bool {
        self != Override::Unset
    }

    /// Resolve against the matching global flag.
    ///
    /// An explicit value always wins; `Unset` inherits `global`.
    pub fn resolve(self, global: bool) -> bool {
        match self {
            Override::ForceTrue => true,
            Override::ForceFalse => false,
            Override::Unset => global,
        }
    }
}

impl From<Option<bool>> for Override {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Override::ForceTrue,
            Some(false) => Override::ForceFalse,
            None => Override::Unset,
        }
    }
}

impl From<Override> for Option<bool> {
    fn from(value: Override) -> Self {
        match value {
            Override::ForceTrue => Some(true),
            Override::ForceFalse => Some(false),
            Override::Unset => None,
        }
    }
}

impl From<bool> for Override {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

/// Side of a node where a connection anchor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    Top,
    Right,
    Bottom,
    Left,
}

/// A node in the diagram.
///
/// Width and height stay `None` until a layout pass has measured the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Type key used to look up the visual component.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Caller-owned payload.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Top-left corner in diagram space.
    pub position: Point,
    /// Measured width.
    #[serde(default)]
    pub width: Option<f64>,
    /// Measured height.
    #[serde(default)]
    pub height: Option<f64>,
    /// Whether a drag is in progress.
    #[serde(default)]
    pub is_dragging: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub draggable: Override,
    #[serde(default)]
    pub selectable: Override,
    #[serde(default)]
    pub connectable: Override,
    #[serde(default)]
    pub removable: Override,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_position: Option<HandlePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<HandlePosition>,
}

impl Node {
    /// Create an unmeasured node at the given diagram position.
    pub fn new(id: impl Into<NodeId>, position: Point) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            data: serde_json::Value::Null,
            position,
            width: None,
            height: None,
            is_dragging: false,
            style: None,
            class_name: None,
            draggable: Override::Unset,
            selectable: Override::Unset,
            connectable: Override::Unset,
            removable: Override::Unset,
            is_hidden: false,
            source_position: None,
            target_position: None,
        }
    }

    /// Set the type key.
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Set the measured size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the payload.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_draggable(mut self, value: impl Into<Override>) -> Self {
        self.draggable = value.into();
        self
    }

    pub fn with_selectable(mut self, value: impl Into<Override>) -> Self {
        self.selectable = value.into();
        self
    }

    pub fn with_connectable(mut self, value: impl Into<Override>) -> Self {
        self.connectable = value.into();
        self
    }

    pub fn with_removable(mut self, value: impl Into<Override>) -> Self {
        self.removable = value.into();
        self
    }

    /// Mark the node as being dragged.
    pub fn with_dragging(mut self, is_dragging: bool) -> Self {
        self.is_dragging = is_dragging;
        self
    }

    /// Type key, with `"default"` standing in for a missing type.
    pub fn type_key(&self) -> &str {
        self.node_type.as_deref().unwrap_or(DEFAULT_NODE_TYPE)
    }

    /// True iff both dimensions have been measured.
    pub fn is_initialized(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Measured size, if initialized.
    pub fn size(&self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }

    /// Bounding box in diagram space, if initialized.
    pub fn bounds(&self) -> Option<Rect> {
        self.size().map(|size| Rect::from_origin_size(self.position, size))
    }
}
