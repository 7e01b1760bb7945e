//! Nodeflow Core Library
//!
//! Data model and per-frame logic for the node renderer of a diagram editor:
//! viewport culling, capability resolution and node type lookup.

pub mod capabilities;
pub mod config;
pub mod geometry;
pub mod node;
pub mod registry;
pub mod selection;
pub mod store;
pub mod transform;

pub use capabilities::{CapabilityPolicy, ResolvedAttributes, ResolvedCapabilities, resolve, resolve_capabilities};
pub use config::{ConfigError, DEFAULT_SNAP_GRID, RendererConfig, SnapGrid};
pub use geometry::{nodes_inside, select_visible};
pub use node::{DEFAULT_NODE_TYPE, HandlePosition, Node, NodeId, Override};
pub use registry::{NodeTypes, RegistryError, TypeResolution};
pub use selection::SelectedElements;
pub use store::{DiagramState, DiagramStore, StoreChange, StoreError, StoreResult, StoreSnapshot, SubscriptionId};
pub use transform::Transform;
