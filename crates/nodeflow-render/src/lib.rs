//! Nodeflow Render Library
//!
//! Turns a store snapshot into ordered node descriptors for the visual layer.

mod descriptor;
mod handlers;
mod renderer;
mod scheduler;

pub use descriptor::NodeDescriptor;
pub use handlers::{NodeCallback, NodeEventKind, NodeHandlers};
pub use renderer::{FrameContext, NodeFrame, NodeRenderer, NodeSink};
pub use scheduler::FrameScheduler;
