//! Node render pass: culling, attribute resolution and descriptor emission.

use crate::descriptor::NodeDescriptor;
use crate::handlers::NodeHandlers;
use nodeflow_core::capabilities::resolve;
use nodeflow_core::config::RendererConfig;
use nodeflow_core::geometry::select_visible;
use nodeflow_core::registry::NodeTypes;
use nodeflow_core::store::StoreSnapshot;
use nodeflow_core::transform::Transform;

/// Inputs for a single render pass.
pub struct FrameContext<'a, C, E> {
    /// Store state the whole pass resolves against.
    pub snapshot: StoreSnapshot<'a>,
    /// Registered node components.
    pub node_types: &'a NodeTypes<C>,
    pub config: RendererConfig,
    /// Event handlers forwarded to every node.
    pub handlers: &'a NodeHandlers<E>,
}

impl<'a, C, E> FrameContext<'a, C, E> {
    /// Create a new frame context with the default config.
    pub fn new(
        snapshot: StoreSnapshot<'a>,
        node_types: &'a NodeTypes<C>,
        handlers: &'a NodeHandlers<E>,
    ) -> Self {
        Self {
            snapshot,
            node_types,
            config: RendererConfig::default(),
            handlers,
        }
    }

    /// Set the renderer config.
    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable viewport culling.
    pub fn with_culling(mut self, enabled: bool) -> Self {
        self.config.only_render_visible_nodes = enabled;
        self
    }
}

/// Result of a render pass.
pub struct NodeFrame<'a, C, E> {
    /// Transform applied to the node container.
    pub transform: Transform,
    /// CSS form of `transform`.
    pub container_transform: String,
    /// Descriptors in draw order.
    pub nodes: Vec<NodeDescriptor<'a, C, E>>,
    /// Unregistered type keys that fell back to `"default"`, one per node.
    pub fallbacks: Vec<&'a str>,
    /// Store revision the frame was built from.
    pub revision: u64,
}

impl<C, E> NodeFrame<'_, C, E> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Visual layer consuming descriptors.
pub trait NodeSink<C, E> {
    /// Called once before any node, with the container transform.
    fn begin_frame(&mut self, _transform: &Transform) {}

    /// Draw one node.
    fn render_node(&mut self, descriptor: NodeDescriptor<'_, C, E>);

    /// Called once after the last node.
    fn end_frame(&mut self) {}
}

/// Builds node descriptors for a frame.
///
/// Holds no state: every call recomputes from the context, so repeating a
/// pass over the same snapshot yields the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeRenderer;

impl NodeRenderer {
    /// Run the pass, calling `emit` for each descriptor in selector order.
    ///
    /// Returns the type keys that had to fall back to `"default"`.
    fn run<'a, C, E>(
        ctx: &FrameContext<'a, C, E>,
        mut emit: impl FnMut(NodeDescriptor<'a, C, E>),
    ) -> Vec<&'a str> {
        let snapshot = ctx.snapshot;
        let visible = select_visible(
            snapshot.nodes,
            snapshot.viewport_box,
            snapshot.transform,
            ctx.config.only_render_visible_nodes,
        );

        let mut fallbacks = Vec::new();
        for node in visible {
            let attributes = resolve(
                node,
                &snapshot.policy,
                snapshot.selected_elements,
                ctx.node_types,
            );
            if attributes.resolution.is_fallback() {
                log::warn!(
                    "Node type \"{}\" not found. Using fallback type \"default\".",
                    attributes.type_key()
                );
                fallbacks.push(attributes.type_key());
            }
            emit(NodeDescriptor::new(
                node,
                &attributes,
                snapshot.transform,
                &ctx.config,
                ctx.handlers,
            ));
        }
        fallbacks
    }

    /// Build the full frame.
    pub fn render<'a, C, E>(ctx: &FrameContext<'a, C, E>) -> NodeFrame<'a, C, E> {
        let mut nodes = Vec::new();
        let fallbacks = Self::run(ctx, |descriptor| nodes.push(descriptor));
        log::debug!(
            "Rendered {} of {} nodes at revision {}",
            nodes.len(),
            ctx.snapshot.nodes.len(),
            ctx.snapshot.revision
        );

        NodeFrame {
            transform: ctx.snapshot.transform,
            container_transform: ctx.snapshot.transform.css(),
            nodes,
            fallbacks,
            revision: ctx.snapshot.revision,
        }
    }

    /// Stream descriptors straight into a visual layer.
    pub fn emit<'a, C, E, S>(ctx: &FrameContext<'a, C, E>, sink: &mut S) -> Vec<&'a str>
    where
        S: NodeSink<C, E>,
    {
        sink.begin_frame(&ctx.snapshot.transform);
        let fallbacks = Self::run(ctx, |descriptor| sink.render_node(descriptor));
        sink.end_frame();
        fallbacks
    }
}
