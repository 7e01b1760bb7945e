//! Re-run the render pass only when the store has changed.

use crate::renderer::{FrameContext, NodeFrame, NodeRenderer};
use nodeflow_core::store::DiagramStore;

/// Tracks the store revision of the last rendered frame.
///
/// Skipping a pass is only an optimization: a frame produced here is always
/// the same as a fresh [`NodeRenderer::render`] over the same context.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameScheduler {
    last_revision: Option<u64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store changed since the last rendered frame.
    pub fn needs_render(&self, store: &DiagramStore) -> bool {
        self.is_stale(store.revision())
    }

    fn is_stale(&self, revision: u64) -> bool {
        self.last_revision != Some(revision)
    }

    /// Force the next pass, e.g. after the registry or config changed.
    pub fn invalidate(&mut self) {
        self.last_revision = None;
    }

    /// Render if the snapshot in `ctx` is newer than the last frame.
    pub fn render_if_changed<'a, C, E>(
        &mut self,
        ctx: &FrameContext<'a, C, E>,
    ) -> Option<NodeFrame<'a, C, E>> {
        let revision = ctx.snapshot.revision;
        if !self.is_stale(revision) {
            log::trace!("Skipping render, revision {} unchanged", revision);
            return None;
        }
        self.last_revision = Some(revision);
        Some(NodeRenderer::render(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::NodeHandlers;
    use kurbo::Point;
    use nodeflow_core::node::Node;
    use nodeflow_core::registry::NodeTypes;
    use nodeflow_core::transform::Transform;

    #[test]
    fn test_renders_once_per_revision() {
        let mut store = DiagramStore::new();
        store.set_nodes(vec![Node::new("a", Point::ZERO)]).unwrap();
        let types = NodeTypes::new(());
        let handlers = NodeHandlers::<()>::new();
        let mut scheduler = FrameScheduler::new();

        assert!(scheduler.needs_render(&store));
        let ctx = FrameContext::new(store.snapshot(), &types, &handlers);
        assert!(scheduler.render_if_changed(&ctx).is_some());
        assert!(scheduler.render_if_changed(&ctx).is_none());
        assert!(!scheduler.needs_render(&store));

        store.set_transform(Transform::new(5.0, 5.0, 1.0));
        assert!(scheduler.needs_render(&store));
        let ctx = FrameContext::new(store.snapshot(), &types, &handlers);
        let frame = scheduler.render_if_changed(&ctx).unwrap();
        assert_eq!(frame.container_transform, "translate(5px,5px) scale(1)");
    }

    #[test]
    fn test_invalidate_forces_render() {
        let store = DiagramStore::new();
        let types = NodeTypes::new(());
        let handlers = NodeHandlers::<()>::new();
        let mut scheduler = FrameScheduler::new();
        let ctx = FrameContext::new(store.snapshot(), &types, &handlers);

        assert!(scheduler.render_if_changed(&ctx).is_some());
        scheduler.invalidate();
        assert!(scheduler.needs_render(&store));
        assert!(scheduler.render_if_changed(&ctx).is_some());
    }
}
