//! Viewport culling: which nodes are drawn this frame.

use crate::node::{Node, Override};
use crate::transform::Transform;
use kurbo::Rect;

/// Overlap area between two rectangles, zero when they are disjoint.
fn overlap_area(a: Rect, b: Rect) -> f64 {
    let x_overlap = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
    let y_overlap = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
    x_overlap * y_overlap
}

/// Nodes lying inside a screen-space rectangle.
///
/// `rect` is mapped into diagram space through `transform` before testing.
/// Unmeasured nodes and nodes being dragged are always kept, since their
/// bounds are unknown or about to change. With `partially` any overlap
/// counts; otherwise the node must be fully covered. With
/// `exclude_non_selectable`, only nodes explicitly marked selectable are
/// considered. Input order is preserved.
pub fn nodes_inside<'a>(
    nodes: &'a [Node],
    rect: Rect,
    transform: Transform,
    partially: bool,
    exclude_non_selectable: bool,
) -> Vec<&'a Node> {
    let world_rect = transform.screen_rect_to_world(rect);

    nodes
        .iter()
        .filter(|node| {
            if exclude_non_selectable && node.selectable != Override::ForceTrue {
                return false;
            }

            let Some(bounds) = node.bounds() else {
                return true;
            };
            if node.is_dragging {
                return true;
            }

            let overlapping = overlap_area(world_rect, bounds).ceil();
            if partially {
                overlapping > 0.0
            } else {
                overlapping >= bounds.area()
            }
        })
        .collect()
}

/// Select the nodes to render this frame.
///
/// With culling disabled the whole collection is returned in order; with
/// culling enabled only nodes overlapping the viewport box survive, still in
/// input order.
pub fn select_visible<'a>(
    nodes: &'a [Node],
    viewport: Rect,
    transform: Transform,
    culling_enabled: bool,
) -> Vec<&'a Node> {
    if !culling_enabled {
        return nodes.iter().collect();
    }

    let visible = nodes_inside(nodes, viewport, transform, true, false);
    log::debug!("Culled {} of {} nodes", nodes.len() - visible.len(), nodes.len());
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn ids(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|node| node.id.to_string()).collect()
    }

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::new("inside", Point::new(10.0, 10.0)).with_size(20.0, 20.0),
            Node::new("outside", Point::new(500.0, 500.0)).with_size(20.0, 20.0),
            Node::new("partial", Point::new(90.0, 90.0)).with_size(20.0, 20.0),
            Node::new("unmeasured", Point::new(900.0, 900.0)),
        ]
    }

    #[test]
    fn test_culling_disabled_returns_everything() {
        let nodes = sample_nodes();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let visible = select_visible(&nodes, viewport, Transform::default(), false);
        assert_eq!(ids(&visible), vec!["inside", "outside", "partial", "unmeasured"]);
    }

    #[test]
    fn test_culling_disabled_with_degenerate_viewport() {
        let nodes = sample_nodes();
        let visible = select_visible(&nodes, Rect::ZERO, Transform::default(), false);
        assert_eq!(visible.len(), nodes.len());
        for (selected, original) in visible.iter().zip(&nodes) {
            assert_eq!(selected.id, original.id);
        }
    }

    #[test]
    fn test_culling_keeps_overlapping_in_order() {
        let nodes = sample_nodes();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let visible = select_visible(&nodes, viewport, Transform::default(), true);
        assert_eq!(ids(&visible), vec!["inside", "partial", "unmeasured"]);
    }

    #[test]
    fn test_culling_respects_transform() {
        let nodes = sample_nodes();
        // Panned so diagram (500, 500) sits at the screen origin.
        let transform = Transform::new(-500.0, -500.0, 1.0);
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let visible = select_visible(&nodes, viewport, transform, true);
        assert_eq!(ids(&visible), vec!["outside", "unmeasured"]);
    }

    #[test]
    fn test_culling_respects_zoom() {
        let nodes = vec![Node::new("far", Point::new(150.0, 150.0)).with_size(10.0, 10.0)];
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);

        let visible = select_visible(&nodes, viewport, Transform::default(), true);
        assert!(visible.is_empty());

        let zoomed_out = Transform::new(0.0, 0.0, 0.5);
        let visible = select_visible(&nodes, viewport, zoomed_out, true);
        assert_eq!(ids(&visible), vec!["far"]);
    }

    #[test]
    fn test_dragging_node_always_kept() {
        let nodes = vec![
            Node::new("dragged", Point::new(1000.0, 1000.0))
                .with_size(10.0, 10.0)
                .with_dragging(true),
        ];
        let visible = select_visible(&nodes, Rect::new(0.0, 0.0, 10.0, 10.0), Transform::default(), true);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_fully_inside_mode() {
        let nodes = sample_nodes();
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inside = nodes_inside(&nodes, viewport, Transform::default(), false, false);
        assert_eq!(ids(&inside), vec!["inside", "unmeasured"]);
    }

    #[test]
    fn test_exclude_non_selectable() {
        let nodes = vec![
            Node::new("a", Point::ZERO).with_size(10.0, 10.0).with_selectable(true),
            Node::new("b", Point::ZERO).with_size(10.0, 10.0),
            Node::new("c", Point::ZERO).with_size(10.0, 10.0).with_selectable(false),
        ];
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inside = nodes_inside(&nodes, viewport, Transform::default(), true, true);
        assert_eq!(ids(&inside), vec!["a"]);
    }
}
