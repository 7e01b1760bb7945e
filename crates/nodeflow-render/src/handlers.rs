//! Pointer event callbacks forwarded to node components.

use nodeflow_core::node::Node;
use std::fmt;
use std::rc::Rc;

/// Callback invoked by a node component with the pointer event and the node.
pub type NodeCallback<E> = Rc<dyn Fn(&E, &Node)>;

/// Kind of pointer interaction a callback is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEventKind {
    Click,
    MouseEnter,
    MouseMove,
    MouseLeave,
    ContextMenu,
    DragStart,
    DragStop,
}

/// Caller-supplied event handlers.
///
/// The render pass hands these to every descriptor as-is; it never calls
/// them.
pub struct NodeHandlers<E> {
    pub on_click: Option<NodeCallback<E>>,
    pub on_mouse_enter: Option<NodeCallback<E>>,
    pub on_mouse_move: Option<NodeCallback<E>>,
    pub on_mouse_leave: Option<NodeCallback<E>>,
    pub on_context_menu: Option<NodeCallback<E>>,
    pub on_drag_start: Option<NodeCallback<E>>,
    pub on_drag_stop: Option<NodeCallback<E>>,
}

impl<E> Default for NodeHandlers<E> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_mouse_enter: None,
            on_mouse_move: None,
            on_mouse_leave: None,
            on_context_menu: None,
            on_drag_start: None,
            on_drag_stop: None,
        }
    }
}

impl<E> Clone for NodeHandlers<E> {
    fn clone(&self) -> Self {
        Self {
            on_click: self.on_click.clone(),
            on_mouse_enter: self.on_mouse_enter.clone(),
            on_mouse_move: self.on_mouse_move.clone(),
            on_mouse_leave: self.on_mouse_leave.clone(),
            on_context_menu: self.on_context_menu.clone(),
            on_drag_start: self.on_drag_start.clone(),
            on_drag_stop: self.on_drag_stop.clone(),
        }
    }
}

impl<E> fmt::Debug for NodeHandlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .field("on_mouse_move", &self.on_mouse_move.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .field("on_context_menu", &self.on_context_menu.is_some())
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_stop", &self.on_drag_stop.is_some())
            .finish()
    }
}

impl<E> NodeHandlers<E> {
    /// No handlers registered.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, kind: NodeEventKind) -> &mut Option<NodeCallback<E>> {
        match kind {
            NodeEventKind::Click => &mut self.on_click,
            NodeEventKind::MouseEnter => &mut self.on_mouse_enter,
            NodeEventKind::MouseMove => &mut self.on_mouse_move,
            NodeEventKind::MouseLeave => &mut self.on_mouse_leave,
            NodeEventKind::ContextMenu => &mut self.on_context_menu,
            NodeEventKind::DragStart => &mut self.on_drag_start,
            NodeEventKind::DragStop => &mut self.on_drag_stop,
        }
    }

    /// Register a handler for an event kind.
    pub fn on(mut self, kind: NodeEventKind, callback: impl Fn(&E, &Node) + 'static) -> Self {
        *self.slot_mut(kind) = Some(Rc::new(callback));
        self
    }

    /// The handler registered for an event kind.
    pub fn get(&self, kind: NodeEventKind) -> Option<&NodeCallback<E>> {
        match kind {
            NodeEventKind::Click => self.on_click.as_ref(),
            NodeEventKind::MouseEnter => self.on_mouse_enter.as_ref(),
            NodeEventKind::MouseMove => self.on_mouse_move.as_ref(),
            NodeEventKind::MouseLeave => self.on_mouse_leave.as_ref(),
            NodeEventKind::ContextMenu => self.on_context_menu.as_ref(),
            NodeEventKind::DragStart => self.on_drag_start.as_ref(),
            NodeEventKind::DragStop => self.on_drag_stop.as_ref(),
        }
    }
}
