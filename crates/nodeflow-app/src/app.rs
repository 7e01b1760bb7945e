//! Loads a diagram file, runs one render pass and reports the descriptors.

use nodeflow_core::config::{ConfigError, RendererConfig};
use nodeflow_core::registry::NodeTypes;
use nodeflow_core::store::{DiagramStore, StoreError};
use nodeflow_core::transform::Transform;
use nodeflow_render::{FrameContext, NodeDescriptor, NodeHandlers, NodeRenderer, NodeSink};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: nodeflow <diagram.json> [renderer-config.json]")]
    Usage,
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Diagram state file (nodes, transform, viewport, selection, policy).
    pub diagram_path: PathBuf,
    /// Optional renderer config file.
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse from process arguments (without the program name).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, AppError> {
        let diagram_path = args.next().map(PathBuf::from).ok_or(AppError::Usage)?;
        let config_path = args.next().map(PathBuf::from);
        if args.next().is_some() {
            return Err(AppError::Usage);
        }
        Ok(Self {
            diagram_path,
            config_path,
        })
    }
}

/// Pointer event type for the command-line driver, which never dispatches any.
pub type NoEvent = ();

/// Components shipped with the editor.
pub fn built_in_node_types() -> NodeTypes<&'static str> {
    NodeTypes::new("DefaultNode")
        .with("input", "InputNode")
        .with("output", "OutputNode")
        .with("group", "GroupNode")
}

/// Collects descriptors as JSON records.
#[derive(Debug, Default)]
struct JsonSink {
    container: Option<String>,
    nodes: Vec<Value>,
}

impl NodeSink<&'static str, NoEvent> for JsonSink {
    fn begin_frame(&mut self, transform: &Transform) {
        self.container = Some(transform.css());
    }

    fn render_node(&mut self, d: NodeDescriptor<'_, &'static str, NoEvent>) {
        log::debug!("Node {} -> {}", d.id, d.component);
        self.nodes.push(json!({
            "id": d.id,
            "type": d.node_type,
            "component": d.component,
            "data": d.data,
            "position": [d.x_pos, d.y_pos],
            "isDragging": d.is_dragging,
            "selected": d.selected,
            "isDraggable": d.is_draggable,
            "isSelectable": d.is_selectable,
            "isConnectable": d.is_connectable,
            "isRemovable": d.is_removable,
            "isHidden": d.is_hidden,
            "isInitialized": d.is_initialized,
            "style": d.style,
            "className": d.class_name,
            "sourcePosition": d.source_position,
            "targetPosition": d.target_position,
            "selectNodesOnDrag": d.select_nodes_on_drag,
            "snapToGrid": d.snap_to_grid,
            "snapGrid": d.snap_grid,
        }));
    }
}

/// Run one pass over an in-memory diagram and describe the result.
pub fn render_document(diagram_json: &str, config: RendererConfig) -> Result<Value, AppError> {
    let store = DiagramStore::from_json(diagram_json)?;
    let node_types = built_in_node_types();
    let handlers = NodeHandlers::<NoEvent>::new();
    let ctx = FrameContext::new(store.snapshot(), &node_types, &handlers).with_config(config);

    let mut sink = JsonSink::default();
    let fallbacks = NodeRenderer::emit(&ctx, &mut sink);
    log::info!(
        "Rendered {} of {} nodes ({} type fallbacks)",
        sink.nodes.len(),
        store.snapshot().nodes.len(),
        fallbacks.len()
    );

    Ok(json!({
        "containerTransform": sink.container,
        "nodes": sink.nodes,
        "fallbacks": fallbacks,
    }))
}

fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The command-line application.
pub struct App;

impl App {
    /// Load the files named in `config`, render and return pretty JSON.
    pub fn run(config: &AppConfig) -> Result<String, AppError> {
        let diagram = read_file(&config.diagram_path)?;
        log::info!("Loaded diagram from: {:?}", config.diagram_path);

        let renderer_config = match &config.config_path {
            Some(path) => RendererConfig::from_json(&read_file(path)?)?,
            None => RendererConfig::default(),
        };

        let output = render_document(&diagram, renderer_config)?;
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
