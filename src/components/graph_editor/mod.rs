//! Node-and-connection graph editor on a pannable, zoomable canvas.

mod component;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod mode;
pub mod render;
pub mod state;
pub mod surface;
pub mod types;
pub mod viewport;

pub use component::GraphEditorCanvas;
pub use config::EditorConfig;
pub use error::EditorError;
pub use export::{Export, to_adjacency_text};
pub use graph::{Connection, Graph, Node};
pub use hit_test::test_hit;
pub use mode::{Mode, ModeKind};
pub use render::FrameStats;
pub use state::EditorState;
pub use surface::{CanvasSurface, Surface, TextAnchor};
pub use types::{ConnectionId, NodeId, Point, Size};
pub use viewport::Viewport;
