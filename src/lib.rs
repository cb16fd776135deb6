pub mod config;
pub mod ir;
pub mod layout;
pub mod session;
pub mod tooltip;

pub use config::{LayoutConfig, load_config};
pub use ir::{DiagramKind, EdgeConvention, TreeNode};
pub use layout::{Edge, FlatNode, Layout, LayoutError, compute_layout, project_attributes};
pub use session::DiagramSession;
pub use tooltip::format_attributes;
