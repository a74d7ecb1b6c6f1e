//! JSON格式化工具库
//!
//! 提供JSON解析与序列化、嵌套字符串展开、树形投影/重建与搜索高亮功能
//! 遵循MVVM架构模式，核心逻辑与显示外壳解耦

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, WindowManager, WindowState};
pub use model::display_tree::{project, reconstruct, NodeKind, NodePayload, TreeNode};
pub use model::highlight::{compose_highlights, HighlightLayer, HighlightSpan};
pub use model::json_value::{expand, parse, serialize, FormatMode, ParseError};
pub use model::search::{search, SearchMatch, SearchSession};
