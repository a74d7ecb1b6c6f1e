//! 数据核心：单窗口状态、事件处理与窗口管理器

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::model::display_tree::{project, reconstruct, TreeNode};
use crate::model::highlight::{compose_highlights, HighlightSpan};
use crate::model::json_value::{expand, parse, serialize, FormatMode, ParseError};
use crate::model::search::{search, SearchSession};
use crate::utils::clipboard::{copy_to_clipboard, ClipboardError};
use crate::utils::fs::{read_text_file, write_text_file};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] ParseError),
    #[error("剪贴板错误: {0}")]
    Clipboard(#[from] ClipboardError),
    #[error("状态错误: {0}")]
    State(String),
}

/// 单个窗口的全部状态：输入缓冲、展开后的文档、展示树、结果文本与搜索会话
///
/// 所有事件处理都在调用线程同步完成，处理期间不会被再次进入。
#[derive(Debug, Default)]
pub struct WindowState {
    pub window_number: u64,
    pub input_text: String,
    /// 最近一次成功解析（并展开）的文档
    pub doc: Option<Value>,
    pub tree: Option<TreeNode>,
    pub result_text: String,
    pub search: Option<SearchSession>,
    pub cursor_offset: usize,
}

impl WindowState {
    pub fn new(window_number: u64) -> Self {
        Self {
            window_number,
            ..Self::default()
        }
    }

    /// 输入缓冲变化（实时路径）：瞬时非法 JSON 不提示，清空视图即可
    pub fn on_input_changed(&mut self, text: &str) {
        self.input_text = text.to_string();
        if self.refresh_views().is_err() {
            self.clear_views();
        }
        self.rebuild_search();
    }

    /// 显式格式化：解析错误带位置上抛给外壳提示
    pub fn format(&mut self) -> Result<(), AppError> {
        self.refresh_views()
    }

    /// 压缩：紧凑输出进结果视图；此路径不做嵌套字符串展开
    pub fn compress(&mut self) -> Result<(), AppError> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return Ok(());
        }
        let value = parse(&text)?;
        self.result_text = serialize(&value, FormatMode::Compact);
        self.tree = Some(project(&value));
        self.doc = Some(value);
        Ok(())
    }

    /// 解析→展开→投影→格式化输出；空输入清空视图，失败时视图去留由调用方定
    fn refresh_views(&mut self) -> Result<(), AppError> {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            self.clear_views();
            return Ok(());
        }
        let value = parse(&text)?;
        let expanded = expand(value);
        self.tree = Some(project(&expanded));
        self.result_text = serialize(&expanded, FormatMode::Pretty);
        self.doc = Some(expanded);
        Ok(())
    }

    fn clear_views(&mut self) {
        self.doc = None;
        self.tree = None;
        self.result_text.clear();
    }

    /// 点击树节点：回推该子树的 JSON 并以格式化形式写入结果视图
    pub fn on_node_selected(&mut self, path: &[usize]) {
        let Some(node) = self.tree.as_ref().and_then(|t| t.node_at(path)) else {
            tracing::warn!("树节点路径无效: {:?}", path);
            return;
        };
        let value = reconstruct(node);
        self.result_text = serialize(&value, FormatMode::Pretty);
    }

    /// 搜索框内容变化：对输入缓冲整体重建会话
    pub fn search_changed(&mut self, pattern: &str) {
        self.search = Some(search(&self.input_text, pattern));
    }

    pub fn next_match(&mut self) {
        if let Some(session) = &mut self.search {
            session.next_match();
        }
    }

    pub fn prev_match(&mut self) {
        if let Some(session) = &mut self.search {
            session.prev_match();
        }
    }

    /// 关闭搜索：清除会话，只留下当前行标记
    pub fn close_search(&mut self) {
        self.search = None;
    }

    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor_offset = offset;
    }

    /// 当前应渲染的高亮区间（当前行 → 全部命中 → 当前命中）
    pub fn highlights(&self) -> Vec<HighlightSpan> {
        compose_highlights(self.search.as_ref(), self.cursor_offset)
    }

    /// 缓冲区变化后对既有会话按原模式整体重建
    fn rebuild_search(&mut self) {
        if let Some(session) = &self.search {
            self.search = Some(search(&self.input_text, &session.pattern));
        }
    }

    /// 打开文件：整文件按 UTF-8 读入输入缓冲；读取失败时缓冲保持原样
    pub fn open_file(&mut self, path: &Path) -> Result<(), AppError> {
        let text = read_text_file(path)?;
        self.on_input_changed(&text);
        tracing::info!("已打开文件: {}", path.display());
        Ok(())
    }

    /// 保存结果视图到文件；空结果不动作
    pub fn save_result(&self, path: &Path) -> Result<(), AppError> {
        if self.result_text.trim().is_empty() {
            return Ok(());
        }
        write_text_file(path, &self.result_text)?;
        tracing::info!("结果已保存到: {}", path.display());
        Ok(())
    }

    /// 复制结果视图到系统剪贴板；返回是否真正复制了内容
    pub fn copy_result(&self) -> Result<bool, AppError> {
        if self.result_text.is_empty() {
            return Ok(false);
        }
        copy_to_clipboard(&self.result_text)?;
        Ok(true)
    }
}

/// 窗口管理器：持有单调递增的创建计数与全部窗口，取代进程级全局注册表
#[derive(Debug, Default)]
pub struct WindowManager {
    next_number: u64,
    windows: Vec<WindowState>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新建窗口：计数只增不复用，窗口号用于标题标注
    pub fn create_window(&mut self) -> &mut WindowState {
        self.next_number += 1;
        tracing::info!("新建窗口 {}", self.next_number);
        self.windows.push(WindowState::new(self.next_number));
        let idx = self.windows.len() - 1;
        &mut self.windows[idx]
    }

    /// 销毁窗口；返回是否确有该窗口
    pub fn destroy_window(&mut self, window_number: u64) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.window_number != window_number);
        before != self.windows.len()
    }

    pub fn window(&self, window_number: u64) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.window_number == window_number)
    }

    pub fn window_mut(&mut self, window_number: u64) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| w.window_number == window_number)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// 历史创建总数（即当前计数值）
    pub fn created_total(&self) -> u64 {
        self.next_number
    }
}
