//! VM桥接层：连接显示外壳与窗口状态模型
//!
//! 渲染、布局与窗口装饰不在本库范围内；这里提供外壳需要的文案与配色
//! 常量、文件对话框，以及把对话框/剪贴板接到 WindowState 的处理函数。

use std::path::PathBuf;

use crate::model::data_core::WindowState;
use crate::model::highlight::HighlightLayer;

// === 常量定义（消除魔法值） ===
pub const WINDOW_TITLE_BASE: &str = "JSON 格式化工具";
pub const ABOUT_TITLE: &str = "关于 JSON 格式化器";
pub const ABOUT_VERSION: &str = "v2.0.2";
pub const STATUS_READY: &str = "就绪";
pub const STATUS_COPIED: &str = "✅ JSON结果 已复制到剪贴板";
pub const STATUS_EMPTY_RESULT: &str = "结果为空，未执行";
pub const STATUS_NO_FILE_SELECTED: &str = "未选择文件";
pub const STATUS_FORMATTED: &str = "格式化完成";
pub const STATUS_COMPRESSED: &str = "压缩完成";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";

// === 高亮配色（与渲染端的约定） ===
pub const COLOR_CURRENT_LINE_BG: &str = "#3C3C3C";
pub const COLOR_MATCH_BG: &str = "#555555";
pub const COLOR_CURRENT_MATCH_FG: &str = "#FFFFFF";
pub const COLOR_CURRENT_MATCH_BG: &str = "#4B5CC4";

/// 高亮层对应的背景色
pub fn layer_background(layer: HighlightLayer) -> &'static str {
    match layer {
        HighlightLayer::CurrentLine => COLOR_CURRENT_LINE_BG,
        HighlightLayer::Match => COLOR_MATCH_BG,
        HighlightLayer::CurrentMatch => COLOR_CURRENT_MATCH_BG,
    }
}

/// 窗口标题：首个窗口不带编号，之后的窗口追加编号
pub fn window_title(window_number: u64) -> String {
    if window_number > 1 {
        format!("{} {}", WINDOW_TITLE_BASE, window_number)
    } else {
        WINDOW_TITLE_BASE.to_string()
    }
}

/// 显示打开文件对话框
pub fn show_open_dialog() -> Option<PathBuf> {
    use rfd::FileDialog;

    let file_path = FileDialog::new()
        .add_filter("JSON 文件", &["json"])
        .add_filter("所有文件", &["*"])
        .set_title("打开 JSON 文件")
        .pick_file();

    match file_path {
        Some(path) => {
            tracing::info!("用户选择了文件: {}", path.display());
            Some(path)
        }
        None => {
            tracing::info!("用户取消了文件选择");
            None
        }
    }
}

/// 显示保存文件对话框
pub fn show_save_dialog() -> Option<PathBuf> {
    use rfd::FileDialog;

    FileDialog::new()
        .add_filter("JSON 文件", &["json"])
        .set_title("保存文件")
        .save_file()
}

/// 处理打开文件：弹对话框并把文件内容读入输入缓冲，返回状态栏文案
pub fn handle_open_file(win: &mut WindowState) -> String {
    let Some(path) = show_open_dialog() else {
        return STATUS_NO_FILE_SELECTED.to_string();
    };
    match win.open_file(&path) {
        Ok(()) => format!("已打开: {}", path.display()),
        Err(e) => {
            tracing::error!("打开文件失败: {}", e);
            format!("{}打开失败: {}", STATUS_ERROR_PREFIX, e)
        }
    }
}

/// 处理保存结果：弹对话框并把结果视图写出
pub fn handle_save_result(win: &WindowState) -> String {
    if win.result_text.trim().is_empty() {
        return STATUS_EMPTY_RESULT.to_string();
    }
    let Some(path) = show_save_dialog() else {
        return STATUS_NO_FILE_SELECTED.to_string();
    };
    match win.save_result(&path) {
        Ok(()) => format!("已保存: {}", path.display()),
        Err(e) => {
            tracing::error!("保存失败: {}", e);
            format!("{}保存失败: {}", STATUS_ERROR_PREFIX, e)
        }
    }
}

/// 处理复制结果到剪贴板
pub fn handle_copy_result(win: &WindowState) -> String {
    match win.copy_result() {
        Ok(true) => STATUS_COPIED.to_string(),
        Ok(false) => STATUS_EMPTY_RESULT.to_string(),
        Err(e) => {
            tracing::error!("复制失败: {}", e);
            format!("{}复制失败: {}", STATUS_ERROR_PREFIX, e)
        }
    }
}

/// 处理显式格式化按钮
pub fn handle_format(win: &mut WindowState) -> String {
    match win.format() {
        Ok(()) => STATUS_FORMATTED.to_string(),
        Err(e) => format!("格式化失败\n{}", e),
    }
}

/// 处理压缩按钮
pub fn handle_compress(win: &mut WindowState) -> String {
    match win.compress() {
        Ok(()) => STATUS_COMPRESSED.to_string(),
        Err(e) => format!("压缩失败\n{}", e),
    }
}

/// 关于对话框正文
pub fn about_text() -> String {
    format!(
        "JSON 格式化查看器 {}\n桌面版 JSON 可视化工具。\n支持 JSON 格式化、压缩、树形展示与搜索高亮。",
        ABOUT_VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_numbering() {
        assert_eq!(window_title(1), "JSON 格式化工具", "首个窗口不带编号");
        assert_eq!(window_title(2), "JSON 格式化工具 2");
        assert_eq!(window_title(10), "JSON 格式化工具 10");
    }

    #[test]
    fn test_layer_backgrounds_are_distinct() {
        let current_line = layer_background(HighlightLayer::CurrentLine);
        let all_matches = layer_background(HighlightLayer::Match);
        let current = layer_background(HighlightLayer::CurrentMatch);
        assert_ne!(all_matches, current, "当前命中的背景应区别于普通命中");
        assert_ne!(current_line, current);
    }

    #[test]
    fn test_format_handler_reports_error_with_position() {
        let mut win = WindowState::new(1);
        win.input_text = r#"{"a":}"#.to_string();
        let status = handle_format(&mut win);
        assert!(status.starts_with("格式化失败"), "状态文案应标明失败: {}", status);
        assert!(status.contains("行 1"), "失败文案应带位置: {}", status);
    }

    #[test]
    fn test_copy_handler_on_empty_result() {
        let win = WindowState::new(1);
        assert_eq!(handle_copy_result(&win), STATUS_EMPTY_RESULT);
    }
}
