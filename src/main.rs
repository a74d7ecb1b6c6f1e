//! 程序入口：初始化日志、创建窗口管理器，并以命令行方式驱动同一套事件处理
//!
//! 渲染外壳不在范围内，这里把桌面端的按钮动作映射为参数：
//! 无路径时走打开对话框，--compact 压缩，--copy 复制结果，--save 保存。

use std::path::PathBuf;

use tracing_subscriber::fmt::SubscriberBuilder;

use json_geshihua::model::data_core::WindowManager;
use json_geshihua::vm::bridge;

struct CliArgs {
    input: Option<PathBuf>,
    compact: bool,
    copy: bool,
    /// Some(None) 表示 --save 未带路径，走保存对话框
    save: Option<Option<PathBuf>>,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs {
        input: None,
        compact: false,
        copy: false,
        save: None,
    };

    let mut args = std::env::args().skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--compact" => parsed.compact = true,
            "--copy" => parsed.copy = true,
            "--save" => {
                let path = match args.peek() {
                    Some(next) if !next.starts_with('-') => args.next().map(PathBuf::from),
                    _ => None,
                };
                parsed.save = Some(path);
            }
            other if other.starts_with('-') => {
                anyhow::bail!("未知参数: {}", other);
            }
            other => parsed.input = Some(PathBuf::from(other)),
        }
    }
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let args = parse_args()?;

    let mut manager = WindowManager::new();
    let win = manager.create_window();
    tracing::info!("{}", bridge::window_title(win.window_number));

    match args.input {
        Some(path) => win.open_file(&path)?,
        None => {
            // 与桌面外壳一致：没有路径就弹打开对话框
            let status = bridge::handle_open_file(win);
            tracing::info!("{}", status);
            if win.input_text.is_empty() {
                return Ok(());
            }
        }
    }

    // 显式动作：解析错误带位置上抛
    if args.compact {
        win.compress()?;
    } else {
        win.format()?;
    }
    println!("{}", win.result_text);

    if args.copy {
        tracing::info!("{}", bridge::handle_copy_result(win));
    }
    match args.save {
        Some(Some(path)) => {
            win.save_result(&path)?;
            tracing::info!("结果已保存到: {}", path.display());
        }
        Some(None) => {
            tracing::info!("{}", bridge::handle_save_result(win));
        }
        None => {}
    }

    Ok(())
}
