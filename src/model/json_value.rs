//! 值模型：JSON 文本的解析、序列化与嵌套字符串展开

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

/// 解析失败：行列均为 1 起始，指向首个语法错误的位置
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (行 {line}, 列 {column})")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        let raw = e.to_string();
        // serde_json 的消息自带 " at line L column C" 后缀，位置单独入字段
        let message = match raw.rfind(" at line ") {
            Some(idx) => raw[..idx].to_string(),
            None => raw,
        };
        ParseError {
            line: e.line(),
            column: e.column(),
            message,
        }
    }
}

/// 输出模式：格式化（4空格缩进）或压缩（无多余空白）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Pretty,
    Compact,
}

/// 将任意文本按标准 JSON 语法解析为值
pub fn parse(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(ParseError::from)
}

/// 将值序列化为文本，键序保持插入顺序，非 ASCII 字符原样输出
///
/// 良构的 Value 写入内存缓冲不会失败，兜底分支退回紧凑输出。
pub fn serialize(value: &Value, mode: FormatMode) -> String {
    match mode {
        FormatMode::Compact => value.to_string(),
        FormatMode::Pretty => {
            let mut buf = Vec::with_capacity(128);
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            if value.serialize(&mut ser).is_ok() {
                String::from_utf8_lossy(&buf).into_owned()
            } else {
                value.to_string()
            }
        }
    }
}

/// 递归展开：字符串叶子若本身是合法 JSON，就地替换为解析结果并继续展开
///
/// 纯变换，不修改输入；对同一值重复调用结果不变。
/// 解析失败的字符串保持原样，不再深入。
pub fn expand(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, expand(v))).collect()),
        Value::Array(arr) => Value::Array(arr.into_iter().map(expand).collect()),
        Value::String(s) => match parse(&s) {
            // 替换值自身的字符串可能仍是 JSON，继续展开
            Ok(inner) => expand(inner),
            Err(_) => Value::String(s),
        },
        other => other,
    }
}
