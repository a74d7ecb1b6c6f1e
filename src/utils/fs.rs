//! IO helper: whole-file UTF-8 text read/write

use std::{fs, path::Path};

use crate::model::data_core::AppError;

/// 整文件读入为 UTF-8 文本；非 UTF-8 内容按 IO 错误上报
pub fn read_text_file(p: &Path) -> Result<String, AppError> {
    let text = fs::read_to_string(p)?;
    Ok(text)
}

/// 整文件覆盖写出 UTF-8 文本
pub fn write_text_file(p: &Path, text: &str) -> Result<(), AppError> {
    fs::write(p, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_roundtrip() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let path = dir.path().join("data.json");

        write_text_file(&path, "{\"名字\":\"张三\"}\n").expect("写入应成功");
        let back = read_text_file(&path).expect("读取应成功");
        assert_eq!(back, "{\"名字\":\"张三\"}\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_text_file(Path::new("/不存在/的/文件.json")).expect_err("应该失败");
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_read_non_utf8_is_io_error() {
        let mut file = NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(&[0xff, 0xfe, 0x00]).expect("写入临时文件失败");

        let err = read_text_file(file.path()).expect_err("非UTF-8内容应该读取失败");
        assert!(matches!(err, AppError::Io(_)));
    }
}
