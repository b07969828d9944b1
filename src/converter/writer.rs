//! # 输出写入模块
//!
//! - 输出文件名为输入文件名去掉最后一个扩展名后加 `.json`，保留大小写与其余的点
//! - 输出目录必须已存在，不自动创建
//! - 写入时创建或截断目标文件

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::ConversionError;

/// 推导输出路径：`<output_dir>/<stem>.json`。
///
/// # 示例
/// ```rust
/// use std::path::Path;
/// use image_grid_json::converter::output_path_for;
///
/// let out = output_path_for(Path::new("shots/my.photo.PNG"), Path::new("out"))?;
/// assert_eq!(out, Path::new("out/my.photo.json"));
/// # Ok::<(), image_grid_json::converter::ConversionError>(())
/// ```
pub fn output_path_for(image_path: &Path, output_dir: &Path) -> Result<PathBuf, ConversionError> {
    let stem = image_path
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            ConversionError::UnreadableImage(format!(
                "无法从路径推导文件名：{}",
                image_path.display()
            ))
        })?;

    let mut file_name = OsString::from(stem);
    file_name.push(".json");
    Ok(output_dir.join(file_name))
}

/// 校验输出目录存在且确实是目录。
pub(crate) fn validate_output_dir(output_dir: &Path) -> Result<(), ConversionError> {
    let metadata = fs::metadata(output_dir).map_err(|e| {
        ConversionError::InvalidOutputDirectory(format!(
            "输出目录不存在或不可访问：{}（{}）",
            output_dir.display(),
            e
        ))
    })?;

    if !metadata.is_dir() {
        return Err(ConversionError::InvalidOutputDirectory(format!(
            "输出路径不是目录：{}",
            output_dir.display()
        )));
    }

    Ok(())
}

/// 一次性写入文本（创建或截断）。
pub(crate) fn write_output(output_path: &Path, text: &str) -> Result<(), ConversionError> {
    fs::write(output_path, text).map_err(|e| {
        ConversionError::InvalidOutputDirectory(format!(
            "写入 {} 失败：{}",
            output_path.display(),
            e
        ))
    })
}
