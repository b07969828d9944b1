//! 应用设置存储
//!
//! 设置以 JSON 形式保存在 `settings.json`，目前只包含输出样式。
//! 缺失字段取默认值；文件不存在视为“尚未保存过设置”。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::converter::{Converter, JsonStyle};
use crate::error::AppError;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 持久化的宿主设置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub json_style: JsonStyle,
}

/// 读取设置文件；文件不存在时返回 `Ok(None)`。
pub fn load_settings(path: &Path) -> Result<Option<AppSettings>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let parsed = serde_json::from_str::<AppSettings>(&content)
        .map_err(|e| AppError::Settings(format!("解析设置文件失败: {}", e)))?;

    Ok(Some(parsed))
}

/// 保存设置，必要时创建父目录。
pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Settings(format!("创建设置目录失败: {}", e)))?;
    }

    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AppError::Settings(format!("序列化设置失败: {}", e)))?;

    fs::write(path, content)?;
    log::info!("设置已保存: {}", path.display());
    Ok(())
}

/// 将设置应用到转换器。
pub fn apply_settings(converter: &Converter, settings: &AppSettings) -> Result<(), AppError> {
    converter.set_json_style(settings.json_style)?;
    Ok(())
}
