//! # 配置模块
//!
//! ## 设计思路
//!
//! 网格尺寸与二值化阈值是固定的产品约定，不在这里开放。
//! 可调的只有输出样式与解码像素上限。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的配置（compact 输出，像素上限取解压炸弹阈值）。
//! - `JsonStyle` 负责样式字符串解析与反向输出。
//! - `validate_max_decoded_pixels` 在切换上限前做范围校验。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConversionError;

/// 默认解码像素上限，超过即视为解压炸弹（约 1.79 亿像素）。
pub const DECOMPRESSION_BOMB_PIXELS: u64 = 2 * (1024 * 1024 * 1024 / 4 / 3);

const MIN_DECODED_PIXELS_LIMIT: u64 = 64 * 64;

/// 转换配置。
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// 输出 JSON 的排版样式。
    pub json_style: JsonStyle,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            json_style: JsonStyle::Compact,
            max_decoded_pixels: DECOMPRESSION_BOMB_PIXELS,
        }
    }
}

impl ConverterConfig {
    /// 校验像素上限是否落在可用范围内。
    pub(crate) fn validate_max_decoded_pixels(max_decoded_pixels: u64) -> Result<(), ConversionError> {
        if max_decoded_pixels < MIN_DECODED_PIXELS_LIMIT {
            return Err(ConversionError::InvalidOption(format!(
                "max_decoded_pixels 不能小于 {} 像素",
                MIN_DECODED_PIXELS_LIMIT
            )));
        }
        Ok(())
    }
}

/// 输出 JSON 的排版样式。
///
/// - `Compact`：无多余空白，`{"grid":[[...],...]}`
/// - `Pretty`：每行网格独占一行，行缩进 8 空格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

impl JsonStyle {
    /// 将样式输出为稳定字符串，供设置持久化与日志使用。
    ///
    /// # 示例
    /// ```rust
    /// use image_grid_json::converter::JsonStyle;
    ///
    /// assert_eq!(JsonStyle::Pretty.as_str(), "pretty");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
        }
    }
}

impl FromStr for JsonStyle {
    type Err = ConversionError;

    /// 从外部字符串解析样式（忽略大小写与首尾空白）。
    ///
    /// # 示例
    /// ```rust
    /// use image_grid_json::converter::JsonStyle;
    ///
    /// let style: JsonStyle = " Pretty ".parse()?;
    /// assert_eq!(style, JsonStyle::Pretty);
    /// # Ok::<(), image_grid_json::converter::ConversionError>(())
    /// ```
    fn from_str(style: &str) -> Result<Self, Self::Err> {
        match style.trim().to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            other => Err(ConversionError::InvalidOption(format!(
                "未知输出样式：{}（可选：compact / pretty）",
                other
            ))),
        }
    }
}

impl fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
