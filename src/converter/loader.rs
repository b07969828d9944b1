//! # 加载与校验模块
//!
//! 读取本地图片文件的原始字节，并在“尽可能早”的阶段做存在性校验。
//! 不按扩展名过滤，也不限制文件体积，能否处理由解码阶段决定。

use std::path::Path;

use super::source::RawImageData;
use super::{ConversionError, Converter};

impl Converter {
    /// 从本地路径加载图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
    ) -> Result<RawImageData, ConversionError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        let metadata = std::fs::metadata(path).map_err(|e| {
            ConversionError::UnreadableImage(format!("无法读取文件信息：{}（{}）", e, path.display()))
        })?;

        if !metadata.is_file() {
            return Err(ConversionError::UnreadableImage(format!(
                "路径不是文件：{}",
                path.display()
            )));
        }

        if metadata.len() == 0 {
            return Err(ConversionError::UnreadableImage("图片内容为空".to_string()));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ConversionError::UnreadableImage(format!("无法读取图片文件：{}", e)))?;

        Ok(RawImageData {
            bytes,
            source_hint: "file",
        })
    }
}
