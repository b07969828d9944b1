//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Converter` 只负责流程编排与配置管理，不依赖任何界面层。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 推导输出路径并读取原始字节
//! 3. 解码、灰度化、缩放、二值化得到 `Grid`
//! 4. 在内存中完成序列化
//! 5. 校验输出目录并写入
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ConverterConfig>>` 支持运行时切换输出样式。
//! - 单次转换使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `load/decode/encode/write/total` 阶段耗时，便于诊断。

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::encoder::{encode, OutputRecord};
use super::{writer, ConversionError, ConverterConfig, Grid, JsonStyle};

/// 使用默认配置完成一次转换。
///
/// 返回实际写入的 `<output_dir>/<stem>.json` 路径。
///
/// # 示例
/// ```rust,no_run
/// let written = image_grid_json::converter::convert("assets/logo.png", "out")?;
/// println!("{}", written.display());
/// # Ok::<(), image_grid_json::converter::ConversionError>(())
/// ```
pub fn convert(
    image_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, ConversionError> {
    Converter::default().convert(image_path, output_dir)
}

/// 图片转换器。
///
/// 封装了配置状态，并编排各子模块实现完整流程。
#[derive(Debug, Default)]
pub struct Converter {
    pub(super) config: Arc<RwLock<ConverterConfig>>,
}

impl Converter {
    /// 根据初始配置创建转换器。
    ///
    /// # 示例
    /// ```rust
    /// use image_grid_json::converter::{Converter, ConverterConfig, JsonStyle};
    ///
    /// let mut config = ConverterConfig::default();
    /// config.json_style = JsonStyle::Pretty;
    /// let converter = Converter::new(config);
    /// assert_eq!(converter.json_style()?, JsonStyle::Pretty);
    /// # Ok::<(), image_grid_json::converter::ConversionError>(())
    /// ```
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次转换链路使用一致参数。
    pub fn config_snapshot(&self) -> Result<ConverterConfig, ConversionError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| ConversionError::InvalidOption("配置读取锁已中毒".to_string()))
    }

    /// 切换输出 JSON 样式。
    pub fn set_json_style(&self, style: JsonStyle) -> Result<(), ConversionError> {
        let mut config = self
            .config
            .write()
            .map_err(|_| ConversionError::InvalidOption("配置写入锁已中毒".to_string()))?;
        config.json_style = style;

        log::info!("⚙️ 已切换输出样式：{}", style);
        Ok(())
    }

    /// 获取当前生效的输出样式。
    pub fn json_style(&self) -> Result<JsonStyle, ConversionError> {
        let config = self
            .config
            .read()
            .map_err(|_| ConversionError::InvalidOption("配置读取锁已中毒".to_string()))?;
        Ok(config.json_style)
    }

    /// 设置解码像素上限。
    pub fn set_max_decoded_pixels(&self, max_decoded_pixels: u64) -> Result<(), ConversionError> {
        ConverterConfig::validate_max_decoded_pixels(max_decoded_pixels)?;

        let mut config = self
            .config
            .write()
            .map_err(|_| ConversionError::InvalidOption("配置写入锁已中毒".to_string()))?;
        config.max_decoded_pixels = max_decoded_pixels;

        Ok(())
    }

    /// 只执行加载与像素处理，返回网格而不写文件。
    pub fn convert_to_grid(&self, image_path: impl AsRef<Path>) -> Result<Grid, ConversionError> {
        let config = self.config_snapshot()?;
        let raw = self.load_from_file(image_path.as_ref())?;
        self.decode_to_grid(raw, &config)
    }

    /// 处理主入口：读取图片并写出 `<output_dir>/<stem>.json`。
    ///
    /// 任何写盘之前的失败都不会产生输出文件。
    pub fn convert(
        &self,
        image_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ConversionError> {
        let image_path = image_path.as_ref();
        let output_dir = output_dir.as_ref();
        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let output_path = writer::output_path_for(image_path, output_dir)?;
        log::debug!("输出路径：{}", output_path.display());

        let load_start = Instant::now();
        let raw = self.load_from_file(image_path)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let grid = self.decode_to_grid(raw, &config)?;
        let decode_elapsed = decode_start.elapsed();

        let encode_start = Instant::now();
        let text = encode(&OutputRecord::new(grid), config.json_style)?;
        let encode_elapsed = encode_start.elapsed();

        let write_start = Instant::now();
        writer::validate_output_dir(output_dir)?;
        writer::write_output(&output_path, &text)?;
        let write_elapsed = write_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图片转换完成 - 输出: {} style={} load={}ms decode={}ms encode={}ms write={}ms total={}ms",
            output_path.display(),
            config.json_style,
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_json_style_is_visible_in_snapshot() {
        let converter = Converter::default();
        assert_eq!(converter.json_style().expect("read style failed"), JsonStyle::Compact);

        converter
            .set_json_style(JsonStyle::Pretty)
            .expect("set style failed");

        let snapshot = converter.config_snapshot().expect("config snapshot failed");
        assert_eq!(snapshot.json_style, JsonStyle::Pretty);
    }

    #[test]
    fn set_max_decoded_pixels_rejects_invalid_value_and_keeps_old_one() {
        let converter = Converter::default();
        let before = converter.config_snapshot().expect("config snapshot failed");

        let result = converter.set_max_decoded_pixels(0);
        assert!(matches!(result, Err(ConversionError::InvalidOption(_))));

        let after = converter.config_snapshot().expect("config snapshot failed");
        assert_eq!(after.max_decoded_pixels, before.max_decoded_pixels);
    }

    #[test]
    fn set_max_decoded_pixels_accepts_valid_value() {
        let converter = Converter::default();
        converter
            .set_max_decoded_pixels(1_000_000)
            .expect("limit should be accepted");

        let snapshot = converter.config_snapshot().expect("config snapshot failed");
        assert_eq!(snapshot.max_decoded_pixels, 1_000_000);
    }

    #[test]
    fn convert_missing_image_is_unreadable() {
        let converter = Converter::default();
        let result = converter.convert("/definitely/not/here/photo.png", std::env::temp_dir());
        assert!(matches!(result, Err(ConversionError::UnreadableImage(_))));
    }
}
