//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 灰度 → 64×64 → 网格”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素上限快速拒绝
//! 3. 完整解码并灰度化（彩色图按 ITU-R 601-2 亮度公式，16 位通道见 `to_luma_rec601`）
//! 4. 双三次（Catmull-Rom）缩放到 64×64，已是 64×64 时不重采样
//! 5. 逐像素二值化得到 `Grid`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, GrayImage, ImageFormat, Luma, Rgb};
use std::io::Cursor;

use super::source::{RawImageData, SourceImage};
use super::{ConversionError, Converter, ConverterConfig, Grid, GRID_SIZE};

impl Converter {
    /// 将原始字节解码、缩放并二值化为网格。
    pub(crate) fn decode_to_grid(
        &self,
        raw: RawImageData,
        config: &ConverterConfig,
    ) -> Result<Grid, ConversionError> {
        let source = self.decode_to_luma(raw, config)?;
        log::debug!("灰度位图：{}x{}", source.width, source.height);
        let resized = Self::resize_to_grid(source.luma)?;
        Grid::from_luma(resized.as_raw())
    }

    /// 解码并灰度化。
    fn decode_to_luma(
        &self,
        raw: RawImageData,
        config: &ConverterConfig,
    ) -> Result<SourceImage, ConversionError> {
        if raw.bytes.is_empty() {
            return Err(ConversionError::UnreadableImage("图片内容为空".to_string()));
        }

        let format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| ConversionError::UnreadableImage(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes, format)?;
        self.validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory_with_format(&raw.bytes, format)
            .map_err(|e| ConversionError::UnreadableImage(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(ConversionError::UnreadableImage(format!(
                "图片尺寸无效：{}x{}",
                width, height
            )));
        }
        self.validate_pixel_limits(config, width, height)?;

        let luma = Self::to_luma_rec601(&decoded);

        log::info!(
            "✅ 图片解码成功 - 来源: {} 格式: {:?} 原始尺寸: {}x{} 颜色: {:?}",
            raw.source_hint,
            format,
            width,
            height,
            decoded.color()
        );

        Ok(SourceImage {
            width,
            height,
            luma,
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(
        bytes: &[u8],
        format: ImageFormat,
    ) -> Result<(u32, u32), ConversionError> {
        image::ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()
            .map_err(|e| ConversionError::UnreadableImage(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        &self,
        config: &ConverterConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ConversionError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ConversionError::UnreadableImage("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ConversionError::UnreadableImage(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    /// 灰度化，丢弃 alpha。
    ///
    /// - 8 位灰度：原样使用。
    /// - 16 位灰度：按数值截断到 `0..=255`，不做 `/257` 缩放，暗部非零值不会被压成 0。
    /// - 16 位彩色：每通道取高 8 位后按 ITU-R 601-2 定点公式计算。
    /// - 其余彩色：转 8 位 RGB 后按 ITU-R 601-2 定点公式计算。
    fn to_luma_rec601(image: &DynamicImage) -> GrayImage {
        match image {
            DynamicImage::ImageLuma16(gray) => clamp_luma16(gray.width(), gray.height(), |x, y| {
                gray.get_pixel(x, y).0[0]
            }),
            DynamicImage::ImageLumaA16(gray) => clamp_luma16(gray.width(), gray.height(), |x, y| {
                gray.get_pixel(x, y).0[0]
            }),
            DynamicImage::ImageRgb16(rgb) => GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let [r, g, b] = rgb.get_pixel(x, y).0;
                Luma([rec601_luma_high_byte(r, g, b)])
            }),
            DynamicImage::ImageRgba16(rgba) => {
                GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                    let [r, g, b, _] = rgba.get_pixel(x, y).0;
                    Luma([rec601_luma_high_byte(r, g, b)])
                })
            }
            other if other.color().has_color() => {
                let rgb = other.to_rgb8();
                GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                    let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
                    Luma([rec601_luma(r, g, b)])
                })
            }
            other => other.to_luma8(),
        }
    }

    /// 缩放到 64×64。已是目标尺寸时原样返回。
    fn resize_to_grid(luma: GrayImage) -> Result<GrayImage, ConversionError> {
        if luma.dimensions() == (GRID_SIZE, GRID_SIZE) {
            return Ok(luma);
        }

        log::info!(
            "🧩 双三次缩放：{}x{} -> {}x{}",
            luma.width(),
            luma.height(),
            GRID_SIZE,
            GRID_SIZE
        );

        match Self::resize_with_fast_image_resize(&luma) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                Ok(image::imageops::resize(
                    &luma,
                    GRID_SIZE,
                    GRID_SIZE,
                    FilterType::CatmullRom,
                ))
            }
        }
    }

    fn resize_with_fast_image_resize(luma: &GrayImage) -> Result<GrayImage, ConversionError> {
        let (src_width, src_height) = luma.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            luma.as_raw().clone(),
            fr::PixelType::U8,
        )
        .map_err(|e| ConversionError::UnreadableImage(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(GRID_SIZE, GRID_SIZE, fr::PixelType::U8);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ConversionError::UnreadableImage(format!("fast_image_resize 执行失败：{}", e)))?;

        GrayImage::from_raw(GRID_SIZE, GRID_SIZE, dst_image.into_vec()).ok_or_else(|| {
            ConversionError::UnreadableImage("fast_image_resize 输出缓冲长度异常".to_string())
        })
    }
}

fn clamp_luma16(width: u32, height: u32, value: impl Fn(u32, u32) -> u16) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([value(x, y).min(255) as u8]))
}

fn rec601_luma_high_byte(r: u16, g: u16, b: u16) -> u8 {
    rec601_luma((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8)
}

/// ITU-R 601-2 亮度：`R*299/1000 + G*587/1000 + B*114/1000`，16 位定点并四舍五入。
fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}
