//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“已加载字节”和“已解码灰度图”解耦：
//! - `RawImageData` 表示已读取但未解码的字节
//! - `SourceImage` 表示灰度化后的临时位图，提取网格后即释放

use image::GrayImage;

/// 加载阶段输出：原始图片字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}

/// 解码阶段输出：单通道 8 位灰度位图。
pub(crate) struct SourceImage {
    /// 解码后的原始宽度（像素）。
    pub(crate) width: u32,
    /// 解码后的原始高度（像素）。
    pub(crate) height: u32,
    pub(crate) luma: GrayImage,
}
