//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载转换链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图片转换统一错误类型。
///
/// 每个分支都携带底层错误的原始信息，宿主（CLI / GUI）据此决定如何展示。
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// 文件缺失、不可读、为空、格式未知或解码/缩放失败。
    #[error("图片不可读：{0}")]
    UnreadableImage(String),

    /// 输出目录不存在、不是目录，或写入失败。
    #[error("输出目录不可用：{0}")]
    InvalidOutputDirectory(String),

    #[error("JSON 序列化失败：{0}")]
    Encode(String),

    /// 未知输出样式或越界的配置值。
    #[error("无效选项：{0}")]
    InvalidOption(String),
}

impl ConversionError {
    /// 稳定的错误码，供宿主做结构化展示。
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnreadableImage(_) => "unreadable_image",
            Self::InvalidOutputDirectory(_) => "invalid_output_directory",
            Self::Encode(_) => "encode",
            Self::InvalidOption(_) => "invalid_option",
        }
    }

    /// 出错所在阶段。
    pub fn stage(&self) -> &'static str {
        match self {
            Self::UnreadableImage(_) => "load",
            Self::InvalidOutputDirectory(_) => "write",
            Self::Encode(_) => "encode",
            Self::InvalidOption(_) => "config",
        }
    }
}
