//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 转换核心只产生 `ConversionError`；宿主层（CLI、设置文件读写）还会遇到
//! I/O 与设置解析错误。`AppError` 把它们收拢成一个类型，宿主据此统一展示。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ConversionError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。
//! - 提供 `code()` / `stage()`，与转换错误的结构化字段保持一致。

use crate::converter::ConversionError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 转换流水线错误（读取 / 解码 / 序列化 / 写入）
    #[error("{0}")]
    Conversion(#[from] ConversionError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件不可用
    #[error("设置不可用: {0}")]
    Settings(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Conversion(err) => err.code(),
            Self::Io(_) => "io",
            Self::Settings(_) => "settings",
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            Self::Conversion(err) => err.stage(),
            Self::Io(_) | Self::Settings(_) => "settings",
        }
    }
}
