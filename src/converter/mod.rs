//! # 图片转换模块（converter）
//!
//! ## 设计思路
//!
//! 该模块将“读取图片 → 解码灰度化 → 缩放 → 二值化 → 序列化 → 写入文件”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线（`Converter`）
//! - `loader`：负责读取本地文件与存在性校验
//! - `pipeline`：负责解码、像素限制、灰度化、64×64 双三次缩放、二值化
//! - `grid`：`Grid` 值类型及其形状不变量
//! - `encoder`：`OutputRecord` 的 compact / pretty 两种 JSON 输出
//! - `writer`：输出文件名推导、输出目录校验与单次写入
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! convert(image_path, output_dir)
//!    ↓
//! handler.rs（配置快照 + 阶段耗时日志）
//!    ├─ loader.rs（读文件 + 存在性校验）
//!    ├─ pipeline.rs（解码 + 灰度 + 缩放 + 二值化）
//!    ├─ encoder.rs（{"grid": ...} 序列化）
//!    └─ writer.rs（<stem>.json 写入）
//!    ↓
//! 返回写入路径或 ConversionError
//! ```
//!
//! 序列化在写盘之前完整完成，任何前置阶段失败都不会产生输出文件。

mod config;
mod encoder;
mod error;
mod grid;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{ConverterConfig, JsonStyle, DECOMPRESSION_BOMB_PIXELS};
pub use encoder::{encode, OutputRecord};
pub use error::ConversionError;
pub use grid::{binarize, Grid, GRID_SIZE};
pub use handler::{convert, Converter};
pub use writer::output_path_for;
