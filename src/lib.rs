//! # Image to JSON Converter — 库入口
//!
//! 将一张图片转换为 64×64 二值网格，并以 `{"grid": [[0|1; 64]; 64]}` 写入
//! `<输出目录>/<文件名>.json`。只有纯黑像素（灰度 0）记为 0，其余记为 1。
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 宿主 (main.rs, CLI)                       │
//! │   参数解析 ── settings ── feedback（成功/失败提示）         │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Result<PathBuf, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            核心 (converter)                       │
//! │                                                          │
//! │  ┌─ handler ──── Converter（配置快照 + 阶段耗时）          │
//! │  ├─ loader ───── 读取文件 + 存在性校验                    │
//! │  ├─ pipeline ─── 解码·灰度·双三次缩放·二值化              │
//! │  ├─ grid ─────── 64×64 网格与不变量                       │
//! │  ├─ encoder ──── compact / pretty JSON                    │
//! │  └─ writer ───── <stem>.json 推导与写入                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`converter`] | 纯转换流程，返回写入路径或 `ConversionError` |
//! | [`error`] | 宿主统一错误类型 `AppError` |
//! | [`settings`] | 输出样式等设置的读写 |
//! | [`feedback`] | 面向用户的成功/失败反馈 |

pub mod converter;
pub mod error;
pub mod feedback;
pub mod settings;

pub use converter::{convert, ConversionError, Converter, JsonStyle};
pub use error::AppError;
