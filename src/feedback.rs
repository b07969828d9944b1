//! 转换结果反馈
//!
//! 宿主在转换结束后展示的成功/失败信息。既可直接显示文本，
//! 也可序列化为 JSON 交给其他界面层。

use std::path::Path;

use serde::Serialize;

use crate::converter::ConversionError;
use crate::error::AppError;

pub const SUCCESS_MESSAGE: &str = "图片已成功转换为JSON文件！";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Feedback {
    Success {
        output: String,
        message: String,
    },
    Failure {
        code: &'static str,
        stage: &'static str,
        message: String,
    },
}

impl Feedback {
    pub fn success(output: &Path) -> Self {
        Self::Success {
            output: output.display().to_string(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// 图片读取/处理失败时附带原始错误信息，其余错误直接展示错误文本。
    pub fn failure(error: &AppError) -> Self {
        let message = match error {
            AppError::Conversion(ConversionError::UnreadableImage(detail)) => {
                format!("无法加载或处理图像文件！\n\n错误信息：{}", detail)
            }
            other => other.to_string(),
        };

        Self::Failure {
            code: error.code(),
            stage: error.stage(),
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Settings(format!("序列化反馈失败: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_feedback_serializes_with_status_tag() {
        let feedback = Feedback::success(Path::new("out/photo.json"));
        let json = feedback.to_json().expect("serialize failed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse failed");

        assert!(feedback.is_success());
        assert_eq!(value["status"], "success");
        assert_eq!(value["output"], "out/photo.json");
        assert_eq!(value["message"], SUCCESS_MESSAGE);
    }

    #[test]
    fn unreadable_image_feedback_carries_detail() {
        let error = AppError::from(ConversionError::UnreadableImage("Format error".to_string()));
        let feedback = Feedback::failure(&error);

        assert!(!feedback.is_success());
        assert!(feedback.message().starts_with("无法加载或处理图像文件！"));
        assert!(feedback.message().ends_with("错误信息：Format error"));
    }

    #[test]
    fn output_dir_feedback_uses_error_text() {
        let error = AppError::from(ConversionError::InvalidOutputDirectory("/nope".to_string()));
        let feedback = Feedback::failure(&error);
        let value: serde_json::Value =
            serde_json::from_str(&feedback.to_json().expect("serialize failed")).expect("parse failed");

        assert_eq!(value["status"], "failure");
        assert_eq!(value["code"], "invalid_output_directory");
        assert_eq!(value["stage"], "write");
        assert_eq!(feedback.message(), "输出目录不可用：/nope");
    }
}
