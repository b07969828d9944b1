//! # Image to JSON Converter — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与结果反馈。
//! 转换逻辑在 `converter` 模块中，详见 `lib.rs` 架构文档。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image_grid_json::converter::{Converter, JsonStyle};
use image_grid_json::error::AppError;
use image_grid_json::feedback::Feedback;
use image_grid_json::settings::{self, AppSettings};

/// Image to JSON Converter
///
/// 将图片转换为 64x64 二值网格 JSON（纯黑为 0，其余为 1）
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 图片路径
    #[arg(value_name = "IMAGE")]
    image: PathBuf,
    /// 输出目录（必须已存在）
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,
    /// 输出样式：compact / pretty
    #[arg(short, long, value_name = "STYLE")]
    style: Option<JsonStyle>,
    /// 设置文件路径（不存在时使用默认设置）
    #[arg(long, value_name = "FILE", default_value = settings::SETTINGS_FILE_NAME)]
    settings: PathBuf,
    /// 将本次生效的设置写回设置文件
    #[arg(long)]
    save_settings: bool,
    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let feedback = match run(&cli) {
        Ok(written) => Feedback::success(&written),
        Err(err) => {
            log::error!("转换失败: {err}");
            Feedback::failure(&err)
        }
    };

    report(&feedback, cli.json);

    if feedback.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: &Cli) -> Result<PathBuf, AppError> {
    let stored = settings::load_settings(&cli.settings)?;

    // 优先级：命令行 > 设置文件 > 默认值
    let mut effective = stored.unwrap_or_default();
    if let Some(style) = cli.style {
        effective.json_style = style;
    }

    let converter = Converter::default();
    settings::apply_settings(&converter, &effective)?;

    let written = converter.convert(&cli.image, &cli.output_dir)?;

    if cli.save_settings {
        persist(&cli.settings, &effective);
    }

    Ok(written)
}

/// 设置保存失败不影响已完成的转换，只记录告警。
fn persist(path: &std::path::Path, effective: &AppSettings) {
    if let Err(err) = settings::save_settings(path, effective) {
        log::warn!("保存设置失败: {err}");
    }
}

fn report(feedback: &Feedback, as_json: bool) {
    if as_json {
        match feedback.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::warn!("反馈序列化失败，回退为文本输出: {err}");
                println!("{}", feedback.message());
            }
        }
        return;
    }

    match feedback {
        Feedback::Success { output, message } => println!("{message}\n{output}"),
        Feedback::Failure { message, .. } => eprintln!("{message}"),
    }
}
