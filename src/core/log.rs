//! 日志系统模块
//!
//! 基于 `tracing` 的结构化日志。加载器使用 `mesh_buffers::loader` target，
//! 示例程序使用 `mesh_buffers::app` target，便于用 `EnvFilter` 分别控制。
//!
//! # 使用示例
//!
//! ```no_run
//! use mesh_buffers::core::log::{self, LogLevel};
//!
//! log::init_logger(LogLevel::Info, false, None);
//!
//! mesh_buffers::app_info!(vertices = 3, "Mesh loaded");
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use super::config::LogLevel;

const DEFAULT_LOG_FILE: &str = "mesh_buffers.log";

/// 初始化日志系统，只能调用一次
///
/// 始终输出到控制台；`file_output` 为 true 时额外写入按天滚动的日志文件
/// （`log_file_path` 缺省为 "mesh_buffers.log"）。
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) {
    let file_layer = file_output.then(|| {
        let (directory, filename) = split_log_path(log_file_path.unwrap_or(DEFAULT_LOG_FILE));
        let appender = RollingFileAppender::new(Rotation::DAILY, directory, filename);

        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(appender)
    });

    tracing_subscriber::registry()
        .with(EnvFilter::new(level_directive(level)))
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();
}

/// 把日志文件路径拆成（目录，文件名）
fn split_log_path(log_path: &str) -> (PathBuf, String) {
    let path = Path::new(log_path);

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    (directory, filename)
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

/// 加载器日志 - Trace 级别（被忽略的行）
#[macro_export]
macro_rules! loader_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "mesh_buffers::loader", $($arg)*)
    };
}

/// 加载器日志 - Info 级别（加载摘要）
#[macro_export]
macro_rules! loader_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "mesh_buffers::loader", $($arg)*)
    };
}

/// 加载器日志 - Warn 级别（可疑但不致命的输入）
#[macro_export]
macro_rules! loader_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "mesh_buffers::loader", $($arg)*)
    };
}

/// 加载器日志 - Error 级别（读取中途的 IO 故障）
#[macro_export]
macro_rules! loader_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "mesh_buffers::loader", $($arg)*)
    };
}

/// 应用层日志 - Info 级别
#[macro_export]
macro_rules! app_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "mesh_buffers::app", $($arg)*)
    };
}

/// 应用层日志 - Warn 级别
#[macro_export]
macro_rules! app_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "mesh_buffers::app", $($arg)*)
    };
}
