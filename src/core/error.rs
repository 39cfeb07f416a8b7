//! 错误处理模块
//!
//! 定义了库中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理
//!
//! 注意：加载网格时只有"无法打开文件"会作为错误返回，
//! 读取过程中的 IO 故障和格式错误的行只会记录日志。

use std::fmt;
use std::io;
use std::path::PathBuf;

/// 库统一的 Result 类型
pub type Result<T> = std::result::Result<T, MeshBuffersError>;

/// mesh_buffers 的错误类型
#[derive(Debug)]
pub enum MeshBuffersError {
    /// 配置错误
    Config(ConfigError),

    /// 网格加载错误
    MeshLoading(MeshLoadError),

    /// IO 错误
    Io(io::Error),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 网格加载相关的错误
#[derive(Debug)]
pub enum MeshLoadError {
    /// 文件无法打开（不存在、无权限等）
    OpenFailed { path: PathBuf, source: io::Error },
}

impl MeshLoadError {
    /// 打开失败时尝试的路径
    pub fn path(&self) -> &std::path::Path {
        match self {
            MeshLoadError::OpenFailed { path, .. } => path,
        }
    }
}

impl fmt::Display for MeshBuffersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshBuffersError::Config(e) => write!(f, "Configuration error: {}", e),
            MeshBuffersError::MeshLoading(e) => write!(f, "Mesh loading error: {}", e),
            MeshBuffersError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for MeshLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshLoadError::OpenFailed { path, source } => {
                write!(f, "Unable to open .obj file: {} ({})", path.display(), source)
            }
        }
    }
}

impl std::error::Error for MeshBuffersError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshBuffersError::Config(e) => Some(e),
            MeshBuffersError::MeshLoading(e) => Some(e),
            MeshBuffersError::Io(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for MeshLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshLoadError::OpenFailed { source, .. } => Some(source),
        }
    }
}

// 实现 From trait 以便于错误转换
impl From<io::Error> for MeshBuffersError {
    fn from(err: io::Error) -> Self {
        MeshBuffersError::Io(err)
    }
}

impl From<ConfigError> for MeshBuffersError {
    fn from(err: ConfigError) -> Self {
        MeshBuffersError::Config(err)
    }
}

impl From<MeshLoadError> for MeshBuffersError {
    fn from(err: MeshLoadError) -> Self {
        MeshBuffersError::MeshLoading(err)
    }
}
