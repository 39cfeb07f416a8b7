//! 配置管理模块
//!
//! 提供配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (mesh_buffers.toml)
//!
//! ```toml
//! [mesh]
//! path = "assets/triangle.obj"
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "mesh_buffers.log"
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use super::error::{ConfigError, MeshBuffersError, Result};

/// 顶层配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 网格配置
    #[serde(default)]
    pub mesh: MeshConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 网格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// 要加载的 OBJ 文件路径
    #[serde(default = "default_mesh_path")]
    pub path: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_mesh_path() -> String { "assets/triangle.obj".to_string() }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "mesh_buffers.log".to_string() }

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            path: default_mesh_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl LogLevel {
    /// 从字符串解析日志级别（不区分大小写）
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use mesh_buffers::core::Config;
    ///
    /// let config = Config::from_file("mesh_buffers.toml")?;
    /// # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                ConfigError::FileNotFound(path.as_ref().display().to_string()).into()
            }
            _ => MeshBuffersError::Io(e),
        })?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--mesh <path>`: 设置要加载的 OBJ 文件
    /// - `--log-level <level>`: 设置日志级别
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if let Some(idx) = args.iter().position(|a| a == "--mesh") {
            if let Some(path) = args.get(idx + 1) {
                self.mesh.path = path.clone();
            }
        }

        if let Some(idx) = args.iter().position(|a| a == "--log-level") {
            if let Some(level) = args.get(idx + 1).and_then(|l| LogLevel::parse(l)) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.mesh.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "mesh.path".to_string(),
                reason: "Mesh path must not be empty".to_string(),
            }.into());
        }

        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "Log file path required when file_output is enabled".to_string(),
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mesh.path, "assets/triangle.obj");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.file_output);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.mesh.path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str("[mesh]\npath = \"bunny.obj\"\n").unwrap();
        assert_eq!(config.mesh.path, "bunny.obj");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["load_obj", "--mesh", "cube.obj", "--log-level", "DEBUG"]);

        assert_eq!(config.mesh.path, "cube.obj");
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_apply_args_ignores_unknown_level() {
        let mut config = Config::default();
        config.apply_args(["--log-level", "loud"]);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh_buffers.toml");

        let mut config = Config::default();
        config.mesh.path = "models/teapot.obj".to_string();
        config.logging.level = LogLevel::Warn;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.mesh.path, "models/teapot.obj");
        assert_eq!(loaded.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.toml"));

        assert!(matches!(
            result,
            Err(MeshBuffersError::Config(ConfigError::FileNotFound(ref p))) if p.ends_with("absent.toml")
        ));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        // 目录可以打开但无法按文本读取
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path());
        assert!(matches!(result, Err(MeshBuffersError::Io(_))), "{:?}", result);

        let path = dir.path().join("binary.toml");
        std::fs::write(&path, b"[mesh]\npath = \"\xff\xfe\"\n").unwrap();
        let result = Config::from_file(&path);
        assert!(matches!(result, Err(MeshBuffersError::Io(_))), "{:?}", result);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = Config::from_file_or_default("definitely/not/here.toml");
        assert_eq!(config.mesh.path, default_mesh_path());
    }
}
