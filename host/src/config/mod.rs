//! # Config 模块
//!
//! 运行时配置管理，集中管理所有配置项。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (config.json)
//! 3. 默认值（最低）

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anim_runtime::ScreenLayout;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, info, warn};

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 界面布局
    #[serde(default)]
    pub screen: ScreenConfig,

    /// 帧循环配置
    #[serde(default)]
    pub timing: TimingConfig,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugConfig,

    /// 随机种子
    ///
    /// 不配置时每次运行随机取种子，Shower 结果不可复现。
    #[serde(default)]
    pub seed: Option<u64>,
}

/// 界面布局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_container_width")]
    pub container_width: f32,

    #[serde(default = "default_container_height")]
    pub container_height: f32,

    /// 星星素材宽度
    #[serde(default = "default_star_size")]
    pub star_width: f32,

    /// 星星素材高度
    #[serde(default = "default_star_size")]
    pub star_height: f32,
}

/// 帧循环配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// 每秒帧数，决定固定步长
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// 最长运行时间（秒），超时后取消剩余动画
    #[serde(default = "default_max_seconds")]
    pub max_seconds: f32,
}

/// 调试配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 是否逐帧输出快照
    #[serde(default)]
    pub trace_frames: bool,
}

// 默认值函数
fn default_container_width() -> f32 {
    1080.0
}

fn default_container_height() -> f32 {
    1920.0
}

fn default_star_size() -> f32 {
    100.0
}

fn default_fps() -> u32 {
    60
}

fn default_max_seconds() -> f32 {
    30.0
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            container_width: default_container_width(),
            container_height: default_container_height(),
            star_width: default_star_size(),
            star_height: default_star_size(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            max_seconds: default_max_seconds(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            trace_frames: false,
        }
    }
}

/// 帧率上限
const MAX_FPS: u32 = 1000;

impl AppConfig {
    /// 读取配置文件
    ///
    /// 文件不存在、读取失败或解析失败都返回错误，由调用方决定是否回退。
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// 加载配置文件
    ///
    /// 如果文件不存在或解析失败，返回默认配置并打印警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(config) => {
                info!(path = %path.display(), "配置文件加载成功");
                config
            }
            Err(e) => {
                warn!(error = %e, "使用默认配置");
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        fs::write(path, json).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// 命令行参数覆盖配置文件
    ///
    /// `None` 表示命令行未指定，保留配置文件或默认值；
    /// `trace` 只能打开逐帧输出，不能关闭。
    pub fn apply_overrides(
        &mut self,
        seed: Option<u64>,
        fps: Option<u32>,
        trace: bool,
        log_level: Option<&str>,
    ) {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(fps) = fps {
            self.timing.fps = fps;
        }
        if trace {
            self.debug.trace_frames = true;
        }
        if let Some(level) = log_level {
            self.debug.log_level = level.to_string();
        }
    }

    /// 转换为运行时布局
    pub fn to_layout(&self) -> ScreenLayout {
        ScreenLayout {
            container_width: self.screen.container_width,
            container_height: self.screen.container_height,
            star_width: self.screen.star_width,
            star_height: self.screen.star_height,
        }
    }

    /// 固定帧步长（秒）
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.timing.fps.max(1) as f32
    }

    /// 解析日志级别
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.debug.log_level.trim()).map_err(|_| {
            ConfigError::ValidationFailed(format!("未知日志级别: {}", self.debug.log_level))
        })
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_layout()
            .validate()
            .map_err(|e| ConfigError::ValidationFailed(e.to_string()))?;

        if self.timing.fps == 0 || self.timing.fps > MAX_FPS {
            return Err(ConfigError::ValidationFailed(format!("帧率必须在 1 - {MAX_FPS} 之间")));
        }

        if !self.timing.max_seconds.is_finite() || self.timing.max_seconds <= 0.0 {
            return Err(ConfigError::ValidationFailed("max_seconds 必须是正数".to_string()));
        }

        self.log_level()?;

        Ok(())
    }
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// 配置文件不存在
    #[error("配置文件不存在: {0:?}")]
    NotFound(PathBuf),
    /// 解析失败
    #[error("配置文件解析失败: {0}")]
    ParseFailed(String),
    /// 序列化失败
    #[error("配置序列化失败: {0}")]
    SerializationFailed(String),
    /// IO 错误
    #[error("配置 IO 错误: {0}")]
    IoError(String),
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
