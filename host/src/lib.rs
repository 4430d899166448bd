//! # Host 层
//!
//! 属性动画演示的无窗口宿主。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 配置加载与校验
//! - 点击计划解析
//! - 固定步长帧循环
//!
//! Host 层不包含动画逻辑，只按时间驱动 `anim-runtime` 的主界面并输出快照。

pub mod config;
pub mod headless;
pub mod schedule;

pub use config::{AppConfig, ConfigError, DebugConfig, ScreenConfig, TimingConfig};
pub use headless::{FrameTrace, HeadlessRunner, PressRecord, RunSummary};
pub use schedule::{PressSchedule, ScheduleError, ScheduledPress};
