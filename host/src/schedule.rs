//! # Schedule 模块
//!
//! 点击计划：在指定时间点击指定控件。
//!
//! 文本格式为逗号分隔的 `时间:控件`，时间单位为秒：
//!
//! ```text
//! 0:rotate, 0.5:rotate, 1.2:shower
//! ```

use std::str::FromStr;

use anim_runtime::ButtonKind;
use thiserror::Error;

/// 一次计划点击
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledPress {
    /// 点击时间（秒）
    pub at: f32,
    pub kind: ButtonKind,
}

/// 点击计划
///
/// 按时间升序排列；同一时间的点击保持书写顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PressSchedule {
    presses: Vec<ScheduledPress>,
}

impl PressSchedule {
    pub fn new(mut presses: Vec<ScheduledPress>) -> Self {
        presses.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { presses }
    }

    /// 解析文本格式
    pub fn parse(text: &str) -> Result<Self, ScheduleError> {
        let presses = text
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(presses))
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn presses(&self) -> &[ScheduledPress] {
        &self.presses
    }

    /// 最后一次点击的时间
    pub fn last_time(&self) -> Option<f32> {
        self.presses.last().map(|p| p.at)
    }
}

fn parse_entry(entry: &str) -> Result<ScheduledPress, ScheduleError> {
    let (time, label) = entry
        .split_once(':')
        .ok_or_else(|| ScheduleError::MalformedEntry(entry.to_string()))?;

    let at: f32 = time
        .trim()
        .parse()
        .map_err(|_| ScheduleError::InvalidTime(time.trim().to_string()))?;
    if !at.is_finite() || at < 0.0 {
        return Err(ScheduleError::InvalidTime(time.trim().to_string()));
    }

    let kind = ButtonKind::from_label(label)
        .ok_or_else(|| ScheduleError::UnknownButton(label.trim().to_string()))?;

    Ok(ScheduledPress { at, kind })
}

impl FromStr for PressSchedule {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 点击计划解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("点击计划格式错误（应为 时间:控件）: {0}")]
    MalformedEntry(String),
    #[error("无效的点击时间: {0}")]
    InvalidTime(String),
    #[error("未知控件: {0}")]
    UnknownButton(String),
}
