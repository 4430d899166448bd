//! # Headless 模块
//!
//! 无窗口帧循环：按固定步长推进主界面，在计划时间点击控件。
//!
//! 每帧先处理到期的点击，再推进一个步长。点击落在离计划时间最近的帧上。
//! 所有点击处理完且没有动画在播放时结束；超过最长运行时间时取消剩余动画。

use anim_runtime::{AnimationEvent, ButtonKind, MainScreen, PressOutcome, SceneSnapshot};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::schedule::PressSchedule;

/// 一次实际发生的点击
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressRecord {
    pub kind: ButtonKind,
    pub outcome: PressOutcome,
}

/// 单帧记录
#[derive(Debug, Clone, Serialize)]
pub struct FrameTrace {
    /// 帧序号（从 0 开始）
    pub frame: u64,
    /// 本帧推进后的时间（秒）
    pub time: f32,
    pub presses: Vec<PressRecord>,
    pub events: Vec<AnimationEvent>,
    pub snapshot: SceneSnapshot,
}

/// 运行结果
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: f32,
    pub presses: usize,
    pub ignored: usize,
    /// 是否因超时而结束
    pub timed_out: bool,
    pub snapshot: SceneSnapshot,
}

/// 无窗口运行器
pub struct HeadlessRunner<R: Rng> {
    screen: MainScreen<R>,
    schedule: PressSchedule,
    next_press: usize,
    dt: f32,
    max_seconds: f32,
    frame: u64,
    pressed: usize,
    ignored: usize,
}

impl<R: Rng> HeadlessRunner<R> {
    /// 创建运行器
    pub fn new(screen: MainScreen<R>, schedule: PressSchedule, dt: f32, max_seconds: f32) -> Self {
        Self {
            screen,
            schedule,
            next_press: 0,
            dt,
            max_seconds,
            frame: 0,
            pressed: 0,
            ignored: 0,
        }
    }

    /// 当前时间（秒）
    ///
    /// 由帧数乘步长得出，避免累加误差。
    pub fn time(&self) -> f32 {
        self.frame as f32 * self.dt
    }

    pub fn screen(&self) -> &MainScreen<R> {
        &self.screen
    }

    /// 是否还有工作要做
    pub fn is_busy(&self) -> bool {
        self.next_press < self.schedule.len() || self.screen.is_animating()
    }

    /// 推进一帧
    pub fn step(&mut self) -> FrameTrace {
        let now = self.time();
        let mut presses = Vec::new();

        while let Some(press) = self.schedule.presses().get(self.next_press) {
            if press.at > now + self.dt * 0.5 {
                break;
            }
            let outcome = self.screen.press(press.kind);
            self.pressed += 1;
            if outcome == PressOutcome::Ignored {
                self.ignored += 1;
            }
            presses.push(PressRecord {
                kind: press.kind,
                outcome,
            });
            self.next_press += 1;
        }

        let events = self.screen.tick(self.dt);
        self.frame += 1;

        FrameTrace {
            frame: self.frame - 1,
            time: self.time(),
            presses,
            events,
            snapshot: self.screen.snapshot(),
        }
    }

    /// 运行到结束
    ///
    /// `on_frame` 返回错误时立即停止。
    pub fn run<E>(
        &mut self,
        mut on_frame: impl FnMut(&FrameTrace) -> Result<(), E>,
    ) -> Result<RunSummary, E> {
        info!(
            presses = self.schedule.len(),
            dt = self.dt,
            max_seconds = self.max_seconds,
            "开始运行"
        );

        while self.is_busy() && self.time() < self.max_seconds {
            let trace = self.step();
            for event in &trace.events {
                debug!(frame = trace.frame, id = %event.id(), ?event, "动画事件");
            }
            on_frame(&trace)?;
        }

        let timed_out = self.is_busy();
        if timed_out {
            warn!(
                elapsed = self.time(),
                pending = self.schedule.len() - self.next_press,
                active = self.screen.system().active_count(),
                "运行超时，取消剩余动画"
            );
            self.screen.teardown();
        }

        let summary = RunSummary {
            frames: self.frame,
            elapsed: self.time(),
            presses: self.pressed,
            ignored: self.ignored,
            timed_out,
            snapshot: self.screen.snapshot(),
        };
        info!(
            frames = summary.frames,
            presses = summary.presses,
            ignored = summary.ignored,
            "运行结束"
        );
        Ok(summary)
    }
}
