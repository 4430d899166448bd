//! # Set 模块
//!
//! 同时播放的动画集合。
//!
//! 集合内所有成员同时开始；全部成员结束后集合才算结束，
//! 集合自己的监听器在整个播放单元上只触发一次。

use crate::animator::{AnimationState, Animator};
use crate::easing::Interpolator;
use crate::listener::{AnimatorListener, Listeners};

/// 同时播放的动画集合
pub struct AnimatorSet {
    members: Vec<Box<dyn Animator>>,
    /// 集合级时长，设置后覆盖每个成员的时长
    duration: Option<f32>,
    /// 集合级曲线，设置后覆盖每个成员的曲线
    interpolator: Option<Interpolator>,
    state: AnimationState,
    listeners: Listeners,
}

impl std::fmt::Debug for AnimatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatorSet")
            .field("members", &self.members.len())
            .field("duration", &self.duration)
            .field("state", &self.state)
            .finish()
    }
}

impl AnimatorSet {
    /// 创建同时播放的集合
    pub fn play_together(members: Vec<Box<dyn Animator>>) -> Self {
        Self {
            members,
            duration: None,
            interpolator: None,
            state: AnimationState::Pending,
            listeners: Listeners::default(),
        }
    }

    /// 设置集合级时长（秒）
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = Some(duration.max(0.0));
        self
    }

    /// 设置集合级曲线
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = Some(interpolator);
        self
    }

    /// 集合级时长
    pub fn duration(&self) -> Option<f32> {
        self.duration
    }

    /// 成员数量
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    fn finish(&mut self) {
        self.state = AnimationState::Completed;
        self.listeners.notify_end(false);
    }
}

impl Animator for AnimatorSet {
    fn begin(&mut self) {
        for member in &mut self.members {
            if let Some(duration) = self.duration {
                member.set_duration(duration);
            }
            if let Some(interpolator) = self.interpolator {
                member.set_interpolator(interpolator);
            }
        }

        self.state = AnimationState::Playing;
        self.listeners.notify_start();
        for member in &mut self.members {
            member.begin();
        }

        if self.members.iter().all(|m| m.state().is_finished()) {
            self.finish();
        }
    }

    fn advance(&mut self, dt: f32) -> bool {
        match self.state {
            AnimationState::Playing => {}
            AnimationState::Pending | AnimationState::Paused => return true,
            AnimationState::Completed | AnimationState::Canceled => return false,
        }

        let mut running = false;
        for member in &mut self.members {
            if !member.state().is_finished() && member.advance(dt) {
                running = true;
            }
        }

        if !running {
            self.finish();
        }
        running
    }

    fn cancel(&mut self) {
        if self.state.is_finished() {
            return;
        }
        for member in &mut self.members {
            member.cancel();
        }
        self.state = AnimationState::Canceled;
        self.listeners.notify_end(true);
    }

    fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            for member in &mut self.members {
                member.pause();
            }
            self.state = AnimationState::Paused;
        }
    }

    fn resume(&mut self) {
        if self.state == AnimationState::Paused {
            for member in &mut self.members {
                member.resume();
            }
            self.state = AnimationState::Playing;
        }
    }

    fn state(&self) -> AnimationState {
        self.state
    }

    fn set_duration(&mut self, duration: f32) {
        self.duration = Some(duration.max(0.0));
    }

    fn set_interpolator(&mut self, interpolator: Interpolator) {
        self.interpolator = Some(interpolator);
    }

    fn total_duration(&self) -> Option<f32> {
        let mut longest = 0.0_f32;
        for member in &self.members {
            let member_total = match (self.duration, member.total_duration()) {
                (_, None) => return None,
                // 成员时长会在 begin 时被覆盖，这里按覆盖后的值估算
                (Some(d), Some(_)) if self.state == AnimationState::Pending => d,
                (_, Some(t)) => t,
            };
            longest = longest.max(member_total);
        }
        Some(longest)
    }

    fn add_listener(&mut self, listener: Box<dyn AnimatorListener>) {
        self.listeners.push(listener);
    }
}
