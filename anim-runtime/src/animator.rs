//! # Animator 模块
//!
//! 属性动画器：在给定时长内把一个或多个属性从起点驱动到终点，
//! 支持重复播放与往返播放。
//!
//! 动画器只关注时间轴，不假设目标对象类型；
//! 属性的读写全部通过 [`PropertyAccessor`](crate::property::PropertyAccessor) 完成。

use serde::{Deserialize, Serialize};

use crate::easing::Interpolator;
use crate::listener::{AnimatorListener, Listeners};
use crate::property::{PropertyAccessor, PropertyValuesHolder, ValuesHolder};
use crate::value::{AnimValue, Argb};

/// 默认动画时长（秒）
pub const DEFAULT_DURATION: f32 = 0.3;

/// 动画 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// 创建新的动画 ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AnimationId({})", self.0)
    }
}

/// 动画状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AnimationState {
    /// 尚未启动，或处于启动延迟中
    #[default]
    Pending,
    /// 正在播放
    Playing,
    /// 已暂停
    Paused,
    /// 已完成
    Completed,
    /// 已取消
    Canceled,
}

impl AnimationState {
    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

/// 重复次数（不含首次播放）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatCount {
    /// 重复固定次数
    Count(u32),
    /// 无限重复，只能取消
    Infinite,
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// 重复方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// 每轮都从起点播放到终点
    #[default]
    Restart,
    /// 每轮交替方向
    Reverse,
}

/// 可播放单元
///
/// 单个属性动画器与同时播放的动画集合都实现此接口，
/// `AnimationSystem` 只通过它驱动播放。
pub trait Animator {
    /// 开始播放（触发 `on_start`）
    fn begin(&mut self);

    /// 推进 `dt` 秒
    ///
    /// # 返回
    /// - `true`: 仍在播放
    /// - `false`: 已结束
    fn advance(&mut self, dt: f32) -> bool;

    /// 取消播放（触发 `on_end(true)`）
    fn cancel(&mut self);

    /// 暂停
    fn pause(&mut self);

    /// 恢复
    fn resume(&mut self);

    /// 当前状态
    fn state(&self) -> AnimationState;

    /// 覆盖单轮时长
    fn set_duration(&mut self, duration: f32);

    /// 覆盖插值曲线
    fn set_interpolator(&mut self, interpolator: Interpolator);

    /// 总时长（含启动延迟与所有重复）；无限重复时为 `None`
    fn total_duration(&self) -> Option<f32>;

    /// 添加监听器
    fn add_listener(&mut self, listener: Box<dyn AnimatorListener>);
}

/// 属性动画器
///
/// 一个动画器可以持有多个属性，它们共享时长、曲线和重复设置，逐帧同步写入。
pub struct PropertyAnimator {
    holders: Vec<Box<dyn ValuesHolder>>,
    duration: f32,
    interpolator: Interpolator,
    repeat_count: RepeatCount,
    repeat_mode: RepeatMode,
    start_delay: f32,
    state: AnimationState,
    /// 启动延迟结束后经过的时间
    elapsed: f32,
    /// 启动延迟内已经过的时间
    delay_elapsed: f32,
    listeners: Listeners,
}

impl std::fmt::Debug for PropertyAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let properties: Vec<_> = self.holders.iter().map(|h| h.property_name()).collect();
        f.debug_struct("PropertyAnimator")
            .field("properties", &properties)
            .field("duration", &self.duration)
            .field("repeat_count", &self.repeat_count)
            .field("repeat_mode", &self.repeat_mode)
            .field("state", &self.state)
            .finish()
    }
}

impl Default for PropertyAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyAnimator {
    /// 创建空的动画器
    pub fn new() -> Self {
        Self {
            holders: Vec::new(),
            duration: DEFAULT_DURATION,
            interpolator: Interpolator::default(),
            repeat_count: RepeatCount::default(),
            repeat_mode: RepeatMode::default(),
            start_delay: 0.0,
            state: AnimationState::Pending,
            elapsed: 0.0,
            delay_elapsed: 0.0,
            listeners: Listeners::default(),
        }
    }

    /// 从属性当前值动画到 `to`
    pub fn of_float(accessor: impl PropertyAccessor<f32> + 'static, to: f32) -> Self {
        Self::new().with_holder(PropertyValuesHolder::to(accessor, to))
    }

    /// 从 `from` 动画到 `to`
    pub fn of_float_between(
        accessor: impl PropertyAccessor<f32> + 'static,
        from: f32,
        to: f32,
    ) -> Self {
        Self::new().with_holder(PropertyValuesHolder::between(accessor, from, to))
    }

    /// 颜色动画（按 ARGB 通道插值）
    pub fn of_argb(accessor: impl PropertyAccessor<Argb> + 'static, from: Argb, to: Argb) -> Self {
        Self::new().with_holder(PropertyValuesHolder::between(accessor, from, to))
    }

    /// 追加一个属性
    pub fn with_holder<V: AnimValue>(mut self, holder: PropertyValuesHolder<V>) -> Self {
        self.holders.push(Box::new(holder));
        self
    }

    /// 设置单轮时长（秒）
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// 设置插值曲线
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// 设置重复
    pub fn with_repeat(mut self, count: RepeatCount, mode: RepeatMode) -> Self {
        self.repeat_count = count;
        self.repeat_mode = mode;
        self
    }

    /// 设置启动延迟（秒）
    pub fn with_start_delay(mut self, delay: f32) -> Self {
        self.start_delay = delay.max(0.0);
        self
    }

    /// 单轮时长
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    /// 被动画的属性名称
    pub fn property_names(&self) -> Vec<&'static str> {
        self.holders.iter().map(|h| h.property_name()).collect()
    }

    /// 把（未缓动的）进度写入所有属性
    fn animate_raw(&mut self, fraction: f32) {
        for holder in &mut self.holders {
            holder.animate_value(fraction);
        }
    }

    /// 最后一轮结束时的进度：往返模式下奇数轮停在起点
    fn final_fraction(&self) -> f32 {
        match (self.repeat_mode, self.repeat_count) {
            (RepeatMode::Reverse, RepeatCount::Count(n)) if n % 2 == 1 => 0.0,
            _ => 1.0,
        }
    }

    fn complete(&mut self) {
        let fraction = self.final_fraction();
        self.animate_raw(fraction);
        self.state = AnimationState::Completed;
        self.listeners.notify_end(false);
    }

    /// 更新播放中的动画
    fn update_playing(&mut self) -> bool {
        if self.duration <= 0.0 {
            self.complete();
            return false;
        }

        if let RepeatCount::Count(n) = self.repeat_count {
            if self.elapsed >= self.duration * (n as f32 + 1.0) {
                self.complete();
                return false;
            }
        }

        let iteration = (self.elapsed / self.duration).floor();

        let local = (self.elapsed - iteration * self.duration) / self.duration;
        let reversed = self.repeat_mode == RepeatMode::Reverse && (iteration as u64) % 2 == 1;
        let fraction = if reversed { 1.0 - local } else { local };
        let eased = self.interpolator.apply(fraction);
        self.animate_raw(eased);
        true
    }
}

impl Animator for PropertyAnimator {
    fn begin(&mut self) {
        self.elapsed = 0.0;
        self.delay_elapsed = 0.0;
        for holder in &mut self.holders {
            holder.setup_start_value();
        }
        self.listeners.notify_start();

        if self.start_delay > 0.0 {
            self.state = AnimationState::Pending;
            return;
        }

        self.state = AnimationState::Playing;
        if self.duration <= 0.0 {
            self.complete();
        } else {
            self.animate_raw(0.0);
        }
    }

    fn advance(&mut self, dt: f32) -> bool {
        match self.state {
            AnimationState::Pending => {
                self.delay_elapsed += dt;
                if self.delay_elapsed >= self.start_delay {
                    self.state = AnimationState::Playing;
                    self.elapsed = self.delay_elapsed - self.start_delay;
                    self.update_playing()
                } else {
                    true
                }
            }
            AnimationState::Playing => {
                self.elapsed += dt;
                self.update_playing()
            }
            AnimationState::Paused => true,
            AnimationState::Completed | AnimationState::Canceled => false,
        }
    }

    fn cancel(&mut self) {
        if self.state.is_finished() {
            return;
        }
        self.state = AnimationState::Canceled;
        self.listeners.notify_end(true);
    }

    fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            self.state = AnimationState::Paused;
        }
    }

    fn resume(&mut self) {
        if self.state == AnimationState::Paused {
            self.state = AnimationState::Playing;
        }
    }

    fn state(&self) -> AnimationState {
        self.state
    }

    fn set_duration(&mut self, duration: f32) {
        self.duration = duration.max(0.0);
    }

    fn set_interpolator(&mut self, interpolator: Interpolator) {
        self.interpolator = interpolator;
    }

    fn total_duration(&self) -> Option<f32> {
        match self.repeat_count {
            RepeatCount::Count(n) => Some(self.start_delay + self.duration * (n as f32 + 1.0)),
            RepeatCount::Infinite => None,
        }
    }

    fn add_listener(&mut self, listener: Box<dyn AnimatorListener>) {
        self.listeners.push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::ListenerAdapter;
    use crate::property::CellProperty;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_test_animator(prop: &CellProperty<f32>) -> PropertyAnimator {
        PropertyAnimator::of_float_between(prop.clone(), 0.0, 1.0)
            .with_duration(1.0)
            .with_interpolator(Interpolator::Linear)
    }

    #[test]
    fn test_animator_creation() {
        let prop = CellProperty::new("alpha", 0.5);
        let anim = create_test_animator(&prop);
        assert_eq!(anim.state(), AnimationState::Pending);
        assert_eq!(anim.duration(), 1.0);
        assert_eq!(anim.property_names(), vec!["alpha"]);
        // 未启动前不写属性
        assert_eq!(prop.get(), 0.5);
    }

    #[test]
    fn test_default_duration() {
        let prop = CellProperty::new("alpha", 1.0);
        let anim = PropertyAnimator::of_float(prop, 0.0);
        assert_eq!(anim.duration(), DEFAULT_DURATION);
        assert_eq!(anim.interpolator(), Interpolator::AccelerateDecelerate);
        assert_eq!(anim.total_duration(), Some(DEFAULT_DURATION));
    }

    #[test]
    fn test_animator_update() {
        let prop = CellProperty::new("alpha", 0.5);
        let mut anim = create_test_animator(&prop);

        anim.begin();
        assert_eq!(anim.state(), AnimationState::Playing);
        // 启动时立即写入起点
        assert_eq!(prop.get(), 0.0);

        assert!(anim.advance(0.4));
        assert!((prop.get() - 0.4).abs() < 1e-5);

        // 完成
        assert!(!anim.advance(0.6));
        assert_eq!(anim.state(), AnimationState::Completed);
        assert_eq!(prop.get(), 1.0);

        // 结束后不再推进
        assert!(!anim.advance(0.1));
    }

    #[test]
    fn test_reverse_returns_to_start() {
        let prop = CellProperty::new("translation_x", 10.0);
        let mut anim = PropertyAnimator::of_float(prop.clone(), 200.0)
            .with_duration(1.0)
            .with_interpolator(Interpolator::Linear)
            .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse);
        assert_eq!(anim.total_duration(), Some(2.0));

        anim.begin();
        anim.advance(0.5);
        assert!((prop.get() - 105.0).abs() < 1e-3);

        // 第二轮反向
        anim.advance(1.0);
        assert!((prop.get() - 105.0).abs() < 1e-3);

        assert!(!anim.advance(0.5));
        assert_eq!(prop.get(), 10.0);
    }

    #[test]
    fn test_restart_repeats_forward() {
        let prop = CellProperty::new("rotation", 0.0);
        let mut anim =
            create_test_animator(&prop).with_repeat(RepeatCount::Count(1), RepeatMode::Restart);

        anim.begin();
        anim.advance(0.9);
        assert!(prop.get() > 0.8);

        // 进入第二轮，重新从起点开始
        anim.advance(0.2);
        assert!(prop.get() < 0.2);

        assert!(!anim.advance(1.0));
        assert_eq!(prop.get(), 1.0);
    }

    #[test]
    fn test_infinite_repeat_until_cancel() {
        let prop = CellProperty::new("alpha", 1.0);
        let mut anim =
            create_test_animator(&prop).with_repeat(RepeatCount::Infinite, RepeatMode::Reverse);
        assert_eq!(anim.total_duration(), None);

        anim.begin();
        for _ in 0..100 {
            assert!(anim.advance(0.25));
        }
        anim.cancel();
        assert_eq!(anim.state(), AnimationState::Canceled);
        assert!(!anim.advance(0.25));
    }

    #[test]
    fn test_start_delay() {
        let prop = CellProperty::new("alpha", 0.5);
        let mut anim = create_test_animator(&prop).with_start_delay(0.5);

        anim.begin();
        // 延迟期间
        assert!(anim.advance(0.3));
        assert_eq!(anim.state(), AnimationState::Pending);
        assert_eq!(prop.get(), 0.5);

        // 延迟结束，进入播放
        assert!(anim.advance(0.3));
        assert_eq!(anim.state(), AnimationState::Playing);
        assert!((prop.get() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_zero_duration_completes_on_begin() {
        let prop = CellProperty::new("alpha", 0.5);
        let mut anim = create_test_animator(&prop).with_duration(0.0);

        anim.begin();
        assert_eq!(anim.state(), AnimationState::Completed);
        assert_eq!(prop.get(), 1.0);
    }

    #[test]
    fn test_pause_resume() {
        let prop = CellProperty::new("alpha", 0.0);
        let mut anim = create_test_animator(&prop);

        anim.begin();
        anim.advance(0.2);
        anim.pause();
        assert!(anim.advance(5.0));
        assert!((prop.get() - 0.2).abs() < 1e-5);

        anim.resume();
        anim.advance(0.2);
        assert!((prop.get() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_listeners_fire_once() {
        let prop = CellProperty::new("alpha", 0.0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let (start_log, end_log) = (log.clone(), log.clone());

        let mut anim = create_test_animator(&prop);
        anim.add_listener(Box::new(
            ListenerAdapter::new()
                .with_start(move || start_log.borrow_mut().push("start"))
                .with_end(move |canceled| {
                    end_log
                        .borrow_mut()
                        .push(if canceled { "cancel" } else { "end" })
                }),
        ));

        anim.begin();
        assert_eq!(*log.borrow(), vec!["start"]);

        anim.advance(2.0);
        anim.advance(2.0);
        anim.cancel();
        assert_eq!(*log.borrow(), vec!["start", "end"]);
    }

    #[test]
    fn test_multiple_holders_in_lockstep() {
        let x = CellProperty::new("scale_x", 1.0);
        let y = CellProperty::new("scale_y", 1.0);
        let mut anim = PropertyAnimator::new()
            .with_holder(PropertyValuesHolder::to(x.clone(), 4.0))
            .with_holder(PropertyValuesHolder::to(y.clone(), 4.0))
            .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse);

        anim.begin();
        while anim.advance(0.016) {
            assert_eq!(x.get(), y.get());
        }
        assert_eq!(x.get(), 1.0);
        assert_eq!(y.get(), 1.0);
    }
}
