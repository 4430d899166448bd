//! # System 模块
//!
//! 动画系统管理器，由宿主的帧循环驱动。
//!
//! ```rust,ignore
//! let id = system.start(PropertyAnimator::of_float(star.property(ViewProperty::Alpha), 0.0));
//! loop {
//!     for event in system.update(dt) {
//!         // Started / Ended / Canceled
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::animator::{AnimationId, Animator};
use crate::error::{AnimError, AnimResult};

/// 动画事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id")]
pub enum AnimationEvent {
    /// 动画开始
    Started(AnimationId),
    /// 动画自然播放完成
    Ended(AnimationId),
    /// 动画被取消
    Canceled(AnimationId),
}

impl AnimationEvent {
    /// 事件对应的动画
    pub fn id(&self) -> AnimationId {
        match *self {
            Self::Started(id) | Self::Ended(id) | Self::Canceled(id) => id,
        }
    }
}

/// 动画系统
///
/// 管理所有正在播放的单元，提供统一的更新和查询接口。
///
/// ## 设计理念
///
/// 动画系统只负责：
/// 1. 分配 `AnimationId` 并持有播放单元
/// 2. 按帧推进时间，由单元自己把值写回属性
/// 3. 汇总生命周期事件，供宿主按需观察
///
/// 所有调用都发生在同一个线程上，监听器在调用期间同步触发。
pub struct AnimationSystem {
    /// 正在播放的单元（按启动顺序）
    running: BTreeMap<AnimationId, Box<dyn Animator>>,
    /// 下一个动画 ID
    next_anim_id: u64,
    /// 待处理的事件队列
    events: Vec<AnimationEvent>,
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimationSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSystem")
            .field("running", &self.running.len())
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl AnimationSystem {
    /// 创建新的动画系统
    pub fn new() -> Self {
        Self {
            running: BTreeMap::new(),
            next_anim_id: 1,
            events: Vec::new(),
        }
    }

    /// 生成下一个动画 ID
    fn next_animation_id(&mut self) -> AnimationId {
        let id = AnimationId::new(self.next_anim_id);
        self.next_anim_id += 1;
        id
    }

    // ========== 动画控制 ==========

    /// 启动播放单元
    ///
    /// `on_start` 在返回前同步触发。时长为零的单元会在此直接结束。
    pub fn start(&mut self, animator: impl Animator + 'static) -> AnimationId {
        self.start_boxed(Box::new(animator))
    }

    /// 启动已装箱的播放单元
    pub fn start_boxed(&mut self, mut animator: Box<dyn Animator>) -> AnimationId {
        let id = self.next_animation_id();
        animator.begin();
        self.events.push(AnimationEvent::Started(id));

        if animator.state().is_finished() {
            debug!(id = %id, "动画启动即结束");
            self.events.push(AnimationEvent::Ended(id));
        } else {
            debug!(id = %id, total = ?animator.total_duration(), "动画启动");
            self.running.insert(id, animator);
        }
        id
    }

    /// 更新所有动画
    ///
    /// # 返回
    /// 返回自上次调用以来产生的事件列表
    pub fn update(&mut self, dt: f32) -> Vec<AnimationEvent> {
        let mut completed: Vec<AnimationId> = Vec::new();

        for (id, animator) in &mut self.running {
            if !animator.advance(dt) {
                completed.push(*id);
            }
        }

        // 发送完成事件并清理
        for id in completed {
            self.running.remove(&id);
            debug!(id = %id, "动画完成");
            self.events.push(AnimationEvent::Ended(id));
        }

        // 返回并清空事件队列
        std::mem::take(&mut self.events)
    }

    /// 取消动画
    ///
    /// 监听器收到 `on_end(true)`。
    pub fn cancel(&mut self, id: AnimationId) -> AnimResult<()> {
        let mut animator = self
            .running
            .remove(&id)
            .ok_or(AnimError::UnknownAnimation { id })?;
        animator.cancel();
        debug!(id = %id, "动画取消");
        self.events.push(AnimationEvent::Canceled(id));
        Ok(())
    }

    /// 取消所有动画（界面销毁时使用）
    pub fn cancel_all(&mut self) {
        let running = std::mem::take(&mut self.running);
        for (id, mut animator) in running {
            animator.cancel();
            self.events.push(AnimationEvent::Canceled(id));
        }
    }

    /// 暂停动画
    pub fn pause(&mut self, id: AnimationId) -> AnimResult<()> {
        self.running
            .get_mut(&id)
            .ok_or(AnimError::UnknownAnimation { id })?
            .pause();
        Ok(())
    }

    /// 恢复动画
    pub fn resume(&mut self, id: AnimationId) -> AnimResult<()> {
        self.running
            .get_mut(&id)
            .ok_or(AnimError::UnknownAnimation { id })?
            .resume();
        Ok(())
    }

    // ========== 查询方法 ==========

    /// 动画是否仍在播放（含暂停）
    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.contains_key(&id)
    }

    /// 检查是否有活跃的动画
    pub fn has_active_animations(&self) -> bool {
        !self.running.is_empty()
    }

    /// 获取活跃动画数量
    pub fn active_count(&self) -> usize {
        self.running.len()
    }

    /// 正在播放的动画 ID（按启动顺序）
    pub fn running_ids(&self) -> Vec<AnimationId> {
        self.running.keys().copied().collect()
    }
}
