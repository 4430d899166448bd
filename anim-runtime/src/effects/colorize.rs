//! # Colorize 效果
//!
//! 动画目标是星星所在的容器而不是星星本身：背景色从黑到红再回到黑。
//! 颜色按 ARGB 通道插值。

use tracing::debug;

use crate::animator::{AnimationId, PropertyAnimator, RepeatCount, RepeatMode};
use crate::guard::disable_during_animation;
use crate::scene::{Button, Container};
use crate::system::AnimationSystem;
use crate::value::Argb;

/// 变色时长（秒）
pub const DURATION: f32 = 0.5;

/// 起始颜色
pub const OFF_COLOR: Argb = Argb::BLACK;

/// 警示颜色
pub const ALERT_COLOR: Argb = Argb::RED;

/// 构造背景色动画
pub fn build(container: &Container) -> PropertyAnimator {
    PropertyAnimator::of_argb(container.background_property(), OFF_COLOR, ALERT_COLOR)
        .with_duration(DURATION)
        .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse)
}

/// 启动变色，播放期间禁用控件
pub fn run(system: &mut AnimationSystem, container: &Container, button: &Button) -> AnimationId {
    let mut animator = build(container);
    disable_during_animation(&mut animator, button);
    let id = system.start(animator);
    debug!(id = %id, from = %OFF_COLOR, to = %ALERT_COLOR, "colorize");
    id
}
