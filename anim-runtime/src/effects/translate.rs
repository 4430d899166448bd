//! # Translate 效果
//!
//! 星星向右平移 200，再原路返回。结束后平移量回到开始前的值。

use tracing::debug;

use crate::animator::{AnimationId, PropertyAnimator, RepeatCount, RepeatMode};
use crate::guard::disable_during_animation;
use crate::scene::{Button, View, ViewProperty};
use crate::system::AnimationSystem;

/// 平移终点
pub const TO_X: f32 = 200.0;

/// 构造平移动画（从当前位置出发）
pub fn build(star: &View) -> PropertyAnimator {
    PropertyAnimator::of_float(star.property(ViewProperty::TranslationX), TO_X)
        .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse)
}

/// 启动平移，播放期间禁用控件
pub fn run(system: &mut AnimationSystem, star: &View, button: &Button) -> AnimationId {
    let mut animator = build(star);
    disable_during_animation(&mut animator, button);
    let id = system.start(animator);
    debug!(id = %id, from = star.get(ViewProperty::TranslationX), "translate");
    id
}
