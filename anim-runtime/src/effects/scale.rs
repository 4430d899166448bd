//! # Scale 效果
//!
//! 没有同时覆盖两个轴的单一属性，所以 x、y 两个缩放属性放进同一个动画器，
//! 逐帧同步写入，保证任意时刻 `scale_x == scale_y`。

use tracing::debug;

use crate::animator::{AnimationId, PropertyAnimator, RepeatCount, RepeatMode};
use crate::guard::disable_during_animation;
use crate::property::PropertyValuesHolder;
use crate::scene::{Button, View, ViewProperty};
use crate::system::AnimationSystem;

/// 放大倍数
pub const TO_SCALE: f32 = 4.0;

/// 构造缩放动画
pub fn build(star: &View) -> PropertyAnimator {
    PropertyAnimator::new()
        .with_holder(PropertyValuesHolder::to(star.property(ViewProperty::ScaleX), TO_SCALE))
        .with_holder(PropertyValuesHolder::to(star.property(ViewProperty::ScaleY), TO_SCALE))
        .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse)
}

/// 启动缩放，播放期间禁用控件
pub fn run(system: &mut AnimationSystem, star: &View, button: &Button) -> AnimationId {
    let mut animator = build(star);
    disable_during_animation(&mut animator, button);
    let id = system.start(animator);
    debug!(id = %id, "scale");
    id
}
