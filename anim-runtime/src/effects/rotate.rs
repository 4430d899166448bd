//! # Rotate 效果
//!
//! 星星从 -360° 转回 0°，整整一圈。终点是绝对角度，和起始角度无关。

use tracing::debug;

use crate::animator::{AnimationId, PropertyAnimator};
use crate::guard::disable_during_animation;
use crate::scene::{Button, View, ViewProperty};
use crate::system::AnimationSystem;

/// 旋转时长（秒），比默认的 0.3 秒长
pub const DURATION: f32 = 1.0;

pub const FROM_DEGREES: f32 = -360.0;
pub const TO_DEGREES: f32 = 0.0;

/// 构造旋转动画
pub fn build(star: &View) -> PropertyAnimator {
    PropertyAnimator::of_float_between(
        star.property(ViewProperty::Rotation),
        FROM_DEGREES,
        TO_DEGREES,
    )
    .with_duration(DURATION)
}

/// 启动旋转，播放期间禁用控件
pub fn run(system: &mut AnimationSystem, star: &View, button: &Button) -> AnimationId {
    let mut animator = build(star);
    disable_during_animation(&mut animator, button);
    let id = system.start(animator);
    debug!(id = %id, "rotate");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{Animator, RepeatCount};
    use crate::scene::Container;
    use crate::value::Argb;

    #[test]
    fn test_rotate_parameters() {
        let container = Container::new(100.0, 100.0, Argb::BLACK);
        let star = container.add_view(10.0, 10.0);
        let animator = build(&star);

        assert_eq!(animator.duration(), DURATION);
        assert_eq!(animator.repeat_count(), RepeatCount::Count(0));
        assert_eq!(animator.total_duration(), Some(1.0));
        assert_eq!(animator.property_names(), vec!["rotation"]);
    }

    #[test]
    fn test_rotate_ends_at_zero_from_any_angle() {
        let container = Container::new(100.0, 100.0, Argb::BLACK);
        let star = container.add_view(10.0, 10.0);
        star.set(ViewProperty::Rotation, 123.0);

        let mut system = AnimationSystem::new();
        let button = Button::new(crate::scene::ButtonKind::Rotate);
        run(&mut system, &star, &button);
        assert_eq!(star.get(ViewProperty::Rotation), FROM_DEGREES);

        while system.has_active_animations() {
            system.update(1.0 / 60.0);
        }
        assert_eq!(star.get(ViewProperty::Rotation), 0.0);
        assert!(button.is_enabled());
    }
}
