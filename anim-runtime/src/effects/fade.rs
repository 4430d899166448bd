//! # Fade 效果
//!
//! 星星淡出到完全透明，再淡入回原来的透明度。

use tracing::debug;

use crate::animator::{AnimationId, PropertyAnimator, RepeatCount, RepeatMode};
use crate::guard::disable_during_animation;
use crate::scene::{Button, View, ViewProperty};
use crate::system::AnimationSystem;

/// 淡出终点
pub const TO_ALPHA: f32 = 0.0;

/// 构造淡出淡入动画
pub fn build(star: &View) -> PropertyAnimator {
    PropertyAnimator::of_float(star.property(ViewProperty::Alpha), TO_ALPHA)
        .with_repeat(RepeatCount::Count(1), RepeatMode::Reverse)
}

/// 启动淡出淡入，播放期间禁用控件
pub fn run(system: &mut AnimationSystem, star: &View, button: &Button) -> AnimationId {
    let mut animator = build(star);
    disable_during_animation(&mut animator, button);
    let id = system.start(animator);
    debug!(id = %id, "fade");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ButtonKind, Container};
    use crate::value::Argb;

    #[test]
    fn test_fade_out_and_back() {
        let container = Container::new(100.0, 100.0, Argb::BLACK);
        let star = container.add_view(10.0, 10.0);

        let mut system = AnimationSystem::new();
        let button = Button::new(ButtonKind::Fade);
        run(&mut system, &star, &button);

        let mut lowest = 1.0_f32;
        while system.has_active_animations() {
            assert!(!button.is_enabled());
            system.update(0.01);
            lowest = lowest.min(star.get(ViewProperty::Alpha));
        }
        assert!(lowest < 0.01);
        assert_eq!(star.get(ViewProperty::Alpha), 1.0);
        assert!(button.is_enabled());
    }
}
