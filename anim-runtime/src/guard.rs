//! # Guard 模块
//!
//! 播放期间禁用触发控件，防止连续点击重复启动同一个效果。

use tracing::trace;

use crate::animator::Animator;
use crate::listener::AnimatorListener;
use crate::scene::Button;

/// 控件守卫监听器
///
/// 开始时禁用控件；结束时（无论自然完成还是被取消）重新启用。
#[derive(Debug)]
pub struct ButtonGuard {
    button: Button,
}

impl ButtonGuard {
    pub fn new(button: Button) -> Self {
        Self { button }
    }
}

impl AnimatorListener for ButtonGuard {
    fn on_start(&mut self) {
        trace!(button = %self.button.kind(), "禁用控件");
        self.button.set_enabled(false);
    }

    fn on_end(&mut self, canceled: bool) {
        trace!(button = %self.button.kind(), canceled, "启用控件");
        self.button.set_enabled(true);
    }
}

/// 为动画挂上控件守卫
///
/// 每次调用挂一个新的守卫实例。
pub fn disable_during_animation<A: Animator + ?Sized>(animator: &mut A, button: &Button) {
    animator.add_listener(Box::new(ButtonGuard::new(button.clone())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::PropertyAnimator;
    use crate::property::CellProperty;
    use crate::scene::ButtonKind;
    use crate::system::AnimationSystem;

    #[test]
    fn test_guard_disables_while_running() {
        let mut system = AnimationSystem::new();
        let button = Button::new(ButtonKind::Rotate);
        let prop = CellProperty::new("rotation", 0.0);

        let mut animator = PropertyAnimator::of_float(prop, 0.0).with_duration(1.0);
        disable_during_animation(&mut animator, &button);
        assert!(button.is_enabled());

        system.start(animator);
        assert!(!button.is_enabled());

        system.update(0.5);
        assert!(!button.is_enabled());

        system.update(0.5);
        assert!(button.is_enabled());
    }

    #[test]
    fn test_guard_re_enables_on_cancel() {
        let mut system = AnimationSystem::new();
        let button = Button::new(ButtonKind::Fade);
        let prop = CellProperty::new("alpha", 1.0);

        let mut animator = PropertyAnimator::of_float(prop, 0.0);
        disable_during_animation(&mut animator, &button);
        let id = system.start(animator);
        assert!(!button.is_enabled());

        system.cancel(id).unwrap();
        assert!(button.is_enabled());
    }
}
