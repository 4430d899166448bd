//! # Shower 效果
//!
//! 每次触发在容器顶部随机位置生成一颗新星星，让它边下落边旋转，
//! 落出容器底部后从容器中移除。
//!
//! 不挂控件守卫：连续点击会产生多颗同时下落的星星，彼此独立。

use std::ops::Range;

use rand::Rng;
use tracing::debug;

use crate::animator::{AnimationId, Animator, PropertyAnimator};
use crate::easing::Interpolator;
use crate::listener::AnimatorListener;
use crate::scene::{Container, View, ViewId, ViewProperty};
use crate::set::AnimatorSet;
use crate::system::AnimationSystem;

/// 缩放下限（含）
pub const MIN_SCALE: f32 = 0.1;
/// 缩放上限（不含）
pub const MAX_SCALE: f32 = 1.6;
/// 最多旋转三圈
pub const MAX_SPIN_DEGREES: f32 = 1080.0;
/// 播放时长范围（秒）
pub const MIN_DURATION: f32 = 0.5;
pub const MAX_DURATION: f32 = 2.0;

/// 新星星水平起点的取值范围
///
/// 在 `[0, container_width)` 上均匀取点，再左移半个星星宽度让星星以该点为中心。
pub fn start_x_range(container_width: f32, star_width: f32) -> Range<f32> {
    let half = star_width / 2.0;
    -half..container_width - half
}

fn uniform<R: Rng>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range)
    }
}

/// 一次 Shower 的全部参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowerParams {
    /// 两个轴共用的缩放
    pub scale: f32,
    /// 缩放后的宽度
    pub width: f32,
    /// 缩放后的高度
    pub height: f32,
    /// 水平平移
    pub start_x: f32,
    /// 下落起点：完全在容器上方
    pub fall_from: f32,
    /// 下落终点：完全在容器下方
    pub fall_to: f32,
    /// 旋转终点（度）
    pub spin_to: f32,
    /// 播放时长（秒）
    pub duration: f32,
}

impl ShowerParams {
    /// 随机生成参数
    pub fn sample<R: Rng>(rng: &mut R, container_size: (f32, f32), star_size: (f32, f32)) -> Self {
        let scale = uniform(rng, MIN_SCALE..MAX_SCALE);
        Self::with_scale(rng, scale, container_size, star_size)
    }

    /// 缩放已定，随机生成其余参数
    pub fn with_scale<R: Rng>(
        rng: &mut R,
        scale: f32,
        (container_width, container_height): (f32, f32),
        (star_width, star_height): (f32, f32),
    ) -> Self {
        let width = star_width * scale;
        let height = star_height * scale;
        Self {
            scale,
            width,
            height,
            start_x: uniform(rng, start_x_range(container_width, width)),
            fall_from: -height,
            fall_to: container_height + height,
            spin_to: uniform(rng, 0.0..MAX_SPIN_DEGREES),
            duration: uniform(rng, MIN_DURATION..MAX_DURATION),
        }
    }
}

/// 构造下落 + 旋转的动画集合
///
/// 下落用加速曲线模拟重力；旋转匀速。两者共用集合时长。
pub fn build(new_star: &View, params: &ShowerParams) -> AnimatorSet {
    let fall = PropertyAnimator::of_float_between(
        new_star.property(ViewProperty::TranslationY),
        params.fall_from,
        params.fall_to,
    )
    .with_interpolator(Interpolator::Accelerate(1.0));

    let spin = PropertyAnimator::of_float(new_star.property(ViewProperty::Rotation), params.spin_to)
        .with_interpolator(Interpolator::Linear);

    AnimatorSet::play_together(vec![Box::new(fall), Box::new(spin)]).with_duration(params.duration)
}

/// 播放结束后把星星移出容器
struct RemoveOnEnd {
    container: Container,
    view: ViewId,
}

impl AnimatorListener for RemoveOnEnd {
    fn on_end(&mut self, canceled: bool) {
        if canceled {
            return;
        }
        if self.container.remove_view(self.view).is_some() {
            debug!(view = %self.view, "移除下落的星星");
        }
    }
}

/// 一次 Shower 的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawned {
    pub id: AnimationId,
    pub view: ViewId,
    pub params: ShowerParams,
}

/// 随机生成一颗星星并启动
pub fn run<R: Rng>(
    system: &mut AnimationSystem,
    container: &Container,
    star: &View,
    rng: &mut R,
) -> Spawned {
    let params = ShowerParams::sample(rng, container.size(), star.size());
    launch(system, container, star.size(), params)
}

/// 按给定参数生成一颗星星并启动
pub fn launch(
    system: &mut AnimationSystem,
    container: &Container,
    (star_width, star_height): (f32, f32),
    params: ShowerParams,
) -> Spawned {
    let new_star = container.add_view(star_width, star_height);
    new_star.set_uniform_scale(params.scale);
    new_star.set(ViewProperty::TranslationX, params.start_x);

    let mut set = build(&new_star, &params);
    set.add_listener(Box::new(RemoveOnEnd {
        container: container.clone(),
        view: new_star.id(),
    }));

    let id = system.start(set);
    debug!(
        id = %id,
        view = %new_star.id(),
        scale = params.scale,
        start_x = params.start_x,
        duration = params.duration,
        "shower"
    );

    Spawned {
        id,
        view: new_star.id(),
        params,
    }
}
