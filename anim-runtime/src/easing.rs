//! # Easing 模块
//!
//! 插值曲线，把动画经过的时间比例映射为缓动后的进度比例。

use std::f32::consts::PI;

/// 插值曲线
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interpolator {
    /// 线性（匀速）
    Linear,
    /// 加速（先慢后快），参数为加速因子
    ///
    /// 因子为 1.0 时是抛物线 `t²`，用于模拟重力下落。
    Accelerate(f32),
    /// 减速（先快后慢），参数为减速因子
    Decelerate(f32),
    /// 加速减速（两头慢中间快）
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Interpolator::Linear => t,
            Interpolator::Accelerate(factor) => accelerate(t, factor),
            Interpolator::Decelerate(factor) => decelerate(t, factor),
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

fn accelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        t * t
    } else {
        t.powf(2.0 * factor)
    }
}

fn decelerate(t: f32, factor: f32) -> f32 {
    if factor == 1.0 {
        1.0 - (1.0 - t) * (1.0 - t)
    } else {
        1.0 - (1.0 - t).powf(2.0 * factor)
    }
}
