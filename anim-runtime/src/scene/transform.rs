//! # Transform 模块
//!
//! 视图的变换状态：平移、缩放、旋转和透明度。

use serde::Serialize;

/// 二维向量
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// 创建新的向量
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 零向量
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// 单位向量 (1, 1)
    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// 变换状态
///
/// 平移是相对布局位置的偏移；旋转以度为单位，绕视图中心。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// 平移偏移
    pub translation: Vec2,
    /// 缩放因子
    pub scale: Vec2,
    /// 旋转角度（度）
    pub rotation: f32,
    /// 透明度 (0.0 - 1.0)
    pub alpha: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec2::zero(),
            scale: Vec2::one(),
            rotation: 0.0,
            alpha: 1.0,
        }
    }
}

impl Transform {
    /// 创建默认变换（无偏移、无缩放、无旋转、完全不透明）
    pub fn identity() -> Self {
        Self::default()
    }

    /// 设置均匀缩放
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec2::new(s, s);
    }
}
