//! # Value 模块
//!
//! 可动画值类型与它们的求值方式。
//!
//! 数值按线性插值求值；颜色按 ARGB 四个通道分别插值，
//! 不能把打包后的 `u32` 当成普通数字插值（会在通道之间产生进位）。

use serde::{Deserialize, Serialize};

/// 可被动画驱动的值
///
/// `evaluate` 根据缓动后的进度在 `start` 与 `end` 之间求值。
pub trait AnimValue: Copy + std::fmt::Debug + 'static {
    fn evaluate(fraction: f32, start: Self, end: Self) -> Self;
}

impl AnimValue for f32 {
    fn evaluate(fraction: f32, start: Self, end: Self) -> Self {
        start + (end - start) * fraction
    }
}

/// 打包的 ARGB 颜色（`0xAARRGGBB`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);

    /// 由四个通道组合颜色
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl AnimValue for Argb {
    fn evaluate(fraction: f32, start: Self, end: Self) -> Self {
        Argb::from_channels(
            blend_channel(fraction, start.alpha(), end.alpha()),
            blend_channel(fraction, start.red(), end.red()),
            blend_channel(fraction, start.green(), end.green()),
            blend_channel(fraction, start.blue(), end.blue()),
        )
    }
}

fn blend_channel(fraction: f32, start: u8, end: u8) -> u8 {
    let start = start as f32;
    let value = start + (end as f32 - start) * fraction;
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_evaluate() {
        assert_eq!(f32::evaluate(0.0, -360.0, 0.0), -360.0);
        assert_eq!(f32::evaluate(0.5, -360.0, 0.0), -180.0);
        assert_eq!(f32::evaluate(1.0, -360.0, 0.0), 0.0);
    }

    #[test]
    fn test_channels() {
        let c = Argb::from_channels(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
        assert_eq!(c.to_string(), "#12345678");
    }

    #[test]
    fn test_argb_blends_per_channel() {
        let mid = Argb::evaluate(0.5, Argb::BLACK, Argb::RED);
        assert_eq!(mid.alpha(), 0xFF);
        assert_eq!(mid.red(), 128);
        assert_eq!(mid.green(), 0);
        assert_eq!(mid.blue(), 0);

        // 按整数插值会把红色通道的进位漏到其他通道
        let numeric = f32::evaluate(0.5, Argb::BLACK.0 as f32, Argb::RED.0 as f32) as u32;
        assert_ne!(Argb(numeric), mid);
    }

    #[test]
    fn test_argb_endpoints_exact() {
        assert_eq!(Argb::evaluate(0.0, Argb::BLACK, Argb::RED), Argb::BLACK);
        assert_eq!(Argb::evaluate(1.0, Argb::BLACK, Argb::RED), Argb::RED);
    }
}
