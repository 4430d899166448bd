//! # Effects 模块
//!
//! 六个按钮对应的动画效果。
//!
//! 每个效果分两步：`build` 只构造动画（纯函数，便于检查参数），
//! `run` 挂上控件守卫并交给 `AnimationSystem` 启动。
//! Shower 不挂守卫，允许连续触发。

pub mod colorize;
pub mod fade;
pub mod rotate;
pub mod scale;
pub mod shower;
pub mod translate;
