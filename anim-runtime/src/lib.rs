//! # Anim Runtime
//!
//! 属性动画演示的核心运行时库。
//!
//! ## 架构概述
//!
//! `anim-runtime` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 宿主层（Host）只需要按帧调用 `tick`，并在用户点击时调用 `press`：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── press(ButtonKind) ─────►│ 构造动画、挂守卫、启动
//!   │                              │
//!   │──── tick(dt) ──────────────►│ 推进时间、写回属性、触发回调
//!   │◄─── Vec<AnimationEvent> ────│
//!   │                              │
//!   │──── snapshot() ────────────►│
//!   │◄─── SceneSnapshot ──────────│
//! ```
//!
//! ## 模块结构
//!
//! - [`easing`]：插值曲线
//! - [`value`]：可动画值（数值、ARGB 颜色）
//! - [`property`]：类型化属性访问器
//! - [`animator`]：属性动画器（时长、重复、往返）
//! - [`set`]：同时播放的动画集合
//! - [`listener`]：生命周期回调
//! - [`system`]：动画系统
//! - [`scene`]：视图、容器、控件
//! - [`guard`]：播放期间禁用控件
//! - [`effects`]：六个效果
//! - [`controller`]：主界面

pub mod animator;
pub mod controller;
pub mod easing;
pub mod effects;
pub mod error;
pub mod guard;
pub mod listener;
pub mod property;
pub mod scene;
pub mod set;
pub mod system;
pub mod value;

// 重导出核心类型
pub use animator::{
    AnimationId, AnimationState, Animator, DEFAULT_DURATION, PropertyAnimator, RepeatCount,
    RepeatMode,
};
pub use controller::{MainScreen, PressOutcome, ScreenLayout};
pub use easing::Interpolator;
pub use error::{AnimError, AnimResult};
pub use guard::{ButtonGuard, disable_during_animation};
pub use listener::{AnimatorListener, ListenerAdapter};
pub use property::{CellProperty, PropertyAccessor, PropertyValuesHolder, ValuesHolder};
pub use scene::{
    Button, ButtonKind, ButtonSnapshot, Container, SceneSnapshot, View, ViewId, ViewProperty,
    ViewSnapshot,
};
pub use set::AnimatorSet;
pub use system::{AnimationEvent, AnimationSystem};
pub use value::{AnimValue, Argb};
