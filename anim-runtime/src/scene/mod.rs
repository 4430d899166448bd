//! # Scene 模块
//!
//! 无渲染的界面模型：一个容器、容器里的视图、一排触发控件。
//!
//! 所有句柄都是 `Rc` 共享的单线程对象，只在事件循环线程上修改。

mod button;
mod container;
mod snapshot;
mod transform;
mod view;

pub use button::{Button, ButtonKind};
pub use container::{BackgroundColor, Container};
pub use snapshot::{ButtonSnapshot, SceneSnapshot, ViewSnapshot};
pub use transform::{Transform, Vec2};
pub use view::{View, ViewId, ViewProperty, ViewPropertyAccessor};
