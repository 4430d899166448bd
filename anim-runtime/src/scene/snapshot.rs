//! # Snapshot 模块
//!
//! 界面状态的可序列化快照，供宿主输出与测试使用。

use serde::Serialize;

use super::button::Button;
use super::container::Container;
use super::view::{View, ViewId};

/// 单个视图的快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub id: ViewId,
    pub width: f32,
    pub height: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
}

impl From<&View> for ViewSnapshot {
    fn from(view: &View) -> Self {
        let (width, height) = view.size();
        let t = view.transform();
        Self {
            id: view.id(),
            width,
            height,
            translation_x: t.translation.x,
            translation_y: t.translation.y,
            rotation: t.rotation,
            scale_x: t.scale.x,
            scale_y: t.scale.y,
            alpha: t.alpha,
        }
    }
}

/// 控件快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonSnapshot {
    pub label: &'static str,
    pub enabled: bool,
}

impl From<&Button> for ButtonSnapshot {
    fn from(button: &Button) -> Self {
        Self {
            label: button.label(),
            enabled: button.is_enabled(),
        }
    }
}

/// 整个界面的快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub container_width: f32,
    pub container_height: f32,
    /// 背景色（`0xAARRGGBB`）
    pub background: u32,
    pub views: Vec<ViewSnapshot>,
    pub buttons: Vec<ButtonSnapshot>,
    pub active_animations: usize,
}

impl SceneSnapshot {
    /// 采集快照
    pub fn capture(container: &Container, buttons: &[Button], active_animations: usize) -> Self {
        let (container_width, container_height) = container.size();
        Self {
            container_width,
            container_height,
            background: container.background().0,
            views: container.children().iter().map(ViewSnapshot::from).collect(),
            buttons: buttons.iter().map(ButtonSnapshot::from).collect(),
            active_animations,
        }
    }
}
