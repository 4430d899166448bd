//! # Button 模块
//!
//! 触发控件。禁用状态下的点击会被忽略。

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// 六个触发控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Rotate,
    Translate,
    Scale,
    Fade,
    Colorize,
    Shower,
}

impl ButtonKind {
    /// 按界面顺序排列的全部控件
    pub const ALL: [ButtonKind; 6] = [
        ButtonKind::Rotate,
        ButtonKind::Translate,
        ButtonKind::Scale,
        ButtonKind::Fade,
        ButtonKind::Colorize,
        ButtonKind::Shower,
    ];

    /// 显示文本
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rotate => "Rotate",
            Self::Translate => "Translate",
            Self::Scale => "Scale",
            Self::Fade => "Fade",
            Self::Colorize => "Colorize",
            Self::Shower => "Shower",
        }
    }

    /// 按显示文本查找（忽略大小写）
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 控件句柄
///
/// 启用标志放在 `Cell` 中，动画监听器持有句柄克隆即可切换。
#[derive(Debug, Clone)]
pub struct Button {
    kind: ButtonKind,
    enabled: Rc<Cell<bool>>,
}

impl Button {
    /// 创建启用状态的控件
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            enabled: Rc::new(Cell::new(true)),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}
