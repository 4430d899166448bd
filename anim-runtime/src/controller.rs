//! # Controller 模块
//!
//! 主界面：持有星星、容器和六个触发控件，把点击分发给对应的效果。
//!
//! ```rust,ignore
//! let mut screen = MainScreen::new(ScreenLayout::default(), StdRng::seed_from_u64(1))?;
//! screen.press(ButtonKind::Rotate);
//! loop {
//!     let events = screen.tick(1.0 / 60.0);
//! }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animator::AnimationId;
use crate::effects::{colorize, fade, rotate, scale, shower, translate};
use crate::error::{AnimError, AnimResult};
use crate::scene::{Button, ButtonKind, Container, SceneSnapshot, View};
use crate::system::{AnimationEvent, AnimationSystem};

/// 界面布局
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenLayout {
    /// 容器宽度
    pub container_width: f32,
    /// 容器高度
    pub container_height: f32,
    /// 星星素材宽度
    pub star_width: f32,
    /// 星星素材高度
    pub star_height: f32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            container_width: 1080.0,
            container_height: 1920.0,
            star_width: 100.0,
            star_height: 100.0,
        }
    }
}

impl ScreenLayout {
    /// 验证布局有效性
    pub fn validate(&self) -> AnimResult<()> {
        let fields = [
            ("container_width", self.container_width),
            ("container_height", self.container_height),
            ("star_width", self.star_width),
            ("star_height", self.star_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnimError::InvalidLayout {
                    field,
                    value,
                    message: "必须是正数".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// 点击结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressOutcome {
    /// 启动了新动画
    Started(AnimationId),
    /// 控件处于禁用状态，点击被忽略
    Ignored,
}

/// 主界面
pub struct MainScreen<R: Rng> {
    star: View,
    container: Container,
    /// 按 `ButtonKind::ALL` 顺序排列
    buttons: Vec<Button>,
    system: AnimationSystem,
    rng: R,
}

impl<R: Rng> std::fmt::Debug for MainScreen<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainScreen")
            .field("star", &self.star.id())
            .field("children", &self.container.child_count())
            .field("system", &self.system)
            .finish()
    }
}

impl<R: Rng> MainScreen<R> {
    /// 创建主界面
    ///
    /// 布局无效时初始化失败。
    pub fn new(layout: ScreenLayout, rng: R) -> AnimResult<Self> {
        layout.validate()?;

        let container = Container::new(
            layout.container_width,
            layout.container_height,
            colorize::OFF_COLOR,
        );
        let star = container.add_view(layout.star_width, layout.star_height);
        let buttons = ButtonKind::ALL.into_iter().map(Button::new).collect();

        info!(
            width = layout.container_width,
            height = layout.container_height,
            "主界面初始化完成"
        );

        Ok(Self {
            star,
            container,
            buttons,
            system: AnimationSystem::new(),
            rng,
        })
    }

    /// 点击控件
    pub fn press(&mut self, kind: ButtonKind) -> PressOutcome {
        let button = self.button(kind).clone();
        if !button.is_enabled() {
            debug!(button = %kind, "控件已禁用，忽略点击");
            return PressOutcome::Ignored;
        }

        let id = match kind {
            ButtonKind::Rotate => rotate::run(&mut self.system, &self.star, &button),
            ButtonKind::Translate => translate::run(&mut self.system, &self.star, &button),
            ButtonKind::Scale => scale::run(&mut self.system, &self.star, &button),
            ButtonKind::Fade => fade::run(&mut self.system, &self.star, &button),
            ButtonKind::Colorize => colorize::run(&mut self.system, &self.container, &button),
            ButtonKind::Shower => {
                shower::run(&mut self.system, &self.container, &self.star, &mut self.rng).id
            }
        };
        PressOutcome::Started(id)
    }

    /// 推进一帧
    pub fn tick(&mut self, dt: f32) -> Vec<AnimationEvent> {
        self.system.update(dt)
    }

    /// 销毁界面：取消所有动画
    ///
    /// 被守卫的控件会随取消重新启用。
    pub fn teardown(&mut self) -> Vec<AnimationEvent> {
        let count = self.system.active_count();
        self.system.cancel_all();
        info!(canceled = count, "主界面销毁");
        self.system.update(0.0)
    }

    /// 采集快照
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.container, &self.buttons, self.system.active_count())
    }

    pub fn star(&self) -> &View {
        &self.star
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn button(&self, kind: ButtonKind) -> &Button {
        &self.buttons[kind.index()]
    }

    pub fn system(&self) -> &AnimationSystem {
        &self.system
    }

    /// 是否还有动画在播放
    pub fn is_animating(&self) -> bool {
        self.system.has_active_animations()
    }
}
