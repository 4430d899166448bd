//! # Listener 模块
//!
//! 动画生命周期回调。
//!
//! 同一个动画的回调总是先 `on_start` 后 `on_end`，且都在调用
//! `AnimationSystem::start` / `update` / `cancel` 的线程上同步触发。

/// 动画监听器
pub trait AnimatorListener {
    /// 动画开始（`start` 调用时同步触发，即使有启动延迟）
    fn on_start(&mut self) {}

    /// 动画结束
    ///
    /// `canceled` 为 `true` 表示被取消而非自然播放完成。
    fn on_end(&mut self, _canceled: bool) {}
}

type StartFn = Box<dyn FnMut()>;
type EndFn = Box<dyn FnMut(bool)>;

/// 基于闭包的监听器
///
/// ```rust,ignore
/// animator.add_listener(ListenerAdapter::new().with_end(|canceled| {
///     println!("done, canceled = {canceled}");
/// }));
/// ```
#[derive(Default)]
pub struct ListenerAdapter {
    start: Option<StartFn>,
    end: Option<EndFn>,
}

impl ListenerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置开始回调
    pub fn with_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// 设置结束回调
    pub fn with_end(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.end = Some(Box::new(f));
        self
    }
}

impl AnimatorListener for ListenerAdapter {
    fn on_start(&mut self) {
        if let Some(f) = self.start.as_mut() {
            f();
        }
    }

    fn on_end(&mut self, canceled: bool) {
        if let Some(f) = self.end.as_mut() {
            f(canceled);
        }
    }
}

/// 一组监听器
#[derive(Default)]
pub(crate) struct Listeners {
    inner: Vec<Box<dyn AnimatorListener>>,
}

impl Listeners {
    pub(crate) fn push(&mut self, listener: Box<dyn AnimatorListener>) {
        self.inner.push(listener);
    }

    pub(crate) fn notify_start(&mut self) {
        for listener in &mut self.inner {
            listener.on_start();
        }
    }

    pub(crate) fn notify_end(&mut self, canceled: bool) {
        for listener in &mut self.inner {
            listener.on_end(canceled);
        }
    }
}
