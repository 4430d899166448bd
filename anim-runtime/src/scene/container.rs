//! # Container 模块
//!
//! 承载所有视图的布局区域。容器拥有子视图列表，并提供背景色属性。

use std::cell::RefCell;
use std::rc::Rc;

use super::view::{View, ViewId};
use crate::property::PropertyAccessor;
use crate::value::Argb;

#[derive(Debug)]
struct ContainerData {
    width: f32,
    height: f32,
    background: Argb,
    /// 子视图（按加入顺序，后加入的绘制在上层）
    children: Vec<View>,
    next_view_id: u64,
}

/// 容器句柄
#[derive(Debug, Clone)]
pub struct Container {
    inner: Rc<RefCell<ContainerData>>,
}

impl Container {
    /// 创建容器
    pub fn new(width: f32, height: f32, background: Argb) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContainerData {
                width,
                height,
                background,
                children: Vec::new(),
                next_view_id: 1,
            })),
        }
    }

    /// 容器尺寸
    pub fn size(&self) -> (f32, f32) {
        let data = self.inner.borrow();
        (data.width, data.height)
    }

    /// 当前背景色
    pub fn background(&self) -> Argb {
        self.inner.borrow().background
    }

    /// 创建新视图并加入容器
    pub fn add_view(&self, width: f32, height: f32) -> View {
        let mut data = self.inner.borrow_mut();
        let id = ViewId(data.next_view_id);
        data.next_view_id += 1;

        let view = View::new(id, width, height);
        data.children.push(view.clone());
        view
    }

    /// 从容器移除视图
    ///
    /// # 返回
    /// 被移除的视图；视图不在容器中时返回 `None`
    pub fn remove_view(&self, id: ViewId) -> Option<View> {
        let mut data = self.inner.borrow_mut();
        let index = data.children.iter().position(|v| v.id() == id)?;
        Some(data.children.remove(index))
    }

    /// 视图是否在容器中
    pub fn contains(&self, id: ViewId) -> bool {
        self.inner.borrow().children.iter().any(|v| v.id() == id)
    }

    /// 子视图数量
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// 子视图列表（句柄克隆）
    pub fn children(&self) -> Vec<View> {
        self.inner.borrow().children.clone()
    }

    /// 背景色访问器
    pub fn background_property(&self) -> BackgroundColor {
        BackgroundColor {
            container: self.clone(),
        }
    }
}

/// 容器背景色访问器
#[derive(Debug, Clone)]
pub struct BackgroundColor {
    container: Container,
}

impl PropertyAccessor<Argb> for BackgroundColor {
    fn get(&self) -> Argb {
        self.container.background()
    }

    fn set(&self, value: Argb) {
        self.container.inner.borrow_mut().background = value;
    }

    fn name(&self) -> &'static str {
        "background_color"
    }
}
