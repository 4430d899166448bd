//! # View 模块
//!
//! 可动画的图形视图，以及绑定到视图单个属性的访问器。

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::transform::Transform;
use crate::property::PropertyAccessor;

/// 视图唯一标识符
///
/// 由 `Container` 在创建视图时分配。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ViewId(pub(crate) u64);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ViewId({})", self.0)
    }
}

/// 视图的可动画属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewProperty {
    TranslationX,
    TranslationY,
    /// 旋转（度）
    Rotation,
    ScaleX,
    ScaleY,
    /// 透明度
    Alpha,
}

impl ViewProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TranslationX => "translation_x",
            Self::TranslationY => "translation_y",
            Self::Rotation => "rotation",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::Alpha => "alpha",
        }
    }

    fn read(&self, t: &Transform) -> f32 {
        match self {
            Self::TranslationX => t.translation.x,
            Self::TranslationY => t.translation.y,
            Self::Rotation => t.rotation,
            Self::ScaleX => t.scale.x,
            Self::ScaleY => t.scale.y,
            Self::Alpha => t.alpha,
        }
    }

    fn write(&self, t: &mut Transform, value: f32) {
        match self {
            Self::TranslationX => t.translation.x = value,
            Self::TranslationY => t.translation.y = value,
            Self::Rotation => t.rotation = value,
            Self::ScaleX => t.scale.x = value,
            Self::ScaleY => t.scale.y = value,
            Self::Alpha => t.alpha = value.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug)]
struct ViewData {
    id: ViewId,
    /// 未缩放时的宽度
    width: f32,
    /// 未缩放时的高度
    height: f32,
    transform: Transform,
}

/// 视图句柄
///
/// 克隆句柄共享同一个视图；容器、动画访问器和控制器都持有句柄。
#[derive(Debug, Clone)]
pub struct View {
    inner: Rc<RefCell<ViewData>>,
}

impl View {
    pub(crate) fn new(id: ViewId, width: f32, height: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewData {
                id,
                width,
                height,
                transform: Transform::default(),
            })),
        }
    }

    pub fn id(&self) -> ViewId {
        self.inner.borrow().id
    }

    /// 未缩放的尺寸
    pub fn size(&self) -> (f32, f32) {
        let data = self.inner.borrow();
        (data.width, data.height)
    }

    /// 缩放后的实际尺寸
    pub fn scaled_size(&self) -> (f32, f32) {
        let data = self.inner.borrow();
        (
            data.width * data.transform.scale.x,
            data.height * data.transform.scale.y,
        )
    }

    /// 当前变换
    pub fn transform(&self) -> Transform {
        self.inner.borrow().transform
    }

    /// 读取属性
    pub fn get(&self, property: ViewProperty) -> f32 {
        property.read(&self.inner.borrow().transform)
    }

    /// 直接设置属性（不经过动画）
    pub fn set(&self, property: ViewProperty, value: f32) {
        property.write(&mut self.inner.borrow_mut().transform, value);
    }

    /// 设置均匀缩放
    pub fn set_uniform_scale(&self, s: f32) {
        self.inner.borrow_mut().transform.set_uniform_scale(s);
    }

    /// 绑定属性访问器
    pub fn property(&self, property: ViewProperty) -> ViewPropertyAccessor {
        ViewPropertyAccessor {
            view: self.clone(),
            property,
        }
    }
}

/// 视图单个属性的访问器
#[derive(Debug, Clone)]
pub struct ViewPropertyAccessor {
    view: View,
    property: ViewProperty,
}

impl PropertyAccessor<f32> for ViewPropertyAccessor {
    fn get(&self) -> f32 {
        self.view.get(self.property)
    }

    fn set(&self, value: f32) {
        self.view.set(self.property, value);
    }

    fn name(&self) -> &'static str {
        self.property.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_properties() {
        let view = View::new(ViewId(1), 100.0, 80.0);
        assert_eq!(view.get(ViewProperty::ScaleX), 1.0);
        assert_eq!(view.get(ViewProperty::Alpha), 1.0);

        view.set(ViewProperty::TranslationX, 42.0);
        view.set(ViewProperty::Rotation, -90.0);
        assert_eq!(view.transform().translation.x, 42.0);
        assert_eq!(view.transform().rotation, -90.0);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let view = View::new(ViewId(1), 10.0, 10.0);
        view.set(ViewProperty::Alpha, 1.5);
        assert_eq!(view.get(ViewProperty::Alpha), 1.0);
        view.set(ViewProperty::Alpha, -0.5);
        assert_eq!(view.get(ViewProperty::Alpha), 0.0);
    }

    #[test]
    fn test_accessor_shares_view() {
        let view = View::new(ViewId(3), 100.0, 100.0);
        let accessor = view.property(ViewProperty::ScaleY);

        accessor.set(2.0);
        assert_eq!(view.get(ViewProperty::ScaleY), 2.0);
        assert_eq!(accessor.name(), "scale_y");
    }

    #[test]
    fn test_scaled_size() {
        let view = View::new(ViewId(1), 100.0, 50.0);
        view.set_uniform_scale(0.5);
        assert_eq!(view.scaled_size(), (50.0, 25.0));
        assert_eq!(view.size(), (100.0, 50.0));
    }
}
