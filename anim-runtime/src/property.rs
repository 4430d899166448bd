//! # Property 模块
//!
//! 类型化的属性访问接口。
//!
//! 每个可动画属性在构造动画时就绑定为一个访问器对象（getter/setter），
//! 动画引擎不再按字符串名字反射查找属性。
//!
//! ## 核心概念
//!
//! - `PropertyAccessor<V>`: 单个属性的读写能力
//! - `PropertyValuesHolder<V>`: 访问器 + 起止值
//! - `ValuesHolder`: 擦除值类型后的 holder，供动画器统一驱动

use std::cell::Cell;
use std::rc::Rc;

use crate::value::AnimValue;

/// 属性访问器接口
///
/// 提供对单个属性的 getter/setter 访问。
///
/// ## 设计说明
///
/// 宿主对象使用 `Rc<RefCell<_>>` 或 `Cell` 实现内部可变性，
/// 因此 `set` 只需要 `&self`，多个属性可以同时被动画而不产生借用冲突。
pub trait PropertyAccessor<V: AnimValue> {
    /// 获取当前值
    fn get(&self) -> V;

    /// 设置新值
    fn set(&self, value: V);

    /// 属性名称（仅用于日志）
    fn name(&self) -> &'static str;
}

/// 基于 `Rc<Cell<V>>` 的简单属性
///
/// 适合不属于任何视图的独立值（以及测试）。
#[derive(Debug, Clone)]
pub struct CellProperty<V: AnimValue> {
    name: &'static str,
    value: Rc<Cell<V>>,
}

impl<V: AnimValue> CellProperty<V> {
    /// 创建新的属性
    pub fn new(name: &'static str, initial_value: V) -> Self {
        Self {
            name,
            value: Rc::new(Cell::new(initial_value)),
        }
    }

    /// 获取值的引用（用于共享）
    pub fn value_ref(&self) -> Rc<Cell<V>> {
        self.value.clone()
    }
}

impl<V: AnimValue> PropertyAccessor<V> for CellProperty<V> {
    fn get(&self) -> V {
        self.value.get()
    }

    fn set(&self, value: V) {
        self.value.set(value);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// 单个属性的起止值
///
/// `from` 为 `None` 时，动画开始那一刻读取属性当前值作为起点。
pub struct PropertyValuesHolder<V: AnimValue> {
    accessor: Box<dyn PropertyAccessor<V>>,
    from: Option<V>,
    to: V,
    resolved_from: Option<V>,
}

impl<V: AnimValue> PropertyValuesHolder<V> {
    /// 从当前值动画到 `to`
    pub fn to(accessor: impl PropertyAccessor<V> + 'static, to: V) -> Self {
        Self {
            accessor: Box::new(accessor),
            from: None,
            to,
            resolved_from: None,
        }
    }

    /// 从 `from` 动画到 `to`
    pub fn between(accessor: impl PropertyAccessor<V> + 'static, from: V, to: V) -> Self {
        Self {
            from: Some(from),
            ..Self::to(accessor, to)
        }
    }

    fn start_value(&mut self) -> V {
        match self.resolved_from {
            Some(value) => value,
            None => {
                let value = self.from.unwrap_or_else(|| self.accessor.get());
                self.resolved_from = Some(value);
                value
            }
        }
    }
}

/// 擦除值类型的 holder
pub trait ValuesHolder {
    /// 属性名称
    fn property_name(&self) -> &'static str;

    /// 确定起点（隐式起点在此刻读取当前值）
    fn setup_start_value(&mut self);

    /// 按缓动后的进度写入属性
    fn animate_value(&mut self, fraction: f32);
}

impl<V: AnimValue> ValuesHolder for PropertyValuesHolder<V> {
    fn property_name(&self) -> &'static str {
        self.accessor.name()
    }

    fn setup_start_value(&mut self) {
        self.resolved_from = None;
        self.start_value();
    }

    fn animate_value(&mut self, fraction: f32) {
        let start = self.start_value();
        self.accessor.set(V::evaluate(fraction, start, self.to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Argb;

    #[test]
    fn test_cell_property() {
        let accessor = CellProperty::new("alpha", 0.5_f32);
        assert_eq!(accessor.get(), 0.5);

        accessor.set(0.8);
        assert_eq!(accessor.get(), 0.8);

        // 测试共享引用
        let shared = accessor.value_ref();
        accessor.set(1.0);
        assert_eq!(shared.get(), 1.0);
    }

    #[test]
    fn test_implicit_start_reads_current_value() {
        let prop = CellProperty::new("translation_x", 30.0_f32);
        let mut holder = PropertyValuesHolder::to(prop.clone(), 200.0);

        holder.setup_start_value();
        holder.animate_value(0.5);
        assert_eq!(prop.get(), 115.0);

        holder.animate_value(0.0);
        assert_eq!(prop.get(), 30.0);
    }

    #[test]
    fn test_setup_re_reads_start_value() {
        let prop = CellProperty::new("alpha", 1.0_f32);
        let mut holder = PropertyValuesHolder::to(prop.clone(), 0.0);

        holder.setup_start_value();
        prop.set(0.4);
        holder.setup_start_value();
        holder.animate_value(0.0);
        assert_eq!(prop.get(), 0.4);
    }

    #[test]
    fn test_explicit_start() {
        let prop = CellProperty::new("background", Argb::WHITE);
        let mut holder = PropertyValuesHolder::between(prop.clone(), Argb::BLACK, Argb::RED);

        holder.setup_start_value();
        holder.animate_value(0.0);
        assert_eq!(prop.get(), Argb::BLACK);
        holder.animate_value(1.0);
        assert_eq!(prop.get(), Argb::RED);
        assert_eq!(holder.property_name(), "background");
    }
}
