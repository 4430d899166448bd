//! # Error 模块
//!
//! 定义 anim-runtime 中使用的错误类型。

use thiserror::Error;

use crate::animator::AnimationId;

/// anim-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// 界面布局无效（初始化失败）
    #[error("无效的布局：{field} = {value}，{message}")]
    InvalidLayout {
        field: &'static str,
        value: f32,
        message: String,
    },

    /// 动画不存在或已结束
    #[error("{id} 不存在或已结束")]
    UnknownAnimation { id: AnimationId },
}

/// Result 类型别名
pub type AnimResult<T> = Result<T, AnimError>;
