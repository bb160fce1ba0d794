//! Action 系统
//!
//! 每种交互模式是一个独立的 Action 实现，在两次事件之间保存
//! “已拾取”的中间状态。Action 只读访问绘图，通过 `ActionResult`
//! 把要执行的修改交给控制器。

use crate::mode::Mode;
use geoline_core::drawing::Drawing;
use geoline_core::entity::{LineId, PointId};
use geoline_core::math::Point2;

/// Action 执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// 继续当前手势
    Continue,
    /// 在指定位置创建点
    CreatePoint(Point2),
    /// 用两个已有点创建直线
    CreateLine(PointId, PointId),
    /// 把直线平移到新位置
    MoveLine(LineId, Point2),
}

/// Action 上下文 - 传递给 Action 的运行时信息
pub struct ActionContext<'a> {
    /// 光标位置（NDC）
    pub cursor: Point2,
    /// 当前绘图（只读）
    pub drawing: &'a Drawing,
    /// 拾取容差
    pub tolerance: f64,
}

impl<'a> ActionContext<'a> {
    /// 光标附近的点
    pub fn point_under_cursor(&self) -> Option<PointId> {
        self.drawing
            .points
            .proximity_search(&self.cursor, self.tolerance)
    }

    /// 光标下的直线
    pub fn line_under_cursor(&self) -> Option<LineId> {
        self.drawing.lines.line_at_within(&self.cursor, self.tolerance)
    }
}

/// 鼠标按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Action trait - 所有交互模式的核心接口
pub trait Action {
    /// 对应的模式
    fn mode(&self) -> Mode;

    /// 清除中间状态
    fn reset(&mut self);

    // ========== 事件处理 ==========

    /// 主按钮按下
    fn on_press(&mut self, ctx: &ActionContext) -> ActionResult;

    /// 主按钮松开
    fn on_release(&mut self, _ctx: &ActionContext) -> ActionResult {
        ActionResult::Continue
    }

    /// 按住主按钮时移动光标
    fn on_drag(&mut self, _ctx: &ActionContext) -> ActionResult {
        ActionResult::Continue
    }

    // ========== UI 提示 ==========

    /// 当前状态的提示文本
    fn get_prompt(&self) -> &str;
}
