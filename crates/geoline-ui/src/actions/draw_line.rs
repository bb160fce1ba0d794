//! 构造直线 Action
//!
//! 依次拾取两个已有点；两点都拾取到后创建直线并回到初始状态。
//! 拾取落空时保持当前状态，等待下一次点击。

use crate::action::{Action, ActionContext, ActionResult};
use crate::mode::Mode;
use geoline_core::entity::PointId;
use tracing::debug;

/// 直线构造状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待拾取起点
    SetStartpoint,
    /// 已有起点，等待拾取终点
    SetEndpoint { start: PointId },
}

/// 构造直线 Action
pub struct DrawLineAction {
    status: Status,
}

impl DrawLineAction {
    pub fn new() -> Self {
        Self {
            status: Status::SetStartpoint,
        }
    }
}

impl Default for DrawLineAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawLineAction {
    fn mode(&self) -> Mode {
        Mode::Line
    }

    fn reset(&mut self) {
        self.status = Status::SetStartpoint;
    }

    fn on_press(&mut self, ctx: &ActionContext) -> ActionResult {
        let Some(picked) = ctx.point_under_cursor() else {
            debug!(x = ctx.cursor.x, y = ctx.cursor.y, "No point under cursor");
            return ActionResult::Continue;
        };

        match self.status {
            Status::SetStartpoint => {
                self.status = Status::SetEndpoint { start: picked };
                ActionResult::Continue
            }
            Status::SetEndpoint { start } => {
                self.reset();
                ActionResult::CreateLine(start, picked)
            }
        }
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            Status::SetStartpoint => "选择直线的第一个点:",
            Status::SetEndpoint { .. } => "选择直线的第二个点:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoline_core::drawing::Drawing;
    use geoline_core::math::Point2;

    fn ctx(drawing: &Drawing, x: f64, y: f64) -> ActionContext<'_> {
        ActionContext {
            cursor: Point2::new(x, y),
            drawing,
            tolerance: 0.01,
        }
    }

    #[test]
    fn test_pick_two_points() {
        let mut drawing = Drawing::new();
        let a = drawing.add_point(Point2::new(0.0, 0.0));
        let b = drawing.add_point(Point2::new(0.5, 0.0));
        let mut action = DrawLineAction::new();

        let result = action.on_press(&ctx(&drawing, 0.003, 0.0));
        assert_eq!(result, ActionResult::Continue);
        assert_eq!(action.status, Status::SetEndpoint { start: a });

        let result = action.on_press(&ctx(&drawing, 0.5, 0.004));
        assert_eq!(result, ActionResult::CreateLine(a, b));
        assert_eq!(action.status, Status::SetStartpoint);
    }

    #[test]
    fn test_miss_keeps_gesture_pending() {
        let mut drawing = Drawing::new();
        let a = drawing.add_point(Point2::new(0.0, 0.0));
        let b = drawing.add_point(Point2::new(0.5, 0.0));
        let mut action = DrawLineAction::new();

        assert_eq!(action.on_press(&ctx(&drawing, 0.3, 0.3)), ActionResult::Continue);
        assert_eq!(action.status, Status::SetStartpoint);

        action.on_press(&ctx(&drawing, 0.0, 0.0));
        assert_eq!(action.on_press(&ctx(&drawing, -0.7, 0.2)), ActionResult::Continue);
        assert_eq!(action.status, Status::SetEndpoint { start: a });

        assert_eq!(
            action.on_press(&ctx(&drawing, 0.5, 0.0)),
            ActionResult::CreateLine(a, b)
        );
    }

    #[test]
    fn test_reset() {
        let mut drawing = Drawing::new();
        drawing.add_point(Point2::new(0.0, 0.0));
        let mut action = DrawLineAction::new();

        action.on_press(&ctx(&drawing, 0.0, 0.0));
        assert_eq!(action.get_prompt(), "选择直线的第二个点:");
        action.reset();
        assert_eq!(action.status, Status::SetStartpoint);
        assert_eq!(action.get_prompt(), "选择直线的第一个点:");
    }
}
