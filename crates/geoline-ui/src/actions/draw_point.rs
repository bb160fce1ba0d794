//! 放置点 Action

use crate::action::{Action, ActionContext, ActionResult};
use crate::mode::Mode;

/// 放置点 Action
pub struct DrawPointAction;

impl DrawPointAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DrawPointAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for DrawPointAction {
    fn mode(&self) -> Mode {
        Mode::Point
    }

    fn reset(&mut self) {
        // 点工具无状态
    }

    fn on_press(&mut self, ctx: &ActionContext) -> ActionResult {
        ActionResult::CreatePoint(ctx.cursor)
    }

    fn get_prompt(&self) -> &str {
        "指定点的位置:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoline_core::drawing::Drawing;
    use geoline_core::math::Point2;

    #[test]
    fn test_press_creates_point_at_cursor() {
        let drawing = Drawing::new();
        let ctx = ActionContext {
            cursor: Point2::new(0.25, -0.5),
            drawing: &drawing,
            tolerance: 0.01,
        };
        let mut action = DrawPointAction::new();
        assert_eq!(
            action.on_press(&ctx),
            ActionResult::CreatePoint(Point2::new(0.25, -0.5))
        );
        assert_eq!(action.on_release(&ctx), ActionResult::Continue);
    }
}
