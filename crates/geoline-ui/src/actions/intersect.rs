//! 交点 Action
//!
//! 依次拾取两条直线，在交点处创建新点。两条线平行（或拾取了同一条线）时
//! 没有交点，手势结束但不创建任何点。

use crate::action::{Action, ActionContext, ActionResult};
use crate::mode::Mode;
use geoline_core::entity::LineId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// 等待第一条直线
    SelectFirst,
    /// 等待第二条直线
    SelectSecond { first: LineId },
}

/// 交点 Action
pub struct IntersectAction {
    status: Status,
}

impl IntersectAction {
    pub fn new() -> Self {
        Self {
            status: Status::SelectFirst,
        }
    }
}

impl Default for IntersectAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for IntersectAction {
    fn mode(&self) -> Mode {
        Mode::Intersect
    }

    fn reset(&mut self) {
        self.status = Status::SelectFirst;
    }

    fn on_press(&mut self, ctx: &ActionContext) -> ActionResult {
        let Some(picked) = ctx.line_under_cursor() else {
            debug!(x = ctx.cursor.x, y = ctx.cursor.y, "No line under cursor");
            return ActionResult::Continue;
        };

        match self.status {
            Status::SelectFirst => {
                self.status = Status::SelectSecond { first: picked };
                ActionResult::Continue
            }
            Status::SelectSecond { first } => {
                self.reset();
                match ctx.drawing.intersection(first, picked) {
                    Some(point) => ActionResult::CreatePoint(point),
                    None => {
                        debug!(%first, second = %picked, "Lines are parallel, no intersection");
                        ActionResult::Continue
                    }
                }
            }
        }
    }

    fn get_prompt(&self) -> &str {
        match self.status {
            Status::SelectFirst => "选择第一条直线:",
            Status::SelectSecond { .. } => "选择第二条直线:",
        }
    }
}
