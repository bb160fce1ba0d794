//! 移动直线 Action
//!
//! 按下时拾取光标下的直线，按住拖动时每个移动采样都把直线的第一个
//! 定义点平移到光标处，松开后释放。

use crate::action::{Action, ActionContext, ActionResult};
use crate::mode::Mode;
use geoline_core::entity::LineId;
use tracing::debug;

/// 移动 Action
pub struct MoveAction {
    /// 正在拖动的直线
    selected: Option<LineId>,
}

impl MoveAction {
    pub fn new() -> Self {
        Self { selected: None }
    }
}

impl Default for MoveAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for MoveAction {
    fn mode(&self) -> Mode {
        Mode::Move
    }

    fn reset(&mut self) {
        self.selected = None;
    }

    fn on_press(&mut self, ctx: &ActionContext) -> ActionResult {
        self.selected = ctx.line_under_cursor();
        if self.selected.is_none() {
            debug!(x = ctx.cursor.x, y = ctx.cursor.y, "No line under cursor");
        }
        ActionResult::Continue
    }

    fn on_release(&mut self, _ctx: &ActionContext) -> ActionResult {
        self.reset();
        ActionResult::Continue
    }

    fn on_drag(&mut self, ctx: &ActionContext) -> ActionResult {
        match self.selected {
            Some(id) => ActionResult::MoveLine(id, ctx.cursor),
            None => ActionResult::Continue,
        }
    }

    fn get_prompt(&self) -> &str {
        match self.selected {
            None => "按住直线并拖动:",
            Some(_) => "拖动到目标位置:",
        }
    }
}
