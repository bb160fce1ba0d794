//! 具体的 Action 实现
//!
//! 每种交互模式对应一个 Action 实现

mod draw_line;
mod draw_point;
mod intersect;
mod modify_move;

pub use draw_line::DrawLineAction;
pub use draw_point::DrawPointAction;
pub use intersect::IntersectAction;
pub use modify_move::MoveAction;

use crate::action::Action;
use crate::mode::Mode;

/// 创建指定模式的 Action（总是全新状态）
pub fn create_action(mode: Mode) -> Box<dyn Action> {
    match mode {
        Mode::Point => Box::new(DrawPointAction::new()),
        Mode::Line => Box::new(DrawLineAction::new()),
        Mode::Move => Box::new(MoveAction::new()),
        Mode::Intersect => Box::new(IntersectAction::new()),
    }
}
